use aria_import::detect::detect_assessment_type;
use aria_instruments::catalog::{AssessmentTypeDescriptor, Catalog};

fn detected(text: &str) -> Option<String> {
    detect_assessment_type(text, &Catalog::builtin()).map(|e| e.id.clone())
}

#[test]
fn finds_abbreviation_anywhere_in_text() {
    assert_eq!(
        detected("Results of the VB-MAPP administered last week").as_deref(),
        Some("vbmapp")
    );
}

#[test]
fn abbreviation_ignores_case_spaces_and_hyphens() {
    assert_eq!(detected("vb mapp summary").as_deref(), Some("vbmapp"));
    assert_eq!(detected("ablls-r grid").as_deref(), Some("ablls-r"));
    assert_eq!(detected("VINELAND 3 scores").as_deref(), Some("vineland-3"));
}

#[test]
fn finds_full_name() {
    assert_eq!(
        detected("Assessment of Functional Living Skills - Home Skills protocol").as_deref(),
        Some("afls")
    );
}

#[test]
fn earlier_catalog_entry_wins_regardless_of_text_position() {
    let text = "Vineland-3 composite reviewed alongside the VB-MAPP";
    assert_eq!(detected(text).as_deref(), Some("vbmapp"));
}

#[test]
fn custom_catalog_order_decides_ties() {
    let entry = |id: &str, abbreviation: &str| AssessmentTypeDescriptor {
        id: id.to_string(),
        name: format!("{id} instrument"),
        abbreviation: abbreviation.to_string(),
        domains: Vec::new(),
    };
    let catalog = Catalog::new(vec![entry("second", "VINELAND-3"), entry("first", "VB-MAPP")]).unwrap();

    let found = detect_assessment_type("VB-MAPP and Vineland-3", &catalog).unwrap();
    assert_eq!(found.id, "second");
}

#[test]
fn empty_text_matches_nothing() {
    assert!(detected("").is_none());
    assert!(detected("   \n\t").is_none());
}

#[test]
fn unrelated_scores_match_nothing() {
    assert!(detected("Communication\t85\nSocial Skills\t72").is_none());
}

#[test]
fn detection_is_deterministic() {
    let text = "ABLLS-R and AFLS both administered";
    assert_eq!(detected(text), detected(text));
    assert_eq!(detected(text).as_deref(), Some("ablls-r"));
}
