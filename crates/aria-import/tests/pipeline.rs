use aria_core::models::parsed::ParsedDomain;
use aria_import::error::ImportError;
use aria_import::{ImportConfig, ParseOutcome, ParseStatus, parse_assessment_text, try_parse};
use aria_instruments::catalog::Catalog;

const REPORT: &str = "\
VB-MAPP Milestones Assessment
Assessment Date: 01/15/2024
Examiner: Jane Doe, BCBA
Mand: 8
Tact: 5
";

fn parse(text: &str, assessment_type: Option<&str>) -> ParseOutcome {
    parse_assessment_text(text, assessment_type, &Catalog::builtin(), &ImportConfig::default())
}

#[test]
fn full_report_is_extracted() {
    let outcome = parse(REPORT, None);
    assert_eq!(outcome.status(), ParseStatus::Extracted);

    let data = outcome.into_data();
    assert_eq!(data.assessment_type.as_deref(), Some("vbmapp"));
    assert_eq!(data.assessment_date.as_deref(), Some("01/15/2024"));
    assert_eq!(data.examiner.as_deref(), Some("Jane Doe, BCBA"));
    assert_eq!(
        data.domains,
        vec![ParsedDomain::scored("Mand", "8"), ParsedDomain::scored("Tact", "5")]
    );
    assert!(data.summary.is_none());
    assert!(data.recommendations.is_none());
}

#[test]
fn detected_type_is_kept_without_scores() {
    let outcome = parse("Results of the VB-MAPP are attached.", None);
    assert_eq!(outcome.status(), ParseStatus::NoDomains);
    assert_eq!(outcome.domain_count(), 0);
    assert_eq!(
        outcome.data().unwrap().assessment_type.as_deref(),
        Some("vbmapp")
    );
}

#[test]
fn preselected_type_drives_known_domains() {
    let outcome = parse("Mand: 8\nTact: 5\nListener Responding: 12", Some("vbmapp"));
    let data = outcome.into_data();
    assert_eq!(data.assessment_type.as_deref(), Some("vbmapp"));
    let scores: Vec<_> = data
        .domains
        .iter()
        .map(|d| (d.name.as_str(), d.raw_score.as_deref().unwrap()))
        .collect();
    assert_eq!(
        scores,
        [("Mand", "8"), ("Tact", "5"), ("Listener Responding", "12")]
    );
}

#[test]
fn override_replaces_detection() {
    let data = parse("VB-MAPP\nMand: 8", Some("afls")).into_data();
    assert_eq!(data.assessment_type.as_deref(), Some("afls"));
    // No AFLS domain appears, so the line parser picks up the score.
    assert_eq!(data.domains, vec![ParsedDomain::scored("Mand", "8")]);
}

#[test]
fn generic_scores_without_any_instrument() {
    let data = parse("Communication\t85\nSocial Skills\t72", None).into_data();
    assert!(data.assessment_type.is_none());
    assert_eq!(
        data.domains,
        vec![
            ParsedDomain::scored("Communication", "85"),
            ParsedDomain::scored("Social Skills", "72"),
        ]
    );
}

#[test]
fn unknown_override_fails_and_degrades_to_empty() {
    let outcome = parse("Mand: 8", Some("peak"));
    assert_eq!(outcome.status(), ParseStatus::Failed);
    assert!(matches!(
        outcome.error(),
        Some(ImportError::UnknownAssessmentType(id)) if id == "peak"
    ));
    assert!(outcome.data().is_none());
    assert!(outcome.into_data().is_empty());
}

#[test]
fn oversized_input_is_refused() {
    let config = ImportConfig {
        max_input_bytes: 16,
        ..ImportConfig::default()
    };
    let result = try_parse(REPORT, None, &Catalog::builtin(), &config);
    assert!(matches!(
        result,
        Err(ImportError::InputTooLarge { max: 16, .. })
    ));
}

#[test]
fn empty_text_is_no_domains() {
    let outcome = parse("", None);
    assert_eq!(outcome.status(), ParseStatus::NoDomains);
    assert!(outcome.into_data().is_empty());
}

#[test]
fn parsing_is_deterministic() {
    let first = parse(REPORT, None).into_data();
    let second = parse(REPORT, None).into_data();
    assert_eq!(first, second);
}
