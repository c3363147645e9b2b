use aria_core::models::parsed::ParsedDomain;
use aria_import::domains::{Strategy, extract_domains, extract_generic};
use aria_instruments::catalog::{AssessmentTypeDescriptor, Catalog};

fn vbmapp() -> AssessmentTypeDescriptor {
    Catalog::builtin().get("vbmapp").unwrap().clone()
}

fn scored(pairs: &[(&str, &str)]) -> Vec<ParsedDomain> {
    pairs
        .iter()
        .map(|(name, score)| ParsedDomain::scored(*name, *score))
        .collect()
}

#[test]
fn known_instrument_finds_mentioned_domains_only() {
    let text = "Mand: 8\nTact: 5\nListener Responding: 12";
    let extraction = extract_domains(text, Some(&vbmapp())).unwrap();

    assert_eq!(extraction.strategy, Strategy::KnownInstrument);
    assert_eq!(
        extraction.domains,
        scored(&[("Mand", "8"), ("Tact", "5"), ("Listener Responding", "12")])
    );
}

#[test]
fn known_instrument_follows_catalog_order() {
    let text = "Listener Responding: 12\nMand: 8";
    let names: Vec<_> = extract_domains(text, Some(&vbmapp()))
        .unwrap()
        .domains
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(names, ["Mand", "Listener Responding"]);
}

#[test]
fn known_instrument_does_not_stub_missing_domains() {
    let nine = AssessmentTypeDescriptor {
        id: "nine".to_string(),
        name: "Nine Domain Inventory".to_string(),
        abbreviation: "NDI".to_string(),
        domains: [
            "Alpha", "Bravo", "Charlie", "Delta", "Echo", "Foxtrot", "Golf", "Hotel", "India",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    };

    let text = "India: 9\nAlpha: 1\nEcho: 5";
    let extraction = extract_domains(text, Some(&nine)).unwrap();
    assert_eq!(
        extraction.domains,
        scored(&[("Alpha", "1"), ("Echo", "5"), ("India", "9")])
    );
}

#[test]
fn known_instrument_score_variants() {
    let text = "MAND: 8/15\nEchoic score 7\nIntraverbal Level 2\nListener   Responding:\t4";
    let extraction = extract_domains(text, Some(&vbmapp())).unwrap();
    assert_eq!(
        extraction.domains,
        scored(&[
            ("Mand", "8/15"),
            ("Listener Responding", "4"),
            ("Echoic", "7"),
            ("Intraverbal", "2"),
        ])
    );
}

#[test]
fn known_instrument_scores_stay_on_their_line() {
    let text = "Mand: 8\n- 10 targets mastered\nTact:\n5";
    let extraction = extract_domains(text, Some(&vbmapp())).unwrap();
    assert_eq!(extraction.strategy, Strategy::KnownInstrument);
    assert_eq!(extraction.domains, scored(&[("Mand", "8")]));
}

#[test]
fn known_instrument_success_skips_line_parser() {
    let text = "Mand: 8\nCommunication\t85";
    let extraction = extract_domains(text, Some(&vbmapp())).unwrap();
    assert_eq!(extraction.strategy, Strategy::KnownInstrument);
    assert_eq!(extraction.domains, scored(&[("Mand", "8")]));
}

#[test]
fn known_instrument_without_matches_falls_back() {
    let text = "Communication\t85\nSocial Skills\t72";
    let extraction = extract_domains(text, Some(&vbmapp())).unwrap();
    assert_eq!(extraction.strategy, Strategy::Generic);
    assert_eq!(
        extraction.domains,
        scored(&[("Communication", "85"), ("Social Skills", "72")])
    );
}

#[test]
fn tab_delimited_lines() {
    let domains = extract_domains("Communication\t85\nSocial Skills\t72", None).unwrap();
    assert_eq!(domains.strategy, Strategy::Generic);
    assert_eq!(
        domains.domains,
        scored(&[("Communication", "85"), ("Social Skills", "72")])
    );
}

#[test]
fn tab_delimited_searches_all_remaining_columns() {
    assert_eq!(
        extract_generic("Daily Living\tModerately Low\t78"),
        scored(&[("Daily Living", "78")])
    );
    assert!(extract_generic("Communication\tLow").is_empty());
}

#[test]
fn colon_and_dash_lines() {
    let text = "Daily Living Skills: 85 (Low)\nCommunication - 72\nMand: 8-15";
    assert_eq!(
        extract_generic(text),
        scored(&[
            ("Daily Living Skills", "85"),
            ("Communication", "72"),
            ("Mand", "8-15"),
        ])
    );
}

#[test]
fn leading_separator_leaves_no_name() {
    assert!(extract_generic("- Mand: 8").is_empty());
    assert!(extract_generic(": Tact 5").is_empty());
}

#[test]
fn colon_line_with_numeric_name_is_dropped() {
    assert!(extract_generic("2024: 15 sessions").is_empty());
}

#[test]
fn trailing_number_lines() {
    assert_eq!(
        extract_generic("Social Skills 72\nSelf Care & Hygiene 4/10"),
        scored(&[("Social Skills", "72"), ("Self Care & Hygiene", "4/10")])
    );
}

#[test]
fn two_letter_name_is_rejected() {
    assert!(extract_generic("xy 35").is_empty());
}

#[test]
fn short_and_header_lines_are_skipped() {
    let text = "Domain\tScore\nAb 1\nSkill Area: 4\nMand\t8";
    assert_eq!(extract_generic(text), scored(&[("Mand", "8")]));
}

#[test]
fn repeated_names_are_kept() {
    assert_eq!(
        extract_generic("Mand: 8\nMand: 9"),
        scored(&[("Mand", "8"), ("Mand", "9")])
    );
}

#[test]
fn prose_and_empty_input_yield_nothing() {
    assert!(extract_generic("").is_empty());
    assert!(extract_generic("The client engaged well throughout the session").is_empty());
}

#[test]
fn windows_line_endings() {
    assert_eq!(
        extract_generic("Mand: 8\r\nTact: 5\r\n"),
        scored(&[("Mand", "8"), ("Tact", "5")])
    );
}
