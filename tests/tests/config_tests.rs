//! Loading detector configuration from TOML

use qfeistel_api::Classification;
use qfeistel_detect::{DetectError, Detection, DecisionReason, DetectorConfig};

#[test]
fn test_full_document() {
    let source = r#"
        width = 10
        budget_factor = 4
        verification_probes = 3
        exhausted_verdict = "unstructured"
    "#;
    let config = DetectorConfig::from_toml_str(source).unwrap();
    assert_eq!(
        config,
        DetectorConfig::for_half_bits(10)
            .with_budget_factor(4)
            .with_verification_probes(3)
            .with_exhausted_verdict(Classification::Unstructured)
    );
    assert_eq!(config.budget(), 40);
}

#[test]
fn test_empty_document_uses_defaults() {
    assert_eq!(DetectorConfig::from_toml_str("").unwrap(), DetectorConfig::default());
}

#[test]
fn test_out_of_range_values_are_config_errors() {
    for source in ["width = 64", "budget_factor = 0", "verification_probes = 0", "exhausted_verdict = \"maybe\""] {
        let err = DetectorConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(err, DetectError::Config(_)), "{}: {:?}", source, err);
    }
}

#[test]
fn test_detection_serializes_with_snake_case_variants() {
    let detection = Detection {
        classification: Classification::Structured,
        reason: DecisionReason::BudgetExhausted,
        accepted_rounds: 16,
        rejected_rounds: 0,
        independent_rows: 7,
        candidate_mask: None,
    };
    let rendered = toml::to_string(&detection).unwrap();
    assert!(rendered.contains("classification = \"structured\""));
    assert!(rendered.contains("reason = \"budget_exhausted\""));

    let parsed: Detection = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, detection);
}
