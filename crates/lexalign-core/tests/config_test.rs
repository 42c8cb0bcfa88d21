use lexalign_core::config::*;
use lexalign_core::models::{ItemKind, ReferenceKind};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = LexAlignConfig::from_toml("").unwrap();

    // Clustering defaults
    assert_eq!(config.clustering.left_reference, ReferenceKind::Native);
    assert_eq!(config.clustering.member_reference, ReferenceKind::Native);
    assert_eq!(config.clustering.word_joiner, "_");
    assert_eq!(config.clustering.unknown_pos_label, "unknown");
    assert_eq!(config.clustering.anchor_index, 0);
    assert!(config.clustering.lemma_split);
    assert!(!config.clustering.pos_purity_before_merge);

    // Alignment defaults
    assert_eq!(config.alignment.axis_kind, ItemKind::Sense);
    assert_eq!(config.alignment.reference_kind, ReferenceKind::Native);
    assert_eq!(
        config.alignment.argument_reference_kind,
        ReferenceKind::ArgumentByRole
    );
    assert_eq!(config.alignment.default_confidence, 1.0);
    assert_eq!(config.alignment.min_confidence, 0.0);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
    assert!(config.observability.run_summary);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[clustering]
left_reference = "synset"
word_joiner = "+"

[alignment]
axis_kind = "predicate"
reference_kind = "predicate-by-label"
min_confidence = 0.5
"#;
    let config = LexAlignConfig::from_toml(toml).unwrap();
    assert_eq!(config.clustering.left_reference, ReferenceKind::Synset);
    assert_eq!(config.clustering.word_joiner, "+");
    // Non-overridden fields keep defaults
    assert_eq!(config.clustering.unknown_pos_label, "unknown");
    assert_eq!(config.alignment.axis_kind, ItemKind::Predicate);
    assert_eq!(
        config.alignment.reference_kind,
        ReferenceKind::PredicateByLabel
    );
    assert_eq!(config.alignment.min_confidence, 0.5);
}

#[test]
fn config_rejects_invalid_toml() {
    let err = LexAlignConfig::from_toml("[clustering\nword_joiner = 1").unwrap_err();
    assert!(matches!(err, lexalign_core::errors::ConfigError::ParseFailed { .. }));
}

#[test]
fn config_rejects_whitespace_word_joiner() {
    let err = LexAlignConfig::from_toml("[clustering]\nword_joiner = \" \"").unwrap_err();
    assert!(err.to_string().contains("word_joiner"));
}

#[test]
fn config_rejects_out_of_range_confidence() {
    let err = LexAlignConfig::from_toml("[alignment]\ndefault_confidence = 1.5").unwrap_err();
    assert!(err.to_string().contains("default_confidence"));
}

#[test]
fn config_rejects_reference_kind_of_other_item_kind() {
    let toml = r#"
[alignment]
axis_kind = "sense"
reference_kind = "synset"
"#;
    assert!(LexAlignConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_argument_level_runs() {
    assert!(LexAlignConfig::from_toml("[alignment]\naxis_kind = \"argument\"").is_err());
}

#[test]
fn config_rejects_unknown_log_level() {
    assert!(LexAlignConfig::from_toml("[observability]\nlog_level = \"loud\"").is_err());
}

#[test]
fn config_loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexalign.toml");
    std::fs::write(&path, "[clustering]\nanchor_index = 1\n").unwrap();
    let config = LexAlignConfig::from_file(&path).unwrap();
    assert_eq!(config.clustering.anchor_index, 1);
}

#[test]
fn config_missing_file_is_io_error() {
    let err = LexAlignConfig::from_file(std::path::Path::new("/nonexistent/lexalign.toml"))
        .unwrap_err();
    assert!(matches!(err, lexalign_core::LexAlignError::Io { .. }));
}
