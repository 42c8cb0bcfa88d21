use lexalign_core::errors::*;

#[test]
fn format_error_malformed_line_carries_line_and_reason() {
    let err = FormatError::MalformedLine {
        line: 42,
        reason: "expected at least 2 fields".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("42"));
    assert!(msg.contains("2 fields"));
}

#[test]
fn metadata_error_invalid_date_carries_value() {
    let err = MetadataError::InvalidDate {
        value: "2024/01/01".into(),
    };
    assert!(err.to_string().contains("2024/01/01"));
}

#[test]
fn cancelled_carries_stage() {
    let err = LexAlignError::Cancelled {
        stage: "transitive-merge".into(),
    };
    assert!(err.to_string().contains("transitive-merge"));
}

// --- From impls ---

#[test]
fn format_error_converts_to_lexalign_error() {
    let err: LexAlignError = FormatError::UnknownReferenceKind {
        value: "lemma".into(),
    }
    .into();
    assert!(matches!(err, LexAlignError::FormatError(_)));
}

#[test]
fn metadata_error_converts_to_lexalign_error() {
    let err: LexAlignError = MetadataError::MissingDecisionType.into();
    assert!(matches!(err, LexAlignError::MetadataError(_)));
}

#[test]
fn config_error_converts_to_lexalign_error() {
    let err: LexAlignError = ConfigError::ParseFailed {
        reason: "bad".into(),
    }
    .into();
    assert!(matches!(err, LexAlignError::ConfigError(_)));
}

#[test]
fn io_error_keeps_path() {
    let err = LexAlignError::io(
        "clusters.tsv",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    let msg = err.to_string();
    assert!(msg.contains("clusters.tsv"));
    assert!(msg.contains("gone"));
}
