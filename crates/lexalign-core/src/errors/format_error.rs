/// Errors raised while parsing line-oriented inputs.
///
/// Readers usually log and count these and move on; they only surface as
/// hard errors from the single-line parsing functions.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("line {line}: unknown record type '{record_type}'")]
    UnknownRecordType { line: usize, record_type: String },

    #[error("unknown reference kind '{value}'")]
    UnknownReferenceKind { value: String },

    #[error("unknown item kind '{value}'")]
    UnknownItemKind { value: String },

    #[error("line {line}: invalid decision record: {reason}")]
    InvalidRecord { line: usize, reason: String },
}
