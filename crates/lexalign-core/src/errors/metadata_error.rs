/// Run metadata validation errors. Always fatal, raised before any record is read.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    #[error("invalid creation date '{value}', expected yyyy-MM-dd")]
    InvalidDate { value: String },

    #[error("missing decision type (expected 'automatic' or 'manual')")]
    MissingDecisionType,

    #[error("unknown decision type '{value}' (expected 'automatic' or 'manual')")]
    UnknownDecisionType { value: String },

    #[error("required metadata field '{field}' is missing or empty")]
    MissingField { field: String },
}
