use super::{ConfigError, FormatError, MetadataError};

/// Convenience alias used across the workspace.
pub type LexAlignResult<T> = Result<T, LexAlignError>;

/// Top-level error for every lexalign operation.
///
/// Per-record problems (unresolved items, negative decisions, duplicates,
/// malformed lines) are counted, not raised. Only the variants below abort a run.
#[derive(Debug, thiserror::Error)]
pub enum LexAlignError {
    #[error("format error: {0}")]
    FormatError(#[from] FormatError),

    #[error("run metadata error: {0}")]
    MetadataError(#[from] MetadataError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("sink rejected output: {reason}")]
    SinkFailed { reason: String },

    #[error("run cancelled during {stage}")]
    Cancelled { stage: String },
}

impl LexAlignError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
