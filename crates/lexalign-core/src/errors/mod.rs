mod config_error;
mod format_error;
mod lexalign_error;
mod metadata_error;

pub use config_error::ConfigError;
pub use format_error::FormatError;
pub use lexalign_error::{LexAlignError, LexAlignResult};
pub use metadata_error::MetadataError;
