/// lexalign version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Smallest cluster any cleaning stage may emit.
pub const MIN_CLUSTER_SIZE: usize = 2;

/// Field separator for every line-oriented input and output format.
pub const FIELD_SEPARATOR: char = '\t';

/// Prefix marking comment and header lines.
pub const COMMENT_PREFIX: char = '#';

/// Date layout of run metadata (`yyyy-MM-dd`).
pub const METADATA_DATE_FORMAT: &str = "%Y-%m-%d";
