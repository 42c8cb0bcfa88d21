//! Span definitions per operation: clustering run, cleaning pass, axis build.

/// Create a clustering run span.
#[macro_export]
macro_rules! clustering_span {
    ($input_count:expr) => {
        tracing::info_span!("lexalign.clustering", input_count = $input_count)
    };
}

/// Create a span for one cleaning pass.
#[macro_export]
macro_rules! cleaning_pass_span {
    ($pass:expr, $cluster_count:expr) => {
        tracing::info_span!("lexalign.cleaning_pass", pass = %$pass, cluster_count = $cluster_count)
    };
}

/// Create an axis build span.
#[macro_export]
macro_rules! axis_build_span {
    ($run_id:expr, $kind:expr) => {
        tracing::info_span!("lexalign.axis_build", run_id = %$run_id, kind = %$kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CLUSTERING: &str = "lexalign.clustering";
    pub const CLEANING_PASS: &str = "lexalign.cleaning_pass";
    pub const AXIS_BUILD: &str = "lexalign.axis_build";
}
