//! # lexalign-observability
//!
//! Tracing subscriber setup, span macros per pipeline stage, and the
//! end-of-run summary of input/output counts per failure category.

pub mod summary;
pub mod tracing_setup;

pub use summary::RunSummary;
pub use tracing_setup::{init_tracing, init_tracing_from_config};
