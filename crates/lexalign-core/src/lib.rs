//! # lexalign-core
//!
//! Foundation crate for the lexalign alignment engine.
//! Defines ids, models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod cancellation;
pub mod config;
pub mod constants;
pub mod errors;
pub mod lexicon;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use cancellation::CancellationToken;
pub use config::LexAlignConfig;
pub use errors::{LexAlignError, LexAlignResult};
pub use lexicon::InMemoryLexicon;
pub use models::{
    AlignmentPair, Axis, Cluster, Confidence, DecisionRecord, Item, ItemKind, LemmaInfo,
    LexemeKey, Metadata, ReferenceKind, SenseId,
};
pub use traits::{AxisSink, ClusterSink, Lexicon};
