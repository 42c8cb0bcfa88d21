//! # lexalign-clustering
//!
//! Builds candidate sense clusters from pairwise alignments and cleans them:
//! expansion → target grouping → lemma split → transitive merge →
//! POS purity → global disjointness → lexeme filter.

pub mod algorithms;
pub mod engine;
pub mod pipeline;

pub use engine::{ClusteringEngine, ClusteringOutput};
pub use pipeline::{CleaningPass, PassContext};
