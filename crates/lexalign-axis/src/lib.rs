//! # lexalign-axis
//!
//! Turns a stream of decision records into alignment axes between two
//! lexicons. Axes are deduplicated on (kind, source, target); predicate axes
//! carry their argument axes as children.

pub mod builder;
pub mod engine;
pub mod registry;

pub use builder::AxisBuilder;
pub use engine::{AxisBuildOutput, AxisEngine};
pub use registry::{AxisRegistry, Registration};
