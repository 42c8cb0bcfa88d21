pub mod alignment_pair;
pub mod axis;
pub mod cluster;
pub mod confidence;
pub mod decision;
pub mod item;
pub mod lemma;
pub mod metadata;
pub mod reports;

pub use alignment_pair::AlignmentPair;
pub use axis::{Axis, AxisKey};
pub use cluster::Cluster;
pub use confidence::Confidence;
pub use decision::{ArgumentRecord, ArgumentTarget, Decision, DecisionRecord, TargetDecision};
pub use item::{ArgumentSlot, Item, ItemId, ItemKind, ReferenceKind, SenseId, SynsetId};
pub use lemma::{LemmaInfo, LexemeKey};
pub use metadata::{DecisionType, Metadata, RunMetadataInput};
pub use reports::{AxisBuildReport, ClusteringReport, PassStats, PurityDiagnostic};
