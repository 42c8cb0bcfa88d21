// Single source of truth for all default values.

use crate::models::{ItemKind, ReferenceKind};

// --- Clustering ---
pub const DEFAULT_LEFT_REFERENCE: ReferenceKind = ReferenceKind::Native;
pub const DEFAULT_MEMBER_REFERENCE: ReferenceKind = ReferenceKind::Native;
pub const DEFAULT_WORD_JOINER: &str = "_";
pub const DEFAULT_UNKNOWN_POS: &str = "unknown";
pub const DEFAULT_ANCHOR_INDEX: usize = 0;
pub const DEFAULT_LEMMA_SPLIT: bool = true;
pub const DEFAULT_POS_PURITY_BEFORE_MERGE: bool = false;
pub const DEFAULT_PARALLEL_LOOKUPS: bool = true;

// --- Alignment ---
pub const DEFAULT_AXIS_KIND: ItemKind = ItemKind::Sense;
pub const DEFAULT_REFERENCE_KIND: ReferenceKind = ReferenceKind::Native;
pub const DEFAULT_ARGUMENT_REFERENCE_KIND: ReferenceKind = ReferenceKind::ArgumentByRole;
pub const DEFAULT_CONFIDENCE: f64 = 1.0;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
pub const DEFAULT_RUN_SUMMARY: bool = true;
