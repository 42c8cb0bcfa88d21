use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::confidence::Confidence;
use super::item::{Item, ItemId, ItemKind};
use super::metadata::Metadata;

/// Ordered dedup key of an axis: (kind, source id, target id).
///
/// (A, B) and (B, A) are distinct keys.
pub type AxisKey = (ItemKind, ItemId, ItemId);

/// A correspondence linking one item of the source lexicon to one item of
/// the target lexicon.
///
/// Predicate axes may own child argument axes; children are the only part
/// of an axis that changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub id: String,
    pub kind: ItemKind,
    pub source: Item,
    pub target: Item,
    pub confidence: Confidence,
    /// Shared by every axis of one run; serialized as its id.
    #[serde(rename = "metadata_id", serialize_with = "serialize_metadata_id")]
    pub metadata: Arc<Metadata>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Axis>,
}

impl Axis {
    pub fn key(&self) -> AxisKey {
        (self.kind, self.source.id.clone(), self.target.id.clone())
    }

    /// This axis plus all descendants, depth first.
    pub fn iter_all(&self) -> Box<dyn Iterator<Item = &Axis> + '_> {
        Box::new(std::iter::once(self).chain(self.children.iter().flat_map(Axis::iter_all)))
    }
}

fn serialize_metadata_id<S: Serializer>(
    metadata: &Arc<Metadata>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&metadata.id)
}
