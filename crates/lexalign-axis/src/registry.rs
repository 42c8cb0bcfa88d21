//! Per-run axis accumulator: dedup index, id counters and storage.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use lexalign_core::models::{Axis, AxisKey, Confidence, Item, ItemKind, Metadata};

/// Where a registered axis is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Top(usize),
    Child { parent: usize, index: usize },
}

/// Outcome of registering a (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// A new axis was created at this top-level position.
    Created(usize),
    /// The key was already taken; holds the position of the first axis.
    Duplicate(usize),
}

impl Registration {
    /// Position of the axis that owns the key.
    pub fn position(self) -> usize {
        match self {
            Registration::Created(i) | Registration::Duplicate(i) => i,
        }
    }

    pub fn is_created(self) -> bool {
        matches!(self, Registration::Created(_))
    }
}

/// Owns every axis of one run. First writer wins on a repeated key.
pub struct AxisRegistry {
    metadata: Arc<Metadata>,
    axes: Vec<Axis>,
    /// Map from dedup key → storage slot for O(1) lookup.
    index: HashMap<AxisKey, Slot>,
    counters: BTreeMap<ItemKind, usize>,
}

impl AxisRegistry {
    pub fn new(metadata: Arc<Metadata>) -> Self {
        Self {
            metadata,
            axes: Vec::new(),
            index: HashMap::new(),
            counters: BTreeMap::new(),
        }
    }

    pub fn metadata(&self) -> &Arc<Metadata> {
        &self.metadata
    }

    /// Get or create a top-level axis.
    pub fn ensure_axis(
        &mut self,
        kind: ItemKind,
        source: &Item,
        target: &Item,
        confidence: Confidence,
    ) -> Registration {
        let key = (kind, source.id.clone(), target.id.clone());
        if let Some(Slot::Top(position)) = self.index.get(&key) {
            return Registration::Duplicate(*position);
        }
        let axis = self.new_axis(kind, source, target, confidence);
        let position = self.axes.len();
        self.axes.push(axis);
        self.index.insert(key, Slot::Top(position));
        Registration::Created(position)
    }

    /// Get or create an argument axis under the top-level axis at `parent`.
    ///
    /// Returns `true` when a new child was created.
    pub fn ensure_child(
        &mut self,
        parent: usize,
        source: &Item,
        target: &Item,
        confidence: Confidence,
    ) -> bool {
        let key = (ItemKind::Argument, source.id.clone(), target.id.clone());
        if self.index.contains_key(&key) || parent >= self.axes.len() {
            return false;
        }
        let axis = self.new_axis(ItemKind::Argument, source, target, confidence);
        let children = &mut self.axes[parent].children;
        let index = children.len();
        children.push(axis);
        self.index.insert(key, Slot::Child { parent, index });
        true
    }

    /// Look up an axis at any depth by its key.
    pub fn get(&self, key: &AxisKey) -> Option<&Axis> {
        match *self.index.get(key)? {
            Slot::Top(position) => self.axes.get(position),
            Slot::Child { parent, index } => self.axes.get(parent)?.children.get(index),
        }
    }

    /// Top-level axes in creation order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of axes at any depth.
    pub fn total(&self) -> usize {
        self.index.len()
    }

    pub fn into_axes(self) -> Vec<Axis> {
        self.axes
    }

    fn new_axis(&mut self, kind: ItemKind, source: &Item, target: &Item, confidence: Confidence) -> Axis {
        let counter = self.counters.entry(kind).or_insert(0);
        *counter += 1;
        Axis {
            id: format!("{}:{}:{}", self.metadata.id, kind, counter),
            kind,
            source: source.clone(),
            target: target.clone(),
            confidence,
            metadata: Arc::clone(&self.metadata),
            children: Vec::new(),
        }
    }
}
