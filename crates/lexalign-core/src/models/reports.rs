//! Per-run counters. Owned by the orchestrating engine, never global.

use std::collections::BTreeMap;

use serde::Serialize;

use super::item::ItemKind;

/// Input/output counts of one cluster-producing stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PassStats {
    pub pass: String,
    pub clusters_in: usize,
    pub clusters_out: usize,
    pub members_in: usize,
    pub members_out: usize,
}

impl PassStats {
    pub fn new(pass: impl Into<String>) -> Self {
        Self {
            pass: pass.into(),
            ..Default::default()
        }
    }
}

/// Emitted when a cluster spans more than one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurityDiagnostic {
    pub members: Vec<String>,
    pub pos_values: Vec<String>,
}

/// Counters of a clustering run, by stage and failure category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClusteringReport {
    /// Lines of the alignment or cluster input, excluding comments.
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub undecided_pairs: usize,
    /// Left-hand references that resolved to zero senses.
    pub unresolved_sources: usize,
    pub expanded_pairs: usize,
    /// Members dropped because their lemma could not be resolved.
    pub unresolved_members: usize,
    pub passes: Vec<PassStats>,
    pub purity_diagnostics: Vec<PurityDiagnostic>,
    pub final_clusters: usize,
}

impl ClusteringReport {
    pub fn pass(&self, name: &str) -> Option<&PassStats> {
        self.passes.iter().find(|p| p.pass == name)
    }
}

/// Counters of an axis build run, by failure category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxisBuildReport {
    pub records: usize,
    pub malformed_records: usize,
    pub decisions: usize,
    pub not_aligned: usize,
    pub below_threshold: usize,
    pub unresolved_sources: usize,
    pub unresolved_targets: usize,
    pub duplicates: usize,
    pub created: BTreeMap<ItemKind, usize>,
}

impl AxisBuildReport {
    pub fn created_total(&self) -> usize {
        self.created.values().sum()
    }

    pub fn created_of(&self, kind: ItemKind) -> usize {
        self.created.get(&kind).copied().unwrap_or(0)
    }
}
