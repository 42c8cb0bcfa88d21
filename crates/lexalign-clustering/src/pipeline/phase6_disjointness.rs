//! Phase 6: Global disjointness. No member appears in two clusters.
//!
//! Clusters are visited in ascending order of their canonical text; the first
//! cluster to claim a member keeps it.

use std::collections::HashSet;

use lexalign_core::models::Cluster;
use tracing::debug;

use super::{CleaningPass, PassContext};

pub struct GlobalDisjointnessPass;

impl CleaningPass for GlobalDisjointnessPass {
    fn name(&self) -> &'static str {
        "global-disjointness"
    }

    fn apply(&self, clusters: Vec<Cluster>, _ctx: &mut PassContext<'_>) -> Vec<Cluster> {
        enforce_disjointness(clusters)
    }
}

/// First-come-first-served member assignment in canonical-text order.
pub fn enforce_disjointness(clusters: Vec<Cluster>) -> Vec<Cluster> {
    let mut ordered: Vec<(String, Cluster)> = clusters
        .into_iter()
        .map(|c| (c.canonical_text(), c))
        .collect();
    // Stable, so equal texts keep input order.
    ordered.sort_by(|a, b| a.0.cmp(&b.0));

    let mut assigned: HashSet<String> = HashSet::new();
    let mut out = Vec::with_capacity(ordered.len());
    for (_, cluster) in ordered {
        let survivors = Cluster::new(
            cluster
                .members()
                .iter()
                .filter(|m| !assigned.contains(m.as_str())),
        );
        if !survivors.is_emittable() {
            debug!(
                members = cluster.len(),
                survivors = survivors.len(),
                "cluster dropped, members already assigned"
            );
            continue;
        }
        assigned.extend(survivors.members().iter().cloned());
        out.push(survivors);
    }
    out
}
