//! Phase 4: Transitive merge. Connected components of the "shares a member"
//! relation, computed with union-find over interned member ids.
//!
//! Order-independent and idempotent: output members are sorted and clusters
//! are ordered by their first member.

use std::collections::HashMap;

use lexalign_core::models::Cluster;

use super::{CleaningPass, PassContext};
use crate::algorithms::UnionFind;

pub struct TransitiveMergePass;

impl CleaningPass for TransitiveMergePass {
    fn name(&self) -> &'static str {
        "transitive-merge"
    }

    fn apply(&self, clusters: Vec<Cluster>, _ctx: &mut PassContext<'_>) -> Vec<Cluster> {
        merge_components(&clusters)
    }
}

/// One cluster per connected component with at least two members.
pub fn merge_components(clusters: &[Cluster]) -> Vec<Cluster> {
    // Intern members in sorted order so component order is canonical.
    let mut ids: Vec<&str> = clusters
        .iter()
        .flat_map(|c| c.members().iter().map(String::as_str))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let index: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();

    let mut forest = UnionFind::new(ids.len());
    for cluster in clusters {
        let mut members = cluster.members().iter().map(|m| index[m.as_str()]);
        if let Some(first) = members.next() {
            for other in members {
                forest.union(first, other);
            }
        }
    }

    forest
        .components()
        .into_iter()
        .filter(|component| component.len() >= 2)
        .map(|component| Cluster::new(component.into_iter().map(|i| ids[i])))
        .collect()
}
