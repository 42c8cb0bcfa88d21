//! Phase 2: Target grouping. Senses sharing a target value form one cluster.
//!
//! Deliberately over-eager; the cleaning passes remove false positives.

use std::collections::HashMap;

use lexalign_core::models::Cluster;

use super::phase1_expansion::SensePair;

/// Group sense pairs by target. Groups follow first appearance of their
/// target; members follow first appearance in `pairs`. Groups with fewer
/// than two distinct senses are dropped.
pub fn group_by_target(pairs: &[SensePair]) -> Vec<Cluster> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<Vec<&str>> = Vec::new();

    for (sense, target) in pairs {
        let slot = *index.entry(target.as_str()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(sense.as_str());
    }

    groups
        .into_iter()
        .map(Cluster::new)
        .filter(Cluster::is_emittable)
        .collect()
}
