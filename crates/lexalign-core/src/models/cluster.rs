use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::item::SenseId;
use crate::constants::{FIELD_SEPARATOR, MIN_CLUSTER_SIZE};

/// A set of mutually equivalent members.
///
/// Members are distinct and keep the order they were first seen in; the
/// canonical form used for ordering and comparison is the sorted member list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<SenseId>", into = "Vec<SenseId>")]
pub struct Cluster {
    members: Vec<SenseId>,
}

impl Cluster {
    /// Build a cluster, dropping repeated members but keeping first-seen order.
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SenseId>,
    {
        let mut seen = HashSet::new();
        let members = members
            .into_iter()
            .map(Into::into)
            .filter(|m: &SenseId| seen.insert(m.clone()))
            .collect();
        Self { members }
    }

    pub fn members(&self) -> &[SenseId] {
        &self.members
    }

    pub fn into_members(self) -> Vec<SenseId> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, member: &str) -> bool {
        self.members.iter().any(|m| m == member)
    }

    /// Whether the cluster is large enough to be emitted by a cleaning stage.
    pub fn is_emittable(&self) -> bool {
        self.members.len() >= MIN_CLUSTER_SIZE
    }

    /// Members in sorted order.
    pub fn canonical_members(&self) -> Vec<&str> {
        let mut sorted: Vec<&str> = self.members.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted
    }

    /// Sorted members joined by TAB. Total order key for deterministic passes.
    pub fn canonical_text(&self) -> String {
        let mut buf = [0u8; 4];
        let sep: &str = FIELD_SEPARATOR.encode_utf8(&mut buf);
        self.canonical_members().join(sep)
    }

    /// A copy of this cluster with members in sorted order.
    pub fn canonicalized(&self) -> Cluster {
        Cluster {
            members: self
                .canonical_members()
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<Vec<SenseId>> for Cluster {
    fn from(members: Vec<SenseId>) -> Self {
        Cluster::new(members)
    }
}

impl From<Cluster> for Vec<SenseId> {
    fn from(cluster: Cluster) -> Self {
        cluster.members
    }
}
