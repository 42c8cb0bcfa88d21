//! Phase 5: POS purity. One cluster per part of speech.
//!
//! Members with no resolvable POS share the configured `unknown` pseudo-POS.
//! A cluster spanning several POS values yields a diagnostic, never an error.

use lexalign_core::models::{Cluster, PurityDiagnostic};
use tracing::warn;

use super::{map_clusters, CleaningPass, PassContext};

pub struct PosPurityPass {
    name: &'static str,
}

impl PosPurityPass {
    pub fn new() -> Self {
        Self { name: "pos-purity" }
    }

    /// Variant run ahead of the transitive merge.
    pub fn before_merge() -> Self {
        Self {
            name: "pos-purity-pre-merge",
        }
    }
}

impl Default for PosPurityPass {
    fn default() -> Self {
        Self::new()
    }
}

struct Partition {
    clusters: Vec<Cluster>,
    diagnostic: Option<PurityDiagnostic>,
}

impl CleaningPass for PosPurityPass {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, clusters: Vec<Cluster>, ctx: &mut PassContext<'_>) -> Vec<Cluster> {
        let lexicon = ctx.lexicon;
        let reference_kind = ctx.config.member_reference;
        let unknown = ctx.config.unknown_pos_label.as_str();

        let partitions = map_clusters(&clusters, ctx.config.parallel_lookups, |cluster| {
            let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
            for member in cluster.members() {
                let pos = lexicon
                    .lemma_info_via(reference_kind, member)
                    .and_then(|info| info.pos)
                    .unwrap_or_else(|| unknown.to_string());
                match groups.iter_mut().find(|(p, _)| *p == pos) {
                    Some((_, members)) => members.push(member.as_str()),
                    None => groups.push((pos, vec![member.as_str()])),
                }
            }

            let diagnostic = (groups.len() > 1).then(|| PurityDiagnostic {
                members: cluster.members().to_vec(),
                pos_values: groups.iter().map(|(p, _)| p.clone()).collect(),
            });
            Partition {
                clusters: groups
                    .into_iter()
                    .map(|(_, members)| Cluster::new(members))
                    .filter(Cluster::is_emittable)
                    .collect(),
                diagnostic,
            }
        });

        let mut out = Vec::with_capacity(clusters.len());
        for partition in partitions {
            if let Some(diagnostic) = partition.diagnostic {
                warn!(
                    pass = self.name,
                    members = %diagnostic.members.join(" "),
                    pos = %diagnostic.pos_values.join(","),
                    "cluster spans multiple parts of speech"
                );
                ctx.report.purity_diagnostics.push(diagnostic);
            }
            out.extend(partition.clusters);
        }
        out
    }
}
