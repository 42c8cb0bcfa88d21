//! Phase 3: Lemma split. Partition each cluster by lemma.
//!
//! A heuristic cleanup rather than a logical necessity: senses aligned to the
//! same target through different lemmas are usually noise from synset
//! expansion. Singleton lemma groups are dropped.

use lexalign_core::models::Cluster;
use tracing::debug;

use super::{map_clusters, CleaningPass, PassContext};

/// Result of splitting one cluster.
#[derive(Debug, Default)]
struct Split {
    clusters: Vec<Cluster>,
    unresolved: usize,
}

pub struct LemmaSplitPass;

impl CleaningPass for LemmaSplitPass {
    fn name(&self) -> &'static str {
        "lemma-split"
    }

    fn apply(&self, clusters: Vec<Cluster>, ctx: &mut PassContext<'_>) -> Vec<Cluster> {
        let lexicon = ctx.lexicon;
        let reference_kind = ctx.config.member_reference;

        let splits = map_clusters(&clusters, ctx.config.parallel_lookups, |cluster| {
            // Lemma groups in first-seen order.
            let mut groups: Vec<(String, Vec<&str>)> = Vec::new();
            let mut unresolved = 0;
            for member in cluster.members() {
                let Some(info) = lexicon.lemma_info_via(reference_kind, member) else {
                    debug!(member = %member, "lemma unresolved, member dropped");
                    unresolved += 1;
                    continue;
                };
                match groups.iter_mut().find(|(lemma, _)| *lemma == info.lemma) {
                    Some((_, members)) => members.push(member.as_str()),
                    None => groups.push((info.lemma, vec![member.as_str()])),
                }
            }
            Split {
                clusters: groups
                    .into_iter()
                    .map(|(_, members)| Cluster::new(members))
                    .filter(Cluster::is_emittable)
                    .collect(),
                unresolved,
            }
        });

        let mut out = Vec::with_capacity(clusters.len());
        for split in splits {
            ctx.report.unresolved_members += split.unresolved;
            out.extend(split.clusters);
        }
        out
    }
}
