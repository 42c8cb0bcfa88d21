//! Cluster builder and cleaning pipeline.
//!
//! Builder: Phase 1 expansion → Phase 2 target grouping.
//! Cleaner (fixed order): Phase 3 lemma split → Phase 4 transitive merge →
//! Phase 5 POS purity → Phase 6 global disjointness → Phase 7 lexeme filter.

pub mod phase1_expansion;
pub mod phase2_grouping;
pub mod phase3_lemma_split;
pub mod phase4_transitive_merge;
pub mod phase5_pos_purity;
pub mod phase6_disjointness;
pub mod phase7_lexeme_filter;

use std::sync::Arc;

use lexalign_core::config::ClusteringConfig;
use lexalign_core::models::{Cluster, ClusteringReport, PassStats};
use lexalign_core::traits::Lexicon;
use lexalign_formats::AllowList;
use rayon::prelude::*;
use tracing::info;

pub use phase3_lemma_split::LemmaSplitPass;
pub use phase4_transitive_merge::TransitiveMergePass;
pub use phase5_pos_purity::PosPurityPass;
pub use phase6_disjointness::GlobalDisjointnessPass;
pub use phase7_lexeme_filter::LexemeFilterPass;

/// What a cleaning pass may read and record while it runs.
pub struct PassContext<'a> {
    pub lexicon: &'a dyn Lexicon,
    pub config: &'a ClusteringConfig,
    pub report: &'a mut ClusteringReport,
}

/// One composable refinement step over a whole cluster batch.
///
/// Every pass only emits clusters with at least two members.
pub trait CleaningPass: Send + Sync {
    /// Stable name used in logs and report entries.
    fn name(&self) -> &'static str;

    fn apply(&self, clusters: Vec<Cluster>, ctx: &mut PassContext<'_>) -> Vec<Cluster>;
}

/// Run one pass, recording its input/output counts in the report.
pub fn run_pass(
    pass: &dyn CleaningPass,
    clusters: Vec<Cluster>,
    ctx: &mut PassContext<'_>,
) -> Vec<Cluster> {
    let _span = lexalign_observability::cleaning_pass_span!(pass.name(), clusters.len()).entered();

    let mut stats = PassStats::new(pass.name());
    stats.clusters_in = clusters.len();
    stats.members_in = member_count(&clusters);

    let out = pass.apply(clusters, ctx);

    stats.clusters_out = out.len();
    stats.members_out = member_count(&out);
    info!(
        pass = pass.name(),
        clusters_in = stats.clusters_in,
        clusters_out = stats.clusters_out,
        members_dropped = stats.members_in.saturating_sub(stats.members_out),
        "cleaning pass complete"
    );
    ctx.report.passes.push(stats);
    out
}

/// The cleaning passes in their fixed order for `config`.
///
/// The lexeme filter is only present when an allow-list is given.
pub fn default_passes(
    config: &ClusteringConfig,
    allow_list: Option<Arc<AllowList>>,
) -> Vec<Box<dyn CleaningPass>> {
    let mut passes: Vec<Box<dyn CleaningPass>> = Vec::new();
    if config.lemma_split {
        passes.push(Box::new(LemmaSplitPass));
    }
    if config.pos_purity_before_merge {
        passes.push(Box::new(PosPurityPass::before_merge()));
    }
    passes.push(Box::new(TransitiveMergePass));
    passes.push(Box::new(PosPurityPass::new()));
    passes.push(Box::new(GlobalDisjointnessPass));
    if let Some(allow_list) = allow_list {
        passes.push(Box::new(LexemeFilterPass::new(allow_list)));
    }
    passes
}

pub(crate) fn member_count(clusters: &[Cluster]) -> usize {
    clusters.iter().map(Cluster::len).sum()
}

/// Map clusters independently, on the rayon pool when `parallel` is set.
/// Results keep input order.
pub(crate) fn map_clusters<T, F>(clusters: &[Cluster], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(&Cluster) -> T + Sync + Send,
{
    if parallel {
        clusters.par_iter().map(f).collect()
    } else {
        clusters.iter().map(f).collect()
    }
}
