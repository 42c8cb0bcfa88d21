//! Phase 7: Lexeme-list filtering on the cluster anchor.

use std::sync::Arc;

use lexalign_core::models::{Cluster, LexemeKey};
use lexalign_formats::AllowList;
use tracing::debug;

use super::{map_clusters, CleaningPass, PassContext};

/// Keeps a cluster only if its anchor's (lemma, POS) key is allow-listed.
///
/// The anchor is the member at `clustering.anchor_index`. A cluster whose
/// anchor is missing or has no resolvable lemma is dropped. Multi-word
/// lemmas are joined with `clustering.word_joiner`.
pub struct LexemeFilterPass {
    allow_list: Arc<AllowList>,
}

impl LexemeFilterPass {
    pub fn new(allow_list: Arc<AllowList>) -> Self {
        Self { allow_list }
    }
}

impl CleaningPass for LexemeFilterPass {
    fn name(&self) -> &'static str {
        "lexeme-filter"
    }

    fn apply(&self, clusters: Vec<Cluster>, ctx: &mut PassContext<'_>) -> Vec<Cluster> {
        let lexicon = ctx.lexicon;
        let config = ctx.config;
        let allow_list = self.allow_list.as_ref();

        let keep = map_clusters(&clusters, config.parallel_lookups, |cluster| {
            let Some(anchor) = cluster.members().get(config.anchor_index) else {
                debug!(size = cluster.len(), "cluster has no anchor member");
                return false;
            };
            let Some(info) = lexicon.lemma_info_via(config.member_reference, anchor) else {
                debug!(anchor = %anchor, "anchor lemma unresolved, cluster dropped");
                return false;
            };
            let key = LexemeKey::from_info(&info, &config.word_joiner, &config.unknown_pos_label);
            allow_list.contains(&key)
        });

        clusters
            .into_iter()
            .zip(keep)
            .filter_map(|(cluster, keep)| keep.then_some(cluster))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexalign_core::config::ClusteringConfig;
    use lexalign_core::models::ClusteringReport;
    use lexalign_core::InMemoryLexicon;

    fn lexicon() -> InMemoryLexicon {
        let mut lx = InMemoryLexicon::new("wn");
        lx.add_sense("a", "run", Some("v"), None)
            .add_sense("b", "run", Some("v"), None)
            .add_sense("c", "ice  cream", Some("n"), None)
            .add_sense("d", "ice cream", Some("n"), None)
            .add_sense("e", "walk", Some("v"), None);
        lx
    }

    fn run(config: &ClusteringConfig, allow_list: AllowList, clusters: Vec<Cluster>) -> Vec<Cluster> {
        let lx = lexicon();
        let mut report = ClusteringReport::default();
        let mut ctx = PassContext {
            lexicon: &lx,
            config,
            report: &mut report,
        };
        LexemeFilterPass::new(Arc::new(allow_list)).apply(clusters, &mut ctx)
    }

    #[test]
    fn keeps_only_allow_listed_anchors() {
        let mut list = AllowList::new("_");
        list.insert("run", "v");
        let out = run(
            &ClusteringConfig::default(),
            list,
            vec![Cluster::new(["a", "b"]), Cluster::new(["e", "a"])],
        );
        assert_eq!(out, vec![Cluster::new(["a", "b"])]);
    }

    #[test]
    fn multi_word_lemmas_match_after_normalization() {
        let mut list = AllowList::new("_");
        list.insert(" ice cream ", " n");
        let out = run(&ClusteringConfig::default(), list, vec![Cluster::new(["c", "d"])]);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn configured_joiner_builds_the_anchor_key() {
        let config = ClusteringConfig {
            word_joiner: "+".to_string(),
            ..Default::default()
        };
        let mut plus = AllowList::new("+");
        plus.insert("ice cream", "n");
        assert_eq!(run(&config, plus, vec![Cluster::new(["d", "c"])]).len(), 1);

        let mut underscore = AllowList::new("_");
        underscore.insert("ice cream", "n");
        assert!(run(&config, underscore, vec![Cluster::new(["d", "c"])]).is_empty());
    }

    #[test]
    fn anchor_index_selects_the_member_checked() {
        let mut list = AllowList::new("_");
        list.insert("walk", "v");
        let config = ClusteringConfig {
            anchor_index: 1,
            ..Default::default()
        };
        let out = run(
            &config,
            list,
            vec![Cluster::new(["a", "e"]), Cluster::new(["e", "a"])],
        );
        assert_eq!(out, vec![Cluster::new(["a", "e"])]);
    }

    #[test]
    fn unresolved_anchor_drops_the_cluster() {
        let mut list = AllowList::new("_");
        list.insert("run", "v");
        let out = run(&ClusteringConfig::default(), list, vec![Cluster::new(["ghost", "a"])]);
        assert!(out.is_empty());
    }
}
