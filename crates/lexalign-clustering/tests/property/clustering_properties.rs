//! Property tests for lexalign-clustering: idempotence, partition, size and
//! POS invariants.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use lexalign_clustering::pipeline::phase4_transitive_merge::merge_components;
use lexalign_clustering::pipeline::phase6_disjointness::enforce_disjointness;
use lexalign_clustering::ClusteringEngine;
use lexalign_core::config::ClusteringConfig;
use lexalign_core::{Cluster, InMemoryLexicon, Lexicon};
use lexalign_formats::ClusterInput;

const MEMBERS: usize = 12;
const LEMMAS: [&str; 2] = ["run", "walk"];
const POS: [Option<&str>; 3] = [Some("n"), Some("v"), None];

fn member(i: usize) -> String {
    format!("m{i:02}")
}

fn clusters_strategy() -> impl Strategy<Value = Vec<Cluster>> {
    prop::collection::vec(prop::collection::vec(0..MEMBERS, 2..5), 0..10).prop_map(|raw| {
        raw.into_iter()
            .map(|ids| Cluster::new(ids.into_iter().map(member)))
            .filter(Cluster::is_emittable)
            .collect()
    })
}

fn lexicon_strategy() -> impl Strategy<Value = InMemoryLexicon> {
    prop::collection::vec((0..LEMMAS.len(), 0..POS.len()), MEMBERS).prop_map(|entries| {
        let mut lx = InMemoryLexicon::new("prop");
        for (i, (lemma, pos)) in entries.into_iter().enumerate() {
            lx.add_sense(&member(i), LEMMAS[lemma], POS[pos], None);
        }
        lx
    })
}

fn assert_disjoint(clusters: &[Cluster]) -> Result<(), TestCaseError> {
    let mut seen = HashSet::new();
    for cluster in clusters {
        for m in cluster.members() {
            prop_assert!(seen.insert(m.clone()), "member {} in two clusters", m);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_merge_is_idempotent(clusters in clusters_strategy()) {
        let once = merge_components(&clusters);
        let twice = merge_components(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_merge_is_order_independent(clusters in clusters_strategy()) {
        let mut reversed: Vec<Cluster> = clusters
            .iter()
            .map(|c| Cluster::new(c.members().iter().rev()))
            .collect();
        reversed.reverse();
        prop_assert_eq!(merge_components(&clusters), merge_components(&reversed));
    }

    #[test]
    fn prop_merge_is_a_partition_of_sized_clusters(clusters in clusters_strategy()) {
        let merged = merge_components(&clusters);
        assert_disjoint(&merged)?;
        for c in &merged {
            prop_assert!(c.len() >= 2);
        }
        // Every input member survives the merge.
        let inputs: HashSet<&String> = clusters.iter().flat_map(|c| c.members()).collect();
        let outputs: HashSet<&String> = merged.iter().flat_map(|c| c.members()).collect();
        prop_assert_eq!(inputs, outputs);
    }

    #[test]
    fn prop_disjointness_output_is_disjoint(clusters in clusters_strategy()) {
        let out = enforce_disjointness(clusters);
        assert_disjoint(&out)?;
        for c in &out {
            prop_assert!(c.is_emittable());
        }
    }

    #[test]
    fn prop_cleaned_clusters_hold_every_invariant(
        clusters in clusters_strategy(),
        lexicon in lexicon_strategy(),
    ) {
        let lexicon = Arc::new(lexicon);
        let engine = ClusteringEngine::new(lexicon.clone(), ClusteringConfig::default());
        let output = engine
            .run_clusters(ClusterInput { clusters, ..Default::default() })
            .unwrap();

        assert_disjoint(&output.clusters)?;
        for c in &output.clusters {
            prop_assert!(c.len() >= 2);
            let pos: HashSet<Option<String>> = c
                .members()
                .iter()
                .map(|m| lexicon.lemma_and_pos(m).and_then(|info| info.pos))
                .collect();
            prop_assert_eq!(pos.len(), 1, "mixed POS in {:?}", c);
            let lemmas: HashSet<String> = c
                .members()
                .iter()
                .filter_map(|m| lexicon.lemma_and_pos(m).map(|info| info.lemma))
                .collect();
            prop_assert!(lemmas.len() <= LEMMAS.len());
        }
    }
}
