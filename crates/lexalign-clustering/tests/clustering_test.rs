//! End-to-end clustering runs over the fixture datasets.

use std::sync::Arc;

use lexalign_clustering::pipeline::PosPurityPass;
use lexalign_clustering::ClusteringEngine;
use lexalign_core::config::{ClusteringConfig, LexAlignConfig};
use lexalign_core::models::{ClusteringReport, ReferenceKind};
use lexalign_core::Cluster;
use test_fixtures::{
    alignment_fixture, allow_list_fixture, cluster_fixture, wordnet, MemoryClusterSink,
};

fn expected_without_filter() -> Vec<Cluster> {
    vec![
        Cluster::new(["ice_cream%n1", "ice_cream%n2"]),
        Cluster::new(["run%n1", "run%n2"]),
        Cluster::new(["run%v1", "run%v2"]),
    ]
}

#[test]
fn alignment_file_runs_through_every_stage() {
    let engine = ClusteringEngine::new(wordnet(), ClusteringConfig::default());
    let output = engine
        .run_alignment(alignment_fixture("alignments/synset_targets.tsv"))
        .unwrap();

    assert_eq!(output.clusters, expected_without_filter());

    let report = &output.report;
    assert_eq!(report.lines_read, 9);
    assert_eq!(report.malformed_lines, 1);
    assert_eq!(report.undecided_pairs, 1);
    assert_eq!(report.unresolved_sources, 1);
    assert_eq!(report.expanded_pairs, 10);
    assert_eq!(report.purity_diagnostics.len(), 1);
    assert_eq!(report.final_clusters, 3);

    let split = report.pass("lemma-split").unwrap();
    assert_eq!(split.clusters_in, 3);
    assert_eq!(split.members_in - split.members_out, 2);
}

#[test]
fn allow_list_keeps_only_listed_anchors() {
    let allow_list = allow_list_fixture("allow_lists/lexemes.tsv", "_");
    let engine = ClusteringEngine::new(wordnet(), ClusteringConfig::default())
        .with_allow_list(Arc::new(allow_list));
    let output = engine
        .run_alignment(alignment_fixture("alignments/synset_targets.tsv"))
        .unwrap();

    assert_eq!(
        output.clusters,
        vec![
            Cluster::new(["ice_cream%n1", "ice_cream%n2"]),
            Cluster::new(["run%v1", "run%v2"]),
        ]
    );
    assert_eq!(output.report.passes.last().unwrap().pass, "lexeme-filter");
}

#[test]
fn configured_word_joiner_reads_and_matches_the_allow_list() {
    let config = LexAlignConfig::from_toml("[clustering]\nword_joiner = \"+\"\n").unwrap();
    let allow_list = allow_list_fixture("allow_lists/lexemes.tsv", &config.clustering.word_joiner);
    let engine = ClusteringEngine::from_config(wordnet(), &config)
        .with_allow_list(Arc::new(allow_list));
    let output = engine
        .run_alignment(alignment_fixture("alignments/synset_targets.tsv"))
        .unwrap();
    assert_eq!(output.clusters[0], Cluster::new(["ice_cream%n1", "ice_cream%n2"]));

    let mismatched = ClusteringEngine::from_config(wordnet(), &config).with_allow_list(Arc::new(
        allow_list_fixture("allow_lists/lexemes.tsv", "_"),
    ));
    assert!(mismatched
        .run_alignment(alignment_fixture("alignments/synset_targets.tsv"))
        .is_err());
}

#[test]
fn cluster_file_cleaning_matches_alignment_run() {
    let config = LexAlignConfig::from_toml("[observability]\nrun_summary = false\n").unwrap();
    let engine = ClusteringEngine::from_config(wordnet(), &config);
    let input = cluster_fixture("clusters/noisy.tsv");
    assert_eq!(input.malformed_lines, 1);

    let output = engine.run_clusters(input).unwrap();
    assert_eq!(output.clusters, expected_without_filter());
    assert_eq!(output.header, vec!["# cleaned by hand"]);
}

#[test]
fn pos_purity_before_merge_reaches_the_same_partition() {
    let config = ClusteringConfig {
        pos_purity_before_merge: true,
        ..Default::default()
    };
    let engine = ClusteringEngine::new(wordnet(), config);
    let output = engine
        .run_clusters(cluster_fixture("clusters/noisy.tsv"))
        .unwrap();
    assert_eq!(output.clusters, expected_without_filter());
    assert_eq!(output.report.passes.len(), 5);
    assert_eq!(output.report.pass("pos-purity").unwrap().clusters_in, 3);
}

#[test]
fn external_synset_references_expand_like_native_ids() {
    let config = ClusteringConfig {
        left_reference: ReferenceKind::Synset,
        ..Default::default()
    };
    let engine = ClusteringEngine::new(wordnet(), config);
    let mut report = ClusteringReport::default();
    let raw = engine
        .build_raw_clusters(
            &[
                lexalign_core::AlignmentPair::new("ili:i100", "correr"),
                lexalign_core::AlignmentPair::new("ili:i101", "correr"),
            ],
            &mut report,
        )
        .unwrap();
    assert_eq!(raw, vec![Cluster::new(["run%v1", "run%v2", "jog%v1"])]);
}

#[test]
fn single_pass_can_be_run_on_its_own() {
    let engine = ClusteringEngine::new(wordnet(), ClusteringConfig::default());
    let mut report = ClusteringReport::default();
    let out = engine.run_pass(
        &PosPurityPass::new(),
        vec![Cluster::new(["run%n1", "run%v1", "run%v2"])],
        &mut report,
    );
    assert_eq!(out, vec![Cluster::new(["run%v1", "run%v2"])]);
    assert_eq!(report.passes.len(), 1);
}

#[test]
fn output_is_handed_to_the_sink_with_header() {
    let engine = ClusteringEngine::new(wordnet(), ClusteringConfig::default());
    let output = engine
        .run_alignment(alignment_fixture("alignments/synset_targets.tsv"))
        .unwrap();
    let mut sink = MemoryClusterSink::default();
    output.emit(&mut sink).unwrap();
    assert_eq!(sink.header.len(), 1);
    assert_eq!(sink.clusters.len(), 3);
}
