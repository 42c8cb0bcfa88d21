//! Fixture loader for lexalign test datasets.
//!
//! Provides paths and parsed forms of the files under `data/`, prebuilt
//! lexicons, and in-memory sinks for tests across crates.

use std::path::PathBuf;
use std::sync::Arc;

use lexalign_core::errors::LexAlignResult;
use lexalign_core::models::{Axis, Cluster, DecisionRecord, Metadata};
use lexalign_core::traits::{AxisSink, ClusterSink, Lexicon};
use lexalign_core::InMemoryLexicon;
use lexalign_formats::{
    load_lexicon, open, read_alignment_file, read_allow_list, read_cluster_file,
    read_run_metadata, AlignmentInput, AllowList, ClusterInput, DecisionReader,
};
use serde::de::DeserializeOwned;

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn read_fixture(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = read_fixture(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative_path}: {e}"))
}

/// Load a lexicon dump from `lexicons/<name>.tsv` under the id `name`.
pub fn load_lexicon_fixture(name: &str) -> InMemoryLexicon {
    let relative = format!("lexicons/{name}.tsv");
    let reader = open(&fixture_path(&relative))
        .unwrap_or_else(|e| panic!("Failed to open fixture {relative}: {e}"));
    let (lexicon, stats) = load_lexicon(name, reader, &relative)
        .unwrap_or_else(|e| panic!("Failed to load lexicon {relative}: {e}"));
    assert_eq!(stats.malformed_lines, 0, "fixture {relative} has malformed lines");
    lexicon
}

/// Toy English wordnet: senses, synsets and a few external references.
pub fn wordnet() -> Arc<dyn Lexicon> {
    Arc::new(load_lexicon_fixture("wordnet"))
}

/// Source and target predicate inventories for axis runs.
pub fn frame_lexicons() -> (Arc<dyn Lexicon>, Arc<dyn Lexicon>) {
    (
        Arc::new(load_lexicon_fixture("source_frames")),
        Arc::new(load_lexicon_fixture("target_frames")),
    )
}

pub fn alignment_fixture(relative_path: &str) -> AlignmentInput {
    let path = fixture_path(relative_path);
    let reader = open(&path).unwrap_or_else(|e| panic!("{e}"));
    read_alignment_file(reader, relative_path).unwrap_or_else(|e| panic!("{e}"))
}

pub fn cluster_fixture(relative_path: &str) -> ClusterInput {
    let path = fixture_path(relative_path);
    let reader = open(&path).unwrap_or_else(|e| panic!("{e}"));
    read_cluster_file(reader, relative_path).unwrap_or_else(|e| panic!("{e}"))
}

pub fn allow_list_fixture(relative_path: &str, word_joiner: &str) -> AllowList {
    let path = fixture_path(relative_path);
    let reader = open(&path).unwrap_or_else(|e| panic!("{e}"));
    read_allow_list(reader, relative_path, word_joiner).unwrap_or_else(|e| panic!("{e}"))
}

/// Decision records of a JSON-lines fixture, with the malformed-record count.
pub fn decisions_fixture(relative_path: &str) -> (Vec<DecisionRecord>, usize) {
    let path = fixture_path(relative_path);
    let reader = open(&path).unwrap_or_else(|e| panic!("{e}"));
    let mut records = DecisionReader::new(reader, relative_path);
    let parsed = records
        .by_ref()
        .collect::<LexAlignResult<Vec<_>>>()
        .unwrap_or_else(|e| panic!("{e}"));
    (parsed, records.malformed_records())
}

pub fn metadata_fixture(relative_path: &str) -> Metadata {
    read_run_metadata(&fixture_path(relative_path)).unwrap_or_else(|e| panic!("{e}"))
}

/// Axis sink that keeps everything it is handed.
#[derive(Debug, Default)]
pub struct MemoryAxisSink {
    pub metadata: Option<Metadata>,
    pub axes: Vec<Axis>,
    /// Number of `accept_axes` calls.
    pub deliveries: usize,
}

impl AxisSink for MemoryAxisSink {
    fn accept_axes(&mut self, metadata: &Metadata, axes: &[Axis]) -> LexAlignResult<()> {
        self.metadata = Some(metadata.clone());
        self.axes.extend_from_slice(axes);
        self.deliveries += 1;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryClusterSink {
    pub header: Vec<String>,
    pub clusters: Vec<Cluster>,
}

impl ClusterSink for MemoryClusterSink {
    fn accept_clusters(&mut self, header: &[String], clusters: &[Cluster]) -> LexAlignResult<()> {
        self.header = header.to_vec();
        self.clusters.extend_from_slice(clusters);
        Ok(())
    }
}
