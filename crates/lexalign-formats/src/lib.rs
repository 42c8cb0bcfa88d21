//! # lexalign-formats
//!
//! Readers for alignment files, cluster files, lexeme allow-lists, lexicon
//! dumps, decision-record streams and run metadata, plus file-backed sinks.
//!
//! Every reader skips malformed lines with a `warn` event and counts them;
//! only I/O failures are returned as errors.

pub mod alignment_file;
pub mod allow_list;
pub mod cluster_file;
pub mod decisions;
pub mod lexicon_tsv;
mod lines;
pub mod metadata_file;
pub mod sinks;

pub use alignment_file::{read_alignment_file, AlignmentInput};
pub use allow_list::{read_allow_list, AllowList};
pub use cluster_file::{read_cluster_file, write_clusters, ClusterInput};
pub use decisions::DecisionReader;
pub use lexicon_tsv::load_lexicon;
pub use metadata_file::read_run_metadata;
pub use sinks::{JsonLinesAxisSink, TsvClusterSink};

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lexalign_core::errors::{LexAlignError, LexAlignResult};

/// Open a file for buffered line reading.
pub fn open(path: &Path) -> LexAlignResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| LexAlignError::io(path.display().to_string(), e))
}
