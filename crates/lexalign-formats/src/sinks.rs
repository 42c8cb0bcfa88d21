//! File-backed sinks for axis sets and final clusters.

use std::io::Write;

use lexalign_core::errors::{LexAlignError, LexAlignResult};
use lexalign_core::models::{Axis, Cluster, Metadata};
use lexalign_core::traits::{AxisSink, ClusterSink};
use serde::Serialize;

use crate::cluster_file::write_clusters;

/// One line of the axis output stream.
#[derive(Serialize)]
#[serde(tag = "record", rename_all = "lowercase")]
enum AxisLine<'a> {
    Metadata(&'a Metadata),
    Axis(&'a Axis),
}

/// Writes the run metadata as the first line, then one JSON axis per line.
/// Child axes stay nested inside their parent's line.
pub struct JsonLinesAxisSink<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> JsonLinesAxisSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Top-level axes written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, line: &AxisLine<'_>) -> LexAlignResult<()> {
        serde_json::to_writer(&mut self.writer, line)?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| LexAlignError::io("axis output", e))
    }
}

impl<W: Write> AxisSink for JsonLinesAxisSink<W> {
    fn accept_axes(&mut self, metadata: &Metadata, axes: &[Axis]) -> LexAlignResult<()> {
        self.write_line(&AxisLine::Metadata(metadata))?;
        for axis in axes {
            self.write_line(&AxisLine::Axis(axis))?;
            self.written += 1;
        }
        self.writer
            .flush()
            .map_err(|e| LexAlignError::io("axis output", e))
    }
}

/// Writes final clusters in the cluster file format, header first.
pub struct TsvClusterSink<W: Write> {
    writer: W,
}

impl<W: Write> TsvClusterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ClusterSink for TsvClusterSink<W> {
    fn accept_clusters(&mut self, header: &[String], clusters: &[Cluster]) -> LexAlignResult<()> {
        write_clusters(&mut self.writer, header, clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexalign_core::models::RunMetadataInput;

    fn metadata() -> Metadata {
        RunMetadataInput {
            id: Some("run-1".into()),
            date: Some("2024-01-02".into()),
            decision_type: Some("automatic".into()),
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn axis_sink_writes_metadata_then_axes() {
        use lexalign_core::models::{Confidence, Item, ItemKind};
        use std::sync::Arc;

        let metadata = Arc::new(metadata());
        let axis = Axis {
            id: "run-1:sense:1".into(),
            kind: ItemKind::Sense,
            source: Item::new(ItemKind::Sense, "a", "wn"),
            target: Item::new(ItemKind::Sense, "b", "vn"),
            confidence: Confidence::new(0.5),
            metadata: Arc::clone(&metadata),
            children: vec![],
        };
        let mut sink = JsonLinesAxisSink::new(Vec::new());
        sink.accept_axes(&metadata, &[axis]).unwrap();
        assert_eq!(sink.written(), 1);

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["record"], "metadata");
        assert_eq!(lines[0]["creation_date"], "2024-01-02");
        assert_eq!(lines[1]["record"], "axis");
        assert_eq!(lines[1]["metadata_id"], "run-1");
        assert_eq!(lines[1]["confidence"], 0.5);
        assert!(lines[1].get("children").is_none());
    }

    #[test]
    fn cluster_sink_writes_header_first() {
        let mut sink = TsvClusterSink::new(Vec::new());
        sink.accept_clusters(&["# h".to_string()], &[Cluster::new(["a", "b"])])
            .unwrap();
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), "# h\na\tb\n");
    }
}
