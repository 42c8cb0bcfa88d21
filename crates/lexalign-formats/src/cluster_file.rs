//! Cluster file: one cluster per line, TAB-separated members.

use std::io::{BufRead, Write};

use lexalign_core::constants::FIELD_SEPARATOR;
use lexalign_core::errors::{FormatError, LexAlignError, LexAlignResult};
use lexalign_core::models::Cluster;
use tracing::warn;

use crate::lines::{classify, numbered_lines, Line};

/// Parsed cluster file.
#[derive(Debug, Clone, Default)]
pub struct ClusterInput {
    pub header: Vec<String>,
    pub clusters: Vec<Cluster>,
    pub lines_read: usize,
    pub malformed_lines: usize,
}

/// Parse one data line. Repeated members collapse; fewer than two distinct
/// members is malformed.
pub fn parse_cluster_fields(line: usize, fields: &[String]) -> Result<Cluster, FormatError> {
    let cluster = Cluster::new(fields.iter().filter(|f| !f.is_empty()).cloned());
    if !cluster.is_emittable() {
        return Err(FormatError::MalformedLine {
            line,
            reason: format!("expected at least 2 distinct members, found {}", cluster.len()),
        });
    }
    Ok(cluster)
}

/// Read a cluster file. Malformed lines are skipped and counted.
pub fn read_cluster_file<R: BufRead>(reader: R, source: &str) -> LexAlignResult<ClusterInput> {
    let mut input = ClusterInput::default();
    for entry in numbered_lines(reader, source) {
        let (line_no, raw) = entry?;
        match classify(&raw) {
            Line::Blank => {}
            Line::Comment(text) => input.header.push(text),
            Line::Data(fields) => {
                input.lines_read += 1;
                match parse_cluster_fields(line_no, &fields) {
                    Ok(cluster) => input.clusters.push(cluster),
                    Err(err) => {
                        input.malformed_lines += 1;
                        warn!(source, error = %err, "skipping malformed cluster line");
                    }
                }
            }
        }
    }
    Ok(input)
}

/// Write header lines verbatim, then one cluster per line.
pub fn write_clusters<W: Write>(
    writer: &mut W,
    header: &[String],
    clusters: &[Cluster],
) -> LexAlignResult<()> {
    let io = |e| LexAlignError::io("cluster output", e);
    let mut buf = [0u8; 4];
    let sep: &str = FIELD_SEPARATOR.encode_utf8(&mut buf);
    for line in header {
        writeln!(writer, "{line}").map_err(io)?;
    }
    for cluster in clusters {
        writeln!(writer, "{}", cluster.members().join(sep)).map_err(io)?;
    }
    writer.flush().map_err(io)
}
