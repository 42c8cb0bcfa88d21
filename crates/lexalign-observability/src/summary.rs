//! End-of-run summary: input/output counts per stage and failure category.

use lexalign_core::errors::LexAlignResult;
use lexalign_core::models::{AxisBuildReport, ClusteringReport, ItemKind};
use serde::Serialize;
use tracing::info;

/// One labelled count of a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryLine {
    pub label: String,
    pub count: usize,
}

/// Flattened, printable view of a run report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub run: String,
    pub lines: Vec<SummaryLine>,
}

impl RunSummary {
    fn new(run: impl Into<String>) -> Self {
        Self {
            run: run.into(),
            lines: Vec::new(),
        }
    }

    fn push(&mut self, label: impl Into<String>, count: usize) {
        self.lines.push(SummaryLine {
            label: label.into(),
            count,
        });
    }

    pub fn from_clustering(report: &ClusteringReport) -> Self {
        let mut summary = Self::new("clustering");
        summary.push("input lines", report.lines_read);
        summary.push("malformed lines", report.malformed_lines);
        summary.push("undecided pairs", report.undecided_pairs);
        summary.push("unresolved sources", report.unresolved_sources);
        summary.push("expanded pairs", report.expanded_pairs);
        summary.push("unresolved members", report.unresolved_members);
        for pass in &report.passes {
            summary.push(format!("{} clusters in", pass.pass), pass.clusters_in);
            summary.push(format!("{} clusters out", pass.pass), pass.clusters_out);
            summary.push(format!("{} members dropped", pass.pass), pass.members_in.saturating_sub(pass.members_out));
        }
        summary.push("purity diagnostics", report.purity_diagnostics.len());
        summary.push("final clusters", report.final_clusters);
        summary
    }

    pub fn from_axis_build(report: &AxisBuildReport) -> Self {
        let mut summary = Self::new("axis-build");
        summary.push("records", report.records);
        summary.push("malformed records", report.malformed_records);
        summary.push("decisions", report.decisions);
        summary.push("not aligned", report.not_aligned);
        summary.push("below threshold", report.below_threshold);
        summary.push("unresolved sources", report.unresolved_sources);
        summary.push("unresolved targets", report.unresolved_targets);
        summary.push("duplicates", report.duplicates);
        for kind in ItemKind::ALL {
            let created = report.created_of(kind);
            if created > 0 {
                summary.push(format!("{kind} axes created"), created);
            }
        }
        summary.push("axes created", report.created_total());
        summary
    }

    pub fn count(&self, label: &str) -> Option<usize> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.count)
    }

    /// Emit one `info` event per line.
    pub fn log(&self) {
        for line in &self.lines {
            info!(run = %self.run, label = %line.label, count = line.count, "run summary");
        }
    }

    /// Aligned plain-text table.
    pub fn render(&self) -> String {
        let width = self
            .lines
            .iter()
            .map(|line| line.label.len())
            .max()
            .unwrap_or(0);
        let mut out = format!("== {} ==\n", self.run);
        for line in &self.lines {
            out.push_str(&format!("{:<width$}  {}\n", line.label, line.count));
        }
        out
    }

    pub fn to_json(&self) -> LexAlignResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
