//! AxisEngine: validates run metadata, feeds decision records to the builder,
//! and hands the finished axis set to a sink.

use std::io::BufRead;
use std::sync::Arc;

use lexalign_core::config::{AlignmentConfig, LexAlignConfig};
use lexalign_core::errors::LexAlignResult;
use lexalign_core::models::{Axis, AxisBuildReport, DecisionRecord, Metadata, RunMetadataInput};
use lexalign_core::traits::{AxisSink, Lexicon};
use lexalign_core::CancellationToken;
use lexalign_formats::DecisionReader;
use lexalign_observability::{axis_build_span, RunSummary};
use tracing::info;

use crate::builder::AxisBuilder;
use crate::registry::AxisRegistry;

/// Axis set of one run with its shared metadata.
#[derive(Debug, Clone)]
pub struct AxisBuildOutput {
    pub metadata: Arc<Metadata>,
    /// Top-level axes in creation order; argument axes are nested.
    pub axes: Vec<Axis>,
    pub report: AxisBuildReport,
}

impl AxisBuildOutput {
    /// Hand the axes and metadata to `sink` in one call.
    pub fn emit(&self, sink: &mut dyn AxisSink) -> LexAlignResult<()> {
        sink.accept_axes(&self.metadata, &self.axes)
    }

    /// Number of axes at any depth.
    pub fn total_axes(&self) -> usize {
        self.axes.iter().map(|a| a.iter_all().count()).sum()
    }
}

pub struct AxisEngine {
    builder: AxisBuilder,
    cancellation: CancellationToken,
    run_summary: bool,
}

impl AxisEngine {
    pub fn new(source: Arc<dyn Lexicon>, target: Arc<dyn Lexicon>, config: AlignmentConfig) -> Self {
        Self {
            builder: AxisBuilder::new(source, target, config),
            cancellation: CancellationToken::new(),
            run_summary: true,
        }
    }

    /// Engine for the `[alignment]` and `[observability]` sections of a
    /// loaded configuration.
    pub fn from_config(
        source: Arc<dyn Lexicon>,
        target: Arc<dyn Lexicon>,
        config: &LexAlignConfig,
    ) -> Self {
        Self::new(source, target, config.alignment.clone())
            .with_run_summary(config.observability.run_summary)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Log the end-of-run summary after each build (on by default).
    pub fn with_run_summary(mut self, enabled: bool) -> Self {
        self.run_summary = enabled;
        self
    }

    /// Validate `metadata`, then build axes from `records`.
    ///
    /// Invalid metadata or configuration fails before the first record is
    /// pulled. I/O errors in the record stream and cancellation abort the run.
    pub fn run<I>(&self, metadata: &RunMetadataInput, records: I) -> LexAlignResult<AxisBuildOutput>
    where
        I: IntoIterator<Item = LexAlignResult<DecisionRecord>>,
    {
        let metadata = metadata.validate()?;
        self.build(metadata, records)
    }

    /// Build from a JSON-lines reader, recording its malformed-line count.
    pub fn run_reader<R: BufRead>(
        &self,
        metadata: Metadata,
        mut reader: DecisionReader<R>,
    ) -> LexAlignResult<AxisBuildOutput> {
        let mut output = self.build(metadata, reader.by_ref())?;
        output.report.malformed_records = reader.malformed_records();
        Ok(output)
    }

    /// Build axes for already validated metadata.
    pub fn build<I>(&self, metadata: Metadata, records: I) -> LexAlignResult<AxisBuildOutput>
    where
        I: IntoIterator<Item = LexAlignResult<DecisionRecord>>,
    {
        let config = self.builder.config();
        config.validate()?;

        let metadata = Arc::new(metadata);
        let _span = axis_build_span!(metadata.id, config.axis_kind).entered();
        let mut registry = AxisRegistry::new(Arc::clone(&metadata));
        let mut report = AxisBuildReport::default();

        for record in records {
            self.cancellation.check("axis-build")?;
            self.builder.apply_record(&record?, &mut registry, &mut report);
        }

        info!(
            run = %metadata.id,
            records = report.records,
            created = report.created_total(),
            duplicates = report.duplicates,
            not_aligned = report.not_aligned,
            unresolved = report.unresolved_sources + report.unresolved_targets,
            "axis build complete"
        );
        if self.run_summary {
            RunSummary::from_axis_build(&report).log();
        }
        Ok(AxisBuildOutput {
            metadata,
            axes: registry.into_axes(),
            report,
        })
    }
}
