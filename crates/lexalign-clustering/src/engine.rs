//! ClusteringEngine: builds raw clusters and drives the cleaning passes.

use std::sync::Arc;

use lexalign_core::config::{ClusteringConfig, LexAlignConfig};
use lexalign_core::errors::{ConfigError, LexAlignResult};
use lexalign_core::models::{AlignmentPair, Cluster, ClusteringReport};
use lexalign_core::traits::{ClusterSink, Lexicon};
use lexalign_core::CancellationToken;
use lexalign_formats::{AlignmentInput, AllowList, ClusterInput};
use lexalign_observability::{clustering_span, RunSummary};
use tracing::info;

use crate::pipeline::{self, phase1_expansion, phase2_grouping, CleaningPass, PassContext};

/// Final clusters of one run, with the header lines to pass through.
#[derive(Debug, Clone, Default)]
pub struct ClusteringOutput {
    pub header: Vec<String>,
    pub clusters: Vec<Cluster>,
    pub report: ClusteringReport,
}

impl ClusteringOutput {
    /// Hand header and clusters to `sink`.
    pub fn emit(&self, sink: &mut dyn ClusterSink) -> LexAlignResult<()> {
        sink.accept_clusters(&self.header, &self.clusters)
    }
}

/// Orchestrates the cluster builder and cleaner over one lexicon.
///
/// Holds no per-run state: every run owns its own [`ClusteringReport`].
pub struct ClusteringEngine {
    lexicon: Arc<dyn Lexicon>,
    config: ClusteringConfig,
    allow_list: Option<Arc<AllowList>>,
    cancellation: CancellationToken,
    run_summary: bool,
}

impl ClusteringEngine {
    pub fn new(lexicon: Arc<dyn Lexicon>, config: ClusteringConfig) -> Self {
        Self {
            lexicon,
            config,
            allow_list: None,
            cancellation: CancellationToken::new(),
            run_summary: true,
        }
    }

    /// Engine for the `[clustering]` and `[observability]` sections of a
    /// loaded configuration.
    pub fn from_config(lexicon: Arc<dyn Lexicon>, config: &LexAlignConfig) -> Self {
        Self::new(lexicon, config.clustering.clone())
            .with_run_summary(config.observability.run_summary)
    }

    /// Enable the lexeme filter as the last cleaning pass.
    ///
    /// The list must have been read with `clustering.word_joiner`.
    pub fn with_allow_list(mut self, allow_list: Arc<AllowList>) -> Self {
        self.allow_list = Some(allow_list);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Log the end-of-run summary after each full run (on by default).
    pub fn with_run_summary(mut self, enabled: bool) -> Self {
        self.run_summary = enabled;
        self
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Phases 1 and 2: expand alignment pairs to senses and group by target.
    pub fn build_raw_clusters(
        &self,
        pairs: &[AlignmentPair],
        report: &mut ClusteringReport,
    ) -> LexAlignResult<Vec<Cluster>> {
        self.validate()?;
        self.cancellation.check("expansion")?;
        let expanded =
            phase1_expansion::expand_pairs(pairs, self.lexicon.as_ref(), &self.config, report);
        info!(
            pairs = pairs.len(),
            expanded = report.expanded_pairs,
            undecided = report.undecided_pairs,
            unresolved = report.unresolved_sources,
            "alignment pairs expanded"
        );

        self.cancellation.check("grouping")?;
        let clusters = phase2_grouping::group_by_target(&expanded);
        info!(clusters = clusters.len(), "raw clusters grouped by target");
        Ok(clusters)
    }

    /// Run every configured cleaning pass in order.
    pub fn clean(
        &self,
        clusters: Vec<Cluster>,
        report: &mut ClusteringReport,
    ) -> LexAlignResult<Vec<Cluster>> {
        self.validate()?;
        let passes = pipeline::default_passes(&self.config, self.allow_list.clone());
        let mut clusters = clusters;
        for pass in &passes {
            self.cancellation.check(pass.name())?;
            clusters = self.run_pass(pass.as_ref(), clusters, report);
        }
        report.final_clusters = clusters.len();
        Ok(clusters)
    }

    /// Run a single pass, e.g. to re-apply one stage to an existing cluster file.
    pub fn run_pass(
        &self,
        pass: &dyn CleaningPass,
        clusters: Vec<Cluster>,
        report: &mut ClusteringReport,
    ) -> Vec<Cluster> {
        let mut ctx = PassContext {
            lexicon: self.lexicon.as_ref(),
            config: &self.config,
            report,
        };
        pipeline::run_pass(pass, clusters, &mut ctx)
    }

    /// Full run from a parsed alignment file.
    pub fn run_alignment(&self, input: AlignmentInput) -> LexAlignResult<ClusteringOutput> {
        let _span = clustering_span!(input.pairs.len()).entered();
        let mut report = ClusteringReport {
            lines_read: input.lines_read,
            malformed_lines: input.malformed_lines,
            ..Default::default()
        };
        let raw = self.build_raw_clusters(&input.pairs, &mut report)?;
        let clusters = self.clean(raw, &mut report)?;
        info!(final_clusters = clusters.len(), "clustering run complete");
        self.log_summary(&report);
        Ok(ClusteringOutput {
            header: input.header,
            clusters,
            report,
        })
    }

    /// Clean clusters read from a cluster file.
    pub fn run_clusters(&self, input: ClusterInput) -> LexAlignResult<ClusteringOutput> {
        let _span = clustering_span!(input.clusters.len()).entered();
        let mut report = ClusteringReport {
            lines_read: input.lines_read,
            malformed_lines: input.malformed_lines,
            ..Default::default()
        };
        let clusters = self.clean(input.clusters, &mut report)?;
        info!(final_clusters = clusters.len(), "cluster cleaning complete");
        self.log_summary(&report);
        Ok(ClusteringOutput {
            header: input.header,
            clusters,
            report,
        })
    }

    fn validate(&self) -> LexAlignResult<()> {
        self.config.validate()?;
        if let Some(list) = &self.allow_list {
            if list.word_joiner() != self.config.word_joiner {
                return Err(ConfigError::InvalidValue {
                    field: "clustering.word_joiner".to_string(),
                    reason: format!(
                        "allow-list keys are joined with '{}', expected '{}'",
                        list.word_joiner(),
                        self.config.word_joiner
                    ),
                }
                .into());
            }
        }
        Ok(())
    }

    fn log_summary(&self, report: &ClusteringReport) {
        if self.run_summary {
            RunSummary::from_clustering(report).log();
        }
    }
}
