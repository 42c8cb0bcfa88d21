//! Decision-record processing: resolve → keep positives → cross product →
//! dedup → create, once for the top level and once per argument record.

use std::sync::Arc;

use lexalign_core::config::AlignmentConfig;
use lexalign_core::models::{
    ArgumentRecord, AxisBuildReport, Confidence, Decision, DecisionRecord, Item, ItemKind,
};
use lexalign_core::traits::Lexicon;
use tracing::debug;

use crate::registry::{AxisRegistry, Registration};

/// Applies decision records to an [`AxisRegistry`].
///
/// Every per-record problem is counted in the report and skipped; nothing
/// here fails.
pub struct AxisBuilder {
    source: Arc<dyn Lexicon>,
    target: Arc<dyn Lexicon>,
    config: AlignmentConfig,
}

impl AxisBuilder {
    pub fn new(source: Arc<dyn Lexicon>, target: Arc<dyn Lexicon>, config: AlignmentConfig) -> Self {
        Self {
            source,
            target,
            config,
        }
    }

    pub fn config(&self) -> &AlignmentConfig {
        &self.config
    }

    pub fn apply_record(
        &self,
        record: &DecisionRecord,
        registry: &mut AxisRegistry,
        report: &mut AxisBuildReport,
    ) {
        report.records += 1;
        let kind = self.config.axis_kind;
        let reference_kind = self.config.reference_kind;
        let sources = self.source.resolve(kind, reference_kind, &record.source);

        for judged in &record.targets {
            report.decisions += 1;
            let Some(confidence) = self.accept(&judged.decision, report) else {
                debug!(source = %record.source, target = %judged.target, "pair not aligned");
                continue;
            };
            if sources.is_empty() {
                report.unresolved_sources += 1;
                debug!(source = %record.source, lexicon = self.source.id(), "source unresolved");
                continue;
            }
            let targets = self.target.resolve(kind, reference_kind, &judged.target);
            if targets.is_empty() {
                report.unresolved_targets += 1;
                debug!(target = %judged.target, lexicon = self.target.id(), "target unresolved");
                continue;
            }

            for source in &sources {
                for target in &targets {
                    let registration = registry.ensure_axis(kind, source, target, confidence);
                    self.count(registration.is_created(), kind, source, target, report);

                    if kind == ItemKind::Predicate {
                        for argument in &judged.arguments {
                            self.apply_argument(
                                registration,
                                source,
                                target,
                                argument,
                                registry,
                                report,
                            );
                        }
                    } else if !judged.arguments.is_empty() {
                        debug!(kind = %kind, "argument records ignored outside predicate axes");
                    }
                }
            }
        }
    }

    /// Argument axes of one predicate pair, parented under the axis that owns
    /// the pair's key.
    fn apply_argument(
        &self,
        parent: Registration,
        source_predicate: &Item,
        target_predicate: &Item,
        argument: &ArgumentRecord,
        registry: &mut AxisRegistry,
        report: &mut AxisBuildReport,
    ) {
        let reference_kind = self.config.argument_reference_kind;
        let sources = self
            .source
            .resolve_argument(source_predicate, reference_kind, &argument.source);

        for judged in &argument.targets {
            report.decisions += 1;
            let Some(confidence) = self.accept(&judged.decision, report) else {
                debug!(
                    predicate = %source_predicate,
                    source = %argument.source,
                    target = %judged.target,
                    "argument pair not aligned"
                );
                continue;
            };
            if sources.is_empty() {
                report.unresolved_sources += 1;
                debug!(predicate = %source_predicate, argument = %argument.source, "source argument unresolved");
                continue;
            }
            let targets = self
                .target
                .resolve_argument(target_predicate, reference_kind, &judged.target);
            if targets.is_empty() {
                report.unresolved_targets += 1;
                debug!(predicate = %target_predicate, argument = %judged.target, "target argument unresolved");
                continue;
            }
            for source in &sources {
                for target in &targets {
                    let created = registry.ensure_child(parent.position(), source, target, confidence);
                    self.count(created, ItemKind::Argument, source, target, report);
                }
            }
        }
    }

    /// Confidence of a positive decision that clears the threshold.
    fn accept(&self, decision: &Decision, report: &mut AxisBuildReport) -> Option<Confidence> {
        if !decision.value {
            report.not_aligned += 1;
            return None;
        }
        let confidence =
            Confidence::new(decision.confidence.unwrap_or(self.config.default_confidence));
        if confidence.value() < self.config.min_confidence {
            report.below_threshold += 1;
            return None;
        }
        Some(confidence)
    }

    fn count(
        &self,
        created: bool,
        kind: ItemKind,
        source: &Item,
        target: &Item,
        report: &mut AxisBuildReport,
    ) {
        if created {
            *report.created.entry(kind).or_default() += 1;
        } else {
            report.duplicates += 1;
            debug!(kind = %kind, source = %source, target = %target, "duplicate axis skipped");
        }
    }
}
