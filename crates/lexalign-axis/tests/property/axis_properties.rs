//! Property tests for lexalign-axis: dedup and confidence invariants.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;

use lexalign_axis::AxisEngine;
use lexalign_core::config::AlignmentConfig;
use lexalign_core::errors::LexAlignResult;
use lexalign_core::models::{Decision, DecisionRecord, RunMetadataInput, TargetDecision};
use lexalign_core::InMemoryLexicon;

const SENSES: usize = 6;

fn engine() -> AxisEngine {
    let mut src = InMemoryLexicon::new("src");
    let mut tgt = InMemoryLexicon::new("tgt");
    for i in 0..SENSES {
        src.add_sense(&format!("s{i}"), "w", Some("n"), None);
        tgt.add_sense(&format!("t{i}"), "w", Some("n"), None);
    }
    AxisEngine::new(Arc::new(src), Arc::new(tgt), AlignmentConfig::default())
}

fn metadata() -> RunMetadataInput {
    RunMetadataInput {
        id: Some("prop".into()),
        date: Some("2026-01-01".into()),
        decision_type: Some("automatic".into()),
        ..Default::default()
    }
}

/// Records over a slightly larger id space than the lexicons hold, so some
/// references stay unresolved.
fn records_strategy() -> impl Strategy<Value = Vec<DecisionRecord>> {
    let target = (0..SENSES + 2, any::<bool>(), prop::option::of(0.0f64..1.0)).prop_map(
        |(t, value, confidence)| TargetDecision {
            target: format!("t{t}"),
            decision: Decision { value, confidence },
            arguments: Vec::new(),
        },
    );
    let record = (0..SENSES + 2, prop::collection::vec(target, 0..4)).prop_map(|(s, targets)| {
        DecisionRecord {
            source: format!("s{s}"),
            targets,
        }
    });
    prop::collection::vec(record, 0..20)
}

fn wrap(records: Vec<DecisionRecord>) -> Vec<LexAlignResult<DecisionRecord>> {
    records.into_iter().map(Ok).collect()
}

proptest! {
    #[test]
    fn prop_no_two_axes_share_a_key(records in records_strategy()) {
        let output = engine().run(&metadata(), wrap(records)).unwrap();
        let mut keys = HashSet::new();
        for axis in &output.axes {
            prop_assert!(keys.insert(axis.key()), "duplicate key {:?}", axis.key());
        }
    }

    #[test]
    fn prop_every_positive_decision_is_accounted_for(records in records_strategy()) {
        let output = engine().run(&metadata(), wrap(records)).unwrap();
        let r = &output.report;
        prop_assert_eq!(
            r.decisions,
            r.not_aligned + r.below_threshold + r.unresolved_sources + r.unresolved_targets
                + r.duplicates + r.created_total()
        );
    }

    #[test]
    fn prop_missing_confidence_means_certain(records in records_strategy()) {
        let first_seen: Vec<Option<f64>> = {
            let mut seen = HashSet::new();
            records
                .iter()
                .flat_map(|r| r.targets.iter().map(move |t| (r.source.clone(), t)))
                .filter(|(_, t)| t.decision.value)
                .filter(|(s, t)| {
                    s[1..].parse::<usize>().unwrap() < SENSES
                        && t.target[1..].parse::<usize>().unwrap() < SENSES
                })
                .filter(|(s, t)| seen.insert((s.clone(), t.target.clone())))
                .map(|(_, t)| t.decision.confidence)
                .collect()
        };
        let output = engine().run(&metadata(), wrap(records)).unwrap();
        prop_assert_eq!(first_seen.len(), output.axes.len());
        for (expected, axis) in first_seen.iter().zip(&output.axes) {
            prop_assert_eq!(axis.confidence.value(), expected.unwrap_or(1.0));
        }
    }
}
