//! Phase 1: Expansion. Resolve each left reference to local senses and
//! emit one (sense, target) pair per resolved member.

use std::collections::HashSet;

use lexalign_core::config::ClusteringConfig;
use lexalign_core::models::{AlignmentPair, ClusteringReport, ItemKind, ReferenceKind, SenseId};
use lexalign_core::traits::Lexicon;
use tracing::debug;

/// A sense-level pair: (local sense, opaque target value).
pub type SensePair = (SenseId, String);

/// Local senses behind a left-hand reference.
pub fn resolve_senses(
    lexicon: &dyn Lexicon,
    reference_kind: ReferenceKind,
    reference: &str,
) -> Vec<SenseId> {
    match reference_kind {
        ReferenceKind::Native => lexicon.senses_of_synset(reference),
        ReferenceKind::Synset => lexicon
            .resolve(ItemKind::Synset, ReferenceKind::Synset, reference)
            .iter()
            .flat_map(|synset| lexicon.senses_of_synset(&synset.id))
            .collect(),
        ReferenceKind::Sense => lexicon
            .resolve(ItemKind::Sense, ReferenceKind::Sense, reference)
            .into_iter()
            .map(|sense| sense.id)
            .collect(),
        // Rejected by config validation.
        _ => Vec::new(),
    }
}

/// Expand decided pairs to sense level. Repeated sense pairs are kept once.
pub fn expand_pairs(
    pairs: &[AlignmentPair],
    lexicon: &dyn Lexicon,
    config: &ClusteringConfig,
    report: &mut ClusteringReport,
) -> Vec<SensePair> {
    let mut seen: HashSet<SensePair> = HashSet::new();
    let mut expanded = Vec::new();

    for pair in pairs {
        if !pair.decided {
            report.undecided_pairs += 1;
            continue;
        }
        let senses = resolve_senses(lexicon, config.left_reference, &pair.left);
        if senses.is_empty() {
            report.unresolved_sources += 1;
            debug!(reference = %pair.left, "no senses resolved, pair skipped");
            continue;
        }
        for sense in senses {
            let sense_pair = (sense, pair.right.clone());
            if seen.insert(sense_pair.clone()) {
                expanded.push(sense_pair);
            }
        }
    }

    report.expanded_pairs = expanded.len();
    expanded
}
