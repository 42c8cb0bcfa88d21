use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::ReferenceKind;

/// Cluster builder and cleaner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// How the left column of the alignment file resolves to senses.
    pub left_reference: ReferenceKind,
    /// How cluster members resolve to lemma/POS in the cleaning passes.
    pub member_reference: ReferenceKind,
    /// Joiner for multi-word lemmas in lexeme keys.
    pub word_joiner: String,
    /// Pseudo-POS for members whose POS cannot be resolved.
    pub unknown_pos_label: String,
    /// Position of the member whose lexeme decides the allow-list filter.
    pub anchor_index: usize,
    /// Run the lemma-consistency split.
    pub lemma_split: bool,
    /// Also enforce POS purity before the transitive merge.
    pub pos_purity_before_merge: bool,
    /// Query the lexicon for independent clusters on the rayon pool.
    pub parallel_lookups: bool,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            left_reference: defaults::DEFAULT_LEFT_REFERENCE,
            member_reference: defaults::DEFAULT_MEMBER_REFERENCE,
            word_joiner: defaults::DEFAULT_WORD_JOINER.to_string(),
            unknown_pos_label: defaults::DEFAULT_UNKNOWN_POS.to_string(),
            anchor_index: defaults::DEFAULT_ANCHOR_INDEX,
            lemma_split: defaults::DEFAULT_LEMMA_SPLIT,
            pos_purity_before_merge: defaults::DEFAULT_POS_PURITY_BEFORE_MERGE,
            parallel_lookups: defaults::DEFAULT_PARALLEL_LOOKUPS,
        }
    }
}

impl ClusteringConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_joiner.is_empty() || self.word_joiner.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidValue {
                field: "clustering.word_joiner".to_string(),
                reason: "must be non-empty and contain no whitespace".to_string(),
            });
        }
        if self.unknown_pos_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "clustering.unknown_pos_label".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !matches!(
            self.left_reference,
            ReferenceKind::Native | ReferenceKind::Synset | ReferenceKind::Sense
        ) {
            return Err(ConfigError::InvalidValue {
                field: "clustering.left_reference".to_string(),
                reason: format!("'{}' does not resolve to senses", self.left_reference),
            });
        }
        Ok(())
    }
}
