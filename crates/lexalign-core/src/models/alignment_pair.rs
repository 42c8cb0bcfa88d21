use serde::{Deserialize, Serialize};

use super::confidence::Confidence;

/// One raw correspondence line of an alignment file.
///
/// `left` is a synset id or an external reference, `right` is the opaque
/// target value pairs are grouped by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentPair {
    pub left: String,
    pub right: String,
    pub confidence: Confidence,
    pub decided: bool,
}

impl AlignmentPair {
    /// A decided pair with full confidence.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            confidence: Confidence::CERTAIN,
            decided: true,
        }
    }
}
