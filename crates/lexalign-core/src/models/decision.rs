use serde::{Deserialize, Serialize};

/// A boolean judgement about whether two items correspond.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl Decision {
    pub fn aligned(confidence: Option<f64>) -> Self {
        Self {
            value: true,
            confidence,
        }
    }

    pub fn not_aligned() -> Self {
        Self {
            value: false,
            confidence: None,
        }
    }
}

/// One source reference with its judged targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub source: String,
    #[serde(default)]
    pub targets: Vec<TargetDecision>,
}

/// A judged target of a [`DecisionRecord`].
///
/// `arguments` only matters for predicate-level runs: it holds the
/// argument-level correspondences between the two predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetDecision {
    pub target: String,
    pub decision: Decision,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ArgumentRecord>,
}

/// Argument-level correspondences nested under a predicate pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentRecord {
    pub source: String,
    #[serde(default)]
    pub targets: Vec<ArgumentTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentTarget {
    pub target: String,
    pub decision: Decision,
}
