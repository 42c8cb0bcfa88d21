use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;
use crate::models::{ItemKind, ReferenceKind};

/// Alignment axis builder configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Kind of the top-level axes of a run.
    pub axis_kind: ItemKind,
    /// Id-type tag of source and target references.
    pub reference_kind: ReferenceKind,
    /// Id-type tag of nested argument references.
    pub argument_reference_kind: ReferenceKind,
    /// Confidence of positive decisions that carry none.
    pub default_confidence: f64,
    /// Positive decisions below this confidence are discarded.
    pub min_confidence: f64,
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            axis_kind: defaults::DEFAULT_AXIS_KIND,
            reference_kind: defaults::DEFAULT_REFERENCE_KIND,
            argument_reference_kind: defaults::DEFAULT_ARGUMENT_REFERENCE_KIND,
            default_confidence: defaults::DEFAULT_CONFIDENCE,
            min_confidence: defaults::DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl AlignmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("alignment.default_confidence", self.default_confidence),
            ("alignment.min_confidence", self.min_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("{value} is outside [0, 1]"),
                });
            }
        }
        if self.axis_kind == ItemKind::Argument {
            return Err(ConfigError::InvalidValue {
                field: "alignment.axis_kind".to_string(),
                reason: "argument axes are only built under predicate axes".to_string(),
            });
        }
        if let Some(kind) = self.reference_kind.item_kind() {
            if kind != self.axis_kind {
                return Err(ConfigError::InvalidValue {
                    field: "alignment.reference_kind".to_string(),
                    reason: format!(
                        "'{}' resolves to {} items, not {}",
                        self.reference_kind, kind, self.axis_kind
                    ),
                });
            }
        }
        if !matches!(
            self.argument_reference_kind,
            ReferenceKind::Native | ReferenceKind::ArgumentById | ReferenceKind::ArgumentByRole
        ) {
            return Err(ConfigError::InvalidValue {
                field: "alignment.argument_reference_kind".to_string(),
                reason: format!("'{}' is not an argument reference", self.argument_reference_kind),
            });
        }
        Ok(())
    }
}
