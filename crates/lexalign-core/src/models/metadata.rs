//! Run metadata shared by every axis of one alignment run.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::METADATA_DATE_FORMAT;
use crate::errors::MetadataError;

/// Default version string when the run metadata omits one.
pub const DEFAULT_METADATA_VERSION: &str = "1.0";

/// Whether the decisions of a run were produced automatically or by annotators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionType {
    Automatic,
    Manual,
}

impl DecisionType {
    pub fn as_str(self) -> &'static str {
        match self {
            DecisionType::Automatic => "automatic",
            DecisionType::Manual => "manual",
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecisionType {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automatic" => Ok(DecisionType::Automatic),
            "manual" => Ok(DecisionType::Manual),
            "" => Err(MetadataError::MissingDecisionType),
            _ => Err(MetadataError::UnknownDecisionType {
                value: s.to_string(),
            }),
        }
    }
}

/// Validated run metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    pub creation_date: NaiveDate,
    pub creation_tool: String,
    pub creation_process: String,
    pub version: String,
    pub automatic: bool,
}

/// Run metadata as read from a metadata file, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunMetadataInput {
    pub id: Option<String>,
    pub version: Option<String>,
    pub tool: Option<String>,
    /// Creation date, `yyyy-MM-dd`.
    pub date: Option<String>,
    /// `automatic` or `manual`.
    pub decision_type: Option<String>,
    /// Free-text process description. Defaults to the decision type.
    pub process: Option<String>,
}

impl RunMetadataInput {
    /// Validate into [`Metadata`]. Any error here aborts the run.
    pub fn validate(&self) -> Result<Metadata, MetadataError> {
        let id = non_empty(self.id.as_deref()).ok_or_else(|| MetadataError::MissingField {
            field: "id".to_string(),
        })?;

        let raw_date = non_empty(self.date.as_deref()).ok_or_else(|| MetadataError::MissingField {
            field: "date".to_string(),
        })?;
        let creation_date = NaiveDate::parse_from_str(raw_date, METADATA_DATE_FORMAT).map_err(
            |_| MetadataError::InvalidDate {
                value: raw_date.to_string(),
            },
        )?;

        let decision_type: DecisionType = non_empty(self.decision_type.as_deref())
            .ok_or(MetadataError::MissingDecisionType)?
            .parse()?;

        let creation_process = non_empty(self.process.as_deref())
            .unwrap_or(decision_type.as_str())
            .to_string();

        Ok(Metadata {
            id: id.to_string(),
            creation_date,
            creation_tool: self.tool.as_deref().unwrap_or_default().trim().to_string(),
            creation_process,
            version: non_empty(self.version.as_deref())
                .unwrap_or(DEFAULT_METADATA_VERSION)
                .to_string(),
            automatic: decision_type == DecisionType::Automatic,
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
