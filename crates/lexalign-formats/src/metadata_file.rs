//! Run metadata file, TOML or JSON (chosen by extension).

use std::path::Path;

use lexalign_core::errors::{ConfigError, LexAlignError, LexAlignResult};
use lexalign_core::models::{Metadata, RunMetadataInput};

/// Parse and validate run metadata given as TOML.
pub fn parse_run_metadata_toml(content: &str) -> LexAlignResult<Metadata> {
    let input: RunMetadataInput = toml::from_str(content).map_err(|e| ConfigError::ParseFailed {
        reason: format!("run metadata: {e}"),
    })?;
    Ok(input.validate()?)
}

/// Parse and validate run metadata given as JSON.
pub fn parse_run_metadata_json(content: &str) -> LexAlignResult<Metadata> {
    let input: RunMetadataInput =
        serde_json::from_str(content).map_err(|e| ConfigError::ParseFailed {
            reason: format!("run metadata: {e}"),
        })?;
    Ok(input.validate()?)
}

/// Read and validate a run metadata file. Any failure is fatal for the run.
pub fn read_run_metadata(path: &Path) -> LexAlignResult<Metadata> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| LexAlignError::io(path.display().to_string(), e))?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_run_metadata_json(&content),
        _ => parse_run_metadata_toml(&content),
    }
}
