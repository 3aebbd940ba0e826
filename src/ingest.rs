//! Ingestion of analysis-result JSON into a block list.
//!
//! The analysis service delivers one in-memory batch per document, either
//! as an envelope object with a `blocks` array or as a bare array. Any
//! pagination is the caller's responsibility to flatten before ingestion.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::Block;

/// The analysis-service response envelope.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisEnvelope {
    #[serde(default, alias = "Blocks")]
    blocks: Option<Vec<Block>>,
}

/// Parse an analysis result from a JSON string.
///
/// Accepts either `{ "blocks": [...] }` or a bare top-level array. An
/// envelope whose block list is null or absent is the one malformed input
/// that surfaces as an error.
pub fn blocks_from_json(json: &str) -> Result<Vec<Block>> {
    let trimmed = json.trim_start();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    let envelope: AnalysisEnvelope = serde_json::from_str(json)?;
    envelope
        .blocks
        .ok_or_else(|| Error::InvalidInput("analysis result has no block list".to_string()))
}

/// Parse an analysis result from JSON bytes.
pub fn blocks_from_json_bytes(bytes: &[u8]) -> Result<Vec<Block>> {
    let json = std::str::from_utf8(bytes)
        .map_err(|e| Error::InvalidInput(format!("analysis result is not UTF-8: {}", e)))?;
    blocks_from_json(json)
}

/// Parse an analysis result from a JSON file.
pub fn blocks_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Block>> {
    let json = fs::read_to_string(path)?;
    blocks_from_json(&json)
}
