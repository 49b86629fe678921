//! JSON output for extracted values.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Extraction result written as JSON for downstream consumers.
#[derive(Debug, Serialize)]
pub struct ValuesOutput {
    /// The requested variable name, as given.
    pub variable: String,
    /// Mask expression applied, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    /// Number of values retrieved.
    pub n_values: usize,
    /// The values themselves.
    pub values: Vec<f64>,
}

impl ValuesOutput {
    /// Assemble the output record.
    pub fn new(variable: &str, mask: Option<&str>, values: Vec<f64>) -> Self {
        Self {
            variable: variable.to_string(),
            mask: mask.map(str::to_string),
            n_values: values.len(),
            values,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize output")
    }
}

/// Write `json` to `path`, or to stdout when no path is given.
pub fn write_json(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => std::fs::write(p, json)
            .with_context(|| format!("failed to write output: {}", p.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
