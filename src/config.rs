use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level ncdiag configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NcdiagConfig {
    /// Name-table settings.
    #[serde(default)]
    pub names: NamesConfig,

    /// Series settings.
    #[serde(default)]
    pub series: SeriesConfig,

    /// Mask settings.
    #[serde(default)]
    pub mask: MaskConfig,
}

/// Name-table settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamesConfig {
    /// Path to a YAML short-to-long name table. The built-in GSI table
    /// is used when absent.
    pub file: Option<PathBuf>,
}

/// Series settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesConfig {
    /// Default filename template.
    pub template: Option<String>,
    /// Hours between cycles when expanding an interval.
    #[serde(default = "default_hr_inc")]
    pub hr_inc: u32,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            template: None,
            hr_inc: default_hr_inc(),
        }
    }
}

fn default_hr_inc() -> u32 {
    ncdiag_obs::DEFAULT_HR_INC
}

/// Mask settings.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskConfig {
    /// Default mask expression, e.g. "(used==1)".
    pub expr: Option<String>,
}

/// Load the configuration from `path`, or the defaults when no path is
/// given.
pub fn load(path: Option<&Path>) -> Result<NcdiagConfig> {
    let Some(path) = path else {
        return Ok(NcdiagConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}
