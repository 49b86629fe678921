//! Convert configuration documents into core collaborator types.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use ncdiag_obs::NameMap;

use crate::config::NcdiagConfig;

/// Built-in short-to-long name table for GSI conventional diagnostics.
const DEFAULT_NAMES_YAML: &str = include_str!("short_to_long_names.yaml");

/// Build the name map.
///
/// An explicit `--names` path wins, then the config's names file, then
/// the built-in table.
pub fn build_name_map(cli_names: Option<&Path>, config: &NcdiagConfig) -> Result<NameMap> {
    let path = cli_names.or(config.names.file.as_deref());
    match path {
        Some(p) => {
            let yaml = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read name table: {}", p.display()))?;
            parse_name_map(&yaml)
        }
        None => parse_name_map(DEFAULT_NAMES_YAML),
    }
}

/// Parse a YAML short-to-long name mapping document.
pub fn parse_name_map(yaml: &str) -> Result<NameMap> {
    let map: BTreeMap<String, String> =
        serde_yaml::from_str(yaml).context("failed to parse name table YAML")?;
    Ok(NameMap::new(map))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_parses() {
        let names = parse_name_map(DEFAULT_NAMES_YAML).unwrap();
        assert_eq!(names.resolve("omf"), "Obs_Minus_Forecast");
        assert_eq!(names.resolve("oma"), "Obs_Minus_Analysis");
        assert_eq!(names.resolve("used"), "Analysis_Use_Flag");
    }

    #[test]
    fn custom_document() {
        let names = parse_name_map("omf: OmF_Adjusted\n").unwrap();
        assert_eq!(names.resolve("omf"), "OmF_Adjusted");
        // Everything else falls back to identity.
        assert_eq!(names.resolve("used"), "used");
    }

    #[test]
    fn malformed_document_rejected() {
        assert!(parse_name_map("omf: [not, a, string").is_err());
    }

    #[test]
    fn default_table_used_without_paths() {
        let names = build_name_map(None, &NcdiagConfig::default()).unwrap();
        assert!(!names.is_empty());
        assert_eq!(names.resolve("press"), "Pressure");
    }
}
