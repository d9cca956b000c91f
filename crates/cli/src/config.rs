// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `strops.toml` loading.
//!
//! ```toml
//! version = 1
//!
//! [output]
//! format = "json"
//!
//! [palindrome]
//! fold_case = true
//! ```
//!
//! Every key is optional. Unknown keys are logged and ignored so that newer
//! config files still load.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::cli::OutputFormat;

/// Config file name searched for by [`crate::discovery::find_config`].
pub const CONFIG_FILE_NAME: &str = "strops.toml";

/// The only config schema version understood.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported config version {0} (expected {CURRENT_VERSION})")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: u32,
    pub output: OutputConfig,
    pub palindrome: PalindromeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CURRENT_VERSION,
            output: OutputConfig::default(),
            palindrome: PalindromeConfig::default(),
        }
    }
}

/// `[output]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default for `--output` on subcommands.
    pub format: OutputFormat,
}

/// `[palindrome]` section.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PalindromeConfig {
    /// Default for `--fold-case`.
    pub fold_case: bool,
}

const KNOWN_SECTIONS: &[(&str, &[&str])] = &[
    ("output", &["format"]),
    ("palindrome", &["fold_case"]),
];

/// Parse config text, returning warnings for keys that were ignored.
pub fn parse_with_warnings(content: &str) -> anyhow::Result<(Config, Vec<String>)> {
    let table: toml::Table = toml::from_str(content)?;
    let warnings = unknown_keys(&table);

    let config: Config = toml::from_str(content)?;
    if config.version != CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion(config.version).into());
    }
    Ok((config, warnings))
}

/// Load a config file, logging any ignored keys.
pub fn load_with_warnings(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let (config, warnings) = parse_with_warnings(&content)?;
    for warning in warnings {
        tracing::warn!("{}: {}", path.display(), warning);
    }
    Ok(config)
}

fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut warnings = Vec::new();
    for (key, value) in table {
        if key == "version" {
            continue;
        }
        let Some((_, fields)) = KNOWN_SECTIONS.iter().find(|(name, _)| name == key) else {
            warnings.push(format!("unknown key `{key}`"));
            continue;
        };
        if let Some(section) = value.as_table() {
            for field in section.keys() {
                if !fields.contains(&field.as_str()) {
                    warnings.push(format!("unknown key `{key}.{field}`"));
                }
            }
        }
    }
    warnings
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
