//! Configuration loading from spantree.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for spantree.toml.
#[derive(Debug, Deserialize, Default)]
pub struct SpantreeConfig {
    /// Default traversal bounds applied when the CLI flags are absent.
    pub traversal: Option<TraversalDefaults>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Default bounds for the three resource caps and the result limit.
#[derive(Debug, Deserialize, Default)]
pub struct TraversalDefaults {
    /// Max edges sampled per vertex per round; absent = unbounded.
    pub degree: Option<u64>,
    /// Supernode threshold; absent or 0 disables skipping.
    pub skip_degree: Option<u64>,
    /// Total search-space ceiling; absent = unbounded.
    pub capacity: Option<u64>,
    /// Result-count cap for the to-all query; absent = unbounded.
    pub limit: Option<u64>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from spantree.toml if it exists.
pub fn load_config(root: &Path) -> Result<Option<SpantreeConfig>> {
    let path = root.join("spantree.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid spantree.toml")?;
    Ok(Some(cfg))
}
