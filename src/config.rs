use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level lichviet configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LichConfig {
    /// Display settings.
    #[serde(default)]
    pub display: DisplayToml,
}

/// Display settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    /// Output format: "text" or "json".
    #[serde(default = "default_format")]
    pub format: String,

    /// Card language: "vi" or "en". Only the surrounding presentation
    /// strings change; almanac labels stay canonical Vietnamese.
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            format: default_format(),
            language: default_language(),
        }
    }
}

fn default_format() -> String {
    "text".to_string()
}
fn default_language() -> String {
    "vi".to_string()
}

/// Loads the configuration file, falling back to defaults if it is absent.
pub fn load(path: &Path) -> Result<LichConfig> {
    if !path.exists() {
        return Ok(LichConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("failed to parse config: {}", path.display()))
}
