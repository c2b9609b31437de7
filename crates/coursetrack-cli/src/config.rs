//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level coursetrack configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Transcript order used when none is given.
    #[serde(default = "default_order")]
    pub default_order: String,
    /// Output format for `coursetrack run`.
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_order() -> String {
    "asc".to_string()
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_order: default_order(),
            default_format: default_format(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `coursetrack.toml` in the current directory
/// 2. `~/.config/coursetrack/config.toml`
///
/// `COURSETRACK_ORDER` overrides `default_order`.
pub fn load_config_from(path: Option<&Path>) -> Result<TrackerConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("coursetrack.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TrackerConfig::default(),
    };

    if let Ok(order) = std::env::var("COURSETRACK_ORDER") {
        config.default_order = order;
    }

    Ok(config)
}

fn parse_config(content: &str) -> Result<TrackerConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("coursetrack"))
}
