use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::blacklist::BlacklistMatch;
use crate::classifier::DEFAULT_REPUTATION_THRESHOLD;

/// Global configuration loaded from `~/.config/linkscreen/config.toml`.
///
/// Missing keys fall back to their defaults, so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Reputation scores at or below this are classified unsafe.
    pub reputation_threshold: f64,
    /// How hosts are compared against blacklist entries: "exact" or "suffix".
    pub blacklist_match: BlacklistMatch,
    /// Hosts blocked in addition to the built-in list.
    pub extra_blacklist: Vec<String>,
    /// Maximum concurrent reputation lookups per batch.
    pub max_concurrent_lookups: usize,
    /// Per-lookup timeout in milliseconds; a lookup that exceeds it is unsafe.
    pub lookup_timeout_ms: u64,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            reputation_threshold: DEFAULT_REPUTATION_THRESHOLD,
            blacklist_match: BlacklistMatch::Exact,
            extra_blacklist: Vec::new(),
            max_concurrent_lookups: 16,
            lookup_timeout_ms: 2000,
        }
    }
}

impl ScreenConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkscreen")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScreenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScreenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. The file must exist.
pub fn load_from(path: &Path) -> Result<ScreenConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: ScreenConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
