use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::assemble::DEFAULT_SCHEME;
use crate::template::DEFAULT_EXCLUDED_NAMES;

/// Feed request parameters (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Optional User-Agent override.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/feedform/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedformConfig {
    /// Scheme of assembled feed identifiers (`rsshub://...`).
    pub scheme: String,
    /// Base URL of the instance that serves assembled routes over HTTP.
    pub instance_url: String,
    /// Template placeholders never offered as form fields.
    pub excluded_names: Vec<String>,
    /// Optional fetch settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
}

impl Default for FeedformConfig {
    fn default() -> Self {
        Self {
            scheme: DEFAULT_SCHEME.to_string(),
            instance_url: "https://rsshub.app".to_string(),
            excluded_names: DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            fetch: None,
        }
    }
}

impl FeedformConfig {
    pub fn fetch_or_default(&self) -> FetchConfig {
        self.fetch.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("feedform")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FeedformConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FeedformConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FeedformConfig = toml::from_str(&data)?;
    Ok(cfg)
}
