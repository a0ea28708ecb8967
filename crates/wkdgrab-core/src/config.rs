use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/wkdgrab/config.toml`.
///
/// CLI flags override these values per run; the merged result is passed down
/// as an immutable value, never read from ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WkdgrabConfig {
    /// Connect timeout per candidate fetch, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per candidate fetch, in seconds.
    pub timeout_secs: u64,
    /// Key manager executable used for imports.
    pub gpg_path: String,
    /// Import retrieved keys without asking.
    #[serde(default)]
    pub autoimport: bool,
}

impl Default for WkdgrabConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            gpg_path: "gpg".to_string(),
            autoimport: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wkdgrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WkdgrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WkdgrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: WkdgrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}
