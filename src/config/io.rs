//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use super::Config;

impl Config {
    /// Get the global config directory path (e.g. ~/.config/devtools-panel/)
    pub fn global_config_dir() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("devtools-panel")
    }

    /// Get the global config file path
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load the config at `path`, or the global config when `None`.
    ///
    /// A missing file yields defaults. A broken file is logged and also
    /// yields defaults so the panel can still open.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            return Self::with_defaults();
        }

        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(
                    "[devtools] Failed to load config ({}): {:#}. Falling back to defaults.",
                    path.display(),
                    e
                );
                Self::with_defaults()
            }
        }
    }
}
