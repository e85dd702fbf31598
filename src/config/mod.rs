//! Configuration loading and management

mod io;
mod settings;

pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}

impl Config {
    /// Create a config with sensible defaults
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Apply a `--base-url` style override, ignoring blank values
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.settings.base_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.settings.base_url, "http://127.0.0.1:3000");
        assert_eq!(config.settings.request_timeout_secs, 10);
        assert_eq!(config.settings.toast_duration_secs, 4);
    }

    #[test]
    fn test_partial_settings_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[settings]
base_url = "http://localhost:8080"
"#,
        )
        .unwrap();
        assert_eq!(config.settings.base_url, "http://localhost:8080");
        assert_eq!(config.settings.request_timeout_secs, 10);
    }

    #[test]
    fn test_base_url_override() {
        let config = Config::with_defaults().with_base_url_override(Some("http://x:1".to_string()));
        assert_eq!(config.settings.base_url, "http://x:1");

        let config = Config::with_defaults().with_base_url_override(Some("  ".to_string()));
        assert_eq!(config.settings.base_url, "http://127.0.0.1:3000");

        let config = Config::with_defaults().with_base_url_override(None);
        assert_eq!(config.settings.base_url, "http://127.0.0.1:3000");
    }
}
