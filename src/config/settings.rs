//! Settings configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server that hosts `/api/developer-tools`
    /// Default: http://127.0.0.1:3000
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for the tool list request, in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long copy notifications stay on screen, in seconds
    #[serde(default = "default_toast_duration_secs")]
    pub toast_duration_secs: u64,
}

fn default_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_toast_duration_secs() -> u64 {
    4
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
            toast_duration_secs: default_toast_duration_secs(),
        }
    }
}
