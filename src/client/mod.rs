//! HTTP client for the developer tools endpoint.
//!
//! Fetches `GET /api/developer-tools` and decodes the tool list.


use std::time::Duration;

use tracing::debug;

use crate::config::Settings;
use crate::domain::DeveloperToolsResponse;

/// Path of the tool list endpoint, relative to the base URL
pub const DEVELOPER_TOOLS_PATH: &str = "/api/developer-tools";

/// Error type for fetching the tool list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch tools (HTTP {0})")]
    Status(u16),

    #[error("Failed to fetch tools: {0}")]
    Transport(String),

    #[error("Failed to parse tools response: {0}")]
    Decode(String),
}

/// Anything that can produce the tool list.
///
/// The loader only depends on this, so tests can hand it canned responses.
pub trait ToolSource: Send + Sync {
    fn fetch_tools(&self) -> Result<DeveloperToolsResponse, FetchError>;
}

/// Client for the developer tools endpoint
#[derive(Clone)]
pub struct DeveloperToolsClient {
    base_url: String,
    client: ureq::Agent,
}

impl DeveloperToolsClient {
    /// Create a new client with a custom URL and request timeout
    pub fn with_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(5))
            .timeout(timeout)
            .build();

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client for the configured server
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_url(settings.base_url.clone(), settings.request_timeout())
    }

    /// Full URL of the tool list endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DEVELOPER_TOOLS_PATH)
    }
}

impl ToolSource for DeveloperToolsClient {
    fn fetch_tools(&self) -> Result<DeveloperToolsResponse, FetchError> {
        let url = self.endpoint();
        debug!("[devtools] GET {}", url);

        let response = match self.client.get(&url).set("Accept", "application/json").call() {
            Ok(r) => r,
            Err(ureq::Error::Status(code, _)) => return Err(FetchError::Status(code)),
            Err(ureq::Error::Transport(t)) => return Err(FetchError::Transport(t.to_string())),
        };

        response
            .into_json::<DeveloperToolsResponse>()
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}
