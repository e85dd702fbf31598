//! Developer tool entities as served by `GET /api/developer-tools`

use serde::{Deserialize, Serialize};

/// A single developer tool integration (search provider, API, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeveloperTool {
    /// Unique within a response
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    /// Environment variables the tool reads, in display order
    #[serde(default)]
    pub env_keys: Vec<String>,
    pub connected: bool,
    /// Partially redacted key, only expected when `connected` is true
    #[serde(default)]
    pub masked_key: Option<String>,
    /// Example `.env.local` block for this tool
    pub sample_env: String,
}

impl DeveloperTool {
    /// The masked key to display, if any.
    ///
    /// A disconnected tool never shows a key, even if the server sent one.
    /// An empty key counts as absent.
    pub fn visible_masked_key(&self) -> Option<&str> {
        if !self.connected {
            return None;
        }
        self.masked_key.as_deref().filter(|k| !k.is_empty())
    }
}

/// Response body of the developer tools endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeveloperToolsResponse {
    pub tools: Vec<DeveloperTool>,
}
