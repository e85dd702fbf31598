//! View model for the developer tools panel
//!
//! Both the egui panel and the text renderer draw from [`PanelView`], so
//! what is shown for a tool is decided in one place.

use std::fmt::Write;

use crate::domain::{DeveloperTool, DeveloperToolsResponse};

use super::loader::PanelState;

pub const PANEL_TITLE: &str = "Developer Tool connections";
pub const PANEL_INTRO: &str = "Add API keys in .env.local to enable tools like Exa and GitHub. \
These keys follow specific formats and are only used in development mode.";
pub const LOADING_TEXT: &str = "Loading connections...";
pub const KEY_DETECTED_LABEL: &str = "Key detected:";
pub const REQUIRED_KEYS_LABEL: &str = "Required keys:";
pub const COPY_LABEL: &str = "Copy to clipboard";
pub const RETRY_LABEL: &str = "Retry";

/// Connection badge on a tool card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionBadge {
    Connected,
    NotConnected,
}

impl ConnectionBadge {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionBadge::Connected => "Connected",
            ConnectionBadge::NotConnected => "Not connected",
        }
    }
}

/// Everything a single tool card displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub badge: ConnectionBadge,
    pub description: &'a str,
    pub masked_key: Option<&'a str>,
    /// Shown verbatim and passed verbatim to the clipboard
    pub sample_env: &'a str,
}

impl<'a> From<&'a DeveloperTool> for ToolCard<'a> {
    fn from(tool: &'a DeveloperTool) -> Self {
        Self {
            id: &tool.id,
            name: &tool.name,
            badge: if tool.connected {
                ConnectionBadge::Connected
            } else {
                ConnectionBadge::NotConnected
            },
            description: &tool.description,
            masked_key: tool.visible_masked_key(),
            sample_env: &tool.sample_env,
        }
    }
}

/// What the panel shows for a given state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView<'a> {
    Loading,
    List(Vec<ToolCard<'a>>),
    Error(&'a str),
}

impl<'a> PanelView<'a> {
    pub fn from_state(state: &'a PanelState) -> Self {
        match state {
            PanelState::Loading => PanelView::Loading,
            PanelState::Loaded(response) => PanelView::List(cards(response)),
            PanelState::Failed(message) => PanelView::Error(message),
        }
    }
}

/// One card per tool, in response order
pub fn cards(response: &DeveloperToolsResponse) -> Vec<ToolCard<'_>> {
    response.tools.iter().map(ToolCard::from).collect()
}

/// Render the panel as plain text (used by `devtools-panel list`)
pub fn render_text(view: &PanelView<'_>) -> String {
    let mut out = String::new();
    match view {
        PanelView::Loading => {
            let _ = writeln!(out, "{}", LOADING_TEXT);
        }
        PanelView::Error(message) => {
            let _ = writeln!(out, "{}", PANEL_TITLE);
            let _ = writeln!(out);
            let _ = writeln!(out, "Error: {}", message);
        }
        PanelView::List(cards) => {
            let _ = writeln!(out, "{}", PANEL_TITLE);
            let _ = writeln!(out, "{}", PANEL_INTRO);
            for card in cards {
                let _ = writeln!(out);
                render_card_text(&mut out, card);
            }
        }
    }
    out
}

fn render_card_text(out: &mut String, card: &ToolCard<'_>) {
    let _ = writeln!(out, "## {} [{}]", card.name, card.badge.label());
    let _ = writeln!(out, "{}", card.description);
    if let Some(key) = card.masked_key {
        let _ = writeln!(out, "{}", KEY_DETECTED_LABEL);
        let _ = writeln!(out, "    {}", key);
    }
    let _ = writeln!(out, "{}", REQUIRED_KEYS_LABEL);
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "{}", card.sample_env);
    let _ = writeln!(out, "```");
    let _ = writeln!(out, "[{}]", COPY_LABEL);
}
