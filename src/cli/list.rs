//! List command implementation

use std::sync::Arc;

use anyhow::{bail, Context, Result};

use devtools_panel::client::DeveloperToolsClient;
use devtools_panel::config::Config;
use devtools_panel::panel::{render_text, PanelState, PanelView, ToolsLoader};

/// Fetch the tool list once and print the panel as text
pub fn list_command(config: &Config, json: bool) -> Result<()> {
    let client = DeveloperToolsClient::from_settings(&config.settings);
    let endpoint = client.endpoint();

    let state = ToolsLoader::start(Arc::new(client), None).wait();
    print!("{}", format_listing(&state, json)?);

    if let PanelState::Failed(message) = &state {
        bail!("{} ({})", message, endpoint);
    }
    Ok(())
}

/// Text printed for a settled state. Failures render the error view.
fn format_listing(state: &PanelState, json: bool) -> Result<String> {
    match state {
        PanelState::Loaded(response) if json => {
            let out = serde_json::to_string_pretty(response)
                .context("Failed to serialize tools response")?;
            Ok(format!("{}\n", out))
        }
        _ => Ok(render_text(&PanelView::from_state(state))),
    }
}
