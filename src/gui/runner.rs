//! GUI runner - launches the developer tools panel window

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use tracing::info;

use super::app::DevToolsApp;
use crate::client::DeveloperToolsClient;
use crate::config::Config;
use crate::panel::SystemClipboard;

/// Run the developer tools panel
pub fn run_gui(config: Config) -> Result<()> {
    let client = DeveloperToolsClient::from_settings(&config.settings);

    info!("[devtools] Starting panel against {}", client.endpoint());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 720.0])
            .with_min_inner_size([420.0, 320.0])
            .with_decorations(true)
            .with_resizable(true),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        "Developer Tool connections",
        options,
        Box::new(move |cc| {
            Ok(Box::new(DevToolsApp::new(
                &cc.egui_ctx,
                &config,
                Arc::new(client),
                Box::new(SystemClipboard::new()),
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
