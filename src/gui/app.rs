//! Main application state and eframe::App implementation

use std::sync::Arc;

use eframe::egui;

use super::theme::apply_theme;
use super::toast::ToastQueue;
use super::tools_panel::{render_tools_panel, PanelAction};
use crate::client::ToolSource;
use crate::config::Config;
use crate::panel::{copy_to_clipboard, ClipboardWriter, PanelView, RepaintHook, ToolsLoader};

/// Desktop app hosting the developer tools panel
pub struct DevToolsApp {
    loader: ToolsLoader,
    clipboard: Box<dyn ClipboardWriter>,
    toasts: ToastQueue,
}

impl DevToolsApp {
    /// Create the app and start fetching the tool list right away
    pub fn new(
        ctx: &egui::Context,
        config: &Config,
        source: Arc<dyn ToolSource>,
        clipboard: Box<dyn ClipboardWriter>,
    ) -> Self {
        let repaint_ctx = ctx.clone();
        let repaint: RepaintHook = Arc::new(move || repaint_ctx.request_repaint());

        Self {
            loader: ToolsLoader::start(source, Some(repaint)),
            clipboard,
            toasts: ToastQueue::new(config.settings.toast_duration()),
        }
    }

    fn handle_action(&mut self, action: PanelAction) {
        match action {
            PanelAction::None => {}
            PanelAction::Copy(text) => {
                copy_to_clipboard(&mut *self.clipboard, &mut self.toasts, &text);
            }
            PanelAction::Retry => self.loader.retry(),
        }
    }
}

impl eframe::App for DevToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        apply_theme(ctx);

        let state = self.loader.poll();
        let view = PanelView::from_state(state);
        let action = render_tools_panel(ctx, &view);

        self.toasts.render(ctx);
        self.handle_action(action);
    }
}
