//! Developer tools panel rendering

use eframe::egui::{self, Color32, RichText, ScrollArea};

use crate::gui::theme::{
    ACCENT_CYAN, ACCENT_GREEN, ACCENT_RED, BG_CODE, BG_PRIMARY, BG_SECONDARY, BORDER, TEXT_DIM,
    TEXT_MUTED, TEXT_PRIMARY,
};
use crate::panel::view::{
    COPY_LABEL, KEY_DETECTED_LABEL, LOADING_TEXT, PANEL_INTRO, PANEL_TITLE, REQUIRED_KEYS_LABEL,
    RETRY_LABEL,
};
use crate::panel::{ConnectionBadge, PanelView, ToolCard};

/// What the user clicked during this frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    None,
    Copy(String),
    Retry,
}

/// Render the developer tools view
pub fn render_tools_panel(ctx: &egui::Context, view: &PanelView<'_>) -> PanelAction {
    let mut action = PanelAction::None;

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
        .show(ctx, |ui| match view {
            PanelView::Loading => render_loading(ui),
            PanelView::Error(message) => {
                render_header(ui);
                action = render_error(ui, message);
            }
            PanelView::List(cards) => {
                render_header(ui);
                ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        action = render_card_list(ui, cards).0;
                    });
            }
        });

    action
}

fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(RichText::new(LOADING_TEXT).color(TEXT_MUTED));
    });
}

fn render_header(ui: &mut egui::Ui) {
    ui.label(
        RichText::new(PANEL_TITLE)
            .monospace()
            .size(18.0)
            .color(TEXT_PRIMARY),
    );
    ui.add_space(4.0);
    ui.label(RichText::new(PANEL_INTRO).small().color(TEXT_MUTED));
    ui.add_space(16.0);
}

fn render_error(ui: &mut egui::Ui, message: &str) -> PanelAction {
    let mut action = PanelAction::None;
    egui::Frame::NONE
        .fill(Color32::from_rgb(40, 20, 20))
        .corner_radius(4.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(ACCENT_RED));
            ui.add_space(8.0);
            if ui.button(RichText::new(RETRY_LABEL).color(TEXT_DIM)).clicked() {
                action = PanelAction::Retry;
            }
        });
    action
}

/// Render the cards in order. A copy click yields that card's sample env.
/// Also returns the copy button rects, one per card.
fn render_card_list(ui: &mut egui::Ui, cards: &[ToolCard<'_>]) -> (PanelAction, Vec<egui::Rect>) {
    let mut action = PanelAction::None;
    let mut buttons = Vec::with_capacity(cards.len());
    for card in cards {
        let button = render_card(ui, card);
        if button.clicked() {
            action = PanelAction::Copy(card.sample_env.to_string());
        }
        buttons.push(button.rect);
        ui.add_space(16.0);
    }
    (action, buttons)
}

/// Render one tool card. Returns the response of its copy button.
fn render_card(ui: &mut egui::Ui, card: &ToolCard<'_>) -> egui::Response {
    let mut copy_button = None;

    egui::Frame::NONE
        .fill(BG_SECONDARY)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(RichText::new(card.name).strong().color(TEXT_PRIMARY));
                render_badge(ui, card.badge);
            });
            ui.label(RichText::new(card.description).small().color(TEXT_MUTED));
            ui.add_space(8.0);

            if let Some(key) = card.masked_key {
                ui.label(RichText::new(KEY_DETECTED_LABEL).small().color(TEXT_MUTED));
                code_block(ui, |ui| {
                    ui.label(RichText::new(key).monospace().small().color(TEXT_DIM));
                });
                ui.add_space(8.0);
            }

            ui.label(RichText::new(REQUIRED_KEYS_LABEL).small().strong().color(TEXT_DIM));
            code_block(ui, |ui| {
                ui.horizontal_top(|ui| {
                    ui.label(RichText::new(card.sample_env).monospace().small().color(ACCENT_CYAN));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        copy_button = Some(
                            ui.small_button(RichText::new(COPY_LABEL).small().color(TEXT_DIM)),
                        );
                    });
                });
            });
        });

    copy_button.unwrap_or_else(|| ui.label(""))
}

fn render_badge(ui: &mut egui::Ui, badge: ConnectionBadge) {
    let (fill, text) = match badge {
        ConnectionBadge::Connected => (Color32::from_rgb(20, 40, 20), ACCENT_GREEN),
        ConnectionBadge::NotConnected => (Color32::from_rgb(40, 20, 20), ACCENT_RED),
    };
    egui::Frame::NONE
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(badge.label()).small().color(text));
        });
}

fn code_block(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::NONE
        .fill(BG_CODE)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
