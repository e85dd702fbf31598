//! Toast notifications for panel actions
//!
//! Shows copy results as temporary notifications in the top-right corner.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, Color32, Id, RichText, Vec2};

use crate::gui::theme::{ACCENT_GREEN, ACCENT_RED, BG_SECONDARY};
use crate::panel::{Notification, NotificationSink, NotificationStatus};

/// Animation duration for fade in/out
const FADE_DURATION: f32 = 0.3;

/// Queue of pending toasts; one is shown at a time
pub struct ToastQueue {
    pending: VecDeque<Notification>,
    current: Option<(Notification, Instant)>,
    duration: Duration,
}

impl ToastQueue {
    pub fn new(duration: Duration) -> Self {
        Self {
            pending: VecDeque::new(),
            current: None,
            duration,
        }
    }

    /// Advance the queue and return the toast to show with its alpha
    pub fn tick(&mut self, now: Instant) -> Option<(&Notification, f32)> {
        if let Some((_, start)) = &self.current {
            if now.duration_since(*start) > self.duration {
                self.current = None;
            }
        }

        if self.current.is_none() {
            if let Some(next) = self.pending.pop_front() {
                self.current = Some((next, now));
            }
        }

        let (toast, start) = self.current.as_ref()?;
        let alpha = fade_alpha(now.duration_since(*start).as_secs_f32(), self.duration.as_secs_f32());
        Some((toast, alpha))
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none() && self.pending.is_empty()
    }

    /// Render the current toast, if any
    pub fn render(&mut self, ctx: &egui::Context) {
        let Some((toast, alpha)) = self.tick(Instant::now()) else {
            return;
        };
        let toast = toast.clone();

        let animated_alpha = ctx.animate_value_with_time(Id::new("toast_alpha"), alpha, 0.1);

        egui::Area::new(Id::new("devtools_toast"))
            .anchor(Align2::RIGHT_TOP, Vec2::new(-20.0, 20.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(apply_alpha(BG_SECONDARY, animated_alpha * 0.95))
                    .stroke(egui::Stroke::new(
                        1.0,
                        Color32::from_rgba_unmultiplied(100, 100, 100, (animated_alpha * 150.0) as u8),
                    ))
                    .corner_radius(8.0)
                    .inner_margin(12.0)
                    .show(ui, |ui| {
                        ui.set_min_width(220.0);
                        let (icon, color) = match toast.status {
                            NotificationStatus::Success => ("✔", ACCENT_GREEN),
                            NotificationStatus::Error => ("✖", ACCENT_RED),
                        };
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(icon).color(apply_alpha(color, animated_alpha)));
                            ui.label(
                                RichText::new(&toast.title)
                                    .color(apply_alpha(Color32::WHITE, animated_alpha))
                                    .strong(),
                            );
                        });
                    });
            });

        // Keep repainting for animation and expiry
        ctx.request_repaint();
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        self.pending.push_back(notification);
    }
}

fn fade_alpha(elapsed: f32, total: f32) -> f32 {
    if elapsed < FADE_DURATION {
        elapsed / FADE_DURATION
    } else if elapsed > total - FADE_DURATION {
        ((total - elapsed) / FADE_DURATION).max(0.0)
    } else {
        1.0
    }
}

/// Apply alpha to a color
fn apply_alpha(color: Color32, alpha: f32) -> Color32 {
    Color32::from_rgba_unmultiplied(
        color.r(),
        color.g(),
        color.b(),
        (color.a() as f32 * alpha) as u8,
    )
}
