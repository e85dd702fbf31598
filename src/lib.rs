//! devtools-panel - Developer tool connections
//!
//! Lists developer tool integrations (search and API providers) reported by
//! `GET /api/developer-tools`, shows whether each one has a key configured,
//! and offers a sample `.env.local` block to copy.
//!
//! ## Frontends
//!
//! 1. **GUI (Primary)**: native egui window, see [`gui::run_gui`].
//! 2. **CLI**: `devtools-panel list` prints the same panel as text.

pub mod client;
pub mod config;
pub mod domain;
pub mod gui;
pub mod panel;

pub use domain::*;
