//! Native GUI for the developer tools panel
//!
//! The window shows one card per developer tool with its connection state
//! and a copyable sample `.env.local` block.

pub mod app;
pub mod runner;
pub mod theme;
pub mod toast;
pub mod tools_panel;

pub use app::DevToolsApp;
pub use runner::run_gui;
pub use toast::ToastQueue;
pub use tools_panel::{render_tools_panel, PanelAction};
