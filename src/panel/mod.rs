//! Developer tools panel logic, independent of the GUI toolkit
//!
//! - `loader`: fetches the tool list in the background
//! - `view`: turns the panel state into cards
//! - `clipboard`: copy action with notifications
//! - `notify`: notification sink

pub mod clipboard;
pub mod loader;
pub mod notify;
pub mod view;

pub use clipboard::{copy_to_clipboard, ClipboardError, ClipboardWriter, SystemClipboard};
pub use loader::{PanelState, RepaintHook, ToolsLoader};
pub use notify::{Notification, NotificationSink, NotificationStatus};
pub use view::{render_text, ConnectionBadge, PanelView, ToolCard};
