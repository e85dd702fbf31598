//! Core domain types

mod tool;

pub use tool::{DeveloperTool, DeveloperToolsResponse};
