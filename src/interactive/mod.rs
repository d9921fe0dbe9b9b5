//! Interactive TUI interface
//!
//! ratatui-based terminal UI: board rendering and application state.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
