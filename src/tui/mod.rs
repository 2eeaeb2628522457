//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a single-form interface for:
//! - Customer attribute entry
//! - Churn prediction result with a probability gauge

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::Theme;
