//! UI module: View components for the TUI.

pub mod form;
pub mod result;
