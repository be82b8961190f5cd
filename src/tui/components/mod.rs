//! Reusable UI components for the workflow TUI.

pub mod results_panel;
pub(crate) mod text_truncate;

pub use results_panel::{ResultsPanelComponent, ResultsViewContext};
