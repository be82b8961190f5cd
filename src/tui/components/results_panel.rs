//! Results panel component for displaying a test run summary.
//!
//! Renders the pass/fail counts followed by one marker line per test file,
//! mirroring the result list of the original front-end.

use crate::backend::{TestDetail, TestRunResult};

use super::text_truncate::truncate_to_display_width_with_ellipsis;

/// Default rendering width when the terminal size is unknown.
const DEFAULT_MAX_WIDTH: usize = 80;

/// Context for rendering the results panel.
#[derive(Debug, Clone)]
pub struct ResultsViewContext<'a> {
    /// The run result to display.
    pub results: &'a TestRunResult,
    /// Maximum line width in terminal columns.
    pub max_width: usize,
}

/// Component for displaying the test run summary.
#[derive(Debug, Clone, Default)]
pub struct ResultsPanelComponent;

impl ResultsPanelComponent {
    /// Creates a new results panel component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the results panel as a string.
    #[must_use]
    pub fn view(&self, ctx: &ResultsViewContext<'_>) -> String {
        let max_width = if ctx.max_width > 0 {
            ctx.max_width
        } else {
            DEFAULT_MAX_WIDTH
        };

        let mut output = String::new();
        output.push_str("Test Results\n");
        output.push_str(&format!(
            "Passed: {}  Failed: {}\n",
            ctx.results.passed_count, ctx.results.failed_count
        ));
        output.push('\n');

        for detail in &ctx.results.details {
            output.push_str(&Self::format_detail_line(detail, max_width));
            output.push('\n');
        }

        output
    }

    /// Formats a single per-file result line.
    fn format_detail_line(detail: &TestDetail, max_width: usize) -> String {
        let line = format!(
            "  {} {} {}",
            detail.status.marker(),
            detail.status.label(),
            detail.file
        );
        truncate_to_display_width_with_ellipsis(&line, max_width)
    }
}
