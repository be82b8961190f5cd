//! Rendering logic for the workflow TUI application.
//!
//! This module contains the view rendering methods that produce string
//! output for display in the terminal. These are pure query methods that
//! read state without modification.

use crate::tui::components::ResultsViewContext;
use crate::tui::components::text_truncate::truncate_to_display_width_with_ellipsis;

use super::WorkflowApp;

impl WorkflowApp {
    /// Renders the header bar.
    pub(super) fn render_header(&self) -> String {
        let title = "INTELLICO";
        let loading_indicator = if self.loading { " [Running...]" } else { "" };
        format!("{title}{loading_indicator}\n")
    }

    /// Renders the folder input line with a trailing cursor block.
    pub(super) fn render_folder_input(&self) -> String {
        let line = format!("Select Folder: {}_", self.workflow.folder_path);
        let max_width = self.width as usize;
        format!(
            "{}\n",
            truncate_to_display_width_with_ellipsis(&line, max_width)
        )
    }

    /// Renders the body: the welcome panel before the first run, the results
    /// panel afterwards.
    pub(super) fn render_body(&self) -> String {
        self.workflow.test_results.as_ref().map_or_else(
            Self::render_welcome,
            |results| {
                self.results_panel.view(&ResultsViewContext {
                    results,
                    max_width: self.width as usize,
                })
            },
        )
    }

    /// Renders the welcome panel shown while no results are on display.
    fn render_welcome() -> String {
        concat!(
            "Welcome to Intellico\n",
            "\n",
            "To get started:\n",
            "  1. Enter a folder path or press Tab to browse\n",
            "  2. Press Enter to begin automated testing\n",
            "\n",
            "Supported Languages: JavaScript | Python | More...\n",
        )
        .to_owned()
    }

    /// Renders the status bar with the advisory or the key hints.
    pub(super) fn render_status_bar(&self) -> String {
        self.advisory.as_ref().map_or_else(
            || "Enter:run tests  Tab:browse  Esc:clear  Ctrl+C:quit\n".to_owned(),
            |advisory| format!("! {advisory}\n"),
        )
    }
}
