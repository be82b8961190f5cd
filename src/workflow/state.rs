//! Folder selection and result state for the test workflow.
//!
//! This module provides the controller's state value and its transitions.
//! The design keeps every transition a pure in-memory operation so the state
//! machine unit-tests without a rendering environment or a network.

use crate::backend::TestRunResult;

/// Derived phase of the workflow state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowPhase {
    /// No folder selected and no results shown.
    Idle,
    /// A folder is selected but no results are shown yet.
    Ready,
    /// Results from the last successful run are on display.
    Displaying,
}

/// Outcome of a picker-driven selection attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// The selection changed to the given top-level folder name.
    Selected(String),
    /// The picker produced no entries; the selection is unchanged.
    Unchanged,
}

/// State owned by the workflow controller.
///
/// `folder_path` uses the empty string as its "unset" sentinel; any string,
/// including the empty one, is accepted verbatim by [`Self::select_folder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    /// Currently selected folder path.
    pub folder_path: String,
    /// Results of the last successful run, if any.
    pub test_results: Option<TestRunResult>,
}

impl WorkflowState {
    /// Creates an empty workflow state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            folder_path: String::new(),
            test_results: None,
        }
    }

    /// Returns the phase derived from the current state.
    ///
    /// Result presence dominates: once results are displayed, changing the
    /// folder keeps the workflow in [`WorkflowPhase::Displaying`].
    #[must_use]
    pub const fn phase(&self) -> WorkflowPhase {
        if self.test_results.is_some() {
            WorkflowPhase::Displaying
        } else if self.folder_path.is_empty() {
            WorkflowPhase::Idle
        } else {
            WorkflowPhase::Ready
        }
    }

    /// Returns true when a run may be attempted.
    #[must_use]
    pub const fn has_folder(&self) -> bool {
        !self.folder_path.is_empty()
    }

    /// Sets the folder path verbatim. No validation is performed.
    pub fn select_folder(&mut self, path: impl Into<String>) {
        self.folder_path = path.into();
    }

    /// Derives the selection from a picker-provided sequence of relative
    /// file paths.
    ///
    /// Takes the first entry, splits it on `'/'`, and selects the first
    /// segment (the top-level folder name). An empty sequence leaves the
    /// state unchanged.
    pub fn select_folder_from_picker(&mut self, relative_paths: &[String]) -> PickerOutcome {
        let Some(first) = relative_paths.first() else {
            return PickerOutcome::Unchanged;
        };

        let segment = first.split('/').next().unwrap_or("");
        self.folder_path = segment.to_owned();
        PickerOutcome::Selected(self.folder_path.clone())
    }

    /// Replaces the displayed results after a successful run.
    pub fn apply_run_success(&mut self, results: TestRunResult) {
        self.test_results = Some(results);
    }

    /// Resets the folder path to empty and discards any results.
    pub fn clear(&mut self) {
        self.folder_path.clear();
        self.test_results = None;
    }
}
