//! Folder-selection-and-test-run workflow controller.
//!
//! State lives in [`state::WorkflowState`]; transitions are pure methods so
//! the state machine tests without a UI. The network call is delegated to a
//! [`crate::backend::SubmitFolderGateway`] collaborator through
//! [`runner::TestRunner`], and the folder picker boundary is emulated by
//! [`picker::scan_folder_entries`].

pub mod picker;
pub mod runner;
pub mod state;

pub use picker::scan_folder_entries;
pub use runner::TestRunner;
pub use state::{PickerOutcome, WorkflowPhase, WorkflowState};
