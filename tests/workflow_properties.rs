//! Behavioural tests for the folder-selection-and-test-run workflow.
//!
//! These tests exercise the controller against a stub gateway so the
//! success and failure paths run without a real network.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use intellico::{
    PickerOutcome, SubmitAck, SubmitFolderGateway, TestRunner, TestRunResult, TestStatus,
    WorkflowError, WorkflowPhase, WorkflowState,
};
use rstest::rstest;

/// Stub gateway with a programmable response and call accounting.
#[derive(Debug)]
struct StubGateway {
    response: Result<SubmitAck, WorkflowError>,
    calls: AtomicUsize,
    last_folder: Mutex<Option<String>>,
}

impl StubGateway {
    fn succeeding() -> Self {
        Self {
            response: Ok(SubmitAck {
                message: Some("Folder path saved successfully!".to_owned()),
            }),
            calls: AtomicUsize::new(0),
            last_folder: Mutex::new(None),
        }
    }

    fn failing(error: WorkflowError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
            last_folder: Mutex::new(None),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_folder(&self) -> Option<String> {
        self.last_folder
            .lock()
            .expect("lock should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl SubmitFolderGateway for StubGateway {
    async fn submit_folder(&self, folder_path: &str) -> Result<SubmitAck, WorkflowError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .last_folder
            .lock()
            .expect("lock should not be poisoned") = Some(folder_path.to_owned());
        self.response.clone()
    }
}

#[rstest]
#[case::simple("demo-project")]
#[case::nested("projects/demo")]
#[case::spaces("my folder")]
fn select_folder_roundtrips_any_non_empty_string(#[case] path: &str) {
    let mut state = WorkflowState::new();
    state.select_folder(path);
    assert_eq!(state.folder_path, path);
}

#[tokio::test]
async fn run_with_empty_folder_raises_validation_error_without_network() {
    let gateway = StubGateway::succeeding();
    let mut state = WorkflowState::new();

    let error = TestRunner::new(&gateway)
        .run_tests(&mut state)
        .await
        .expect_err("empty folder must fail validation");

    assert_eq!(error, WorkflowError::EmptyFolderPath);
    assert_eq!(gateway.call_count(), 0, "no network call may be issued");
    assert_eq!(state.test_results, None);
}

#[test]
fn picker_selects_the_top_segment_of_the_first_entry() {
    let mut state = WorkflowState::new();

    let outcome = state.select_folder_from_picker(&["a/b/c.txt".to_owned()]);

    assert_eq!(outcome, PickerOutcome::Selected("a".to_owned()));
    assert_eq!(state.folder_path, "a");
}

#[test]
fn picker_with_empty_sequence_changes_nothing() {
    let mut state = WorkflowState::new();
    state.select_folder("before");

    let outcome = state.select_folder_from_picker(&[]);

    assert_eq!(outcome, PickerOutcome::Unchanged);
    assert_eq!(state.folder_path, "before");
}

#[tokio::test]
async fn successful_run_displays_the_fixed_placeholder_set() {
    let gateway = StubGateway::succeeding();
    let mut state = WorkflowState::new();
    state.select_folder("demo-project");

    TestRunner::new(&gateway)
        .run_tests(&mut state)
        .await
        .expect("run should succeed");

    assert_eq!(gateway.call_count(), 1);
    assert_eq!(
        gateway.last_folder().as_deref(),
        Some("demo-project"),
        "the selection must be forwarded verbatim"
    );

    let results = state.test_results.expect("results should be displayed");
    assert_eq!(results.passed_count, 4);
    assert_eq!(results.failed_count, 1);

    let expected = [
        (TestStatus::Pass, "src/tests/Form.test.js"),
        (TestStatus::Pass, "src/tests/Utils.test.js"),
        (TestStatus::Fail, "src/tests/TodoList.test.js"),
    ];
    let actual: Vec<_> = results
        .details
        .iter()
        .map(|detail| (detail.status, detail.file.as_str()))
        .collect();
    assert_eq!(actual, expected);
}

#[rstest]
#[case::backend_error(WorkflowError::Backend {
    status: 500,
    message: "analyzer crashed".to_owned(),
})]
#[case::network_error(WorkflowError::Network {
    message: "connection refused".to_owned(),
})]
#[tokio::test]
async fn failed_run_leaves_previous_results_untouched(#[case] failure: WorkflowError) {
    let gateway = StubGateway::failing(failure);

    let previous = TestRunResult::sample_single_pass("earlier.test.js");
    let mut state = WorkflowState::new();
    state.select_folder("demo-project");
    state.apply_run_success(previous.clone());

    let error = TestRunner::new(&gateway)
        .run_tests(&mut state)
        .await
        .expect_err("run should fail");

    assert!(error.is_run_failure(), "expected run failure, got {error:?}");
    assert_eq!(gateway.call_count(), 1);
    assert_eq!(state.test_results, Some(previous));
}

#[test]
fn clear_resets_both_fields_regardless_of_prior_state() {
    let mut state = WorkflowState::new();
    state.select_folder("demo-project");
    state.apply_run_success(TestRunResult::placeholder());
    assert_eq!(state.phase(), WorkflowPhase::Displaying);

    state.clear();

    assert_eq!(state.folder_path, "");
    assert_eq!(state.test_results, None);
    assert_eq!(state.phase(), WorkflowPhase::Idle);
}
