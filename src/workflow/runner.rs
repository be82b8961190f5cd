//! Run facade combining validation, the backend call, and the result
//! transition.

use crate::backend::{SubmitFolderGateway, TestRunResult, WorkflowError};

use super::state::WorkflowState;

/// Drives a test run against a submission gateway.
pub struct TestRunner<'gateway, Gateway>
where
    Gateway: SubmitFolderGateway,
{
    gateway: &'gateway Gateway,
}

impl<'gateway, Gateway> TestRunner<'gateway, Gateway>
where
    Gateway: SubmitFolderGateway,
{
    /// Create a new runner using the provided gateway.
    #[must_use]
    pub const fn new(gateway: &'gateway Gateway) -> Self {
        Self { gateway }
    }

    /// Submits the selected folder and applies the placeholder result set on
    /// success.
    ///
    /// The backend acknowledgment content is discarded; the displayed results
    /// are the fixed demo set regardless of the response. On failure the
    /// state, including any previously displayed results, is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::EmptyFolderPath`] without issuing a network
    /// call when no folder is selected, and propagates backend or network
    /// failures from the gateway.
    pub async fn run_tests(&self, state: &mut WorkflowState) -> Result<(), WorkflowError> {
        if !state.has_folder() {
            return Err(WorkflowError::EmptyFolderPath);
        }

        let ack = self.gateway.submit_folder(&state.folder_path).await?;
        tracing::info!(
            folder_path = %state.folder_path,
            ack_message = ack.message.as_deref(),
            "folder submitted"
        );

        state.apply_run_success(TestRunResult::placeholder());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::backend::{MockSubmitFolderGateway, SubmitAck, TestRunResult, WorkflowError};
    use crate::workflow::state::WorkflowState;

    use super::TestRunner;

    fn ack() -> SubmitAck {
        SubmitAck {
            message: Some("Folder path 'demo' saved successfully!".to_owned()),
        }
    }

    #[tokio::test]
    async fn run_tests_with_empty_folder_never_calls_the_gateway() {
        let mut gateway = MockSubmitFolderGateway::new();
        gateway.expect_submit_folder().times(0);

        let mut state = WorkflowState::new();
        let runner = TestRunner::new(&gateway);

        let error = runner
            .run_tests(&mut state)
            .await
            .expect_err("empty selection should fail validation");

        assert_eq!(error, WorkflowError::EmptyFolderPath);
        assert_eq!(state.test_results, None);
    }

    #[tokio::test]
    async fn run_tests_populates_placeholder_results_on_success() {
        let mut gateway = MockSubmitFolderGateway::new();
        gateway
            .expect_submit_folder()
            .withf(|path| path == "demo")
            .times(1)
            .returning(|_| Ok(ack()));

        let mut state = WorkflowState::new();
        state.select_folder("demo");

        TestRunner::new(&gateway)
            .run_tests(&mut state)
            .await
            .expect("run should succeed");

        assert_eq!(state.test_results, Some(TestRunResult::placeholder()));
    }

    #[tokio::test]
    async fn run_tests_keeps_previous_results_on_failure() {
        let mut gateway = MockSubmitFolderGateway::new();
        gateway.expect_submit_folder().times(1).returning(|_| {
            Err(WorkflowError::Network {
                message: "connection refused".to_owned(),
            })
        });

        let previous = TestRunResult::sample_single_pass("earlier.test.js");
        let mut state = WorkflowState::new();
        state.select_folder("demo");
        state.apply_run_success(previous.clone());

        let error = TestRunner::new(&gateway)
            .run_tests(&mut state)
            .await
            .expect_err("run should fail");

        assert!(error.is_run_failure(), "expected run failure, got {error:?}");
        assert_eq!(state.test_results, Some(previous));
        assert_eq!(state.folder_path, "demo", "failure must not touch the selection");
    }
}
