//! One-shot folder submission operation.

use intellico::telemetry::{TelemetryEvent, TelemetrySink};
use intellico::{
    HttpSubmitFolderGateway, IntellicoConfig, TestRunner, WorkflowError, WorkflowState,
};

use super::output::write_run_summary;

/// Submits the configured folder once and prints the run summary.
///
/// # Errors
///
/// Returns [`WorkflowError::EmptyFolderPath`] when no folder is configured,
/// [`WorkflowError::InvalidEndpoint`] or
/// [`WorkflowError::Configuration`] for bad configuration, and backend or
/// network failures from the submit call.
pub async fn run(
    config: &IntellicoConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<(), WorkflowError> {
    let folder_path = config.require_folder_path()?;
    let endpoint = config.resolve_endpoint()?;
    let gateway = HttpSubmitFolderGateway::new(endpoint, config.request_timeout())?;

    let mut state = WorkflowState::new();
    state.select_folder(folder_path);

    telemetry.record(TelemetryEvent::FolderSubmitted {
        folder_path: folder_path.to_owned(),
    });

    TestRunner::new(&gateway).run_tests(&mut state).await?;

    if let Some(results) = &state.test_results {
        telemetry.record(TelemetryEvent::RunDisplayed {
            passed_count: results.passed_count,
            failed_count: results.failed_count,
        });
        write_run_summary(&state.folder_path, results)?;
    }

    Ok(())
}
