//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use intellico::{TestRunResult, WorkflowError};

/// Writes the run summary for a folder to stdout.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when stdout cannot be written.
pub fn write_run_summary(folder_path: &str, results: &TestRunResult) -> Result<(), WorkflowError> {
    let mut stdout = io::stdout().lock();
    write_run_summary_to(&mut stdout, folder_path, results)
}

/// Writes the run summary for a folder to the given writer.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the writer fails.
pub fn write_run_summary_to<W: Write>(
    writer: &mut W,
    folder_path: &str,
    results: &TestRunResult,
) -> Result<(), WorkflowError> {
    writeln!(writer, "Test results for {folder_path}:").map_err(|e| io_error(&e))?;
    writeln!(writer).map_err(|e| io_error(&e))?;

    for detail in &results.details {
        writeln!(
            writer,
            "  {} {} {}",
            detail.status.marker(),
            detail.status.label(),
            detail.file
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Passed: {}  Failed: {}",
        results.passed_count, results.failed_count
    )
    .map_err(|e| io_error(&e))?;

    Ok(())
}

/// Converts an I/O error to a [`WorkflowError::Io`].
pub(crate) fn io_error(error: &io::Error) -> WorkflowError {
    WorkflowError::Io {
        message: error.to_string(),
    }
}
