//! Intellico CLI entrypoint for the folder-selection-and-test-run workflow.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use intellico::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink};
use intellico::{IntellicoConfig, OperationMode, WorkflowError};
use ortho_config::OrthoConfig;

mod cli;


#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), WorkflowError> {
    let config = load_config()?;

    match config.operation_mode() {
        OperationMode::WorkflowTui => cli::workflow_tui::run(&config).await,
        OperationMode::Submit => {
            if config.telemetry {
                cli::submit::run(&config, &StderrJsonlTelemetrySink).await
            } else {
                cli::submit::run(&config, &NoopTelemetrySink).await
            }
        }
    }
}

/// Loads configuration from CLI, environment, and files, merging a bare
/// positional argument as the folder path.
///
/// # Errors
///
/// Returns [`WorkflowError::Configuration`] when ortho-config fails to parse
/// arguments or when the positional folder conflicts with `--folder-path`.
fn load_config() -> Result<IntellicoConfig, WorkflowError> {
    let (positional, filtered) = extract_positional_folder_path(std::env::args_os().collect());

    let mut config = IntellicoConfig::load_from_iter(filtered).map_err(|error| {
        WorkflowError::Configuration {
            message: error.to_string(),
        }
    })?;

    if let Some(value) = positional {
        config.apply_positional_folder(value)?;
    }

    Ok(config)
}

/// Flags that consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["--folder-path", "--endpoint", "--request-timeout-seconds"];
const SHORT_VALUE_FLAGS: &[&str] = &["-f", "-e"];

/// Splits a bare positional folder path out of the raw argument list.
///
/// ortho-config only understands flags, so the first argument that is
/// neither a flag nor the value of a value-taking flag is extracted and the
/// remaining arguments are returned for normal parsing. After a literal
/// `--`, the next argument is always treated as the positional value.
fn extract_positional_folder_path(args: Vec<OsString>) -> (Option<String>, Vec<OsString>) {
    let mut arguments = args.into_iter();
    let mut remaining: Vec<OsString> = Vec::new();

    let Some(program) = arguments.next() else {
        return (None, remaining);
    };
    remaining.push(program);

    let mut positional = None;
    let mut after_double_dash = false;
    let mut skip_next_value = false;

    for argument in arguments {
        if skip_next_value {
            skip_next_value = false;
            remaining.push(argument);
            continue;
        }

        let Some(text) = argument.to_str() else {
            remaining.push(argument);
            continue;
        };

        if after_double_dash {
            if positional.is_none() {
                positional = Some(text.to_owned());
            } else {
                remaining.push(argument);
            }
            continue;
        }

        if text == "--" {
            after_double_dash = true;
            continue;
        }

        if text.len() > 1 && text.starts_with('-') {
            skip_next_value = flag_takes_value(text);
            remaining.push(argument);
            continue;
        }

        if positional.is_none() {
            positional = Some(text.to_owned());
        } else {
            remaining.push(argument);
        }
    }

    (positional, remaining)
}

/// Returns true when the flag consumes the following argument.
///
/// The `--flag=value` form carries its value inline, so it never consumes
/// the next argument; unknown flags are conservatively treated as boolean.
fn flag_takes_value(flag: &str) -> bool {
    if flag.contains('=') {
        return false;
    }
    VALUE_FLAGS.contains(&flag) || SHORT_VALUE_FLAGS.contains(&flag)
}
