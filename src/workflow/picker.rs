//! Directory scanning that emulates the native folder picker boundary.
//!
//! The host UI's directory dialog is out of scope; what the controller needs
//! from it is a sequence of relative file paths, each prefixed with the
//! chosen folder's name (the shape a browser's directory input produces).
//! This module derives that sequence by walking a local directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::backend::WorkflowError;

/// Walks `folder` and returns its files as sorted relative paths prefixed
/// with the folder's own name, e.g. `demo/src/main.rs`.
///
/// Unreadable entries are skipped rather than failing the whole scan. An
/// empty directory yields an empty sequence, which leaves any existing
/// selection unchanged when fed to the picker operation.
///
/// # Errors
///
/// Returns [`WorkflowError::Io`] when the folder cannot be resolved or
/// opened.
pub fn scan_folder_entries(folder: &Utf8Path) -> Result<Vec<String>, WorkflowError> {
    let resolved = folder
        .canonicalize_utf8()
        .map_err(|error| scan_error(folder, &error))?;
    let prefix = resolved.file_name().unwrap_or(".").to_owned();

    let dir = Dir::open_ambient_dir(&resolved, ambient_authority())
        .map_err(|error| scan_error(folder, &error))?;

    let mut entries = Vec::new();
    collect_entries(&dir, &prefix, &mut entries);
    entries.sort();
    Ok(entries)
}

/// Recursively collects file paths under `dir`, skipping entries that fail
/// to read mid-walk.
fn collect_entries(dir: &Dir, prefix: &str, output: &mut Vec<String>) {
    let Ok(iterator) = dir.entries() else {
        return;
    };

    for entry_result in iterator {
        let Ok(entry) = entry_result else { continue };
        let Ok(name) = entry.file_name() else {
            continue;
        };
        let Ok(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_dir() {
            let Ok(child) = entry.open_dir() else { continue };
            collect_entries(&child, &format!("{prefix}/{name}"), output);
        } else {
            output.push(format!("{prefix}/{name}"));
        }
    }
}

fn scan_error(folder: &Utf8Path, error: &std::io::Error) -> WorkflowError {
    WorkflowError::Io {
        message: format!("failed to scan folder '{folder}': {error}"),
    }
}
