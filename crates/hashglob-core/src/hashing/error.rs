//! Errors raised by a hashing run

use std::path::PathBuf;

use thiserror::Error;

use crate::scanner::GlobError;

/// Errors that can occur while hashing files
#[derive(Debug, Error)]
pub enum HashFilesError {
    #[error(
        "Some files are outside your workspace:\n{}\nTo include them, set 'allowFilesOutsideWorkspace: true' in your options.",
        list_files(.files)
    )]
    OutsideWorkspace { files: Vec<PathBuf> },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Glob(#[from] GlobError),
}

fn list_files(files: &[PathBuf]) -> String {
    files
        .iter()
        .map(|file| format!("- {}", file.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
