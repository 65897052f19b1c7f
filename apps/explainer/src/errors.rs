use std::path::PathBuf;

use thiserror::Error;

/// Unrecoverable errors raised while preparing a run.
/// These propagate to `main` and terminate the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read document {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported document format '{extension}' for {path:?}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
