//! Error types for running Lighthouse and loading its reports.

use std::path::PathBuf;
use std::process::ExitStatus;
use std::time::Duration;
use thiserror::Error;

/// Installation instruction shown whenever the Lighthouse CLI cannot be found.
pub const INSTALL_HINT: &str = "npm install -g lighthouse";

#[derive(Error, Debug)]
pub enum LighthouseError {
    #[error("Lighthouse CLI is not installed (looked for `{program}`)")]
    NotInstalled { program: String },

    #[error("Failed to start Lighthouse: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Error running Lighthouse ({status}): {stderr}")]
    Failed { status: ExitStatus, stderr: String },

    #[error("Lighthouse did not finish within {}s", .0.as_secs())]
    Timeout(Duration),

    #[error("Error parsing Lighthouse output: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LighthouseError {
    /// Wraps an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LighthouseError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, LighthouseError>;
