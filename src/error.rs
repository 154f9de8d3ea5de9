//! Error types
//!
//! The simulation step itself cannot fail. Errors come from loading settings
//! and from presenting frames to an output sink.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

/// Fatal error surfaced to the frame loop
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to present frame: {0}")]
    Present(#[from] io::Error),
}
