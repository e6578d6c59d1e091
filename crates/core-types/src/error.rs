// In crates/core-types/src/error.rs

use thiserror::Error;

/// Failure taxonomy shared across the workspace.
///
/// None of these ever escape the signal pipeline as a process failure: the
/// engine and the stdin adapter absorb them into a HOLD result carrying the
/// rendered message as `reason`. The one exception is `Configuration` raised
/// while resolving flags/env/file settings, before any request is read.
#[derive(Error, Debug)]
pub enum Error {
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("invalid window configuration: {0}")]
    Configuration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
