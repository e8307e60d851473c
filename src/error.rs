//! Error types and logging helpers for fallible operations.

use thiserror::Error;

use crate::commands::KeysParseError;

/// Errors surfaced by command-kit itself. Most of the crate degrades
/// gracefully instead of failing; this enum covers the places that do return
/// errors.
#[derive(Error, Debug)]
pub enum CommandKitError {
    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error(transparent)]
    KeysParse(#[from] KeysParseError),
}

pub type Result<T> = std::result::Result<T, CommandKitError>;

/// Extension trait for logging errors without propagating them.
///
/// Use where a failure is recoverable and the caller only needs the success
/// value if there is one. The caller's file and line are captured so the
/// trace points at the call site, not at this module.
pub trait ResultExt<T> {
    /// Log at error level and discard, returning `None` on failure.
    fn log_err(self) -> Option<T>;
    /// Log at warn level and discard. For failures that are expected in
    /// normal operation.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let location = std::panic::Location::caller();
                tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let location = std::panic::Location::caller();
                tracing::warn!("{}:{}: {:?}", location.file(), location.line(), error);
                None
            }
        }
    }
}
