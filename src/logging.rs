//! Structured JSONL logging plus human-readable stderr output.
//!
//! Dual-output logging for the host shell:
//! - **JSONL to file** (`<data dir>/command-kit/logs/command-kit.jsonl`),
//!   structured for tooling
//! - **Pretty to stderr**, for developers
//!
//! The library itself only emits through `tracing` macros and never installs
//! a subscriber; the shell calls [`init`] once at startup and keeps the
//! returned guard alive.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::events::Modifiers;

const LOG_FILE_NAME: &str = "command-kit.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping it flushes and closes the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// `filter` is the default tracing directive, typically
/// [`Config::log_filter`](crate::config::Config::log_filter); `RUST_LOG`
/// overrides it when set. When the log file cannot be opened the file layer
/// is skipped and stderr output still works.
pub fn init(filter: Option<&str>) -> LoggingGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter.unwrap_or("info")));

    let (json_layer, file_guard) = match open_log_file() {
        Some(file) => {
            // Non-blocking writer so logging never stalls event dispatch.
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_timer(fmt::time::UtcTime::rfc_3339())
                .with_target(true)
                .with_level(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false)
                .with_span_events(FmtSpan::NONE);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let pretty_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
        .init();

    tracing::info!(
        event_type = "lifecycle",
        action = "logging_initialized",
        log_path = %log_path().display(),
        "Logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

fn open_log_file() -> Option<fs::File> {
    let dir = log_dir();
    if let Err(error) = fs::create_dir_all(&dir) {
        eprintln!(
            "[command-kit] failed to create log directory {}: {}",
            dir.display(),
            error
        );
        return None;
    }
    match OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE_NAME))
    {
        Ok(file) => Some(file),
        Err(error) => {
            eprintln!("[command-kit] failed to open log file: {}", error);
            None
        }
    }
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("command-kit").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("command-kit-logs"))
}

/// Path of the JSONL log file.
pub fn log_path() -> PathBuf {
    log_dir().join(LOG_FILE_NAME)
}

/// Debug trace for one keyboard event, with the modifier bits as structured
/// fields. `action` is `"down"` or `"up"`.
pub fn log_key_event(key: &str, modifiers: &Modifiers, action: &str) {
    tracing::debug!(
        event_type = "key_event",
        key = key,
        alt = modifiers.alt,
        ctrl = modifiers.ctrl,
        meta = modifiers.meta,
        shift = modifiers.shift,
        action = action,
        "Key {} {}",
        action,
        key
    );
}
