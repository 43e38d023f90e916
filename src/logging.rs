//! Tracing setup
//!
//! Logs go to a daily-rolling file under the user's data directory, since
//! the terminal belongs to the editor while it runs. Non-interactive
//! commands also get a stderr layer.
//!
//! Filtering follows `RUST_LOG`:
//! - `RUST_LOG=debug` - everything at debug
//! - `RUST_LOG=bwedit::session=debug` - module-level filtering
//!
//! Item names, usernames and URLs are never logged, only ids and counts.

use std::io;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter for the log file
const FILE_FILTER: &str = "bwedit=info";

/// Default filter for stderr
const CONSOLE_FILTER: &str = "warn";

/// Where output from a run should go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Log file only; the terminal is in use
    Interactive,
    /// Log file plus stderr
    Console,
}

/// Directory holding the rolling log files
#[must_use]
pub fn logs_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("bwedit").join("logs"))
}

fn ensure_logs_dir() -> io::Result<PathBuf> {
    let dir = logs_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no data directory"))?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init(target: LogTarget) {
    let console_layer = (target == LogTarget::Console).then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(filter_or(CONSOLE_FILTER))
    });

    let file_layer = match ensure_logs_dir() {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "bwedit.log");
            Some(
                fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(filter_or(FILE_FILTER)),
            )
        }
        Err(e) => {
            if target == LogTarget::Console {
                eprintln!("Warning: Could not initialize file logging: {e}");
            }
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_dir_is_namespaced() {
        if let Some(dir) = logs_dir() {
            assert!(dir.ends_with("bwedit/logs"));
        }
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(LogTarget::Interactive);
        init(LogTarget::Console);
        tracing::info!("logging initialized");
    }
}
