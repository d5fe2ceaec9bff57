//! File logging bootstrap
//!
//! The terminal UI owns stdout and stderr, so diagnostics go to rotating
//! files under `<base>/logs`. Messages follow a `event=... status=...`
//! key-value style so they can be grepped.
//!
//! # Invariants
//! - Logging is initialized at most once per process.
//! - Re-initialization with the same directory is a no-op; a different
//!   directory is rejected.

use std::path::{Path, PathBuf};

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

use crate::error::{RecipeError, RecipeResult};

const LOG_FILE_BASENAME: &str = "recipes";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Initialize file logging at `level` inside `log_dir`
pub fn init_logging(level: &str, log_dir: &Path) -> RecipeResult<()> {
    let level = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> RecipeResult<LoggingState> {
        std::fs::create_dir_all(log_dir).map_err(|e| {
            RecipeError::Io(format!(
                "Failed to create log directory {}: {}",
                log_dir.display(),
                e
            ))
        })?;

        let handle = Logger::try_with_str(level)
            .map_err(|e| RecipeError::Config(format!("Invalid log level '{}': {}", level, e)))?
            .log_to_file(
                FileSpec::default()
                    .directory(log_dir)
                    .basename(LOG_FILE_BASENAME),
            )
            .rotate(
                Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                Naming::Numbers,
                Cleanup::KeepLogFiles(MAX_LOG_FILES),
            )
            .write_mode(WriteMode::BufferAndFlush)
            .append()
            .format_for_files(flexi_logger::detailed_format)
            .start()
            .map_err(|e| RecipeError::Config(format!("Failed to start logger: {}", e)))?;

        info!(
            "event=app_start status=ok version={} level={} log_dir={}",
            env!("CARGO_PKG_VERSION"),
            level,
            log_dir.display()
        );

        Ok(LoggingState {
            log_dir: log_dir.to_path_buf(),
            _handle: handle,
        })
    })?;

    if state.log_dir != log_dir {
        return Err(RecipeError::Config(format!(
            "Logging already initialized at {}; refusing to switch to {}",
            state.log_dir.display(),
            log_dir.display()
        )));
    }

    Ok(())
}

fn normalize_level(level: &str) -> RecipeResult<&'static str> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        "off" => Ok("off"),
        other => Err(RecipeError::Config(format!(
            "Unsupported log level '{}'; expected trace|debug|info|warn|error|off",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_level() {
        assert_eq!(normalize_level("INFO").unwrap(), "info");
        assert_eq!(normalize_level(" warning ").unwrap(), "warn");
        assert!(normalize_level("loud").is_err());
    }

    #[test]
    fn test_init_is_idempotent_and_rejects_other_dir() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("logs");

        init_logging("info", &log_dir).unwrap();
        init_logging("info", &log_dir).unwrap();
        assert!(log_dir.is_dir());

        let other = temp_dir.path().join("other");
        let err = init_logging("info", &other).unwrap_err();
        assert!(err.to_string().contains("refusing to switch"));
    }
}
