//! Logging configuration using the tracing ecosystem.
//!
//! The form is embedded in terminal hosts, so logs go to a file instead of
//! stdout:
//! - Daily rotating file output
//! - Environment-based log level configuration

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log level if RUST_LOG is not set.
const DEFAULT_LOG_FILTER: &str = "issue_form=info,warn";

/// File name prefix for log files.
const LOG_FILE_NAME: &str = "issue-form.log";

/// Initialize logging in the platform local data directory.
///
/// Logs are stored under:
/// - Linux: `~/.local/share/issue-form/logs/`
/// - macOS: `~/Library/Application Support/issue-form/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\issue-form\logs\`
///
/// Configure the level via `RUST_LOG`, e.g. `RUST_LOG=issue_form=debug`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created, or
/// if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    init_in(&log_dir)
}

/// Initialize logging with log files written to `log_dir`.
///
/// Hosts that already own a log directory use this instead of [`init`].
pub fn init_in(log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, LOG_FILE_NAME);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Issue form logging started");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("issue-form").join("logs"))
}

/// Get the path where logs are stored, for showing to users.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_has_expected_structure() {
        if let Some(dir) = log_directory() {
            assert!(dir.ends_with("issue-form/logs"));
        }
    }

    #[test]
    fn test_default_filter_targets_crate() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.starts_with("issue_form="));
    }
}
