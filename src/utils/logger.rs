use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Installs the global tracing subscriber, writing to a timestamped file
///
/// The filter comes from `RUST_LOG` and defaults to `info`. Returns the path
/// of the log file.
pub fn init_logger(log_dir: &str) -> Result<PathBuf> {
    // Create log directory if it doesn't exist
    if !Path::new(log_dir).exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir))?;
    }

    let log_file = log_file_path(log_dir, &Local::now().format("%Y%m%d_%H%M%S").to_string());
    let writer = fs::File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;
    info!("Logger initialized, writing to {}", log_file.display());

    Ok(log_file)
}

fn log_file_path(log_dir: &str, timestamp: &str) -> PathBuf {
    Path::new(log_dir).join(format!("investguard_{}.log", timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        let path = log_file_path("logs", "20260101_120000");
        assert_eq!(path, Path::new("logs").join("investguard_20260101_120000.log"));
    }
}
