use anyhow::Result;
use chrono::Local;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with file-based logging.
/// Logs land in ~/.config/redlab/logs/redlab-YYYY-MM-DD-HH-MM-SS.log
///
/// The TUI owns the terminal, so logs must never hit stdout or stderr while
/// it runs.
pub fn init_logging() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or(anyhow::anyhow!("no config directory on this platform"))?
        .join("redlab");

    let logs_dir = config_dir.join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    // One file per run, named by start time
    let timestamp = Local::now().format("%Y-%m-%d-%H-%M-%S");
    let log_filename = format!("redlab-{}.log", timestamp);
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // INFO unless RUST_LOG says otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    // The guard flushes the writer on drop; leak it so logging stays alive
    // for the whole process
    std::mem::forget(guard);

    Ok(log_path)
}

/// Initialize tracing to stderr, for one-shot mode where stdout carries the
/// rendered output.
pub fn init_stderr_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
