//! Logging system configuration and initialization
//!
//! - Console output on stderr (stdout carries the completion message)
//! - Optional file output through a non-blocking appender
//! - Optional JSON formatting for the file layer
//! - Local-time timestamps
//! - `RUST_LOG` overrides the configured level

use anyhow::{Result, anyhow};
use chrono::Local;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, time::FormatTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use super::config::defaults::LOG_FILE_NAME;
pub use super::config::LoggingConfig;

// Keeps the log file writer alive for the life of the process
lazy_static! {
    static ref LOG_GUARDS: Mutex<Vec<tracing_appender::non_blocking::WorkerGuard>> =
        Mutex::new(Vec::new());
}

/// Timestamps in the machine's local time zone
struct LocalTimeFormatter;

impl FormatTime for LocalTimeFormatter {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S%.3f %:z"))
    }
}

/// Log directory resolved against the working directory
pub fn get_log_directory(config: &LoggingConfig) -> PathBuf {
    if config.log_dir.is_absolute() {
        return config.log_dir.clone();
    }

    std::env::current_dir()
        .unwrap_or_default()
        .join(&config.log_dir)
}

/// Initialize the logging system with default configuration
pub fn init_logging() -> Result<()> {
    init_logging_with_config(&LoggingConfig::default())
}

/// Build the level filter.
///
/// `RUST_LOG` wins when set. Otherwise the configured level applies to this
/// crate and the HTML parser internals are held at `warn` unless the level is
/// `trace`.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    let mut filter = EnvFilter::try_new(&config.level)
        .map_err(|e| anyhow!("Invalid log level '{}': {}", config.level, e))?;

    if !config.level.eq_ignore_ascii_case("trace") {
        filter = filter
            .add_directive("html5ever=warn".parse()?)
            .add_directive("selectors=warn".parse()?);
    }

    for target in ["patent_report_lib", "patent_report"] {
        filter = filter.add_directive(format!("{}={}", target, config.level).parse()?);
    }

    Ok(filter)
}

/// Initialize logging with custom configuration.
///
/// Calling this again after a subscriber is installed is a no-op.
pub fn init_logging_with_config(config: &LoggingConfig) -> Result<()> {
    if !config.console_output && !config.file_output {
        return Err(anyhow!("No logging output configured"));
    }

    let env_filter = build_env_filter(config)?;

    let console_layer = config.console_output.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_timer(LocalTimeFormatter)
            .with_target(false)
    });

    let file_layer = if config.file_output {
        let log_dir = get_log_directory(config);
        std::fs::create_dir_all(&log_dir)
            .map_err(|e| anyhow!("Failed to create log directory {:?}: {}", log_dir, e))?;

        let file_appender = rolling::never(&log_dir, LOG_FILE_NAME);
        let (file_writer, file_guard) = non_blocking(file_appender);
        LOG_GUARDS
            .lock()
            .map_err(|_| anyhow!("Log guard registry is poisoned"))?
            .push(file_guard);

        let layer = if config.json_format {
            fmt::Layer::new()
                .json()
                .with_writer(file_writer)
                .with_timer(LocalTimeFormatter)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .boxed()
        } else {
            fmt::Layer::new()
                .with_writer(file_writer)
                .with_timer(LocalTimeFormatter)
                .with_target(false)
                .with_ansi(false)
                .boxed()
        };
        Some(layer)
    } else {
        None
    };

    let installed = Registry::default()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        info!("Logging system initialized");
        info!("Log level: {}", config.level);
        if config.file_output {
            info!(
                "Log file: {:?}",
                log_file_path(&get_log_directory(config))
            );
        }
    } else {
        debug!("Logging already initialized, keeping existing subscriber");
    }

    Ok(())
}

fn log_file_path(log_dir: &Path) -> PathBuf {
    log_dir.join(LOG_FILE_NAME)
}

/// Log system information for diagnostics
pub fn log_system_info() {
    info!("=== patent-report ===");
    info!("Application version: {}", env!("CARGO_PKG_VERSION"));
    info!("Operating system: {}", std::env::consts::OS);

    if let Ok(current_dir) = std::env::current_dir() {
        info!("Working directory: {:?}", current_dir);
    }
}
