//! Configuration infrastructure
//!
//! Replaces the fixed input/output locations with an explicit configuration
//! passed into both the extractor and the report writer.
//!
//! Sources are layered, lowest priority first:
//! 1. Built-in defaults (`./PATENTES`, `PATENTES.HTML` and the page markers)
//! 2. `patent-report.toml` in the user config directory
//! 3. `patent-report.toml` in the working directory
//! 4. `PATENT_REPORT_*` environment variables (`__` separates sections)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::parsing::ParsingConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {source}")]
    FileLoad {
        #[from]
        source: config::ConfigError,
    },

    #[error("Configuration validation failed: {message}")]
    Validation { message: String },
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub extraction: ExtractionConfig,
    pub parsing: ParsingConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Where pages are read from and the report is written to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the saved search pages
    pub input_dir: PathBuf,

    /// Report file, overwritten on every run
    pub output_file: PathBuf,
}

/// What to do with a page that matches neither sentinel phrase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Contribute no rows
    #[default]
    Skip,
    /// Emit a placeholder row as for an empty result page
    TreatAsEmpty,
}

/// How the `Resultado` column is counted for pages with results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultCountMode {
    /// Every striped row, including rows later dropped for their shape
    #[default]
    QualifyingRows,
    /// Only the rows that made it into the report
    EmittedRows,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Case-sensitive file name suffix of the pages to read
    pub file_suffix: String,

    /// Sort entries by file name instead of keeping directory listing order
    pub sort_entries: bool,

    pub unrecognized_policy: UnrecognizedPolicy,

    pub result_count_mode: ResultCountMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Escape `& < > " '` in field values. Disable for legacy byte-for-byte output.
    pub escape_html: bool,

    /// Document `<title>`
    pub title: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: "error", "warn", "info", "debug", "trace"
    pub level: String,

    /// Write the log file as JSON lines
    pub json_format: bool,

    /// Log to stderr
    pub console_output: bool,

    /// Also log to a file in `log_dir`
    pub file_output: bool,

    /// Directory for the log file, relative to the working directory
    pub log_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(defaults::INPUT_DIR),
            output_file: PathBuf::from(defaults::OUTPUT_FILE),
        }
    }
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            file_suffix: defaults::FILE_SUFFIX.to_string(),
            sort_entries: false,
            unrecognized_policy: UnrecognizedPolicy::default(),
            result_count_mode: ResultCountMode::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            escape_html: true,
            title: defaults::REPORT_TITLE.to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.to_string(),
            json_format: false,
            console_output: true,
            file_output: false,
            log_dir: PathBuf::from(defaults::LOG_DIR),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.file_suffix.is_empty() {
            return Err(ConfigError::Validation {
                message: "extraction.file_suffix must not be empty".to_string(),
            });
        }

        if self.parsing.empty_sentinel.is_empty() || self.parsing.results_sentinel.is_empty() {
            return Err(ConfigError::Validation {
                message: "parsing sentinels must not be empty".to_string(),
            });
        }

        if self.parsing.row_colors.is_empty() {
            return Err(ConfigError::Validation {
                message: "parsing.row_colors needs at least one colour".to_string(),
            });
        }

        if !self.logging.console_output && !self.logging.file_output {
            return Err(ConfigError::Validation {
                message: "logging needs console_output or file_output".to_string(),
            });
        }

        Ok(())
    }
}

/// Loads [`AppConfig`] from layered sources
#[derive(Debug, Clone)]
pub struct ConfigManager {
    files: Vec<PathBuf>,
    env_prefix: Option<String>,
}

impl ConfigManager {
    /// User-level configuration directory, if the platform has one
    pub fn get_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(defaults::APP_DIR_NAME))
    }

    /// Standard search path plus environment overrides
    pub fn new() -> Self {
        let mut files = Vec::new();
        if let Some(dir) = Self::get_config_dir() {
            files.push(dir.join(defaults::CONFIG_FILE_NAME));
        }
        files.push(PathBuf::from(defaults::CONFIG_FILE_NAME));

        Self {
            files,
            env_prefix: Some(defaults::ENV_PREFIX.to_string()),
        }
    }

    /// Only the given files, no environment overrides
    pub fn from_files<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        Self {
            files: files.into_iter().map(|p| p.as_ref().to_path_buf()).collect(),
            env_prefix: None,
        }
    }

    /// Load and validate the configuration. Missing files are skipped.
    pub fn load_config(&self) -> Result<AppConfig, ConfigError> {
        let mut builder = config::Config::builder();

        for file in &self.files {
            debug!("Configuration source: {:?}", file);
            builder = builder.add_source(config::File::from(file.as_path()).required(false));
        }

        if let Some(prefix) = &self.env_prefix {
            builder = builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Default values, taken from the domain constants
pub mod defaults {
    use crate::domain::constants::{paths, report, source};

    pub const INPUT_DIR: &str = paths::DEFAULT_INPUT_DIR;
    pub const OUTPUT_FILE: &str = paths::DEFAULT_OUTPUT_FILE;
    pub const FILE_SUFFIX: &str = source::FILE_SUFFIX;
    pub const REPORT_TITLE: &str = report::DEFAULT_TITLE;

    pub const LOG_LEVEL: &str = "info";
    pub const LOG_DIR: &str = "logs";
    pub const LOG_FILE_NAME: &str = "patent-report.log";

    pub const APP_DIR_NAME: &str = "patent-report";
    pub const CONFIG_FILE_NAME: &str = "patent-report.toml";
    pub const ENV_PREFIX: &str = "PATENT_REPORT";
}
