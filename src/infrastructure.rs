//! Infrastructure layer for configuration, parsing, encoding and report output
//!
//! Everything that touches the filesystem, the HTML parser or the logging
//! backend lives here.

pub mod config; // Layered configuration
pub mod encoding; // ISO-8859-1 codec
pub mod logging; // Logging infrastructure
pub mod parsing; // Result page parsing
pub mod parsing_error;
pub mod report_error;
pub mod report_writer;

// Re-export commonly used items
pub use config::{
    AppConfig, ConfigError, ConfigManager, ExtractionConfig, LoggingConfig, PathsConfig,
    ReportConfig, ResultCountMode, UnrecognizedPolicy,
};
pub use logging::{get_log_directory, init_logging, init_logging_with_config, log_system_info};
pub use parsing::{ParsedResultPage, ParsingConfig, ParsingError, ParsingResult, ResultPageParser};
pub use report_error::{ReportError, ReportResult};
pub use report_writer::HtmlReportWriter;
