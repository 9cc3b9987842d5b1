//! patent-report - Consolidated report of saved patent search pages
//!
//! Reads a directory of saved patent-office search pages, one per company
//! CNPJ, and writes a single HTML table with one row per patent application.

// Module declarations
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{GenerateReportUseCase, ReportSummary};
pub use infrastructure::{AppConfig, ConfigManager};
