//! Application layer module
//!
//! Orchestrates extraction and report output.

pub mod extractor;
pub mod use_cases;

pub use extractor::{Extraction, ExtractionStats, PatentExtractor};
pub use use_cases::{GenerateReportUseCase, ReportSummary};
