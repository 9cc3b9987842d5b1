//! Report generation use case
//!
//! Runs the extractor over the whole input directory, then hands the complete
//! record list to the report writer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::info;

use super::extractor::{ExtractionStats, PatentExtractor};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::report_error::ReportResult;
use crate::infrastructure::report_writer::HtmlReportWriter;

/// Outcome of one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub stats: ExtractionStats,
    pub records_written: usize,
    pub bytes_written: usize,
    pub output_file: PathBuf,
    pub elapsed: Duration,
}

pub struct GenerateReportUseCase {
    config: AppConfig,
    extractor: PatentExtractor,
    writer: HtmlReportWriter,
}

impl GenerateReportUseCase {
    pub fn new(config: AppConfig) -> ReportResult<Self> {
        config.validate()?;

        let extractor = PatentExtractor::from_config(&config)?;
        let writer = HtmlReportWriter::new(&config.report);

        Ok(Self {
            config,
            extractor,
            writer,
        })
    }

    /// Extract everything, then write the report once
    pub fn execute(&self) -> ReportResult<ReportSummary> {
        let started = Instant::now();
        let paths = &self.config.paths;

        let extraction = self.extractor.extract_directory(&paths.input_dir)?;
        let bytes_written = self
            .writer
            .write(&extraction.records, &paths.output_file)?;

        let summary = ReportSummary {
            stats: extraction.stats,
            records_written: extraction.records.len(),
            bytes_written,
            output_file: paths.output_file.clone(),
            elapsed: started.elapsed(),
        };

        info!(
            "Report complete: {} files, {} rows, {} dropped, {:?}",
            summary.stats.files_scanned,
            summary.records_written,
            summary.stats.rows_dropped,
            summary.elapsed
        );

        Ok(summary)
    }
}
