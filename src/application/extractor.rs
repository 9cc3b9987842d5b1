//! Patent record extraction
//!
//! Walks the input directory, classifies each saved search page and turns it
//! into report records.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::{PLACEHOLDER, PatentRecord, ResultPageKind};
use crate::infrastructure::config::{
    AppConfig, ExtractionConfig, ResultCountMode, UnrecognizedPolicy,
};
use crate::infrastructure::encoding::decode_latin1;
use crate::infrastructure::parsing::{ParsingConfig, ResultPageParser};
use crate::infrastructure::report_error::{ReportError, ReportResult};

/// Per-run counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    pub files_scanned: usize,
    pub empty_files: usize,
    pub result_files: usize,
    pub unrecognized_files: usize,
    /// Qualifying rows left out for not having exactly four cells
    pub rows_dropped: usize,
    /// Pages with results whose table yielded no usable row
    pub result_files_without_rows: usize,
}

impl ExtractionStats {
    fn record_kind(&mut self, kind: ResultPageKind) {
        self.files_scanned += 1;
        match kind {
            ResultPageKind::Empty => self.empty_files += 1,
            ResultPageKind::HasResults => self.result_files += 1,
            ResultPageKind::Unrecognized => self.unrecognized_files += 1,
        }
    }
}

/// Records of a whole directory, in visiting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<PatentRecord>,
    pub stats: ExtractionStats,
}

/// Turns a directory of saved search pages into report records
pub struct PatentExtractor {
    parser: ResultPageParser,
    options: ExtractionConfig,
}

impl PatentExtractor {
    pub fn new(parsing: &ParsingConfig, options: ExtractionConfig) -> ReportResult<Self> {
        Ok(Self {
            parser: ResultPageParser::with_config(parsing)?,
            options,
        })
    }

    pub fn from_config(config: &AppConfig) -> ReportResult<Self> {
        Self::new(&config.parsing, config.extraction.clone())
    }

    /// Extract every matching page in `dir`.
    ///
    /// Files are read one at a time; any read error aborts the run.
    pub fn extract_directory(&self, dir: &Path) -> ReportResult<Extraction> {
        info!("Extracting patent records from {:?}", dir);

        let mut extraction = Extraction::default();

        for (file_name, path) in self.list_pages(dir)? {
            let content = read_page(&path)?;
            let records = self.extract_document(&file_name, &content, &mut extraction.stats);
            extraction.records.extend(records);
        }

        info!(
            "Scanned {} files: {} empty, {} with results, {} unrecognized, {} records",
            extraction.stats.files_scanned,
            extraction.stats.empty_files,
            extraction.stats.result_files,
            extraction.stats.unrecognized_files,
            extraction.records.len()
        );

        Ok(extraction)
    }

    /// Turn one decoded page into records and update the counters
    pub fn extract_document(
        &self,
        source_file: &str,
        content: &str,
        stats: &mut ExtractionStats,
    ) -> Vec<PatentRecord> {
        let page = self.parser.parse(content);
        stats.record_kind(page.kind);
        debug!("{}: classified as {}", source_file, page.kind);

        match page.kind {
            ResultPageKind::Empty => {
                let cnpj = page.cnpj.unwrap_or_else(|| PLACEHOLDER.to_string());
                debug!("{}: no results for CNPJ {}", source_file, cnpj);
                vec![PatentRecord::placeholder(source_file, cnpj)]
            }
            ResultPageKind::HasResults => {
                let cnpj = page.cnpj.unwrap_or_else(|| PLACEHOLDER.to_string());
                let rows = page.rows;
                let dropped = rows.dropped_rows();

                if dropped > 0 {
                    warn!(
                        "{}: dropped {} of {} result rows without exactly four cells",
                        source_file, dropped, rows.qualifying_rows
                    );
                    stats.rows_dropped += dropped;
                }

                if rows.rows.is_empty() {
                    warn!(
                        "{}: page reports results but no row has four cells, no records emitted",
                        source_file
                    );
                    stats.result_files_without_rows += 1;
                }

                let result_count = match self.options.result_count_mode {
                    ResultCountMode::QualifyingRows => rows.qualifying_rows,
                    ResultCountMode::EmittedRows => rows.rows.len(),
                };

                debug!(
                    "{}: {} results for CNPJ {} ({} emitted)",
                    source_file,
                    result_count,
                    cnpj,
                    rows.rows.len()
                );

                rows.rows
                    .into_iter()
                    .map(|row| {
                        PatentRecord::from_row(source_file, cnpj.as_str(), result_count, row)
                    })
                    .collect()
            }
            ResultPageKind::Unrecognized => match self.options.unrecognized_policy {
                UnrecognizedPolicy::Skip => {
                    warn!("{}: no recognized result phrase, skipping", source_file);
                    Vec::new()
                }
                UnrecognizedPolicy::TreatAsEmpty => {
                    warn!(
                        "{}: no recognized result phrase, treating as empty",
                        source_file
                    );
                    let cnpj = self
                        .parser
                        .extract_cnpj(content)
                        .unwrap_or_else(|| PLACEHOLDER.to_string());
                    vec![PatentRecord::placeholder(source_file, cnpj)]
                }
            },
        }
    }

    /// Regular files in `dir` whose name ends with the configured suffix
    fn list_pages(&self, dir: &Path) -> ReportResult<Vec<(String, PathBuf)>> {
        let entries = fs::read_dir(dir).map_err(|e| ReportError::read_dir(dir, e))?;

        let mut pages = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ReportError::read_dir(dir, e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();

            if !file_name.ends_with(&self.options.file_suffix) {
                continue;
            }

            let path = entry.path();
            if !path.is_file() {
                debug!("Skipping {:?}: not a regular file", path);
                continue;
            }

            pages.push((file_name, path));
        }

        if self.options.sort_entries {
            pages.sort_by(|a, b| a.0.cmp(&b.0));
        }

        debug!("Found {} pages in {:?}", pages.len(), dir);
        Ok(pages)
    }
}

/// Read a whole page and decode it as ISO-8859-1
fn read_page(path: &Path) -> ReportResult<String> {
    let bytes = fs::read(path).map_err(|e| ReportError::read_file(path, e))?;
    Ok(decode_latin1(&bytes))
}
