//! Result page parser
//!
//! Classifies a saved search page, pulls the depositor CNPJ out of the query
//! summary and reads the striped rows of the result table.

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use super::{ParsingConfig, ParsingError, ParsingResult};
use crate::domain::constants::source::ROW_COLOR_ATTRIBUTE;
use crate::domain::{PatentRow, ResultPageKind};

/// Rows read from one result table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowExtraction {
    /// Rows carrying one of the stripe colours, whatever their shape
    pub qualifying_rows: usize,

    /// Qualifying rows with exactly four cells, in document order
    pub rows: Vec<PatentRow>,
}

impl RowExtraction {
    /// Qualifying rows that were dropped for having the wrong cell count
    pub const fn dropped_rows(&self) -> usize {
        self.qualifying_rows - self.rows.len()
    }
}

/// Everything the extractor needs from one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResultPage {
    pub kind: ResultPageKind,
    pub cnpj: Option<String>,
    pub rows: RowExtraction,
}

/// Parser for saved patent-office search pages
pub struct ResultPageParser {
    empty_sentinel: String,
    results_sentinel: String,
    cnpj_regex: Regex,
    row_colors: Vec<String>,
    row_selector: Selector,
    cell_selector: Selector,
}

impl ResultPageParser {
    /// Create a parser with the patent office's default markers
    pub fn new() -> ParsingResult<Self> {
        Self::with_config(&ParsingConfig::default())
    }

    /// Create a parser with custom markers
    pub fn with_config(config: &ParsingConfig) -> ParsingResult<Self> {
        if config.empty_sentinel.is_empty() {
            return Err(ParsingError::configuration(
                "empty_sentinel",
                "sentinel phrase must not be empty",
            ));
        }
        if config.results_sentinel.is_empty() {
            return Err(ParsingError::configuration(
                "results_sentinel",
                "sentinel phrase must not be empty",
            ));
        }
        if config.row_colors.is_empty() {
            return Err(ParsingError::configuration(
                "row_colors",
                "at least one row colour is required",
            ));
        }

        let cnpj_regex = Regex::new(&config.cnpj_pattern)
            .map_err(|e| ParsingError::invalid_pattern(&config.cnpj_pattern, e))?;
        if cnpj_regex.captures_len() < 2 {
            return Err(ParsingError::invalid_pattern(
                &config.cnpj_pattern,
                "pattern needs a capture group for the CNPJ value",
            ));
        }

        Ok(Self {
            empty_sentinel: config.empty_sentinel.clone(),
            results_sentinel: config.results_sentinel.clone(),
            cnpj_regex,
            row_colors: config.row_colors.clone(),
            row_selector: Self::compile_selector(&format!("tr[{ROW_COLOR_ATTRIBUTE}]"))?,
            cell_selector: Self::compile_selector("td")?,
        })
    }

    fn compile_selector(selector: &str) -> ParsingResult<Selector> {
        Selector::parse(selector).map_err(|e| ParsingError::invalid_selector(selector, e))
    }

    /// Classify a page by its sentinel phrases. The empty sentinel wins when both appear.
    pub fn classify(&self, content: &str) -> ResultPageKind {
        if content.contains(&self.empty_sentinel) {
            ResultPageKind::Empty
        } else if content.contains(&self.results_sentinel) {
            ResultPageKind::HasResults
        } else {
            ResultPageKind::Unrecognized
        }
    }

    /// First CNPJ echoed in the query summary, if any
    pub fn extract_cnpj(&self, content: &str) -> Option<String> {
        self.cnpj_regex
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Read the striped rows of the result table.
    ///
    /// Markup errors are absorbed by the HTML5 parser; a page it cannot make
    /// sense of simply has no qualifying rows.
    pub fn extract_rows(&self, content: &str) -> RowExtraction {
        let document = Html::parse_document(content);
        if !document.errors.is_empty() {
            trace!("Tolerated {} markup errors", document.errors.len());
        }

        let mut extraction = RowExtraction::default();

        for row in document
            .select(&self.row_selector)
            .filter(|row| self.is_qualifying_row(row))
        {
            extraction.qualifying_rows += 1;

            let cells: Vec<String> = row.select(&self.cell_selector).map(cell_text).collect();
            let cell_count = cells.len();

            match PatentRow::from_cells(cells) {
                Some(patent_row) => extraction.rows.push(patent_row),
                None => debug!(
                    "Skipping result row {} with {} cells",
                    extraction.qualifying_rows, cell_count
                ),
            }
        }

        extraction
    }

    /// Classify the page and extract whatever its kind calls for
    pub fn parse(&self, content: &str) -> ParsedResultPage {
        let kind = self.classify(content);

        let (cnpj, rows) = match kind {
            ResultPageKind::Empty => (self.extract_cnpj(content), RowExtraction::default()),
            ResultPageKind::HasResults => (self.extract_cnpj(content), self.extract_rows(content)),
            ResultPageKind::Unrecognized => (None, RowExtraction::default()),
        };

        ParsedResultPage { kind, cnpj, rows }
    }

    fn is_qualifying_row(&self, row: &ElementRef) -> bool {
        row.value()
            .attr(ROW_COLOR_ATTRIBUTE)
            .is_some_and(|color| self.row_colors.iter().any(|c| c == color))
    }
}

/// Text of a cell: every text fragment trimmed, empty fragments dropped, joined
fn cell_text(cell: ElementRef) -> String {
    cell.text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}
