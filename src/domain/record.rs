use std::borrow::Cow;

use super::constants::{PLACEHOLDER, report::COLUMN_COUNT};

/// The four cells of one qualifying row of a result table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatentRow {
    pub application_number: String,
    pub deposit_date: String,
    pub title: String,
    pub ipc_code: String,
}

impl PatentRow {
    /// Map cells positionally. Returns `None` unless exactly four cells are given.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let [application_number, deposit_date, title, ipc_code]: [String; 4] =
            cells.try_into().ok()?;

        Some(Self {
            application_number,
            deposit_date,
            title,
            ipc_code,
        })
    }
}

/// One row of the consolidated report.
///
/// Fields are private so a record cannot change once it has been extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatentRecord {
    source_file: String,
    cnpj: String,
    result_count: usize,
    application_number: String,
    deposit_date: String,
    title: String,
    ipc_code: String,
}

impl PatentRecord {
    /// Record for a file whose query found nothing
    pub fn placeholder(source_file: impl Into<String>, cnpj: impl Into<String>) -> Self {
        Self {
            source_file: source_file.into(),
            cnpj: cnpj.into(),
            result_count: 0,
            application_number: PLACEHOLDER.to_string(),
            deposit_date: PLACEHOLDER.to_string(),
            title: PLACEHOLDER.to_string(),
            ipc_code: PLACEHOLDER.to_string(),
        }
    }

    /// Record for one application listed in a result table
    pub fn from_row(
        source_file: impl Into<String>,
        cnpj: impl Into<String>,
        result_count: usize,
        row: PatentRow,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            cnpj: cnpj.into(),
            result_count,
            application_number: row.application_number,
            deposit_date: row.deposit_date,
            title: row.title,
            ipc_code: row.ipc_code,
        }
    }

    pub fn source_file(&self) -> &str {
        &self.source_file
    }

    pub fn cnpj(&self) -> &str {
        &self.cnpj
    }

    pub const fn result_count(&self) -> usize {
        self.result_count
    }

    pub fn application_number(&self) -> &str {
        &self.application_number
    }

    pub fn deposit_date(&self) -> &str {
        &self.deposit_date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn ipc_code(&self) -> &str {
        &self.ipc_code
    }

    /// True when this is the single row emitted for an empty result page
    pub fn is_placeholder(&self) -> bool {
        self.result_count == 0
            && [
                &self.application_number,
                &self.deposit_date,
                &self.title,
                &self.ipc_code,
            ]
            .iter()
            .all(|field| field.as_str() == PLACEHOLDER)
    }

    /// All seven fields as text, in report column order
    pub fn cells(&self) -> [Cow<'_, str>; COLUMN_COUNT] {
        [
            Cow::Borrowed(self.source_file.as_str()),
            Cow::Borrowed(self.cnpj.as_str()),
            Cow::Owned(self.result_count.to_string()),
            Cow::Borrowed(self.application_number.as_str()),
            Cow::Borrowed(self.deposit_date.as_str()),
            Cow::Borrowed(self.title.as_str()),
            Cow::Borrowed(self.ipc_code.as_str()),
        ]
    }
}
