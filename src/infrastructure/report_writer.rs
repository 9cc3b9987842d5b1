//! HTML report writer
//!
//! Serializes records into one flat table document, encoded as ISO-8859-1.
//! The markup is a single unbroken line, as the legacy report was.

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use super::config::ReportConfig;
use super::encoding::encode_latin1;
use super::report_error::{ReportError, ReportResult};
use crate::domain::PatentRecord;
use crate::domain::constants::report::HEADER_COLUMNS;

/// Writes the consolidated patent table
#[derive(Debug, Clone)]
pub struct HtmlReportWriter {
    escape_html: bool,
    title: String,
}

impl HtmlReportWriter {
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            escape_html: config.escape_html,
            title: config.title.clone(),
        }
    }

    /// Render the whole document in memory
    pub fn render(&self, records: &[PatentRecord]) -> String {
        let mut html = String::with_capacity(256 + records.len() * 160);

        html.push_str("<html><head><title>");
        html.push_str(&self.text(&self.title));
        html.push_str("</title></head><body>");

        html.push_str("<table border='1'>");
        html.push_str("<tr>");
        for column in HEADER_COLUMNS {
            html.push_str("<th>");
            html.push_str(column);
            html.push_str("</th>");
        }
        html.push_str("</tr>");

        for record in records {
            html.push_str("<tr>");
            for cell in record.cells() {
                html.push_str("<td>");
                html.push_str(&self.text(&cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>");
        }

        html.push_str("</table>");
        html.push_str("</body></html>");
        html
    }

    /// Render, encode and write the report, replacing any existing file.
    /// Returns the number of bytes written.
    pub fn write(&self, records: &[PatentRecord], output: &Path) -> ReportResult<usize> {
        let html = self.render(records);
        let bytes = encode_latin1(&html).map_err(|source| ReportError::Encode {
            path: output.to_path_buf(),
            source,
        })?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ReportError::write_file(output, e))?;
        }

        fs::write(output, &bytes).map_err(|e| ReportError::write_file(output, e))?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), output);
        info!("Report with {} rows written to {:?}", records.len(), output);
        Ok(bytes.len())
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape_html {
            html_escape(value)
        } else {
            Cow::Borrowed(value)
        }
    }
}

impl Default for HtmlReportWriter {
    fn default() -> Self {
        Self::new(&ReportConfig::default())
    }
}

/// Escape the five markup-significant characters
pub fn html_escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}
