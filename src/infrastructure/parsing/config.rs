//! Parsing configuration for saved search pages
//!
//! Centralized sentinel phrases, CNPJ pattern and row markers.

use serde::{Deserialize, Serialize};

use crate::domain::constants::source;

/// Main parsing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Phrase that marks a page whose query matched nothing
    pub empty_sentinel: String,

    /// Phrase that marks a page listing applications
    pub results_sentinel: String,

    /// Regex locating the depositor CNPJ; capture group 1 is the value
    pub cnpj_pattern: String,

    /// `bgcolor` values that identify result rows
    pub row_colors: Vec<String>,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            empty_sentinel: source::EMPTY_SENTINEL.to_string(),
            results_sentinel: source::RESULTS_SENTINEL.to_string(),
            cnpj_pattern: source::CNPJ_PATTERN.to_string(),
            row_colors: source::ROW_COLORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
