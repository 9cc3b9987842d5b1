//! Parsing error types
//!
//! Raised while building a parser from its configuration. Parsing a document
//! itself never fails: malformed markup just yields no matching rows.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ParsingError {
    #[error("Invalid CSS selector: {selector} - {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Invalid pattern: {pattern} - {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String, field: String },
}

impl ParsingError {
    pub fn invalid_selector(selector: &str, reason: impl ToString) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid_pattern(pattern: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn configuration(field: &str, message: &str) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.to_string(),
        }
    }
}

pub type ParsingResult<T> = Result<T, ParsingError>;
