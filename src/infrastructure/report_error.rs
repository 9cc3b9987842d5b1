//! Fatal errors of a report run
//!
//! Anything here aborts the run. Recoverable conditions (missing CNPJ,
//! malformed rows, unrecognized pages) never surface as errors.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::config::ConfigError;
use super::encoding::UnencodableChar;
use super::parsing_error::ParsingError;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read input directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode report {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: UnencodableChar,
    },

    #[error("Failed to write report {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parsing(#[from] ParsingError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ReportError {
    pub fn read_dir(path: &Path, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn read_file(path: &Path, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write_file(path: &Path, source: std::io::Error) -> Self {
        Self::WriteFile {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type ReportResult<T> = Result<T, ReportError>;
