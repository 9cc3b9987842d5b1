//! HTML parsing for saved patent search pages
//!
//! Classification is a plain substring search over the decoded page; the
//! result table is read through a tolerant HTML5 parser.

pub mod config;
pub mod error;
pub mod result_page_parser;

pub use config::ParsingConfig;
pub use error::{ParsingError, ParsingResult};
pub use result_page_parser::{ParsedResultPage, ResultPageParser, RowExtraction};
