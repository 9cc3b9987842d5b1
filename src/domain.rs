//! Domain module - Core entities of the patent report
//!
//! Records, page classifications and the literal values of the source pages.

pub mod constants;
pub mod record;
pub mod result_page;

pub use constants::PLACEHOLDER;
pub use record::{PatentRecord, PatentRow};
pub use result_page::ResultPageKind;
