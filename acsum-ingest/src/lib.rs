//! acsum-ingest: A/C Summary extraction from pasted brokerage statement text.

pub mod fields;
pub mod parsers;
pub mod types;

pub use parsers::ac_summary::{StatementParser, parse_ac_summary_text};
pub use types::{AmountMatch, Extraction};
