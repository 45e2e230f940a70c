//! Errors surfaced by statement parsing

use thiserror::Error;

use crate::Field;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing input")]
    InputMissing,

    #[error("{field} is missing or empty")]
    MandatoryFieldMissing { field: Field },

    #[error("missing fields: {}", describe_missing(.missing))]
    IncompleteRecord { missing: Vec<Field> },
}

fn describe_missing(missing: &[Field]) -> String {
    missing
        .iter()
        .map(|f| format!("{}=null", f.label()))
        .collect::<Vec<_>>()
        .join(", ")
}
