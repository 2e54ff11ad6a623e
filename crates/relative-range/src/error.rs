//! Error types for relative-range operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RangeError {
    #[error("{value} isn't an allowed value for RelativeRange.{field}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),

    #[error("Invalid locale data: {0}")]
    InvalidLocale(#[from] serde_json::Error),
}

impl RangeError {
    pub(crate) fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        RangeError::InvalidValue {
            field,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RangeError>;
