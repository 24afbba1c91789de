//! Client-side validation errors.
//!
//! These are raised before any request is sent; the UI shows them as a blocking alert
//! and leaves the form open.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error("Year min must be less than or equal to Year max")]
    YearRangeInverted,

    #[error("'{value}' is not a valid {field}")]
    NotAnOption { field: &'static str, value: String },

    #[error("Unknown field '{0}'")]
    UnknownField(String),
}
