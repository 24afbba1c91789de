//! Form models behind the views.
//!
//! Each form keeps its inputs as the raw text the user typed and converts them into a
//! request body on submit, so a half-typed number never loses what was entered.

pub mod alert;
pub mod auth;
pub mod listing;

pub use alert::{AlertForm, AlertFormMode};
pub use auth::{SignInForm, SignUpForm};
pub use listing::ListingForm;

use crate::domain::ValidationError;
use std::str::FromStr;

/// Field-level editing shared by every form.
pub trait Form {
    /// Replace a text field. Field names are the ones shown by [`Form::fields`].
    fn set(&mut self, field: &str, value: &str) -> Result<(), ValidationError>;

    /// Flip a checkbox field.
    fn toggle(&mut self, field: &str) -> Result<(), ValidationError> {
        Err(ValidationError::UnknownField(field.to_string()))
    }

    /// `(name, current value)` pairs in display order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Resolve `value` against a select's options, case-insensitively, returning the option's
/// own spelling. A select without options degrades to free text.
pub fn pick_option(
    field: &'static str,
    value: &str,
    options: &[String],
) -> Result<String, ValidationError> {
    if options.is_empty() {
        return Ok(value.to_string());
    }
    let wanted = value.to_lowercase();
    options
        .iter()
        .find(|o| o.to_lowercase() == wanted)
        .cloned()
        .ok_or_else(|| ValidationError::NotAnOption {
            field,
            value: value.to_string(),
        })
}

pub(crate) fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(value)
    }
}

pub(crate) fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, ValidationError> {
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })
}

/// Blank means zero, as the backend expects for unset alert bounds.
pub(crate) fn number_or_zero<T: FromStr + Default>(
    field: &'static str,
    value: &str,
) -> Result<T, ValidationError> {
    if value.trim().is_empty() {
        Ok(T::default())
    } else {
        parse_number(field, value)
    }
}

pub(crate) fn normalize_key(field: &str) -> String {
    field.trim().to_lowercase().replace('-', "_")
}
