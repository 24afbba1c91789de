//! Domain types for the marketplace client.
//! Mirrors the backend's JSON contracts for listings, alerts, notifications and users.

pub mod alert;
pub mod error;
pub mod listing;
pub mod notification;
pub mod user;

pub use alert::*;
pub use error::*;
pub use listing::*;
pub use notification::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a backend timestamp for display.
///
/// The backend is not consistent about offsets, so RFC 3339, naive date-times and plain
/// dates are all accepted. Anything else is shown as-is.
pub fn format_timestamp(raw: &str) -> String {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%B %-d, %Y %H:%M").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%B %-d, %Y %H:%M").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Render a timestamp as a date only (used for "created on" labels).
pub fn format_date(raw: &str) -> String {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};

    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Group digits in thousands, `1234567` -> `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a price, keeping cents only when present.
pub fn format_price(value: f64) -> String {
    let whole = value.trunc() as i64;
    let cents = ((value - value.trunc()).abs() * 100.0).round() as i64;
    if cents == 0 {
        group_thousands(whole)
    } else {
        format!("{}.{:02}", group_thousands(whole), cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_fuel_type_display_parse() {
        assert_eq!(FuelType::Gasoline.to_string(), "gasoline");
        assert_eq!(FuelType::from_str("DIESEL").unwrap(), FuelType::Diesel);
        assert!(FuelType::from_str("steam").is_err());
    }

    #[test]
    fn test_transmission_display_parse() {
        assert_eq!(Transmission::Cvt.to_string(), "cvt");
        assert_eq!(
            Transmission::from_str("Automatic").unwrap(),
            Transmission::Automatic
        );
        assert!(Transmission::from_str("paddles").is_err());
    }

    #[test]
    fn test_format_timestamp_variants() {
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00Z"),
            "March 5, 2024 14:07"
        );
        assert_eq!(
            format_timestamp("2024-03-05T14:07:00.123"),
            "March 5, 2024 14:07"
        );
        assert_eq!(format_timestamp("2024-03-05"), "March 5, 2024");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_date("2024-03-05T14:07:00"), "2024-03-05");
    }

    #[test]
    fn test_number_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-45000), "-45,000");
        assert_eq!(format_price(15000.0), "15,000");
        assert_eq!(format_price(15000.5), "15,000.50");
    }
}
