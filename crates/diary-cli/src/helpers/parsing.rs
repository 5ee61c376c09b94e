//! Parsing helpers for dates and years.

use chrono::{Datelike, Local, NaiveDate};

use diary_core::calendar::parse_date_key;

use crate::errors::CliError;

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn resolve_date(value: Option<&str>) -> anyhow::Result<NaiveDate> {
    match value {
        Some(raw) => parse_date_key(raw.trim())
            .map_err(|e| CliError::invalid_input(e.to_string()).into()),
        None => Ok(today()),
    }
}

/// An explicit year or the current one.
pub fn resolve_year(value: Option<i32>) -> i32 {
    value.unwrap_or_else(|| today().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_date_explicit() {
        let date = resolve_date(Some(" 2024-02-29 ")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_resolve_date_invalid_is_input_error() {
        let err = resolve_date(Some("29/02/2024")).unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        assert_eq!(resolve_date(None).unwrap(), today());
    }

    #[test]
    fn test_resolve_year() {
        assert_eq!(resolve_year(Some(1999)), 1999);
        assert_eq!(resolve_year(None), today().year());
    }
}
