//! Date validation
//!
//! Parses user-supplied date strings and checks them against the resolved
//! dataset bounds. Pure functions; every failure is a descriptive value the
//! API layer turns into a 400 response.

use crate::climate::bounds::DateBounds;
use crate::climate::error::ValidationError;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Shape accepted for path dates: 4-digit year, 1-or-2-digit month and day,
/// hyphen-separated. Calendar validity is checked by the chrono parse after.
fn date_shape() -> &'static Regex {
    static SHAPE: OnceLock<Regex> = OnceLock::new();
    SHAPE.get_or_init(|| Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}$").expect("date shape pattern"))
}

/// Parse a raw date string and enforce the dataset bounds.
///
/// Accepts `yyyy-m-d`, `yyyy-mm-d`, `yyyy-m-dd` and `yyyy-mm-dd`. Anything
/// else (shape mismatch, impossible calendar date) is
/// [`ValidationError::Malformed`]; a real date outside `bounds` is
/// [`ValidationError::OutOfRange`].
pub fn parse_bounded_date(raw: &str, bounds: &DateBounds) -> Result<NaiveDate, ValidationError> {
    if !date_shape().is_match(raw) {
        return Err(ValidationError::Malformed {
            input: raw.to_string(),
        });
    }

    let date =
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::Malformed {
            input: raw.to_string(),
        })?;

    if !bounds.contains(date) {
        return Err(ValidationError::OutOfRange {
            date,
            oldest: bounds.oldest,
            newest: bounds.newest,
        });
    }

    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn bounds() -> DateBounds {
        DateBounds {
            oldest: date("2010-01-01"),
            newest: date("2017-08-23"),
        }
    }

    #[test]
    fn test_accepts_all_padding_variants() {
        let b = bounds();
        assert_eq!(parse_bounded_date("2017-8-3", &b).unwrap(), date("2017-08-03"));
        assert_eq!(parse_bounded_date("2017-08-3", &b).unwrap(), date("2017-08-03"));
        assert_eq!(parse_bounded_date("2017-8-03", &b).unwrap(), date("2017-08-03"));
        assert_eq!(parse_bounded_date("2017-08-03", &b).unwrap(), date("2017-08-03"));
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let b = bounds();
        for raw in [
            "2017/08/03",
            "17-08-03",
            "20170803",
            "2017-08-03T00:00:00",
            "2017-08",
            "2017-08-03extra",
            "latest",
            "",
        ] {
            assert!(
                matches!(
                    parse_bounded_date(raw, &b),
                    Err(ValidationError::Malformed { .. })
                ),
                "expected Malformed for {raw:?}"
            );
        }
    }

    #[test]
    fn test_rejects_impossible_calendar_dates() {
        let b = bounds();
        assert!(matches!(
            parse_bounded_date("2017-13-01", &b),
            Err(ValidationError::Malformed { .. })
        ));
        assert!(matches!(
            parse_bounded_date("2017-02-30", &b),
            Err(ValidationError::Malformed { .. })
        ));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let b = bounds();

        let err = parse_bounded_date("2017-08-24", &b).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert!(err.to_string().contains("2010-01-01..2017-08-23"));

        assert!(matches!(
            parse_bounded_date("2009-12-31", &b),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_accepts_exact_bounds() {
        let b = bounds();
        assert_eq!(parse_bounded_date("2010-01-01", &b).unwrap(), b.oldest);
        assert_eq!(parse_bounded_date("2017-08-23", &b).unwrap(), b.newest);
    }
}
