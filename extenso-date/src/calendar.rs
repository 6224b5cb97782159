//! Validated calendar dates and `dd/mm/yyyy` parsing.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{DateError, DateResult};

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("Invalid date pattern regex")
});

/// A real calendar day with a four-digit, non-negative year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Validate day/month/year. Rejects impossible days (31/04, 29/02 outside
    /// leap years) and years outside `0..=9999`.
    pub fn new(day: u32, month: u32, year: i32) -> DateResult<Self> {
        let invalid = || DateError::Invalid { day, month, year };
        if !(0..=9999).contains(&year) {
            return Err(invalid());
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.day(), date.month(), date.year())
    }
}

/// Parse a Brazilian `dd/mm/yyyy` date. Both day and month need two digits.
pub fn parse_date(input: &str) -> DateResult<CalendarDate> {
    let malformed = || DateError::Malformed {
        input: input.to_string(),
    };
    let caps = DATE_PATTERN.captures(input).ok_or_else(malformed)?;

    // the pattern only admits ASCII digits, so these cannot overflow
    let field = |i: usize| caps[i].parse::<u32>().map_err(|_| malformed());
    let day = field(1)?;
    let month = field(2)?;
    let year = field(3)? as i32;

    CalendarDate::new(day, month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_dates() {
        let date = parse_date("15/06/1990").unwrap();
        assert_eq!((date.day(), date.month(), date.year()), (15, 6, 1990));

        let date = parse_date("29/02/2024").unwrap();
        assert_eq!(date.day(), 29);
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "abc", "2024-01-01", "01-01-2024", "1/1/2024", "01/01/24", " 01/01/2024"] {
            assert_eq!(
                parse_date(input),
                Err(DateError::Malformed {
                    input: input.to_string()
                }),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            parse_date("32/01/2024"),
            Err(DateError::Invalid {
                day: 32,
                month: 1,
                year: 2024
            })
        );
        assert!(parse_date("01/13/2024").is_err());
        assert!(parse_date("00/01/2024").is_err());
        assert!(parse_date("29/02/2023").is_err());
        assert!(parse_date("31/04/2024").is_err());
    }

    #[test]
    fn year_range() {
        assert!(CalendarDate::new(1, 1, 0).is_ok());
        assert!(CalendarDate::new(31, 12, 9999).is_ok());
        assert!(CalendarDate::new(1, 1, 10_000).is_err());
        assert!(CalendarDate::new(1, 1, -1).is_err());
    }

    #[test]
    fn invalid_date_message() {
        let err = CalendarDate::new(30, 2, 2024).unwrap_err();
        assert_eq!(err.to_string(), "30/02/2024 is not a calendar date");
    }
}
