use chrono::{Datelike, NaiveDate};

use crate::error::DateParseError;

/// Wire and display format of holiday dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A named national holiday on a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holiday {
    name: String,
    date: NaiveDate,
}

impl Holiday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `(month, day)`, both 1-based
    pub fn month_day(&self) -> (u32, u32) {
        (self.date.month(), self.date.day())
    }
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// Month and day must be zero-padded; chrono on its own would also accept
/// `2025-1-5`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(DateParseError::Shape(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| DateParseError::Calendar(s.to_string()))
}

/// Format as zero-padded `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
