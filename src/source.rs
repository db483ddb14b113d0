//! Remote holiday data: the wire record, the fetch seam and response parsing.

use serde::Deserialize;

use crate::error::FetchError;

/// Largest response body the device buffers
pub const MAX_RESPONSE_BYTES: usize = 32 * 1024;

/// One record of the holiday API's JSON array.
///
/// Every field defaults so that a single incomplete record is rejected on its
/// own at ingestion instead of failing the whole year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawHoliday {
    #[serde(default)]
    pub holiday_date: String,
    #[serde(default)]
    pub holiday_name: String,
    #[serde(default)]
    pub is_national_holiday: bool,
}

impl RawHoliday {
    pub fn new(date: &str, name: &str, is_national_holiday: bool) -> Self {
        Self {
            holiday_date: date.to_string(),
            holiday_name: name.to_string(),
            is_national_holiday,
        }
    }
}

/// Supplier of one year's holiday records.
pub trait HolidaySource {
    fn fetch(&mut self, year: i32) -> Result<Vec<RawHoliday>, FetchError>;
}

/// Endpoint for one year, e.g. `https://api-harilibur.vercel.app/api?year=2025`
pub fn holidays_url(base_url: &str, year: i32) -> String {
    let sep = if base_url.contains('?') { '&' } else { '?' };
    format!("{}{}year={}", base_url, sep, year)
}

/// Decode a response body into records, in the order the API sent them.
pub fn parse_holidays(body: &str) -> Result<Vec<RawHoliday>, FetchError> {
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(FetchError::TooLarge {
            limit: MAX_RESPONSE_BYTES,
        });
    }
    Ok(serde_json::from_str(body)?)
}
