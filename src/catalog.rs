//! In-memory store of the national holidays fetched so far.

use std::collections::{BTreeSet, VecDeque};

use chrono::Datelike;
use log::{info, warn};

use crate::holiday::{parse_date, Holiday};
use crate::source::RawHoliday;

/// Outcome of ingesting one year of records
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestReport {
    pub accepted: usize,
    pub not_national: usize,
    pub malformed: usize,
}

/// Ordered collection of national holidays.
///
/// Order is significant: records are inserted at the front, so a year that
/// the API delivers newest-first ends up oldest-first here, and the selector
/// breaks ties by this order. Duplicate dates are kept.
#[derive(Debug, Default, Clone)]
pub struct HolidayCatalog {
    holidays: VecDeque<Holiday>,
    loaded_years: BTreeSet<i32>,
}

impl HolidayCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Holidays in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Holiday> + '_ {
        self.holidays.iter()
    }

    /// Whether `year` has been ingested, even if it held no national holidays
    pub fn is_loaded(&self, year: i32) -> bool {
        self.loaded_years.contains(&year)
    }

    pub fn loaded_years(&self) -> impl Iterator<Item = i32> + '_ {
        self.loaded_years.iter().copied()
    }

    /// Ingest one year's records.
    ///
    /// Only national holidays are kept. A record whose date is not a strict
    /// `YYYY-MM-DD` calendar date is logged and skipped; it never touches the
    /// entries already stored.
    pub fn append(&mut self, year: i32, entries: &[RawHoliday]) -> IngestReport {
        let mut report = IngestReport::default();

        for entry in entries {
            if !entry.is_national_holiday {
                report.not_national += 1;
                continue;
            }

            match parse_date(&entry.holiday_date) {
                Ok(date) => {
                    if date.year() != year {
                        warn!(
                            "holiday {:?} dated {} arrived with year {}",
                            entry.holiday_name, entry.holiday_date, year
                        );
                    }
                    self.holidays
                        .push_front(Holiday::new(entry.holiday_name.as_str(), date));
                    report.accepted += 1;
                }
                Err(e) => {
                    warn!("skipping holiday {:?}: {}", entry.holiday_name, e);
                    report.malformed += 1;
                }
            }
        }

        self.loaded_years.insert(year);
        info!(
            "holidays {}: {} national, {} other, {} malformed ({} stored)",
            year,
            report.accepted,
            report.not_national,
            report.malformed,
            self.holidays.len()
        );
        report
    }

    /// Drop every holiday dated before `year`, and forget those years as
    /// loaded. Returns the number of holidays removed.
    pub fn prune_before(&mut self, year: i32) -> usize {
        let before = self.holidays.len();
        self.holidays.retain(|h| h.date().year() >= year);
        self.loaded_years.retain(|y| *y >= year);
        before - self.holidays.len()
    }
}
