//! Per-tick driver state: the catalog, the cached answer and the data source.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::{info, warn};

use crate::catalog::HolidayCatalog;
use crate::holiday::{format_date, Holiday};
use crate::screen::Frame;
use crate::selector::ClosestHolidaySelector;
use crate::source::HolidaySource;

/// Everything the control loop mutates, owned by `main`.
pub struct App<S> {
    source: S,
    selector: ClosestHolidaySelector,
    catalog: HolidayCatalog,
    closest: Option<Holiday>,
    current_year: Option<i32>,
}

impl<S: HolidaySource> App<S> {
    pub fn new(source: S, selector: ClosestHolidaySelector) -> Self {
        Self {
            source,
            selector,
            catalog: HolidayCatalog::new(),
            closest: None,
            current_year: None,
        }
    }

    pub fn catalog(&self) -> &HolidayCatalog {
        &self.catalog
    }

    /// Cached nearest holiday, `None` until one has been found
    pub fn closest(&self) -> Option<&Holiday> {
        self.closest.as_ref()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// One pass of the control loop: refresh holiday data for `now` and lay
    /// out the screen.
    pub fn tick(&mut self, now: NaiveDateTime) -> Frame {
        self.refresh(now.date());
        Frame::dashboard(now, self.closest.as_ref())
    }

    /// Bring the cached nearest holiday up to date for `today`.
    ///
    /// Loads the current year when missing. A cached holiday stays while the
    /// selector still considers it current, or until the current year is
    /// ingested. When the search
    /// over a loaded current year comes up empty the following year is loaded
    /// and the search retried once; if that fails too the previous answer is
    /// kept.
    pub fn refresh(&mut self, today: NaiveDate) -> Option<&Holiday> {
        let year = today.year();
        self.enter_year(year);

        let mut cache_valid = self
            .closest
            .as_ref()
            .is_some_and(|h| self.selector.is_current(h, today));
        if !self.catalog.is_loaded(year) && self.load(year) {
            // Anything cached before this year arrived may skip nearer dates
            cache_valid = false;
        }

        if !cache_valid {
            let mut found = self.selector.find_closest(&self.catalog, today).cloned();
            // Next year is only consulted once this one is known to be exhausted
            if found.is_none() && self.catalog.is_loaded(year) {
                let next = year + 1;
                if self.catalog.is_loaded(next) || self.load(next) {
                    found = self.selector.find_closest(&self.catalog, today).cloned();
                }
            }

            match found {
                Some(holiday) => {
                    info!(
                        "closest holiday: {} {}",
                        format_date(holiday.date()),
                        holiday.name()
                    );
                    self.closest = Some(holiday);
                }
                None => warn!("no holiday on or after {}", format_date(today)),
            }
        }

        self.closest.as_ref()
    }

    /// Prune holidays of years that are over once the clock reaches a new year.
    fn enter_year(&mut self, year: i32) {
        if self.current_year == Some(year) {
            return;
        }
        let dropped = self.catalog.prune_before(year);
        if dropped > 0 {
            info!("year {}: dropped {} past holidays", year, dropped);
        }
        self.current_year = Some(year);
    }

    /// Fetch and ingest `year`. A failed fetch leaves the year unloaded so the
    /// next tick asks again.
    fn load(&mut self, year: i32) -> bool {
        info!("fetching holidays for {}", year);
        match self.source.fetch(year) {
            Ok(entries) => {
                self.catalog.append(year, &entries);
                true
            }
            Err(e) => {
                warn!("holiday fetch for {} failed: {}", year, e);
                false
            }
        }
    }
}
