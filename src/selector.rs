//! Picking the holiday to show from the catalog.

use chrono::{Datelike, NaiveDate};

use crate::catalog::HolidayCatalog;
use crate::holiday::Holiday;

/// How a candidate holiday is compared with the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Year-blind two-step check on month then day, first hit in catalog
    /// order wins. Holidays of a following year in earlier months never
    /// qualify, while one in a later month can win over this year's entries.
    MonthDay,
    /// Full date on or after the reference; the earliest such date wins,
    /// catalog order breaks ties.
    #[default]
    FullDate,
}

impl MatchPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchPolicy::MonthDay => "month-day",
            MatchPolicy::FullDate => "full-date",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month-day" | "monthday" => Some(MatchPolicy::MonthDay),
            "full-date" | "fulldate" => Some(MatchPolicy::FullDate),
            _ => None,
        }
    }
}

/// The month/day predicate of [`MatchPolicy::MonthDay`].
///
/// A candidate in an earlier month is rejected; otherwise it is rejected when
/// its day of month is smaller than the reference's.
pub fn month_day_qualifies(reference: NaiveDate, candidate: NaiveDate) -> bool {
    if reference.month() > candidate.month() {
        return false;
    }
    reference.day() <= candidate.day()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ClosestHolidaySelector {
    policy: MatchPolicy,
}

impl ClosestHolidaySelector {
    pub const fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    /// Whether an earlier answer still stands for `reference`: its date has not
    /// passed and, under [`MatchPolicy::MonthDay`], it still passes the
    /// month/day check.
    pub fn is_current(&self, holiday: &Holiday, reference: NaiveDate) -> bool {
        if holiday.date() < reference {
            return false;
        }
        match self.policy {
            MatchPolicy::MonthDay => month_day_qualifies(reference, holiday.date()),
            MatchPolicy::FullDate => true,
        }
    }

    /// The holiday nearest to `reference` (on or after it), or `None`.
    pub fn find_closest<'c>(
        &self,
        catalog: &'c HolidayCatalog,
        reference: NaiveDate,
    ) -> Option<&'c Holiday> {
        match self.policy {
            MatchPolicy::MonthDay => catalog
                .iter()
                .find(|h| month_day_qualifies(reference, h.date())),
            MatchPolicy::FullDate => catalog
                .iter()
                .filter(|h| h.date() >= reference)
                .min_by_key(|h| h.date()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RawHoliday;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Ingest records given newest-first, the way the API sends them
    fn catalog_from_api(year: i32, records: &[(&str, &str)]) -> HolidayCatalog {
        let raw: Vec<RawHoliday> = records
            .iter()
            .map(|(date, name)| RawHoliday::new(date, name, true))
            .collect();
        let mut catalog = HolidayCatalog::new();
        catalog.append(year, &raw);
        catalog
    }

    fn christmas_catalog() -> HolidayCatalog {
        catalog_from_api(2025, &[("2025-12-25", "Christmas"), ("2025-11-29", "X")])
    }

    const MONTH_DAY: ClosestHolidaySelector = ClosestHolidaySelector::new(MatchPolicy::MonthDay);
    const FULL_DATE: ClosestHolidaySelector = ClosestHolidaySelector::new(MatchPolicy::FullDate);

    #[test]
    fn december_reference_skips_november() {
        let catalog = christmas_catalog();
        for selector in [MONTH_DAY, FULL_DATE] {
            let found = selector.find_closest(&catalog, ymd(2025, 12, 1)).unwrap();
            assert_eq!(found.name(), "Christmas");
        }
    }

    #[test]
    fn january_reference_picks_first_in_catalog_order() {
        let catalog = christmas_catalog();
        for selector in [MONTH_DAY, FULL_DATE] {
            let found = selector.find_closest(&catalog, ymd(2025, 1, 1)).unwrap();
            assert_eq!(found.name(), "X");
            assert_eq!(found.month_day(), (11, 29));
        }
    }

    #[test]
    fn empty_catalog_finds_nothing() {
        let catalog = HolidayCatalog::new();
        assert!(MONTH_DAY.find_closest(&catalog, ymd(2025, 6, 1)).is_none());
        assert!(FULL_DATE.find_closest(&catalog, ymd(2025, 6, 1)).is_none());
    }

    #[test]
    fn holiday_on_the_reference_day_counts() {
        let catalog = christmas_catalog();
        let found = MONTH_DAY.find_closest(&catalog, ymd(2025, 12, 25)).unwrap();
        assert_eq!(found.name(), "Christmas");
        assert!(MONTH_DAY.find_closest(&catalog, ymd(2025, 12, 26)).is_none());
    }

    #[test]
    fn month_day_rejects_later_month_with_smaller_day() {
        // 15 Jan against 10 Feb: month passes, day 15 > 10 rejects
        assert!(!month_day_qualifies(ymd(2025, 1, 15), ymd(2025, 2, 10)));
        assert!(month_day_qualifies(ymd(2025, 1, 15), ymd(2025, 2, 15)));
        assert!(!month_day_qualifies(ymd(2025, 3, 1), ymd(2025, 2, 28)));
    }

    #[test]
    fn month_day_ignores_the_year() {
        let catalog = catalog_from_api(2024, &[("2024-12-25", "Natal 2024")]);
        let found = MONTH_DAY.find_closest(&catalog, ymd(2025, 12, 1)).unwrap();
        assert_eq!(found.name(), "Natal 2024");
        assert!(FULL_DATE.find_closest(&catalog, ymd(2025, 12, 1)).is_none());
    }

    #[test]
    fn month_day_answer_expires_with_its_month_and_day() {
        // Picked on 15 Nov when next year's list sits first in the catalog
        let natal_2026 = Holiday::new("Hari Raya Natal", ymd(2026, 12, 25));
        assert!(MONTH_DAY.is_current(&natal_2026, ymd(2025, 11, 15)));
        assert!(MONTH_DAY.is_current(&natal_2026, ymd(2025, 12, 25)));
        assert!(!MONTH_DAY.is_current(&natal_2026, ymd(2025, 12, 26)));
        assert!(FULL_DATE.is_current(&natal_2026, ymd(2025, 12, 26)));
    }

    #[test]
    fn passed_answer_is_never_current() {
        let natal = Holiday::new("Hari Raya Natal", ymd(2025, 12, 25));
        for selector in [MONTH_DAY, FULL_DATE] {
            assert!(!selector.is_current(&natal, ymd(2025, 12, 26)));
            // Same month and day a year later is still in the past
            assert!(!selector.is_current(&natal, ymd(2026, 12, 1)));
        }
    }

    #[test]
    fn full_date_rolls_into_the_next_year() {
        let mut catalog = christmas_catalog();
        catalog.append(
            2026,
            &[
                RawHoliday::new("2026-03-20", "Idul Fitri", true),
                RawHoliday::new("2026-01-01", "Tahun Baru", true),
            ],
        );
        let reference = ymd(2025, 12, 28);

        let found = FULL_DATE.find_closest(&catalog, reference).unwrap();
        assert_eq!(found.date(), ymd(2026, 1, 1));
        // Month 12 is after every 2026 month, so the year-blind check finds nothing
        assert!(MONTH_DAY.find_closest(&catalog, reference).is_none());
    }

    #[test]
    fn full_date_prefers_earliest_over_catalog_order() {
        let mut catalog = christmas_catalog();
        catalog.append(2026, &[RawHoliday::new("2026-01-01", "Tahun Baru", true)]);
        // 2026 entries sit in front of 2025 ones
        assert_eq!(catalog.iter().next().unwrap().name(), "Tahun Baru");

        let found = FULL_DATE.find_closest(&catalog, ymd(2025, 11, 1)).unwrap();
        assert_eq!(found.name(), "X");
    }

    #[test]
    fn full_date_tie_goes_to_catalog_order() {
        let catalog = catalog_from_api(
            2025,
            &[("2025-08-17", "Kedua"), ("2025-08-17", "Pertama")],
        );
        let found = FULL_DATE.find_closest(&catalog, ymd(2025, 8, 1)).unwrap();
        assert_eq!(found.name(), "Pertama");
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [MatchPolicy::MonthDay, MatchPolicy::FullDate] {
            assert_eq!(MatchPolicy::parse(policy.as_str()), Some(policy));
        }
        assert_eq!(MatchPolicy::parse(" FullDate "), Some(MatchPolicy::FullDate));
        assert_eq!(MatchPolicy::parse("nearest"), None);
        assert_eq!(MatchPolicy::default(), MatchPolicy::FullDate);
    }

    fn arb_catalog() -> impl Strategy<Value = HolidayCatalog> {
        prop::collection::vec((2025i32..=2026, 1u32..=12, 1u32..=28), 0..24).prop_map(|days| {
            let raw: Vec<RawHoliday> = days
                .iter()
                .enumerate()
                .map(|(i, (y, m, d))| {
                    RawHoliday::new(&format!("{:04}-{:02}-{:02}", y, m, d), &format!("h{}", i), true)
                })
                .collect();
            let mut catalog = HolidayCatalog::new();
            catalog.append(2025, &raw);
            catalog
        })
    }

    proptest! {
        #[test]
        fn month_day_returns_first_qualifying_entry(
            catalog in arb_catalog(),
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let reference = ymd(2025, month, day);
            let position = catalog
                .iter()
                .position(|h| month_day_qualifies(reference, h.date()));

            match MONTH_DAY.find_closest(&catalog, reference) {
                None => prop_assert!(position.is_none()),
                Some(found) => {
                    prop_assert!(month_day_qualifies(reference, found.date()));
                    let first = catalog.iter().nth(position.unwrap()).unwrap();
                    prop_assert!(std::ptr::eq(first, found));
                }
            }
        }

        #[test]
        fn full_date_returns_earliest_on_or_after(
            catalog in arb_catalog(),
            year in 2025i32..=2026,
            month in 1u32..=12,
            day in 1u32..=28,
        ) {
            let reference = ymd(year, month, day);
            let earliest = catalog.iter().map(Holiday::date).filter(|d| *d >= reference).min();

            let found = FULL_DATE.find_closest(&catalog, reference).map(Holiday::date);
            prop_assert_eq!(found, earliest);
        }
    }
}
