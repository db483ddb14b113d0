use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Unix time below this means the clock was never set (boot starts at 1970)
pub const MIN_SYNCED_UNIX_SECS: i64 = 1_000_000_000;

/// Supplier of the current local wall-clock time.
pub trait ClockSource {
    /// `None` until the clock has been synchronized.
    fn now(&self) -> Option<NaiveDateTime>;
}

/// System clock (kept in sync by SNTP) shifted by a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetClock {
    offset: FixedOffset,
}

impl OffsetClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    pub fn local_time_at(&self, utc: DateTime<Utc>) -> Option<NaiveDateTime> {
        if utc.timestamp() < MIN_SYNCED_UNIX_SECS {
            return None;
        }
        Some(utc.with_timezone(&self.offset).naive_local())
    }
}

impl ClockSource for OffsetClock {
    fn now(&self) -> Option<NaiveDateTime> {
        self.local_time_at(Utc::now())
    }
}
