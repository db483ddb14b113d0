//! Fixed Indonesian text table.

use chrono::Weekday;

/// Day names indexed from Sunday
pub const WEEKDAYS: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

pub const CLOSEST_HOLIDAY_LABEL: &str = "Hari libur terdekat:";
pub const NO_HOLIDAY_YET: &str = "Belum ada data";

pub const CONNECTING_WIFI: &str = "Connecting to WiFi...";
pub const WIFI_DISCONNECTED: &str = "WiFi disconnected";
pub const SYNCING_CLOCK: &str = "Sinkronisasi jam...";

pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAYS[weekday.num_days_from_sunday() as usize]
}
