use std::time::Duration;

use chrono::{FixedOffset, Offset, Utc};
use log::{info, warn};

use crate::selector::MatchPolicy;
use crate::source::holidays_url;

pub const DEFAULT_WIFI_SSID: &str = "YOUR_WIFI_SSID";
pub const DEFAULT_API_BASE_URL: &str = "https://api-harilibur.vercel.app/api";
pub const DEFAULT_NTP_SERVER: &str = "pool.ntp.org";
/// WIB, UTC+7
pub const DEFAULT_UTC_OFFSET_SECS: i32 = 7 * 3600;

const TICK_MS: u64 = 1_000;
const WIFI_POLL_MS: u64 = 500;

/// Settings compiled into the firmware.
#[derive(Debug, Clone)]
pub struct Config {
    pub wifi_ssid: &'static str,
    pub wifi_pass: &'static str,
    pub api_base_url: &'static str,
    pub ntp_server: &'static str,
    pub utc_offset: FixedOffset,
    pub tick: Duration,
    pub wifi_poll: Duration,
    pub match_policy: MatchPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wifi_ssid: DEFAULT_WIFI_SSID,
            wifi_pass: "",
            api_base_url: DEFAULT_API_BASE_URL,
            ntp_server: DEFAULT_NTP_SERVER,
            utc_offset: offset_or_default(DEFAULT_UTC_OFFSET_SECS),
            tick: Duration::from_millis(TICK_MS),
            wifi_poll: Duration::from_millis(WIFI_POLL_MS),
            match_policy: MatchPolicy::default(),
        }
    }
}

fn offset_or_default(secs: i32) -> FixedOffset {
    FixedOffset::east_opt(secs)
        .or_else(|| FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS))
        .unwrap_or_else(|| Utc.fix())
}

impl Config {
    /// Values from build-time environment (`build.rs` fills them from
    /// `secrets.local.rs`), defaults for the rest.
    pub fn compiled() -> Self {
        Self::from_values(
            option_env!("HARILIBUR_WIFI_SSID"),
            option_env!("HARILIBUR_WIFI_PASS"),
            option_env!("HARILIBUR_API_URL"),
            option_env!("HARILIBUR_UTC_OFFSET_SECS"),
            option_env!("HARILIBUR_MATCH_POLICY"),
        )
    }

    fn from_values(
        ssid: Option<&'static str>,
        pass: Option<&'static str>,
        api_url: Option<&'static str>,
        utc_offset_secs: Option<&str>,
        match_policy: Option<&str>,
    ) -> Self {
        let mut config = Self::default();
        if let Some(ssid) = ssid.filter(|s| !s.is_empty()) {
            config.wifi_ssid = ssid;
        }
        if let Some(pass) = pass {
            config.wifi_pass = pass;
        }
        if let Some(url) = api_url.filter(|s| !s.is_empty()) {
            config.api_base_url = url;
        }
        if let Some(raw) = utc_offset_secs {
            match raw.trim().parse::<i32>().ok().and_then(FixedOffset::east_opt) {
                Some(offset) => config.utc_offset = offset,
                None => warn!("ignoring UTC offset {:?}", raw),
            }
        }
        if let Some(raw) = match_policy {
            match MatchPolicy::parse(raw) {
                Some(policy) => config.match_policy = policy,
                None => warn!("ignoring match policy {:?}", raw),
            }
        }
        config
    }

    pub fn holidays_url(&self, year: i32) -> String {
        holidays_url(self.api_base_url, year)
    }

    pub fn log_summary(&self) {
        info!("config wifi_ssid = {:?}", self.wifi_ssid);
        info!("config wifi_pass = <{} chars>", self.wifi_pass.len());
        info!("config api = {}", self.api_base_url);
        info!("config ntp = {} utc_offset = {}", self.ntp_server, self.utc_offset);
        info!("config match_policy = {}", self.match_policy.as_str());
    }
}
