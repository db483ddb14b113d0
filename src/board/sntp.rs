use anyhow::Result;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::sntp::{EspSntp, SntpConf, SyncStatus};
use log::{info, warn};

const SYNC_TIMEOUT_MS: u32 = 20_000;
const POLL_INTERVAL_MS: u32 = 250;

/// Start SNTP against `server` and wait up to 20 s for the first sync.
///
/// The returned handle must stay alive to keep the periodic re-sync running.
/// If the first sync is slow the clock reports "not synced" until it lands.
pub fn start(server: &'static str) -> Result<EspSntp<'static>> {
    let mut conf = SntpConf::default();
    conf.servers[0] = server;

    info!("Starting SNTP sync with {}", server);
    let sntp = EspSntp::new(&conf)?;

    let mut elapsed_ms = 0u32;
    while elapsed_ms < SYNC_TIMEOUT_MS {
        if sntp.get_sync_status() == SyncStatus::Completed {
            info!("SNTP time synchronized after {}ms", elapsed_ms);
            return Ok(sntp);
        }
        FreeRtos::delay_ms(POLL_INTERVAL_MS);
        elapsed_ms += POLL_INTERVAL_MS;
    }

    warn!(
        "SNTP sync not completed within {}s, continuing (will sync in background)",
        SYNC_TIMEOUT_MS / 1000
    );
    Ok(sntp)
}
