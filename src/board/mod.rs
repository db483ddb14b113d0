//! ESP32-S3 wiring: OLED on I2C0 (SDA GPIO8, SCL GPIO9), Wi-Fi, SNTP and the
//! HTTPS holiday source around the single-threaded tick loop.

mod http;
mod sntp;
mod wifi;

use anyhow::{Context, Result};
use embedded_hal::i2c::I2c;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::delay::FreeRtos;
use esp_idf_svc::hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_svc::hal::peripherals::Peripherals;
use esp_idf_svc::hal::prelude::*;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::{error, info, warn};

use harilibur::display::Oled;
use harilibur::{locale, App, ClockSource, ClosestHolidaySelector, Config, Frame, OffsetClock};

use self::http::HttpHolidaySource;
use self::wifi::{WifiManager, WifiNetwork};

pub fn run() -> Result<()> {
    let config = Config::compiled();
    config.log_summary();

    let peripherals = Peripherals::take().context("Could not take peripherals")?;
    let pins = peripherals.pins;

    let i2c = I2cDriver::new(
        peripherals.i2c0,
        pins.gpio8,
        pins.gpio9,
        &I2cConfig::new().baudrate(400.kHz().into()),
    )?;

    let mut oled = match Oled::new(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            // Nothing to tell the user on: the panel is the only output
            error!("OLED init failed: {:?}", e);
            halt();
        }
    };
    info!("OLED initialized");

    let sys_loop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let network = WifiNetwork::new(config.wifi_ssid, config.wifi_pass);
    let mut wifi = WifiManager::new(peripherals.modem, sys_loop, nvs, &network)?;

    while !wifi.try_connect() {
        show(&mut oled, &Frame::status(locale::CONNECTING_WIFI));
        FreeRtos::delay_ms(millis(config.wifi_poll));
    }

    let _sntp = sntp::start(config.ntp_server)?;
    let clock = OffsetClock::new(config.utc_offset);
    let mut app = App::new(
        HttpHolidaySource::new(config.api_base_url),
        ClosestHolidaySelector::new(config.match_policy),
    );

    loop {
        if !wifi.is_connected() {
            show(&mut oled, &Frame::status(locale::WIFI_DISCONNECTED));
            wifi.try_connect();
            FreeRtos::delay_ms(millis(config.wifi_poll));
            continue;
        }

        let frame = match clock.now() {
            Some(now) => app.tick(now),
            None => Frame::status(locale::SYNCING_CLOCK),
        };
        show(&mut oled, &frame);

        FreeRtos::delay_ms(millis(config.tick));
    }
}

fn show<I2C: I2c>(oled: &mut Oled<I2C>, frame: &Frame) {
    if let Err(e) = oled.show(frame) {
        warn!("OLED refresh failed: {:?}", e);
    }
}

fn millis(d: std::time::Duration) -> u32 {
    u32::try_from(d.as_millis()).unwrap_or(u32::MAX)
}

/// Park forever; used when the display hardware is unusable.
fn halt() -> ! {
    loop {
        FreeRtos::delay_ms(1_000);
    }
}
