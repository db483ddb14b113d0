use anyhow::{anyhow, Result};
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::hal::modem::Modem;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{AuthMethod, BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use log::{info, warn};

#[derive(Debug)]
pub struct WifiNetwork<'a> {
    pub ssid: &'a str,
    pub password: &'a str,
    pub auth_method: AuthMethod,
}

impl<'a> WifiNetwork<'a> {
    pub const fn new(ssid: &'a str, password: &'a str) -> Self {
        Self {
            ssid,
            password,
            auth_method: if password.is_empty() {
                AuthMethod::None
            } else {
                AuthMethod::WPA2Personal
            },
        }
    }
}

/// Station-mode link to the one configured network.
pub struct WifiManager {
    wifi: BlockingWifi<EspWifi<'static>>,
    ssid: String,
}

impl WifiManager {
    /// Configure and start the radio; association happens in [`Self::try_connect`].
    pub fn new(
        modem: Modem,
        sys_loop: EspSystemEventLoop,
        nvs: EspDefaultNvsPartition,
        network: &WifiNetwork<'_>,
    ) -> Result<Self> {
        let mut wifi = BlockingWifi::wrap(
            EspWifi::new(modem, sys_loop.clone(), Some(nvs))?,
            sys_loop,
        )?;

        let wifi_config = Configuration::Client(ClientConfiguration {
            ssid: network
                .ssid
                .try_into()
                .map_err(|_| anyhow!("SSID longer than 32 bytes"))?,
            password: network
                .password
                .try_into()
                .map_err(|_| anyhow!("password longer than 64 bytes"))?,
            auth_method: network.auth_method,
            ..Default::default()
        });

        wifi.set_configuration(&wifi_config)?;
        wifi.start()?;

        Ok(Self {
            wifi,
            ssid: network.ssid.to_string(),
        })
    }

    /// One association attempt. Blocks until the interface has an address or
    /// the attempt fails.
    pub fn try_connect(&mut self) -> bool {
        info!("Attempting to connect to network: {}", self.ssid);
        match self.connect() {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to connect to {}: {}", self.ssid, e);
                false
            }
        }
    }

    fn connect(&mut self) -> Result<()> {
        self.wifi.connect()?;
        self.wifi.wait_netif_up()?;

        let ip_info = self.wifi.wifi().sta_netif().get_ip_info()?;
        info!("Successfully connected to {}, IP: {}", self.ssid, ip_info.ip);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }
}
