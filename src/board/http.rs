use std::time::Duration;

use embedded_svc::http::client::Client;
use embedded_svc::http::Method;
use esp_idf_svc::http::client::{Configuration, EspHttpConnection};
use esp_idf_svc::io::Read;
use log::info;

use harilibur::source::{holidays_url, parse_holidays, MAX_RESPONSE_BYTES};
use harilibur::{FetchError, HolidaySource, RawHoliday};

const TIMEOUT_MS: u64 = 15_000;

fn transport(e: impl std::fmt::Display) -> FetchError {
    FetchError::Transport(e.to_string())
}

/// Perform an HTTPS GET request and return the response body as a String.
pub fn https_get(url: &str) -> Result<String, FetchError> {
    let config = Configuration {
        timeout: Some(Duration::from_millis(TIMEOUT_MS)),
        use_global_ca_store: true,
        crt_bundle_attach: Some(esp_idf_svc::sys::esp_crt_bundle_attach),
        ..Default::default()
    };

    let connection = EspHttpConnection::new(&config).map_err(transport)?;
    let mut client = Client::wrap(connection);

    let headers = [("Accept", "application/json")];
    let mut response = client
        .request(Method::Get, url, &headers)
        .map_err(transport)?
        .submit()
        .map_err(transport)?;

    let status = response.status();
    info!("HTTP GET {} -> status {}", url, status);
    if status != 200 {
        return Err(FetchError::Status(status));
    }

    let mut body: Vec<u8> = Vec::new();
    let mut buf = [0u8; 1024];
    loop {
        let n = response.read(&mut buf).map_err(transport)?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&buf[..n]);
        if body.len() > MAX_RESPONSE_BYTES {
            return Err(FetchError::TooLarge {
                limit: MAX_RESPONSE_BYTES,
            });
        }
    }

    Ok(String::from_utf8(body)?)
}

/// Holiday API over HTTPS.
pub struct HttpHolidaySource {
    base_url: &'static str,
}

impl HttpHolidaySource {
    pub fn new(base_url: &'static str) -> Self {
        Self { base_url }
    }
}

impl HolidaySource for HttpHolidaySource {
    fn fetch(&mut self, year: i32) -> Result<Vec<RawHoliday>, FetchError> {
        let body = https_get(&holidays_url(self.base_url, year))?;
        parse_holidays(&body)
    }
}
