#[cfg(target_os = "espidf")]
mod board;

// https://docs.esp-rs.org/esp-idf-svc/esp_idf_svc/
#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    // It is necessary to call this function once. Otherwise some patches to the runtime
    // implemented by esp-idf-sys might not link properly. See https://github.com/esp-rs/esp-idf-template/issues/71
    esp_idf_svc::sys::link_patches();

    // Bind the log crate to the ESP Logging facilities
    esp_idf_svc::log::EspLogger::initialize_default();

    log::info!("harilibur {} starting", env!("CARGO_PKG_VERSION"));
    board::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("harilibur is ESP-IDF firmware; on the host only the library and its tests build");
}
