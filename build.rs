use std::env;
use std::fs;
use std::path::Path;

/// Uncommitted file holding the device credentials, e.g.
/// `pub const WIFI_SSID: &str = "home";`
const SECRETS_FILE: &str = "secrets.local.rs";

/// Constants lifted out of the secrets file and the compile-time variable each one becomes
const SECRETS: [(&str, &str); 3] = [
    ("WIFI_SSID", "HARILIBUR_WIFI_SSID"),
    ("WIFI_PASS", "HARILIBUR_WIFI_PASS"),
    ("HOLIDAY_API_URL", "HARILIBUR_API_URL"),
];

/// Forward the string constants of the secrets file as `rustc-env` values so
/// `option_env!` in the crate picks them up.
fn emit_local_secrets(path: &Path) {
    println!("cargo:rerun-if-changed={}", path.display());

    let Ok(src) = fs::read_to_string(path) else {
        println!(
            "cargo:warning={} not found, using compiled-in defaults",
            path.display()
        );
        return;
    };

    for (name, var) in SECRETS {
        // An explicit environment variable wins over the file
        if env::var_os(var).is_some() {
            continue;
        }
        if let Some(value) = extract_rust_str_const(&src, name) {
            println!("cargo:rustc-env={}={}", var, value);
        }
    }
}

fn extract_rust_str_const(src: &str, name: &str) -> Option<String> {
    let needle = format!("pub const {}", name);
    for line in src.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") || !trimmed.starts_with(&needle) {
            continue;
        }
        let start = trimmed.find('"')?;
        let end = trimmed[start + 1..].find('"')? + start + 1;
        return Some(trimmed[start + 1..end].to_string());
    }
    None
}

fn main() {
    // Host builds (unit tests) have no ESP-IDF environment to forward
    if env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("espidf") {
        embuild::espidf::sysenv::output();
    }

    for (_, var) in SECRETS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    emit_local_secrets(Path::new(SECRETS_FILE));
}
