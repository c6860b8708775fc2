use std::env;
use std::fs;

/// Keys read by `AppConfig::from_env`
const CONFIG_KEYS: [&str; 7] = [
    "BACKEND_URL",
    "SOCKET_URL",
    "IMAGE_UPLOAD_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "LOG_LEVEL",
    "RECONNECT_ATTEMPTS",
];

/// `KEY=value`, `export KEY=value`, optionally quoted; comments and blanks yield `None`
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("export ").unwrap_or(line);
    let (key, value) = line.split_once('=')?;
    let value = value.trim();
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
        .unwrap_or(value);
    Some((key.trim(), value))
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let Ok(contents) = fs::read_to_string(".env") else {
        println!("cargo:warning=No .env file, using built-in QuickAid endpoints (see .env.example)");
        return;
    };

    for (key, value) in contents.lines().filter_map(parse_line) {
        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key '{}' is not used by the app", key);
            continue;
        }
        if key == "RECONNECT_ATTEMPTS" && value.parse::<u32>().is_err() {
            println!("cargo:warning=RECONNECT_ATTEMPTS='{}' is not a number, default kept", value);
            continue;
        }
        // Shell exports win over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
