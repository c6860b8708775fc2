use serde::{Deserialize, Serialize};

const DEFAULT_BACKEND_URL: &str = "https://quickaid-backend-7mpc.onrender.com";
const DEFAULT_IMAGE_UPLOAD_URL: &str = "https://ecommercebackend-8gx8.onrender.com/image/image-upload";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub backend_url: String,
    /// Socket.IO server; `None` means "same host as the backend".
    pub socket_url: Option<String>,
    pub image_upload_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub log_level: String,
    pub reconnect_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            socket_url: None,
            image_upload_url: DEFAULT_IMAGE_UPLOAD_URL.to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            log_level: "info".to_string(),
            reconnect_attempts: 3,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            backend_url: option_env!("BACKEND_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.backend_url),
            socket_url: option_env!("SOCKET_URL")
                .filter(|s| !s.is_empty())
                .map(|s| s.trim_end_matches('/').to_string()),
            image_upload_url: option_env!("IMAGE_UPLOAD_URL")
                .map(|s| s.to_string())
                .unwrap_or(defaults.image_upload_url),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            log_level: option_env!("LOG_LEVEL")
                .unwrap_or("info").to_string(),
            reconnect_attempts: option_env!("RECONNECT_ATTEMPTS")
                .unwrap_or("3").parse().unwrap_or(3),
        }
    }

    /// Base URL of the Socket.IO server (http(s) swapped for ws(s))
    pub fn socket_base_url(&self) -> String {
        let base = self.socket_url.as_deref().unwrap_or(&self.backend_url);
        if let Some(rest) = base.strip_prefix("https://") {
            format!("wss://{}", rest)
        } else if let Some(rest) = base.strip_prefix("http://") {
            format!("ws://{}", rest)
        } else {
            base.to_string()
        }
    }

    /// Effective log level; logging disabled still lets errors through
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            return log::Level::Error;
        }
        match self.log_level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "debug" => log::Level::Debug,
            "trace" => log::Level::Trace,
            _ => log::Level::Info,
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_url_follows_backend_scheme() {
        let config = AppConfig::default();
        assert_eq!(config.socket_base_url(), "wss://quickaid-backend-7mpc.onrender.com");

        let local = AppConfig {
            backend_url: "http://localhost:5000".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(local.socket_base_url(), "ws://localhost:5000");
    }

    #[test]
    fn explicit_socket_url_wins() {
        let config = AppConfig {
            socket_url: Some("https://realtime.example.org".to_string()),
            ..AppConfig::default()
        };
        assert_eq!(config.socket_base_url(), "wss://realtime.example.org");
    }

    #[test]
    fn disabled_logging_keeps_errors() {
        let config = AppConfig {
            enable_logging: false,
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Error);

        let verbose = AppConfig {
            log_level: "DEBUG".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(verbose.log_level(), log::Level::Debug);
    }
}
