//! Client Configuration
//!
//! Build-time settings and UI constants.

use log::LevelFilter;

/// Origin used when `MEMOIR_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// localStorage keys
pub const TOKEN_KEY: &str = "memoir_token";
pub const USERNAME_KEY: &str = "memoir_username";
pub const USER_ID_KEY: &str = "memoir_user_id";

/// Milliseconds a toast stays visible
pub const TOAST_MS: u32 = 3500;
/// Delay before switching to the dashboard after login
pub const LOGIN_REDIRECT_MS: u32 = 600;
/// Delay before switching to login after signup
pub const SIGNUP_REDIRECT_MS: u32 = 900;

/// Remote API settings
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Settings baked in at build time
    pub fn from_build_env() -> Self {
        Self::new(option_env!("MEMOIR_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    /// Absolute URL for an API path (`path` starts with `/`)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

/// Console log level, from `MEMOIR_LOG` at build time; `off` installs no logger
pub fn log_level() -> LevelFilter {
    parse_level(option_env!("MEMOIR_LOG").unwrap_or("info"))
}

fn parse_level(raw: &str) -> LevelFilter {
    match raw.trim().to_ascii_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let config = ApiConfig::new("https://memoir.example/");
        assert_eq!(config.url("/login"), "https://memoir.example/login");
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiConfig::default().url("/home/categories"), "http://127.0.0.1:8000/home/categories");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
        assert_eq!(parse_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_level("nonsense"), LevelFilter::Info);
        assert_eq!(parse_level("off").to_level(), None);
        assert_eq!(parse_level("trace").to_level(), Some(log::Level::Trace));
    }
}
