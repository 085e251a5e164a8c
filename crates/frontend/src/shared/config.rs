//! Frontend configuration
//!
//! An embedded TOML default, optionally overridden at compile time with
//! `ANPR_API_BASE_URL`. Parsed once on first access.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub auth: AuthConfig,
    pub logs: LogsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Absolute REST API base. Empty means "same host as the page, on `port`".
    #[serde(default)]
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AuthConfig {
    pub token_cookie: String,
    pub user_cookie: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogsConfig {
    pub refresh_interval_ms: u32,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[auth]
token_cookie = "authToken"
user_cookie = "userData"

[logs]
refresh_interval_ms = 5000
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: String::new(),
                port: 3000,
            },
            auth: AuthConfig {
                token_cookie: "authToken".to_string(),
                user_cookie: "userData".to_string(),
            },
            logs: LogsConfig {
                refresh_interval_ms: 5000,
            },
        }
    }
}

/// Parse a TOML document and apply the base URL override, if any
pub fn parse_config(contents: &str, base_url_override: Option<&str>) -> Result<AppConfig, toml::de::Error> {
    let mut config: AppConfig = toml::from_str(contents)?;
    if let Some(base_url) = base_url_override.map(str::trim).filter(|s| !s.is_empty()) {
        config.api.base_url = base_url.trim_end_matches('/').to_string();
    }
    Ok(config)
}

pub fn load_config() -> Result<AppConfig, toml::de::Error> {
    parse_config(DEFAULT_CONFIG, option_env!("ANPR_API_BASE_URL"))
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| match load_config() {
    Ok(config) => {
        log::debug!("Loaded configuration: {:?}", config);
        config
    }
    Err(e) => {
        log::error!("Invalid embedded configuration, using defaults: {}", e);
        AppConfig::default()
    }
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.auth.token_cookie, "authToken");
        assert_eq!(config.logs.refresh_interval_ms, 5000);
    }

    #[test]
    fn test_base_url_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://anpr.example.com/")).unwrap();
        assert_eq!(config.api.base_url, "https://anpr.example.com");

        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "");
    }

    #[test]
    fn test_missing_base_url_defaults_to_empty() {
        let config = parse_config(
            r#"
[api]
port = 8080
[auth]
token_cookie = "t"
user_cookie = "u"
[logs]
refresh_interval_ms = 1000
"#,
            None,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.api.port, 8080);
    }
}
