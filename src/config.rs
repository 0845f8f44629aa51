//! Startup configuration.
//!
//! Values are read once from the environment and passed down explicitly (through Dioxus
//! context in the client), never through shared mutable globals.

use std::time::Duration;

use crate::error::config::ConfigError;

pub const DEFAULT_API_URL: &str = "/api/v1";
pub const DEFAULT_API_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_LOGIN_PATH: &str = "/login.html";
pub const DEFAULT_MOCK_LATENCY_MS: u64 = 300;

/// Which panel the single-page app renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Admin,
    Company,
}

impl Panel {
    /// Picks the panel implied by a page path such as `/company/index.html`.
    pub fn from_location_path(path: &str) -> Option<Self> {
        let first = path.trim_start_matches('/').split('/').next()?;
        match first {
            "admin" => Some(Self::Admin),
            "company" => Some(Self::Company),
            _ => None,
        }
    }

    /// Prefix of the `localStorage` keys the login page writes for this panel.
    pub fn storage_prefix(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Company => "company",
        }
    }
}

/// Which repository implementation backs the dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// In-memory fake seeded with generated records.
    Memory,
    /// REST backend through the API gateway.
    Http,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub api_timeout: Duration,
    pub page_size: usize,
    pub data_source: DataSource,
    pub panel: Option<Panel>,
    pub login_path: String,
    pub mock_latency: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: Duration::from_millis(DEFAULT_API_TIMEOUT_MS),
            page_size: DEFAULT_PAGE_SIZE,
            data_source: DataSource::Memory,
            panel: None,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            mock_latency: Duration::from_millis(DEFAULT_MOCK_LATENCY_MS),
        }
    }
}

impl Config {
    /// Reads the configuration from process environment variables.
    ///
    /// In the browser the environment is empty, so every value falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Unset keys use their defaults
    /// - `Err(ConfigError::InvalidEnvValue)` - A key is set to a value that cannot be used
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("INTERNHUB_API_URL") {
            let url = url.trim().trim_end_matches('/').to_string();
            if url.is_empty() {
                return Err(invalid("INTERNHUB_API_URL", "must not be empty"));
            }
            config.api_url = url;
        }

        if let Some(value) = lookup("INTERNHUB_API_TIMEOUT_MS") {
            let millis = parse_positive("INTERNHUB_API_TIMEOUT_MS", &value)?;
            config.api_timeout = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("INTERNHUB_PAGE_SIZE") {
            config.page_size = parse_positive("INTERNHUB_PAGE_SIZE", &value)? as usize;
        }

        if let Some(value) = lookup("INTERNHUB_DATA_SOURCE") {
            config.data_source = match value.trim().to_lowercase().as_str() {
                "memory" => DataSource::Memory,
                "http" => DataSource::Http,
                _ => {
                    return Err(invalid(
                        "INTERNHUB_DATA_SOURCE",
                        "expected `memory` or `http`",
                    ))
                }
            };
        }

        if let Some(value) = lookup("INTERNHUB_PANEL") {
            config.panel = match value.trim().to_lowercase().as_str() {
                "admin" => Some(Panel::Admin),
                "company" => Some(Panel::Company),
                _ => return Err(invalid("INTERNHUB_PANEL", "expected `admin` or `company`")),
            };
        }

        if let Some(path) = lookup("INTERNHUB_LOGIN_PATH") {
            config.login_path = path;
        }

        if let Some(value) = lookup("INTERNHUB_MOCK_LATENCY_MS") {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|e| invalid("INTERNHUB_MOCK_LATENCY_MS", &e.to_string()))?;
            config.mock_latency = Duration::from_millis(millis);
        }

        Ok(config)
    }

    /// Resolves the panel to render, preferring the configured one over the page path.
    pub fn panel_for_path(&self, path: &str) -> Panel {
        self.panel
            .or_else(|| Panel::from_location_path(path))
            .unwrap_or(Panel::Admin)
    }
}

fn parse_positive(var: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid(var, "must be greater than zero")),
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(invalid(var, &e.to_string())),
    }
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidEnvValue {
        var: var.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "/api/v1");
        assert_eq!(config.api_timeout, Duration::from_millis(30_000));
        assert_eq!(config.page_size, 10);
        assert_eq!(config.data_source, DataSource::Memory);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("INTERNHUB_API_URL", "http://localhost:8000/api/v1/"),
            ("INTERNHUB_API_TIMEOUT_MS", "5000"),
            ("INTERNHUB_PAGE_SIZE", "25"),
            ("INTERNHUB_DATA_SOURCE", "HTTP"),
            ("INTERNHUB_PANEL", "company"),
            ("INTERNHUB_MOCK_LATENCY_MS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.api_url, "http://localhost:8000/api/v1");
        assert_eq!(config.api_timeout, Duration::from_millis(5000));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.data_source, DataSource::Http);
        assert_eq!(config.panel, Some(Panel::Company));
        assert_eq!(config.mock_latency, Duration::ZERO);
    }

    #[test]
    fn rejects_zero_page_size() {
        let result = Config::from_lookup(lookup(&[("INTERNHUB_PAGE_SIZE", "0")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { ref var, .. }) if var == "INTERNHUB_PAGE_SIZE"
        ));
    }

    #[test]
    fn rejects_unknown_data_source() {
        let result = Config::from_lookup(lookup(&[("INTERNHUB_DATA_SOURCE", "django")]));

        assert!(result.is_err());
    }

    #[test]
    fn panel_falls_back_to_path_then_admin() {
        let config = Config::default();

        assert_eq!(config.panel_for_path("/company/index.html"), Panel::Company);
        assert_eq!(config.panel_for_path("/admin/"), Panel::Admin);
        assert_eq!(config.panel_for_path("/"), Panel::Admin);

        let forced = Config {
            panel: Some(Panel::Company),
            ..Config::default()
        };
        assert_eq!(forced.panel_for_path("/admin/"), Panel::Company);
    }
}
