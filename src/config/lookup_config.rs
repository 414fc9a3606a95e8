#[cfg(feature = "cli")]
use crate::config::CliConfig;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_PORT: &str = "3000";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Effective settings after layering env defaults, the TOML file and CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl LookupConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// `ORDER_SERVICE_URL` wins; otherwise the service is assumed on localhost at `PORT`.
    pub fn from_vars<F: Fn(&str) -> Option<String>>(var: F) -> Self {
        let base_url = var("ORDER_SERVICE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                let port = var("PORT")
                    .filter(|port| !port.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_PORT.to_string());
                format!("http://localhost:{}", port.trim())
            });

        Self {
            base_url,
            timeout_seconds: None,
        }
    }

    pub fn with_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(base_url) = &toml.service.base_url {
            self.base_url = base_url.clone();
        }
        if toml.service.timeout_seconds.is_some() {
            self.timeout_seconds = toml.service.timeout_seconds;
        }
        self
    }

    #[cfg(feature = "cli")]
    pub fn with_cli(mut self, cli: &CliConfig) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if cli.timeout_seconds.is_some() {
            self.timeout_seconds = cli.timeout_seconds;
        }
        self
    }
}

impl ConfigProvider for LookupConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            validate_range("timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_to_local_service() {
        let config = LookupConfig::from_vars(vars(&[]));
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.request_timeout(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_port_and_url_from_env() {
        let config = LookupConfig::from_vars(vars(&[("PORT", "8080")]));
        assert_eq!(config.base_url, "http://localhost:8080");

        let config = LookupConfig::from_vars(vars(&[
            ("PORT", "8080"),
            ("ORDER_SERVICE_URL", "https://orders.example.com"),
        ]));
        assert_eq!(config.base_url, "https://orders.example.com");
    }

    #[test]
    fn test_toml_overrides_env() {
        let toml = TomlConfig::from_toml_str(
            "[service]\nbase_url = \"http://orders:9000\"\ntimeout_seconds = 15\n",
        )
        .unwrap();

        let config = LookupConfig::from_vars(vars(&[("PORT", "8080")])).with_toml(&toml);

        assert_eq!(config.base_url, "http://orders:9000");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(15)));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_toml() {
        let toml = TomlConfig::from_toml_str(
            "[service]\nbase_url = \"http://orders:9000\"\ntimeout_seconds = 15\n",
        )
        .unwrap();
        let cli = CliConfig {
            base_url: Some("http://127.0.0.1:4000".to_string()),
            ..CliConfig::default()
        };

        let config = LookupConfig::from_vars(vars(&[]))
            .with_toml(&toml)
            .with_cli(&cli);

        assert_eq!(config.base_url, "http://127.0.0.1:4000");
        assert_eq!(config.timeout_seconds, Some(15));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let config = LookupConfig {
            base_url: "localhost:3000".to_string(),
            timeout_seconds: None,
        };
        assert!(config.validate().is_err());

        let config = LookupConfig {
            base_url: "http://localhost:3000".to_string(),
            timeout_seconds: Some(0),
        };
        assert!(config.validate().is_err());
    }
}
