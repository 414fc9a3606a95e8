use crate::config::lookup_config::MAX_TIMEOUT_SECONDS;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LookupError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LookupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ORDER_SERVICE_URL})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LookupError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.service.base_url {
            validate_url("service.base_url", base_url)?;
        }
        if let Some(timeout) = self.service.timeout_seconds {
            validate_range("service.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_service_section() {
        let toml_content = r#"
[service]
base_url = "http://orders.internal:3000"
timeout_seconds = 5
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.service.base_url.as_deref(),
            Some("http://orders.internal:3000")
        );
        assert_eq!(config.service.timeout_seconds, Some(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.service.base_url.is_none());
        assert!(config.service.timeout_seconds.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ORDER_LOOKUP_TEST_URL", "https://orders.example.com");

        let toml_content = r#"
[service]
base_url = "${ORDER_LOOKUP_TEST_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("https://orders.example.com")
        );

        std::env::remove_var("ORDER_LOOKUP_TEST_URL");
    }

    #[test]
    fn test_config_validation() {
        let bad_url = TomlConfig::from_toml_str("[service]\nbase_url = \"invalid-url\"\n").unwrap();
        assert!(bad_url.validate().is_err());

        let bad_timeout =
            TomlConfig::from_toml_str("[service]\ntimeout_seconds = 0\n").unwrap();
        assert!(bad_timeout.validate().is_err());
    }

    #[test]
    fn test_timeout_limit_matches_effective_config() {
        let at_limit = TomlConfig::from_toml_str(&format!(
            "[service]\ntimeout_seconds = {}\n",
            MAX_TIMEOUT_SECONDS
        ))
        .unwrap();
        assert!(at_limit.validate().is_ok());

        let over_limit = TomlConfig::from_toml_str(&format!(
            "[service]\ntimeout_seconds = {}\n",
            MAX_TIMEOUT_SECONDS + 1
        ))
        .unwrap();
        assert!(over_limit.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[service\nbase_url = 1").unwrap_err();
        assert!(matches!(err, LookupError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[service]\nbase_url = \"http://localhost:8081\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(
            config.service.base_url.as_deref(),
            Some("http://localhost:8081")
        );
    }
}
