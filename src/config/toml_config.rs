use crate::utils::error::{FormError, Result};
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 小工具的檔案設定，覆蓋命令列的預設端點與介面參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub widget: Option<WidgetConfig>,
    pub api: ApiConfig,
    pub ui: Option<UiConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub banner_ttl_ms: Option<u64>,
    pub celebration_ms: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FormError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析設定
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FormError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${NAMEGEN_API})
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").expect("valid pattern");

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn api_endpoint(&self) -> &str {
        &self.api.endpoint
    }

    pub fn banner_ttl_ms(&self) -> Option<u64> {
        self.ui.as_ref().and_then(|ui| ui.banner_ttl_ms)
    }

    pub fn celebration_ms(&self) -> Option<u64> {
        self.ui.as_ref().and_then(|ui| ui.celebration_ms)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.endpoint", &self.api.endpoint)?;

        if let Some(ttl) = self.banner_ttl_ms() {
            validate_range("ui.banner_ttl_ms", ttl, 500, 10_000)?;
        }
        if let Some(ms) = self.celebration_ms() {
            validate_range("ui.celebration_ms", ms, 0, 10_000)?;
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
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[widget]
name = "namegen-form"
description = "Chinese name widget"

[api]
endpoint = "http://localhost:5000/api/generate-name"

[ui]
banner_ttl_ms = 3000
celebration_ms = 2000
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.api_endpoint(),
            "http://localhost:5000/api/generate-name"
        );
        assert_eq!(config.banner_ttl_ms(), Some(3000));
        assert_eq!(config.celebration_ms(), Some(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_ui_section_is_optional() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
endpoint = "http://localhost:5000/api/generate-name"
"#,
        )
        .unwrap();

        assert_eq!(config.banner_ttl_ms(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_roundtrip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[api]\nendpoint = \"https://names.example.com/generate\""
        )
        .unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_endpoint(), "https://names.example.com/generate");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("NAMEGEN_TEST_ENDPOINT", "https://env.example.com/api");

        let config = TomlConfig::from_toml_str(
            r#"
[api]
endpoint = "${NAMEGEN_TEST_ENDPOINT}"
"#,
        )
        .unwrap();

        assert_eq!(config.api_endpoint(), "https://env.example.com/api");
        std::env::remove_var("NAMEGEN_TEST_ENDPOINT");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
endpoint = "${NAMEGEN_DOES_NOT_EXIST}"
"#,
        )
        .unwrap();

        assert_eq!(config.api_endpoint(), "${NAMEGEN_DOES_NOT_EXIST}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_reports_config_error() {
        let err = TomlConfig::from_toml_str("not valid toml [").unwrap_err();
        assert!(matches!(err, FormError::ConfigError { .. }));
    }
}
