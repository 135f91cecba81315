use crate::core::ConfigProvider;
use crate::utils::error::{AstroError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_DATA_DIR: &str = "./.astro-profile";
pub const API_KEY_ENV: &str = "ASTRO_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AstroError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AstroError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ASTRO_API_KEY})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        use regex::{Captures, Regex};
        use std::sync::LazyLock;

        static ENV_VAR_RE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

        ENV_VAR_RE
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("llm.base_url", self.llm_base_url())?;
        crate::utils::validation::validate_non_empty_string("llm.model", self.llm_model())?;
        crate::utils::validation::validate_range("llm.temperature", self.llm_temperature(), 0.0, 2.0)?;
        crate::utils::validation::validate_range(
            "llm.timeout_seconds",
            self.request_timeout_seconds(),
            1,
            300,
        )?;
        crate::utils::validation::validate_path("storage.data_dir", self.data_dir())?;
        Ok(())
    }

    /// 遠端問答是否啟用
    pub fn llm_enabled(&self) -> bool {
        self.llm.enabled.unwrap_or(true)
    }

    /// 先取設定檔的 key，再取環境變數；未替換的 `${VAR}` 與空白值視為未設定
    pub fn configured_api_key(&self) -> Option<String> {
        self.llm
            .api_key
            .clone()
            .filter(|key| !key.trim().is_empty() && !key.starts_with("${"))
            .or_else(|| {
                std::env::var(API_KEY_ENV)
                    .ok()
                    .filter(|key| !key.trim().is_empty())
            })
    }

    pub fn with_data_dir(mut self, data_dir: Option<String>) -> Self {
        if data_dir.is_some() {
            self.storage.data_dir = data_dir;
        }
        self
    }
}

impl ConfigProvider for AppConfig {
    fn llm_base_url(&self) -> &str {
        self.llm.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn llm_model(&self) -> &str {
        self.llm.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    fn llm_temperature(&self) -> f32 {
        self.llm.temperature.unwrap_or(0.7)
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.llm.timeout_seconds.unwrap_or(30)
    }

    fn data_dir(&self) -> &str {
        self.storage.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[llm]
enabled = true
base_url = "https://llm.example.com/v1"
model = "tiny-model"
api_key = "sk-test"
temperature = 0.3
timeout_seconds = 10

[storage]
data_dir = "./data"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.llm_base_url(), "https://llm.example.com/v1");
        assert_eq!(config.llm_model(), "tiny-model");
        assert_eq!(config.llm_temperature(), 0.3);
        assert_eq!(config.request_timeout_seconds(), 10);
        assert_eq!(config.data_dir(), "./data");
        assert_eq!(config.configured_api_key().as_deref(), Some("sk-test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.llm_base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.llm_model(), DEFAULT_MODEL);
        assert_eq!(config.data_dir(), DEFAULT_DATA_DIR);
        assert!(config.llm_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ASTRO_TEST_BASE_URL", "https://env.example.com/v1");

        let toml_content = r#"
[llm]
base_url = "${ASTRO_TEST_BASE_URL}"
api_key = "${ASTRO_TEST_UNSET_KEY}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.llm_base_url(), "https://env.example.com/v1");
        assert_eq!(
            config.llm.api_key.as_deref(),
            Some("${ASTRO_TEST_UNSET_KEY}")
        );

        std::env::remove_var("ASTRO_TEST_BASE_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str(
            r#"
[llm]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str(
            r#"
[llm]
temperature = 3.5
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml_str("[llm\nmodel = ").unwrap_err();
        assert!(matches!(err, AstroError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"/tmp/astro\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.data_dir(), "/tmp/astro");

        let config = config.with_data_dir(Some("/elsewhere".to_string()));
        assert_eq!(config.data_dir(), "/elsewhere");
    }
}
