use crate::core::ConfigProvider;
use crate::domain::model::{
    DEFAULT_ADDENDS, DEFAULT_COUNT_END, DEFAULT_COUNT_START, DEFAULT_GREETING,
};
use crate::utils::error::{KcError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_ordered, validate_range, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const MAX_COUNT_SPAN: i128 = 10_000;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub greeting: Option<GreetingConfig>,
    pub counter: Option<CounterConfig>,
    pub addition: Option<AdditionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingConfig {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CounterConfig {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdditionConfig {
    pub a: Option<i64>,
    pub b: Option<i64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GREETING})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KcError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("greeting.message", self.greeting())?;

        let (start, end) = (self.count_start(), self.count_end());
        validate_ordered("counter", start, end)?;
        validate_range("counter", end as i128 - start as i128 + 1, 1, MAX_COUNT_SPAN)?;

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn greeting(&self) -> &str {
        self.greeting
            .as_ref()
            .and_then(|g| g.message.as_deref())
            .unwrap_or(DEFAULT_GREETING)
    }

    fn count_start(&self) -> i64 {
        self.counter
            .as_ref()
            .and_then(|c| c.start)
            .unwrap_or(DEFAULT_COUNT_START)
    }

    fn count_end(&self) -> i64 {
        self.counter
            .as_ref()
            .and_then(|c| c.end)
            .unwrap_or(DEFAULT_COUNT_END)
    }

    fn addends(&self) -> (i64, i64) {
        let addition = self.addition.as_ref();
        (
            addition.and_then(|a| a.a).unwrap_or(DEFAULT_ADDENDS.0),
            addition.and_then(|a| a.b).unwrap_or(DEFAULT_ADDENDS.1),
        )
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
