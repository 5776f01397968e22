use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 主模型失败后依次尝试的备用模型
    pub llm_fallback_models: Vec<String>,
    /// 每个模型的最大尝试次数
    pub llm_max_attempts: u32,
    pub llm_retry_backoff_ms: u64,
    pub llm_timeout_secs: u64,
    pub llm_max_tokens: u32,
    pub generation_temperature: f32,
    pub audit_temperature: f32,
    // --- 导出配置 ---
    /// 浏览器可执行文件路径（为空时由 chromiumoxide 自动探测）
    pub browser_executable: Option<String>,
    /// 导出文件默认目录
    pub output_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            llm_model_name: "gemini-2.5-flash".to_string(),
            llm_fallback_models: Vec::new(),
            llm_max_attempts: 1,
            llm_retry_backoff_ms: 500,
            llm_timeout_secs: 120,
            llm_max_tokens: 8192,
            generation_temperature: 0.4,
            audit_temperature: 0.2,
            browser_executable: None,
            output_dir: ".".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取可选的 TOML 配置文件，再用环境变量覆盖
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| AppError::file(path.display().to_string(), e))?;
                toml::from_str::<Config>(&content).map_err(|e| AppError::TomlParse {
                    path: path.display().to_string(),
                    source: e,
                })?
            }
            None => Self::default(),
        };
        Ok(base.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            llm_api_key: std::env::var("LLM_API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .map(|v| v.trim().to_string())
                .unwrap_or(self.llm_api_key),
            llm_api_base_url: env_or("LLM_API_BASE_URL", self.llm_api_base_url),
            llm_model_name: env_or("LLM_MODEL_NAME", self.llm_model_name),
            llm_fallback_models: std::env::var("LLM_FALLBACK_MODELS")
                .map(|v| parse_model_list(&v))
                .unwrap_or(self.llm_fallback_models),
            llm_max_attempts: env_or("LLM_MAX_ATTEMPTS", self.llm_max_attempts),
            llm_retry_backoff_ms: env_or("LLM_RETRY_BACKOFF_MS", self.llm_retry_backoff_ms),
            llm_timeout_secs: env_or("LLM_TIMEOUT_SECS", self.llm_timeout_secs),
            llm_max_tokens: env_or("LLM_MAX_TOKENS", self.llm_max_tokens),
            generation_temperature: env_or("GENERATION_TEMPERATURE", self.generation_temperature),
            audit_temperature: env_or("AUDIT_TEMPERATURE", self.audit_temperature),
            browser_executable: std::env::var("BROWSER_EXECUTABLE")
                .ok()
                .or(self.browser_executable),
            output_dir: env_or("OUTPUT_DIR", self.output_dir),
        }
    }

    /// 调用模型前检查密钥
    pub fn require_api_key(&self) -> AppResult<&str> {
        if self.llm_api_key.trim().is_empty() {
            return Err(AppError::Config(
                "未找到 API Key，请设置 LLM_API_KEY 或 GEMINI_API_KEY".to_string(),
            ));
        }
        Ok(&self.llm_api_key)
    }
}

/// 读取并解析环境变量；缺失或解析失败时保留当前值
fn env_or<T: FromStr>(key: &str, current: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(current)
}

fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_single_attempt_gateway() {
        let config = Config::default();
        assert_eq!(config.llm_max_attempts, 1);
        assert!(config.llm_fallback_models.is_empty());
        assert!((config.generation_temperature - 0.4).abs() < f32::EPSILON);
        assert!((config.audit_temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn model_list_ignores_blank_entries() {
        assert_eq!(
            parse_model_list(" gemini-2.5-pro, ,gemini-2.0-flash "),
            vec!["gemini-2.5-pro".to_string(), "gemini-2.0-flash".to_string()]
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            llm_model_name = "gemini-2.5-pro"
            llm_fallback_models = ["gemini-2.5-flash"]
            "#,
        )
        .unwrap();
        assert_eq!(config.llm_model_name, "gemini-2.5-pro");
        assert_eq!(config.llm_fallback_models, vec!["gemini-2.5-flash".to_string()]);
        assert_eq!(config.llm_timeout_secs, 120);
    }

    #[test]
    fn env_value_overrides_only_when_it_parses() {
        std::env::set_var("ACADEMICUS_TEST_TIMEOUT", " 45 ");
        assert_eq!(env_or("ACADEMICUS_TEST_TIMEOUT", 120u64), 45);

        std::env::set_var("ACADEMICUS_TEST_TEMPERATURE", "quente");
        assert_eq!(env_or("ACADEMICUS_TEST_TEMPERATURE", 0.4f32), 0.4);

        assert_eq!(
            env_or("ACADEMICUS_TEST_UNSET_MODEL", "gemini-2.5-flash".to_string()),
            "gemini-2.5-flash"
        );
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let config = Config {
            llm_api_key: "   ".to_string(),
            ..Config::default()
        };
        assert!(matches!(config.require_api_key(), Err(AppError::Config(_))));
    }
}
