//! 重试与备用模型策略
//!
//! 默认只尝试一次、不切换模型；配置了备用模型或多次尝试时，
//! 按"模型 × 次数"展开成固定的尝试计划依次执行。

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::cancellation::CancellationToken;

/// 一次尝试
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub model: String,
    /// 在该模型上的第几次尝试（从 1 开始）
    pub number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// 主模型在前，备用模型依次在后
    pub models: Vec<String>,
    pub max_attempts_per_model: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    /// 单模型单次尝试
    pub fn single(model: impl Into<String>) -> Self {
        Self {
            models: vec![model.into()],
            max_attempts_per_model: 1,
            backoff: Duration::ZERO,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut models = vec![config.llm_model_name.clone()];
        for model in &config.llm_fallback_models {
            if !models.contains(model) {
                models.push(model.clone());
            }
        }
        Self {
            models,
            max_attempts_per_model: config.llm_max_attempts,
            backoff: Duration::from_millis(config.llm_retry_backoff_ms),
        }
    }

    /// 展开后的尝试计划
    pub fn attempts(&self) -> Vec<Attempt> {
        let per_model = self.max_attempts_per_model.max(1);
        self.models
            .iter()
            .flat_map(|model| {
                (1..=per_model).map(move |number| Attempt {
                    model: model.clone(),
                    number,
                })
            })
            .collect()
    }

    /// 按计划执行操作
    ///
    /// 成功立即返回；不可重试的错误立即返回；全部失败时返回最后一个错误。
    pub async fn run<T, F, Fut>(&self, cancel: &CancellationToken, mut operation: F) -> AppResult<T>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = AppResult<T>>,
    {
        let plan = self.attempts();
        let total = plan.len();
        let mut last_error = None;

        for (index, attempt) in plan.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(AppError::Cancelled);
            }

            if index > 0 {
                info!(
                    "🔁 重试 {}/{}: 模型 {} 第 {} 次",
                    index + 1,
                    total,
                    attempt.model,
                    attempt.number
                );
            }

            match operation(attempt.model.clone()).await {
                Ok(value) => return Ok(value),
                Err(e) if !e.is_retryable() => return Err(e),
                Err(e) => {
                    warn!("⚠️ 模型 {} 调用失败: {}", attempt.model, e);
                    last_error = Some(e);
                }
            }

            if index + 1 < total && !self.backoff.is_zero() {
                tokio::select! {
                    _ = tokio::time::sleep(self.backoff) => {}
                    _ = cancel.cancelled() => return Err(AppError::Cancelled),
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::Config("没有可用的模型".to_string())))
    }
}
