//! LLM 服务 - 业务能力层
//!
//! 只负责"给一段提示词，拿回一段文本"，不关心题型与流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 默认走 Gemini 的 OpenAI 兼容端点，也可换成任何兼容服务
//! - 每次尝试都有超时，并可被 `CancellationToken` 中断

use std::future::Future;
use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::services::cancellation::CancellationToken;
use crate::services::retry::RetryPolicy;

/// 一次生成调用的参数
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub prompt: String,
    pub system_instruction: Option<String>,
    pub temperature: f32,
}

/// 文本生成能力
///
/// 流程层只依赖这个 trait，测试时可以换成脚本化的实现。
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        params: &GenerationParams,
        cancel: &CancellationToken,
    ) -> impl Future<Output = AppResult<String>> + Send;
}

/// LLM 服务
///
/// 职责：
/// - 调用兼容 OpenAI 的接口生成文本
/// - 把供应商错误原样包进 `AppError::Upstream`
/// - 按 `RetryPolicy` 重试或切换备用模型
pub struct LlmService {
    client: Client<OpenAIConfig>,
    policy: RetryPolicy,
    timeout: Duration,
    max_tokens: u32,
}

impl LlmService {
    /// 创建新的 LLM 服务，缺少密钥时返回配置错误
    pub fn new(config: &Config) -> AppResult<Self> {
        let api_key = config.require_api_key()?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Ok(Self {
            client,
            policy: RetryPolicy::from_config(config),
            timeout: Duration::from_secs(config.llm_timeout_secs),
            max_tokens: config.llm_max_tokens,
        })
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// 对单个模型发起一次调用
    ///
    /// 返回模型的原始文本，不做裁剪；拆分和渲染交给文档层。
    pub async fn send_to_llm(&self, model: &str, params: &GenerationParams) -> AppResult<String> {
        debug!("调用 LLM API，模型: {}", model);
        debug!("提示词长度: {} 字符", params.prompt.chars().count());

        let mut messages = Vec::new();

        if let Some(system) = &params.system_instruction {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(system.as_str())
                .build()
                .map_err(|e| upstream_error(model, e))?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(params.prompt.as_str())
            .build()
            .map_err(|e| upstream_error(model, e))?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(model)
            .messages(messages)
            .temperature(params.temperature)
            .max_tokens(self.max_tokens)
            .build()
            .map_err(|e| upstream_error(model, e))?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(request))
            .await
            .map_err(|_| {
                warn!("LLM API 调用超时: {} 秒", self.timeout.as_secs());
                AppError::upstream(
                    model,
                    format!("Request timed out after {} seconds", self.timeout.as_secs()),
                )
            })?
            .map_err(|e| {
                warn!("LLM API 调用失败: {}", e);
                upstream_error(model, e)
            })?;

        debug!("LLM API 调用成功");

        response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| AppError::EmptyResponse {
                model: model.to_string(),
            })
    }
}

impl TextGenerator for LlmService {
    async fn generate(
        &self,
        params: &GenerationParams,
        cancel: &CancellationToken,
    ) -> AppResult<String> {
        let text = self
            .policy
            .run(cancel, |model| async move {
                tokio::select! {
                    result = self.send_to_llm(&model, params) => result,
                    _ = cancel.cancelled() => {
                        info!("🛑 模型 {} 的请求已取消", model);
                        Err(AppError::Cancelled)
                    }
                }
            })
            .await?;

        info!("✅ 模型返回 {} 字符", text.chars().count());
        Ok(text)
    }
}

/// 供应商错误只保留原始消息
fn upstream_error(model: &str, error: OpenAIError) -> AppError {
    let message = match error {
        OpenAIError::ApiError(api) => api.message,
        other => other.to_string(),
    };
    AppError::upstream(model, message)
}
