//! 出题流程 - 流程层
//!
//! 流程顺序：
//! 1. 编译提示词（生成 / 审核）
//! 2. 调用模型
//! 3. 拆分题目与报告
//! 4. 渲染

use tracing::info;

use crate::config::Config;
use crate::document::{split, GeneratedDocument, RenderedDocument};
use crate::error::AppResult;
use crate::models::GenerationRequest;
use crate::prompts::{compile_audit, compile_request, SYSTEM_INSTRUCTION};
use crate::services::{CancellationToken, GenerationParams, TextGenerator};
use crate::utils::logging::{log_generation_complete, log_request_summary};

/// 出题流程
///
/// - 只依赖 `TextGenerator`，不关心模型供应商
/// - 不持有界面状态
pub struct ExamFlow<G> {
    generator: G,
    generation_temperature: f32,
    audit_temperature: f32,
}

impl<G: TextGenerator> ExamFlow<G> {
    pub fn new(generator: G, config: &Config) -> Self {
        Self {
            generator,
            generation_temperature: config.generation_temperature,
            audit_temperature: config.audit_temperature,
        }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// 生成题目并拆分出报告
    pub async fn generate(
        &self,
        request: &GenerationRequest,
        cancel: &CancellationToken,
    ) -> AppResult<GeneratedDocument> {
        log_request_summary(request);

        let params = GenerationParams {
            prompt: compile_request(request),
            system_instruction: Some(SYSTEM_INSTRUCTION.to_string()),
            temperature: self.generation_temperature,
        };
        let text = self.generator.generate(&params, cancel).await?;

        let document = split(&text);
        log_generation_complete(&document);
        Ok(document)
    }

    /// 审核题目；审核报告没有 RTQ 标题，整体作为正文
    pub async fn audit(&self, raw_text: &str, cancel: &CancellationToken) -> AppResult<GeneratedDocument> {
        info!("🔎 开始审核，输入 {} 字符", raw_text.chars().count());

        let params = GenerationParams {
            prompt: compile_audit(raw_text),
            system_instruction: None,
            temperature: self.audit_temperature,
        };
        let text = self.generator.generate(&params, cancel).await?;

        info!("✅ 审核完成");
        Ok(GeneratedDocument {
            question: text,
            report: String::new(),
        })
    }

    pub fn render(&self, document: &GeneratedDocument) -> RenderedDocument {
        RenderedDocument::from_document(document)
    }
}
