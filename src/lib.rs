//! # Academicus AI
//!
//! 按 INEP/ENADE 规范生成和审核考试题目的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 基础数据层（Models / Prompts）
//! - `models/` - 题型、布鲁姆层级、难度和表单校验
//! - `prompts/` - 系统指令、题型结构块和提示词编译（纯函数）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `LlmService` - 调用兼容 OpenAI 的接口生成文本
//! - `RetryPolicy` - 重试与备用模型切换
//! - `CancellationToken` - 取消正在进行的请求
//!
//! ### ③ 文档层（Document / Browser）
//! - `document/` - 拆分题目与技术报告，渲染 markdown，导出 Word / PDF
//! - `browser/` - 无头 Chromium 打印 PDF
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/` - 会话状态机和"一次出题/审核"的完整流程
//!
//! ### ⑤ 应用层（App / CLI）
//! - `app` - 提交边界，把错误转换为用户消息
//! - `cli` - 命令行入口
//!
//! ## 模块结构

pub mod app;
pub mod browser;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod models;
pub mod prompts;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use document::{split, GeneratedDocument, RenderedDocument};
pub use error::{AppError, AppResult};
pub use models::{GenerationForm, GenerationRequest, QuestionSpec, QuestionType};
pub use prompts::{compile, compile_request, PromptOptions};
pub use services::{CancellationToken, LlmService, TextGenerator};
pub use workflow::{ExamFlow, SessionState};
