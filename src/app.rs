//! 应用层：提交边界
//!
//! 持有配置、会话状态、出题流程和导出器。
//! 流程中的错误在这里转换为展示给用户的消息写入会话状态。

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::Config;
use crate::document::{split, Exporter, GeneratedDocument, PdfPrinter, PdfTarget, RenderedDocument};
use crate::error::{AppError, AppResult, AUDIT_FALLBACK_MESSAGE, GENERATION_FALLBACK_MESSAGE};
use crate::services::{CancellationToken, TextGenerator};
use crate::workflow::{reduce, Action, ExamFlow, ExportTarget, SessionState, Submission};

/// 应用主结构
pub struct App<G> {
    config: Config,
    state: SessionState,
    flow: ExamFlow<G>,
    exporter: Exporter,
    document: Option<GeneratedDocument>,
}

impl<G: TextGenerator> App<G> {
    pub fn new(config: Config, generator: G) -> Self {
        let flow = ExamFlow::new(generator, &config);
        Self {
            config,
            state: SessionState::default(),
            flow,
            exporter: Exporter::new(),
            document: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn document(&self) -> Option<&GeneratedDocument> {
        self.document.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    /// 提交当前表单或审核文本
    ///
    /// 表单无效或已有请求在处理时直接返回错误，不改变状态；
    /// 模型调用失败时把用户可读的消息写入 `state.error`。
    pub async fn submit(&mut self, cancel: &CancellationToken) -> AppResult<GeneratedDocument> {
        let submission = self.state.submission()?;

        self.dispatch(Action::SubmitStarted);
        self.document = None;

        let (result, fallback) = match &submission {
            Submission::Generate(request) => (
                self.flow.generate(request, cancel).await,
                GENERATION_FALLBACK_MESSAGE,
            ),
            Submission::Audit(text) => (self.flow.audit(text, cancel).await, AUDIT_FALLBACK_MESSAGE),
        };

        match result {
            Ok(document) => {
                let text = format!("{}{}", document.question, document.report);
                self.dispatch(Action::SubmitSucceeded(text));
                self.document = Some(document.clone());
                Ok(document)
            }
            Err(e) => {
                error!("❌ 提交失败: {}", e);
                self.dispatch(Action::SubmitFailed(e.user_message_or(fallback)));
                Err(e)
            }
        }
    }

    /// 载入已有的模型输出（例如从文件导出）
    pub fn load_document(&mut self, markdown: &str) -> &GeneratedDocument {
        self.dispatch(Action::SubmitSucceeded(markdown.to_string()));
        self.document.insert(split(markdown))
    }

    fn rendered(&self) -> AppResult<RenderedDocument> {
        self.document
            .as_ref()
            .map(|doc| self.flow.render(doc))
            .ok_or_else(|| AppError::Export("没有可导出的内容".to_string()))
    }

    /// 默认导出路径：输出目录 + 固定文件名
    pub fn default_path(&self, file_name: &str) -> PathBuf {
        Path::new(&self.config.output_dir).join(file_name)
    }

    pub async fn export_word(&mut self, path: &Path) -> AppResult<PathBuf> {
        let rendered = self.rendered()?;
        self.dispatch(Action::ExportStarted(ExportTarget::Word));
        let result = self
            .exporter
            .export_word(&rendered, path, chrono::Local::now().date_naive())
            .await;
        self.dispatch(Action::ExportFinished);
        result
    }

    pub async fn export_pdf<P: PdfPrinter>(
        &mut self,
        target: PdfTarget,
        path: &Path,
        printer: &P,
    ) -> AppResult<PathBuf> {
        let rendered = self.rendered()?;
        self.dispatch(Action::ExportStarted(ExportTarget::Pdf(target)));
        let result = self.exporter.export_pdf(&rendered, target, path, printer).await;
        self.dispatch(Action::ExportFinished);
        if let Ok(path) = &result {
            info!("📦 导出完成: {}", path.display());
        }
        result
    }
}
