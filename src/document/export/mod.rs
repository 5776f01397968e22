//! 文档导出
//!
//! 同一时间只允许一个导出任务，第二个请求直接返回 `ExportInProgress`。

pub mod pdf;
pub mod word;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{error, info};

use crate::document::render::RenderedDocument;
use crate::error::{AppError, AppResult};

pub use pdf::{build_print_page, render_pdf, PdfPrinter, PdfTarget};
pub use word::{build_word_document, WORD_FILE_NAME};

/// 导出器，持有串行化导出的锁
#[derive(Debug, Default)]
pub struct Exporter {
    lock: Mutex<()>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 占用导出槽位；已有导出在进行时立即失败
    pub fn try_begin(&self) -> AppResult<MutexGuard<'_, ()>> {
        self.lock.try_lock().map_err(|_| AppError::ExportInProgress)
    }

    pub fn is_busy(&self) -> bool {
        self.lock.try_lock().is_err()
    }

    /// 导出 Word 文档
    pub async fn export_word(
        &self,
        doc: &RenderedDocument,
        path: &Path,
        generated_on: NaiveDate,
    ) -> AppResult<PathBuf> {
        let _guard = self.try_begin()?;
        info!("📝 导出 Word: {}", path.display());

        let content = build_word_document(doc, generated_on);
        write_file(path, content.as_bytes()).await?;

        info!("✅ Word 已保存: {}", path.display());
        Ok(path.to_path_buf())
    }

    /// 导出 PDF
    pub async fn export_pdf<P: PdfPrinter>(
        &self,
        doc: &RenderedDocument,
        target: PdfTarget,
        path: &Path,
        printer: &P,
    ) -> AppResult<PathBuf> {
        let _guard = self.try_begin()?;
        info!("📄 导出 PDF ({:?}): {}", target, path.display());

        let bytes = render_pdf(doc, target, printer).await.map_err(|e| {
            error!("PDF 生成失败: {}", e);
            e
        })?;
        write_file(path, &bytes).await?;

        info!("✅ PDF 已保存: {} ({} 字节)", path.display(), bytes.len());
        Ok(path.to_path_buf())
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| AppError::file(parent.display().to_string(), e))?;
    }
    tokio::fs::write(path, bytes)
        .await
        .map_err(|e| AppError::file(path.display().to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::splitter::split;

    struct FakePrinter;

    impl PdfPrinter for FakePrinter {
        async fn print_pdf(&self, html: &str) -> AppResult<Vec<u8>> {
            Ok(format!("%PDF-fake {}", html.len()).into_bytes())
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
    }

    #[tokio::test]
    async fn concurrent_export_is_rejected() {
        let exporter = Exporter::new();
        let doc = RenderedDocument::from_document(&split("Enunciado"));
        let dir = tempfile::tempdir().unwrap();

        let guard = exporter.try_begin().unwrap();
        assert!(exporter.is_busy());
        let result = exporter
            .export_word(&doc, &dir.path().join(WORD_FILE_NAME), date())
            .await;
        assert!(matches!(result, Err(AppError::ExportInProgress)));

        drop(guard);
        assert!(!exporter.is_busy());
        let path = exporter
            .export_word(&doc, &dir.path().join(WORD_FILE_NAME), date())
            .await
            .unwrap();
        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("Gerado em 31/01/2025"));
    }

    #[tokio::test]
    async fn pdf_export_writes_printer_output() {
        let exporter = Exporter::new();
        let doc = RenderedDocument::from_document(&split(
            "Enunciado\n# Relatório Técnico da Questão (RTQ)\nCorpo",
        ));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join(PdfTarget::ReportOnly.file_name());

        exporter
            .export_pdf(&doc, PdfTarget::ReportOnly, &path, &FakePrinter)
            .await
            .unwrap();
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-fake"));
        assert!(!exporter.is_busy());
    }

    #[tokio::test]
    async fn failed_pdf_export_releases_the_guard() {
        let exporter = Exporter::new();
        let doc = RenderedDocument::from_document(&split("Sem relatório"));
        let dir = tempfile::tempdir().unwrap();

        let result = exporter
            .export_pdf(
                &doc,
                PdfTarget::ReportOnly,
                &dir.path().join("x.pdf"),
                &FakePrinter,
            )
            .await;
        assert!(matches!(result, Err(AppError::Export(_))));
        assert!(!exporter.is_busy());
    }
}
