//! PDF 导出（两步）
//!
//! 1. 排版：把渲染结果装进固定 715px 宽的独立打印页，去掉交互元素，插入分页标记
//! 2. 打印：交给 `PdfPrinter` 以 A4 纵向、10mm 边距输出

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::document::html::{render_html, RenderMode};
use crate::document::render::RenderedDocument;
use crate::error::{AppError, AppResult};

/// 要导出的范围
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PdfTarget {
    /// 题目 + 报告
    Full,
    /// 仅技术报告
    ReportOnly,
}

impl PdfTarget {
    pub fn file_name(self) -> &'static str {
        match self {
            PdfTarget::Full => "academicus-completo.pdf",
            PdfTarget::ReportOnly => "relatorio-tecnico-rtq.pdf",
        }
    }
}

/// 把 HTML 打印为 PDF 字节
pub trait PdfPrinter: Send + Sync {
    fn print_pdf(&self, html: &str) -> impl Future<Output = AppResult<Vec<u8>>> + Send;
}

/// A4 可用宽度 190mm 约 718px，留一点余量
const PAGE_WIDTH_PX: u32 = 715;

const PRINT_CSS: &str = r#"
  body { margin: 0; background: #ffffff; }
  article {
    font-family: Georgia, 'Times New Roman', serif;
    line-height: 1.8;
    text-align: justify;
  }
  .pdf-avoid-break {
    page-break-inside: avoid !important;
    break-inside: avoid !important;
  }
  .pdf-page-break {
    page-break-before: always !important;
    break-before: page !important;
    display: block !important;
    height: 1px !important;
    margin: 0 !important;
  }
  .print-logo { margin-bottom: 32px; border-bottom: 1px solid #e2e8f0; padding-bottom: 16px; }
  .print-logo h1 { font-size: 24px; font-weight: bold; color: #075985; margin: 0; }
  .print-logo p { font-size: 14px; color: #64748b; margin: 0; }
  .rtq-banner { margin-bottom: 32px; padding: 24px; background: #0369a1; color: #ffffff; border-radius: 12px; }
  .rtq-banner h1 { font-size: 20px; margin: 0; text-transform: uppercase; letter-spacing: 0.1em; }
  .rtq-subtitle { font-size: 12px; margin: 4px 0 0; text-transform: uppercase; opacity: 0.9; }
  .porque { text-align: center; font-weight: bold; font-size: 20px; letter-spacing: 0.1em; margin: 32px 0; }
  .alternativa { display: flex; gap: 12px; margin-bottom: 12px; padding-left: 8px; }
  .alternativa .font-bold { font-weight: bold; color: #0369a1; }
  .tags { display: flex; flex-wrap: wrap; gap: 8px; margin-top: 16px; padding-top: 16px; border-top: 1px solid #f1f5f9; }
  .tag { padding: 4px 12px; border-radius: 9999px; font-size: 12px; font-weight: bold; background: #f1f5f9; color: #475569; border: 1px solid #e2e8f0; }
  blockquote { background: #f8fafc; border-left: 6px solid #cbd5e1; padding: 24px; margin: 24px 0; border-radius: 12px; }
  blockquote.callout { background: #fffbeb; border: 1px solid #fef3c7; }
  .callout-title { color: #b45309; font-size: 12px; text-transform: uppercase; border-bottom: 1px solid #fde68a; padding-bottom: 8px; margin-bottom: 12px; }
  table { width: 100%; border-collapse: collapse; margin: 32px 0; border: 1px solid #bae6fd; }
  th { text-align: left; padding: 16px 24px; background: #f0f9ff; color: #075985; font-size: 12px; text-transform: uppercase; }
  td { padding: 16px 24px; font-size: 14px; color: #334155; border-top: 1px solid #f1f5f9; }
"#;

/// 第一步：构建独立打印页
pub fn build_print_page(doc: &RenderedDocument, target: PdfTarget) -> AppResult<String> {
    if target == PdfTarget::ReportOnly && !doc.has_report() {
        return Err(AppError::Export(
            "当前文档没有技术报告（RTQ），无法单独导出".to_string(),
        ));
    }

    let article_style = format!(
        "width: {w}px; max-width: {w}px; height: auto; overflow: visible; margin: 0 auto; padding: 20px; background-color: #ffffff; color: #1e293b; transform: none;",
        w = PAGE_WIDTH_PX
    );

    let mut body = String::new();
    match target {
        PdfTarget::Full => {
            body.push_str(&format!(
                "<article id=\"question-content\" style=\"{}\">\n",
                article_style
            ));
            body.push_str(&print_logo("Questão Avaliativa", false));
            body.push_str(&render_html(&doc.question, RenderMode::Export));
            if doc.has_report() {
                body.push_str(
                    "<div id=\"rti-section\" style=\"break-before: page; page-break-before: always;\">\n",
                );
                // 完整文档顶部已有标识，报告页不再重复
                body.push_str(&print_logo("RTQ - Relatório Técnico da Questão", true));
                body.push_str(&render_html(&doc.report, RenderMode::Export));
                body.push_str("</div>\n");
            }
        }
        PdfTarget::ReportOnly => {
            body.push_str(&format!(
                "<article id=\"rti-section\" style=\"{} break-before: auto; margin-top: 0;\">\n",
                article_style
            ));
            body.push_str(&print_logo("RTQ - Relatório Técnico da Questão", false));
            body.push_str(&render_html(&doc.report, RenderMode::Export));
        }
    }
    body.push_str("</article>\n");

    Ok(format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Academicus AI</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        PRINT_CSS, body
    ))
}

fn print_logo(subtitle: &str, hidden: bool) -> String {
    let (class, style) = if hidden {
        ("print-logo rti-only-header", " style=\"display: none\"")
    } else {
        ("print-logo", "")
    };
    format!(
        "<div class=\"{}\"{}>\n<h1>Academicus AI</h1>\n<p>{}</p>\n</div>\n",
        class, style, subtitle
    )
}

/// 两步合起来：排版后打印
pub async fn render_pdf<P: PdfPrinter>(
    doc: &RenderedDocument,
    target: PdfTarget,
    printer: &P,
) -> AppResult<Vec<u8>> {
    let page = build_print_page(doc, target)?;
    printer.print_pdf(&page).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::splitter::split;

    fn with_report() -> RenderedDocument {
        RenderedDocument::from_document(&split(
            "Enunciado\n\n---\n\nOutra\n\n# Relatório Técnico da Questão (RTQ)\n\nCorpo",
        ))
    }

    #[test]
    fn full_page_breaks_before_report_and_hides_secondary_header() {
        let page = build_print_page(&with_report(), PdfTarget::Full).unwrap();
        assert!(page.contains("width: 715px"));
        assert!(page.contains(".pdf-avoid-break"));
        assert!(page.contains("Questão Avaliativa"));
        assert!(page.contains(
            "<div id=\"rti-section\" style=\"break-before: page; page-break-before: always;\">"
        ));
        assert!(page.contains("print-logo rti-only-header\" style=\"display: none\""));
        assert!(page.contains("<div class=\"pdf-page-break\"></div>"));
    }

    #[test]
    fn report_only_page_has_own_header_and_no_question() {
        let page = build_print_page(&with_report(), PdfTarget::ReportOnly).unwrap();
        assert!(page.contains("RTQ - Relatório Técnico da Questão"));
        assert!(page.contains("break-before: auto"));
        assert!(!page.contains("Enunciado"));
        assert!(!page.contains("display: none"));
    }

    #[test]
    fn report_only_without_report_is_an_export_error() {
        let doc = RenderedDocument::from_document(&split("Só a questão"));
        assert!(matches!(
            build_print_page(&doc, PdfTarget::ReportOnly),
            Err(AppError::Export(_))
        ));
    }
}
