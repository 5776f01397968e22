//! Word 导出
//!
//! Word 能直接打开带 Office 命名空间的 HTML，文件以 UTF-8 BOM 开头。

use chrono::NaiveDate;

use crate::document::html::{render_html, RenderMode};
use crate::document::render::RenderedDocument;

pub const WORD_FILE_NAME: &str = "Questao_Academicus_AI.doc";

const BOM: char = '\u{feff}';

/// 报告前强制 Word 分页
const WORD_PAGE_BREAK: &str =
    "<br style=\"page-break-before: always; mso-break-type: section-break\">";

const WORD_HEAD: &str = r#"<html xmlns:o='urn:schemas-microsoft-com:office:office' xmlns:w='urn:schemas-microsoft-com:office:word' xmlns='http://www.w3.org/TR/REC-html40'>
<head>
<meta charset='utf-8'>
<title>Questão Academicus AI</title>
<style>
  @page {
    mso-page-orientation: portrait;
    size: 210mm 297mm;
    margin: 2.5cm 2.5cm 2.5cm 2.5cm;
  }

  body {
    font-family: 'Calibri', 'Arial', sans-serif;
    font-size: 12pt;
    line-height: 1.5;
    color: #000000;
    text-align: justify;
  }

  h1 {
    font-size: 16pt;
    font-weight: bold;
    color: #0284c7;
    border-bottom: 2pt solid #0284c7;
    padding-bottom: 6pt;
    margin-top: 24pt;
    margin-bottom: 18pt;
  }

  h2 {
    font-size: 14pt;
    font-weight: bold;
    color: #1e293b;
    margin-top: 24pt;
    margin-bottom: 12pt;
    background-color: #f8fafc;
    padding: 5pt;
    border-left: 4pt solid #cbd5e1;
  }

  h3 {
    font-size: 12pt;
    font-weight: bold;
    text-transform: uppercase;
    color: #64748b;
    margin-top: 18pt;
    margin-bottom: 6pt;
    letter-spacing: 1px;
  }

  p { margin-bottom: 12pt; }

  table {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 18pt;
    border: 1px solid #94a3b8;
  }
  th {
    background-color: #e2e8f0;
    color: #1e293b;
    font-weight: bold;
    border: 1px solid #94a3b8;
    padding: 8pt;
    text-align: left;
  }
  td {
    border: 1px solid #94a3b8;
    padding: 8pt;
    vertical-align: top;
  }

  hr {
    border: 0;
    border-top: 1px dashed #94a3b8;
    margin: 24pt 0;
  }

  blockquote {
    background-color: #fffbeb;
    border-left: 4pt solid #f59e0b;
    padding: 12pt;
    margin: 12pt 0;
    font-style: italic;
    color: #451a03;
  }

  .text-center { text-align: center; }
  .font-bold { font-weight: bold; }

  .alternativa {
    margin-bottom: 8pt;
    display: block;
  }

  .doc-header {
    margin-bottom: 30pt;
    text-align: right;
    color: #64748b;
    font-size: 10pt;
    border-bottom: 1px solid #e2e8f0;
    padding-bottom: 10pt;
  }
</style>
</head>
<body>
"#;

/// 生成完整的 .doc 内容（含 BOM）
pub fn build_word_document(doc: &RenderedDocument, generated_on: NaiveDate) -> String {
    let mut html = String::new();
    html.push(BOM);
    html.push_str(WORD_HEAD);
    html.push_str(&format!(
        "<div class=\"doc-header\">\n<strong>Academicus AI</strong> | Gerado em {}\n</div>\n",
        generated_on.format("%d/%m/%Y")
    ));

    html.push_str("<div id=\"question-content\">\n");
    html.push_str(&render_html(&doc.question, RenderMode::Display));

    if doc.has_report() {
        html.push_str(WORD_PAGE_BREAK);
        html.push('\n');
        html.push_str("<div id=\"rti-section\">\n");
        html.push_str(&render_html(&doc.report, RenderMode::Display));
        html.push_str("</div>\n");
    }

    html.push_str("</div>\n</body></html>");
    html
}
