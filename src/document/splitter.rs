//! 模型响应拆分：题目正文 / 技术报告（RTQ）

use serde::{Deserialize, Serialize};

use crate::prompts::REPORT_HEADING;

/// 拆分后的响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub question: String,
    /// 报告部分，包含标题本身；没有报告时为空串
    pub report: String,
}

impl GeneratedDocument {
    pub fn has_report(&self) -> bool {
        !self.report.is_empty()
    }
}

/// 在报告标题第一次出现的位置拆分
///
/// 多题批量生成时，第一个标题之后的全部内容（包括后续题目）都归入报告。
pub fn split(text: &str) -> GeneratedDocument {
    match text.find(REPORT_HEADING) {
        Some(index) => GeneratedDocument {
            question: text[..index].to_string(),
            report: text[index..].to_string(),
        },
        None => GeneratedDocument {
            question: text.to_string(),
            report: String::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_at_heading_and_keeps_it_in_report() {
        let doc = split("Question text\n# Relatório Técnico da Questão (RTQ)\nReport body");
        assert_eq!(doc.question, "Question text\n");
        assert_eq!(doc.report, "# Relatório Técnico da Questão (RTQ)\nReport body");
        assert!(doc.has_report());
    }

    #[test]
    fn missing_heading_means_no_report() {
        let doc = split("No report here");
        assert_eq!(doc.question, "No report here");
        assert_eq!(doc.report, "");
        assert!(!doc.has_report());
    }

    #[test]
    fn only_first_heading_is_a_split_point() {
        let text = "Q1\n# Relatório Técnico da Questão (RTQ)\nR1\n---\nQ2\n# Relatório Técnico da Questão (RTQ)\nR2";
        let doc = split(text);
        assert_eq!(doc.question, "Q1\n");
        assert!(doc.report.contains("Q2"));
        assert!(doc.report.ends_with("R2"));
    }
}
