use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 题型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    /// 单选题
    #[serde(rename = "single-answer", alias = "Resposta Única")]
    SingleAnswer,
    /// 不完整陈述（补全题干）
    #[serde(rename = "incomplete-statement", alias = "Afirmação Incompleta")]
    IncompleteStatement,
    /// 多项组合选择
    #[serde(rename = "multiple-complementation", alias = "Complementação Múltipla")]
    MultipleComplementation,
    /// 断言-理由题
    #[serde(rename = "assertion-reason", alias = "Asserção e Razão")]
    AssertionReason,
    /// 论述题
    #[serde(rename = "discursive", alias = "Discursiva")]
    Discursive,
}

impl QuestionType {
    pub const ALL: [QuestionType; 5] = [
        QuestionType::SingleAnswer,
        QuestionType::IncompleteStatement,
        QuestionType::MultipleComplementation,
        QuestionType::AssertionReason,
        QuestionType::Discursive,
    ];

    /// 界面上显示的标准名称
    pub fn label(self) -> &'static str {
        match self {
            QuestionType::SingleAnswer => "Resposta Única",
            QuestionType::IncompleteStatement => "Afirmação Incompleta",
            QuestionType::MultipleComplementation => "Complementação Múltipla",
            QuestionType::AssertionReason => "Asserção e Razão",
            QuestionType::Discursive => "Discursiva",
        }
    }

    /// 命令行使用的标识
    pub fn id(self) -> &'static str {
        match self {
            QuestionType::SingleAnswer => "single-answer",
            QuestionType::IncompleteStatement => "incomplete-statement",
            QuestionType::MultipleComplementation => "multiple-complementation",
            QuestionType::AssertionReason => "assertion-reason",
            QuestionType::Discursive => "discursive",
        }
    }
}

impl FromStr for QuestionType {
    type Err = AppError;

    /// 同时接受标识和葡语名称，其余一律视为未知模板
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        QuestionType::ALL
            .into_iter()
            .find(|t| t.id().eq_ignore_ascii_case(needle) || t.label() == needle)
            .ok_or_else(|| AppError::UnknownTemplate(needle.to_string()))
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 多项组合题的罗马数字断言数量
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum MultipleRange {
    Three,
    #[default]
    Four,
    Five,
}

impl MultipleRange {
    pub fn count(self) -> u8 {
        match self {
            MultipleRange::Three => 3,
            MultipleRange::Four => 4,
            MultipleRange::Five => 5,
        }
    }
}

impl TryFrom<u8> for MultipleRange {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(MultipleRange::Three),
            4 => Ok(MultipleRange::Four),
            5 => Ok(MultipleRange::Five),
            other => Err(AppError::Validation(format!(
                "断言数量必须为 3、4 或 5，实际为 {}",
                other
            ))),
        }
    }
}

impl From<MultipleRange> for u8 {
    fn from(range: MultipleRange) -> Self {
        range.count()
    }
}

/// 选项字母 A-E
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Alternative {
    #[default]
    #[serde(alias = "a")]
    A,
    #[serde(alias = "b")]
    B,
    #[serde(alias = "c")]
    C,
    #[serde(alias = "d")]
    D,
    #[serde(alias = "e")]
    E,
}

impl Alternative {
    pub const ALL: [Alternative; 5] = [
        Alternative::A,
        Alternative::B,
        Alternative::C,
        Alternative::D,
        Alternative::E,
    ];

    pub fn letter(self) -> char {
        match self {
            Alternative::A => 'A',
            Alternative::B => 'B',
            Alternative::C => 'C',
            Alternative::D => 'D',
            Alternative::E => 'E',
        }
    }
}

impl FromStr for Alternative {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(AppError::Validation(format!("无效的选项字母: {}", s))),
        };
        Alternative::ALL
            .into_iter()
            .find(|alt| alt.letter() == letter)
            .ok_or_else(|| AppError::Validation(format!("无效的选项字母: {}", s)))
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// 按题型区分的题目规格
///
/// 断言数量只对多项组合题有意义，指定答案只对断言-理由题有意义，
/// 因此直接放进对应的变体里。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionSpec {
    SingleAnswer,
    IncompleteStatement,
    MultipleComplementation { range: MultipleRange },
    AssertionReason { answer_key: Alternative },
    Discursive,
}

impl QuestionSpec {
    pub fn question_type(&self) -> QuestionType {
        match self {
            QuestionSpec::SingleAnswer => QuestionType::SingleAnswer,
            QuestionSpec::IncompleteStatement => QuestionType::IncompleteStatement,
            QuestionSpec::MultipleComplementation { .. } => QuestionType::MultipleComplementation,
            QuestionSpec::AssertionReason { .. } => QuestionType::AssertionReason,
            QuestionSpec::Discursive => QuestionType::Discursive,
        }
    }

    /// 用题型和可选参数构造规格，与题型无关的参数被丢弃
    pub fn new(
        question_type: QuestionType,
        range: Option<MultipleRange>,
        answer_key: Option<Alternative>,
    ) -> Self {
        match question_type {
            QuestionType::SingleAnswer => QuestionSpec::SingleAnswer,
            QuestionType::IncompleteStatement => QuestionSpec::IncompleteStatement,
            QuestionType::MultipleComplementation => QuestionSpec::MultipleComplementation {
                range: range.unwrap_or_default(),
            },
            QuestionType::AssertionReason => QuestionSpec::AssertionReason {
                answer_key: answer_key.unwrap_or_default(),
            },
            QuestionType::Discursive => QuestionSpec::Discursive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_labels() {
        assert_eq!(
            "assertion-reason".parse::<QuestionType>().unwrap(),
            QuestionType::AssertionReason
        );
        assert_eq!(
            "Complementação Múltipla".parse::<QuestionType>().unwrap(),
            QuestionType::MultipleComplementation
        );
    }

    #[test]
    fn unknown_type_is_an_unknown_template_error() {
        let err = "true-or-false".parse::<QuestionType>().unwrap_err();
        assert!(matches!(err, AppError::UnknownTemplate(name) if name == "true-or-false"));
    }

    #[test]
    fn range_outside_domain_is_rejected() {
        assert_eq!(MultipleRange::try_from(3).unwrap(), MultipleRange::Three);
        assert!(matches!(MultipleRange::try_from(6), Err(AppError::Validation(_))));
        assert_eq!(MultipleRange::default(), MultipleRange::Four);
    }

    #[test]
    fn alternative_parsing_is_case_insensitive() {
        assert_eq!("d".parse::<Alternative>().unwrap(), Alternative::D);
        assert!("F".parse::<Alternative>().is_err());
        assert!("AB".parse::<Alternative>().is_err());
    }

    #[test]
    fn spec_drops_options_of_other_types() {
        let spec = QuestionSpec::new(
            QuestionType::SingleAnswer,
            Some(MultipleRange::Five),
            Some(Alternative::C),
        );
        assert_eq!(spec, QuestionSpec::SingleAnswer);

        let spec = QuestionSpec::new(QuestionType::AssertionReason, None, None);
        assert_eq!(
            spec,
            QuestionSpec::AssertionReason {
                answer_key: Alternative::A
            }
        );
    }
}
