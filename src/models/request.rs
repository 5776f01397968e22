use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::bloom::BloomLevel;
use crate::models::difficulty::DifficultyLevel;
use crate::models::question_type::{Alternative, MultipleRange, QuestionSpec, QuestionType};

/// 一次生成的题目数量（1..=10）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> AppResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(AppError::Validation(format!(
                "题目数量必须在 {}..={} 之间，实际为 {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn is_batch(self) -> bool {
        self.0 > 1
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Quantity {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> Self {
        q.0
    }
}

/// 经过校验的生成请求，交给编译器后不再修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub course: String,
    pub content: String,
    pub learning_objective: Option<String>,
    pub spec: QuestionSpec,
    pub bloom_level: BloomLevel,
    pub difficulty: DifficultyLevel,
    pub quantity: Quantity,
}

/// 表单原始输入
///
/// 字段与界面一一对应；`multiple_range` 和 `correct_alternative`
/// 在题型不匹配时也会保留，校验时才丢弃。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationForm {
    pub course: String,
    pub content: String,
    pub learning_objective: String,
    pub question_type: QuestionType,
    pub bloom_level: BloomLevel,
    pub difficulty: DifficultyLevel,
    pub quantity: u8,
    pub multiple_range: u8,
    pub correct_alternative: Alternative,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            course: String::new(),
            content: String::new(),
            learning_objective: String::new(),
            question_type: QuestionType::SingleAnswer,
            bloom_level: BloomLevel::Create,
            difficulty: DifficultyLevel::Medium,
            quantity: Quantity::MIN,
            multiple_range: MultipleRange::default().count(),
            correct_alternative: Alternative::default(),
        }
    }
}

impl GenerationForm {
    /// 校验表单并生成请求
    pub fn validate(&self) -> AppResult<GenerationRequest> {
        if self.course.trim().is_empty() {
            return Err(AppError::Validation("课程名称不能为空".to_string()));
        }
        if self.content.trim().is_empty() {
            return Err(AppError::Validation("知识内容不能为空".to_string()));
        }

        let quantity = Quantity::new(self.quantity)?;

        let range = match self.question_type {
            QuestionType::MultipleComplementation => {
                Some(MultipleRange::try_from(self.multiple_range)?)
            }
            _ => None,
        };

        let spec = QuestionSpec::new(self.question_type, range, Some(self.correct_alternative));

        let learning_objective = if self.learning_objective.is_empty() {
            None
        } else {
            Some(self.learning_objective.clone())
        };

        Ok(GenerationRequest {
            course: self.course.clone(),
            content: self.content.clone(),
            learning_objective,
            spec,
            bloom_level: self.bloom_level,
            difficulty: self.difficulty,
            quantity,
        })
    }
}
