//! 会话状态
//!
//! 界面上的全部可变状态集中在一个可序列化的结构体里，
//! 每个用户动作都通过纯函数 `reduce` 产生新状态。

use serde::{Deserialize, Serialize};

use crate::document::PdfTarget;
use crate::error::{AppError, AppResult};
use crate::models::{
    Alternative, BloomLevel, DifficultyLevel, GenerationForm, GenerationRequest, MultipleRange,
    Quantity, QuestionType,
};

/// 工作模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Generator,
    Auditor,
}

/// 正在进行的导出
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportTarget {
    Word,
    Pdf(PdfTarget),
}

/// 用户动作
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SwitchMode(Mode),
    /// 整体替换表单（从请求文件载入）
    ReplaceForm(GenerationForm),
    SetCourse(String),
    SetContent(String),
    SetLearningObjective(String),
    SetQuestionType(QuestionType),
    SetBloomLevel(BloomLevel),
    SetDifficulty(DifficultyLevel),
    SetMultipleRange(MultipleRange),
    SetCorrectAlternative(Alternative),
    SetAuditInput(String),
    IncrementQuantity,
    DecrementQuantity,
    SubmitStarted,
    SubmitSucceeded(String),
    SubmitFailed(String),
    ExportStarted(ExportTarget),
    ExportFinished,
}

/// 待执行的提交
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Generate(GenerationRequest),
    Audit(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionState {
    pub mode: Mode,
    pub form: GenerationForm,
    pub audit_input: String,
    /// 最近一次成功的模型输出
    pub output: Option<String>,
    pub error: Option<String>,
    pub loading: bool,
    pub exporting: Option<ExportTarget>,
}

impl SessionState {
    /// 根据当前模式构造提交内容
    pub fn submission(&self) -> AppResult<Submission> {
        if self.loading {
            return Err(AppError::Busy);
        }
        match self.mode {
            Mode::Generator => self.form.validate().map(Submission::Generate),
            Mode::Auditor => {
                if self.audit_input.trim().is_empty() {
                    return Err(AppError::Validation("待审核的题目不能为空".to_string()));
                }
                Ok(Submission::Audit(self.audit_input.clone()))
            }
        }
    }
}

/// 状态转移
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::SwitchMode(mode) => {
            state.mode = mode;
            state.error = None;
            state.output = None;
        }
        Action::ReplaceForm(form) => state.form = form,
        Action::SetCourse(course) => state.form.course = course,
        Action::SetContent(content) => state.form.content = content,
        Action::SetLearningObjective(objective) => state.form.learning_objective = objective,
        Action::SetQuestionType(question_type) => state.form.question_type = question_type,
        Action::SetBloomLevel(level) => state.form.bloom_level = level,
        Action::SetDifficulty(difficulty) => state.form.difficulty = difficulty,
        Action::SetMultipleRange(range) => state.form.multiple_range = range.count(),
        Action::SetCorrectAlternative(alternative) => state.form.correct_alternative = alternative,
        Action::SetAuditInput(input) => state.audit_input = input,
        Action::IncrementQuantity => {
            state.form.quantity = state.form.quantity.saturating_add(1).min(Quantity::MAX)
        }
        Action::DecrementQuantity => {
            state.form.quantity = state.form.quantity.saturating_sub(1).max(Quantity::MIN)
        }
        Action::SubmitStarted => {
            state.loading = true;
            state.error = None;
            state.output = None;
        }
        Action::SubmitSucceeded(text) => {
            state.loading = false;
            state.output = Some(text);
        }
        Action::SubmitFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }
        Action::ExportStarted(target) => state.exporting = Some(target),
        Action::ExportFinished => state.exporting = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: SessionState, actions: Vec<Action>) -> SessionState {
        actions.into_iter().fold(state, reduce)
    }

    fn filled() -> SessionState {
        apply(
            SessionState::default(),
            vec![
                Action::SetCourse("Direito".to_string()),
                Action::SetContent("Contratos".to_string()),
            ],
        )
    }

    #[test]
    fn quantity_is_clamped() {
        let state = apply(SessionState::default(), vec![Action::DecrementQuantity]);
        assert_eq!(state.form.quantity, 1);

        let state = apply(SessionState::default(), vec![Action::IncrementQuantity; 15]);
        assert_eq!(state.form.quantity, 10);
    }

    #[test]
    fn switching_mode_clears_output_and_error() {
        let state = apply(
            filled(),
            vec![
                Action::SubmitStarted,
                Action::SubmitFailed("Quota exceeded".to_string()),
            ],
        );
        assert_eq!(state.error.as_deref(), Some("Quota exceeded"));

        let state = reduce(state, Action::SwitchMode(Mode::Auditor));
        assert_eq!(state.mode, Mode::Auditor);
        assert!(state.error.is_none());
        assert!(state.output.is_none());
        assert_eq!(state.form.course, "Direito");
    }

    #[test]
    fn submit_lifecycle() {
        let state = reduce(filled(), Action::SubmitStarted);
        assert!(state.loading);
        assert!(matches!(state.submission(), Err(AppError::Busy)));

        let state = reduce(state, Action::SubmitSucceeded("# Questão".to_string()));
        assert!(!state.loading);
        assert_eq!(state.output.as_deref(), Some("# Questão"));
    }

    #[test]
    fn generator_submission_validates_the_form() {
        assert!(matches!(
            SessionState::default().submission(),
            Err(AppError::Validation(_))
        ));

        let state = reduce(filled(), Action::SetQuestionType(QuestionType::AssertionReason));
        let state = reduce(state, Action::SetCorrectAlternative(Alternative::C));
        match state.submission().unwrap() {
            Submission::Generate(request) => {
                assert_eq!(request.spec.question_type(), QuestionType::AssertionReason)
            }
            other => panic!("unexpected submission {:?}", other),
        }
    }

    #[test]
    fn auditor_submission_requires_text() {
        let state = reduce(SessionState::default(), Action::SwitchMode(Mode::Auditor));
        assert!(matches!(state.submission(), Err(AppError::Validation(_))));

        let state = reduce(state, Action::SetAuditInput("1. Questão".to_string()));
        assert_eq!(
            state.submission().unwrap(),
            Submission::Audit("1. Questão".to_string())
        );
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = reduce(filled(), Action::ExportStarted(ExportTarget::Pdf(PdfTarget::Full)));
        let json = serde_json::to_string(&state).unwrap();
        let back: SessionState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
