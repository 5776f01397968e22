use std::sync::atomic::{AtomicUsize, Ordering};

use academicus::document::{PdfPrinter, PdfTarget};
use academicus::models::{Alternative, QuestionType};
use academicus::services::GenerationParams;
use academicus::workflow::{Action, Mode};
use academicus::{App, AppError, AppResult, CancellationToken, Config, TextGenerator};

const RESPONSE: &str = "Enunciado da questão.\n\na) Primeira.\n\n# Relatório Técnico da Questão (RTQ)\n\n### 1. Metadados\n\n#Tag1 #Tag2\n";

/// 返回固定文本并记录调用次数
struct Fixed {
    calls: AtomicUsize,
}

impl Fixed {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }
}

impl TextGenerator for Fixed {
    async fn generate(
        &self,
        params: &GenerationParams,
        cancel: &CancellationToken,
    ) -> AppResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        assert!(!params.prompt.is_empty());
        Ok(RESPONSE.to_string())
    }
}

struct BytesPrinter;

impl PdfPrinter for BytesPrinter {
    async fn print_pdf(&self, html: &str) -> AppResult<Vec<u8>> {
        Ok(format!("%PDF-1.4\n{}", html.len()).into_bytes())
    }
}

fn app_with_output(dir: &std::path::Path) -> App<Fixed> {
    let config = Config {
        output_dir: dir.display().to_string(),
        ..Config::default()
    };
    let mut app = App::new(config, Fixed::new());
    app.dispatch(Action::SetCourse("Administração".to_string()));
    app.dispatch(Action::SetContent("Gestão de projetos".to_string()));
    app.dispatch(Action::SetQuestionType(QuestionType::AssertionReason));
    app.dispatch(Action::SetCorrectAlternative(Alternative::B));
    app
}

#[tokio::test]
async fn generate_then_export_everything() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_output(dir.path());

    let doc = app.submit(&CancellationToken::new()).await.unwrap();
    assert!(doc.has_report());
    assert_eq!(app.state().output.as_deref(), Some(RESPONSE));
    assert!(app.state().error.is_none());

    let word_path = app.default_path("questao.doc");
    let word = app.export_word(&word_path).await.unwrap();
    let content = std::fs::read_to_string(&word).unwrap();
    assert!(content.contains("Enunciado da questão."));

    for target in [PdfTarget::Full, PdfTarget::ReportOnly] {
        let path = app.default_path(target.file_name());
        let saved = app.export_pdf(target, &path, &BytesPrinter).await.unwrap();
        assert!(std::fs::read(&saved).unwrap().starts_with(b"%PDF"));
    }
    assert!(app.state().exporting.is_none());
}

#[tokio::test]
async fn export_without_document_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_output(dir.path());
    let err = app
        .export_pdf(PdfTarget::Full, &dir.path().join("x.pdf"), &BytesPrinter)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
}

#[tokio::test]
async fn cancelled_submission_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_output(dir.path());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = app.submit(&cancel).await.unwrap_err();
    assert!(matches!(err, AppError::Cancelled));
    assert!(!app.state().loading);
    assert!(app.state().error.is_some());
}

#[tokio::test]
async fn switching_mode_clears_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_output(dir.path());
    app.submit(&CancellationToken::new()).await.unwrap();
    assert!(app.state().output.is_some());

    app.dispatch(Action::SwitchMode(Mode::Auditor));
    assert!(app.state().output.is_none());
    assert_eq!(app.state().mode, Mode::Auditor);
}

#[tokio::test]
async fn loaded_markdown_can_be_exported() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = app_with_output(dir.path());
    let doc = app.load_document("Só a questão.").clone();
    assert!(!doc.has_report());

    let err = app
        .export_pdf(
            PdfTarget::ReportOnly,
            &dir.path().join("rtq.pdf"),
            &BytesPrinter,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Export(_)));
    assert!(app.state().exporting.is_none());
}
