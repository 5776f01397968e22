use std::path::Path;
use std::str::FromStr;

use tokio::fs;

use crate::error::{AppError, AppResult};
use crate::models::question_type::QuestionType;
use crate::models::request::GenerationForm;

/// 从 TOML 文件加载生成表单
///
/// 未出现的字段使用表单默认值；题型名称无法识别时返回 `UnknownTemplate`
pub async fn load_generation_form(toml_file_path: &Path) -> AppResult<GenerationForm> {
    let path_text = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file(&path_text, e))?;

    let parse_error = |e: toml::de::Error| AppError::TomlParse {
        path: path_text.clone(),
        source: e,
    };

    let table: toml::Table = toml::from_str(&content).map_err(parse_error)?;

    // 题型先按名称解析，未知模板不混进通用的解析错误
    if let Some(toml::Value::String(name)) = table.get("question_type") {
        QuestionType::from_str(name)?;
    }

    let form: GenerationForm = toml::Value::Table(table).try_into().map_err(parse_error)?;

    tracing::info!("已加载请求文件: {}", path_text);

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question_type::{Alternative, QuestionType};
    use std::io::Write;

    #[tokio::test]
    async fn loads_partial_form_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
course = "Direito Civil"
content = "Responsabilidade civil objetiva"
question_type = "Asserção e Razão"
correct_alternative = "c"
"#
        )
        .unwrap();

        let form = load_generation_form(file.path()).await.unwrap();
        assert_eq!(form.question_type, QuestionType::AssertionReason);
        assert_eq!(form.correct_alternative, Alternative::C);
        assert_eq!(form.quantity, 1);
    }

    #[tokio::test]
    async fn missing_file_is_a_file_error() {
        let result = load_generation_form(Path::new("/definitely/not/here.toml")).await;
        assert!(matches!(result, Err(AppError::File { .. })));
    }

    #[tokio::test]
    async fn unknown_question_type_is_an_unknown_template() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "question_type = \"verdadeiro-falso\"").unwrap();

        let result = load_generation_form(file.path()).await;
        match result {
            Err(AppError::UnknownTemplate(name)) => assert_eq!(name, "verdadeiro-falso"),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_field_is_still_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "quantity = \"muitas\"").unwrap();

        let result = load_generation_form(file.path()).await;
        assert!(matches!(result, Err(AppError::TomlParse { .. })));
    }
}
