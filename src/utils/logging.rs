/// 日志工具模块
///
/// 提供日志初始化和格式化输出的辅助函数
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::document::GeneratedDocument;
use crate::models::GenerationRequest;

/// 初始化日志
///
/// `RUST_LOG` 优先；未设置时默认 info，详细模式下为 debug
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 命令行 `--verbose` 或环境变量 `VERBOSE_LOGGING` 任一开启即为详细模式
///
/// 在配置加载之前调用，因此只看环境变量
pub fn verbose_requested(flag: bool) -> bool {
    flag || std::env::var("VERBOSE_LOGGING")
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// 记录程序启动信息（不输出密钥）
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Academicus AI 启动");
    info!("🤖 模型: {}", config.llm_model_name);
    if !config.llm_fallback_models.is_empty() {
        info!("🔁 备用模型: {}", config.llm_fallback_models.join(", "));
    }
    debug!("API 端点: {}", config.llm_api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录生成请求摘要
pub fn log_request_summary(request: &GenerationRequest) {
    info!(
        "📋 生成请求: {} × {} | 课程: {} | 内容: {}",
        request.quantity.get(),
        request.spec.question_type(),
        truncate_text(&request.course, 40),
        truncate_text(&request.content, 40)
    );
    debug!(
        "布鲁姆层级: {} | 难度: {}",
        request.bloom_level, request.difficulty
    );
}

/// 记录生成完成信息
pub fn log_generation_complete(document: &GeneratedDocument) {
    info!("✅ 生成完成: 题目 {} 字符", document.question.chars().count());
    if document.has_report() {
        info!("📑 技术报告 {} 字符", document.report.chars().count());
    } else {
        info!("⚠️ 响应中没有技术报告（RTQ）");
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters() {
        assert_eq!(truncate_text("Relatório", 20), "Relatório");
        assert_eq!(truncate_text("Avaliação", 4), "Aval...");
    }

    #[test]
    fn verbose_flag_wins_without_config() {
        assert!(verbose_requested(true));
        assert!(is_truthy(" TRUE "));
        assert!(is_truthy("1"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
