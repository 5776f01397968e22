use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 表单校验失败（提交前拦截）
    #[error("表单校验失败: {0}")]
    Validation(String),

    /// 不支持的题型
    #[error("未知的题型模板: {0}")]
    UnknownTemplate(String),

    /// 模型调用成功但没有返回可用文本
    #[error("模型未返回任何内容 (模型: {model})")]
    EmptyResponse { model: String },

    /// 网络或供应商错误，消息原样透传
    #[error("{message}")]
    Upstream { model: String, message: String },

    /// 请求被取消
    #[error("请求已取消")]
    Cancelled,

    /// 已有请求正在处理
    #[error("已有请求正在处理中，请稍候")]
    Busy,

    /// 导出失败
    #[error("导出失败: {0}")]
    Export(String),

    /// 已有导出任务在进行
    #[error("已有导出任务正在进行")]
    ExportInProgress,

    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// 文件读写失败
    #[error("文件操作失败 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// JSON 序列化失败
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
}

pub const GENERATION_FALLBACK_MESSAGE: &str = "Ocorreu um erro inesperado ao gerar a questão.";
pub const AUDIT_FALLBACK_MESSAGE: &str = "Ocorreu um erro inesperado durante a auditoria.";

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件操作错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }

    /// 创建上游错误
    pub fn upstream(model: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Upstream {
            model: model.into(),
            message: message.into(),
        }
    }

    /// 是否值得按重试策略再试一次
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Upstream { .. } | AppError::EmptyResponse { .. }
        )
    }

    /// 提交边界展示给用户的消息
    ///
    /// 上游错误直接透传供应商的原始消息，其余错误使用 Display 文本
    pub fn user_message(&self) -> String {
        self.user_message_or(GENERATION_FALLBACK_MESSAGE)
    }

    /// 同上，上游消息为空时使用给定的兜底文本
    pub fn user_message_or(&self, fallback: &str) -> String {
        match self {
            AppError::Upstream { message, .. } if !message.trim().is_empty() => message.clone(),
            AppError::Upstream { .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
