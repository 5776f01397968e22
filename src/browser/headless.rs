use std::path::{Path, PathBuf};

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::document::export::PdfPrinter;
use crate::error::{AppError, AppResult};

/// 10mm 换算为英寸
const MARGIN_INCHES: f64 = 0.3937;
const A4_WIDTH_INCHES: f64 = 8.27;
const A4_HEIGHT_INCHES: f64 = 11.69;

/// 启动无头浏览器，返回浏览器和事件处理任务
pub async fn launch_headless_browser(
    executable: Option<&Path>,
) -> AppResult<(Browser, JoinHandle<()>)> {
    info!("🚀 启动无头浏览器...");

    let mut builder = BrowserConfig::builder().new_headless_mode().args(vec![
        "--disable-gpu",             // 无头模式禁用 GPU
        "--no-sandbox",              // 禁用沙盒，防止权限问题导致的崩溃
        "--disable-dev-shm-usage",   // 防止共享内存不足
        "--remote-debugging-port=0", // 让浏览器自动选择端口
    ]);
    if let Some(path) = executable {
        debug!("浏览器路径: {}", path.display());
        builder = builder.chrome_executable(path);
    }

    let config = builder.build().map_err(|e| {
        error!("配置无头浏览器失败: {}", e);
        AppError::Export(format!("配置无头浏览器失败: {}", e))
    })?;

    let (browser, mut handler) = Browser::launch(config).await.map_err(|e| {
        error!("启动无头浏览器失败: {}", e);
        AppError::Export(format!("启动无头浏览器失败: {}", e))
    })?;
    debug!("无头浏览器启动成功");

    // 在后台处理浏览器事件
    let handle = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    Ok((browser, handle))
}

/// 用无头 Chromium 打印 PDF
#[derive(Debug, Clone, Default)]
pub struct HeadlessPdfPrinter {
    executable: Option<PathBuf>,
}

impl HeadlessPdfPrinter {
    pub fn new(config: &Config) -> Self {
        Self {
            executable: config.browser_executable.as_ref().map(PathBuf::from),
        }
    }

    fn print_params() -> PrintToPdfParams {
        PrintToPdfParams {
            landscape: Some(false),
            print_background: Some(true),
            paper_width: Some(A4_WIDTH_INCHES),
            paper_height: Some(A4_HEIGHT_INCHES),
            margin_top: Some(MARGIN_INCHES),
            margin_bottom: Some(MARGIN_INCHES),
            margin_left: Some(MARGIN_INCHES),
            margin_right: Some(MARGIN_INCHES),
            prefer_css_page_size: Some(false),
            ..Default::default()
        }
    }
}

impl PdfPrinter for HeadlessPdfPrinter {
    async fn print_pdf(&self, html: &str) -> AppResult<Vec<u8>> {
        let (mut browser, handle) = launch_headless_browser(self.executable.as_deref()).await?;

        let result: AppResult<Vec<u8>> = async {
            let page = browser.new_page("about:blank").await.map_err(|e| {
                error!("创建页面失败: {}", e);
                AppError::Export(format!("创建页面失败: {}", e))
            })?;
            page.set_content(html)
                .await
                .map_err(|e| AppError::Export(format!("写入打印页失败: {}", e)))?;
            page.pdf(Self::print_params())
                .await
                .map_err(|e| AppError::Export(format!("打印 PDF 失败: {}", e)))
        }
        .await;

        if let Err(e) = browser.close().await {
            warn!("关闭浏览器失败: {}", e);
        }
        handle.abort();

        let bytes = result?;
        info!("✅ PDF 打印完成: {} 字节", bytes.len());
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_a4_portrait_with_backgrounds() {
        let params = HeadlessPdfPrinter::print_params();
        assert_eq!(params.print_background, Some(true));
        assert_eq!(params.landscape, Some(false));
        assert_eq!(params.paper_width, Some(8.27));
        assert_eq!(params.margin_left, Some(0.3937));
    }

    #[tokio::test]
    #[ignore]
    async fn test_print_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let printer = HeadlessPdfPrinter::new(&Config::from_env());
        let bytes = printer
            .print_pdf("<html><body><p>Academicus AI</p></body></html>")
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
