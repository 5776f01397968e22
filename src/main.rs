use academicus::cli::{self, Cli};
use academicus::services::CancellationToken;
use academicus::utils::logging;
use anyhow::Result;
use clap::Parser;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志
    logging::init(logging::verbose_requested(cli.verbose));

    // 加载配置
    let config = cli::load_config(cli.config.as_deref())?;
    logging::log_startup(&config);

    // Ctrl-C 取消正在进行的请求
    let cancel = CancellationToken::new();
    let signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 收到中断信号，正在取消");
            signal.cancel();
        }
    });

    cli::run(cli.command, config, &cancel).await?;

    Ok(())
}
