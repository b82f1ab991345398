use clap::Parser;
use namegen_form::utils::{logger, validation::Validate};
use namegen_form::{
    CliConfig, FormConfig, FormController, FormState, HttpNameApi, TerminalView, TomlConfig,
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting namegen-form CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 有指定設定檔時，先套用檔案裡的端點與介面參數
    if let Some(path) = config.config.clone() {
        let file = TomlConfig::from_file(&path)?;
        file.validate()?;
        config.apply_file(&file);
    }

    // 驗證設定
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_message());
        std::process::exit(1);
    }

    let snapshot = config.snapshot();
    let api = HttpNameApi::new(config.api_endpoint().to_string());
    let view = Arc::new(Mutex::new(TerminalView::new()));
    let mut controller = FormController::new(api, Arc::clone(&view), config.clone());

    // 送出表單並等待結果
    controller.submit(snapshot).await;

    if controller.state() != FormState::ResultsShown {
        // 失敗原因已由橫幅顯示過了
        std::process::exit(2);
    }

    // 需要的話直接展開指定結果的文化解讀
    if let Some(number) = config.detail {
        let index = number.saturating_sub(1);
        if let Err(e) = controller.open_detail(index).await {
            tracing::warn!("Cannot show detail: {}", e);
            eprintln!("❌ {}", e.user_message());
            std::process::exit(1);
        }
    }

    tracing::info!("✅ Name generation completed");
    Ok(())
}
