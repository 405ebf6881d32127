use clap::Parser;
use record_demos::core::registry;
use record_demos::utils::{logger, validation::Validate};
use record_demos::{CliConfig, ConsoleSink, DemoEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting record-demos CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 建立示範清單與引擎
    let demos = match registry::build_demos(&config) {
        Ok(demos) => demos,
        Err(e) => {
            tracing::error!("❌ Could not resolve demo list: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let engine = DemoEngine::new(ConsoleSink, demos);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Demo run completed successfully!");
            tracing::info!("📋 Executed {} demos: {}", report.count(), report.executed.join(", "));
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Demo run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                record_demos::utils::error::ErrorSeverity::Low => 0,
                record_demos::utils::error::ErrorSeverity::Medium => 2,
                record_demos::utils::error::ErrorSeverity::High => 1,
                record_demos::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
