use clap::Parser;
use record_demos::core::registry;
use record_demos::utils::{logger, validation::Validate};
use record_demos::{ConfigProvider, ConsoleSink, DemoEngine, SuiteConfig};

#[derive(Parser)]
#[command(name = "suite-demos")]
#[command(about = "Demo runner with TOML suite configuration support")]
struct Args {
    /// Path to TOML suite configuration file
    #[arg(short, long, default_value = "demo-suite.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the demo list from config
    #[arg(long, value_delimiter = ',')]
    demos: Option<Vec<String>>,

    /// Dry run - show what would run without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based demo runner");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // 載入 TOML 配置
    let mut config = match SuiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // 應用命令列覆蓋設定
    if let Some(demos) = args.demos.clone() {
        tracing::info!("🔧 Demo list overridden to: {}", demos.join(", "));
        config.run.demos = demos;
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // 顯示配置摘要
    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - Nothing will be executed");
        perform_dry_run(&config)?;
        return Ok(());
    }

    // 建立示範清單與引擎
    let demos = match registry::build_demos(&config) {
        Ok(demos) => demos,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    let engine = DemoEngine::new(ConsoleSink, demos);

    match engine.run() {
        Ok(report) => {
            tracing::info!("✅ Demo run completed successfully!");
            tracing::info!("📋 Executed: {}", report.executed.join(", "));
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

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

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

fn display_config_summary(config: &SuiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Suite: {} v{}", config.suite.name, config.suite.version);
    println!("  Description: {}", config.suite.description);
    println!("  Demos: {}", config.run.demos.join(", "));
    println!(
        "  Secret keys: {}",
        config
            .secret_keys()
            .iter()
            .map(|k| k.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("  Secret store entries: {}", config.secret_entries().len());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SuiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Dry Run Analysis:");
    println!();

    println!("🎬 Demos that would run:");
    for demo in registry::build_demos(config)? {
        println!("  {} - {}", demo.name(), demo.describe());
    }

    println!();
    println!("🔑 Secret-lookup inputs:");
    for key in config.secret_keys() {
        println!("  key {}", key);
    }

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
