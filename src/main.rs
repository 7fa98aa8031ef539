use clap::Parser;
use gallery_manager::domain::current_year;
use gallery_manager::utils::error::ErrorSeverity;
use gallery_manager::utils::logger;
use gallery_manager::{CliConfig, Gallery, JsonFileStore, Menu};
use std::io;

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting gallery-manager");
    tracing::debug!("CLI config: {:?}", cli);

    // 載入並驗證配置
    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let store = JsonFileStore::new(config.data_file());
    let (gallery, load_warning) = Gallery::open(store);
    if let Some(e) = load_warning {
        println!("⚠️ {}", e.user_friendly_message());
    }

    let stdin = io::stdin();
    let mut menu = Menu::new(
        gallery,
        config.pricing.clone(),
        current_year(),
        stdin.lock(),
        io::stdout(),
    );

    if let Err(e) = menu.run() {
        tracing::error!(
            "❌ Menu stopped: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    tracing::info!("👋 Goodbye, {} exhibitions on record", menu.gallery().len());
}
