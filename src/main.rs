use clap::Parser;
use line_gen::utils::logger;
use line_gen::{CliConfig, GenError, GenerationEngine};

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        // --help / --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            let err = GenError::from(e);
            eprintln!("💡 {}", err.recovery_suggestion());
            std::process::exit(err.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(cli.verbose, cli.quiet);

    tracing::info!("Starting line-gen");
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        // 記錄詳細錯誤信息
        tracing::error!("❌ Generation failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &CliConfig) -> line_gen::Result<()> {
    // 驗證配置，任何檔案 I/O 之前
    let config = cli.to_generator_config()?;

    if cli.monitor {
        tracing::info!("🔍 System monitoring enabled");
    }

    let summary = GenerationEngine::new(config)
        .with_progress(!cli.quiet)
        .with_monitoring(cli.monitor)
        .run()?;

    tracing::info!(
        "✅ Wrote {} rows in {:?}",
        summary.rows_written,
        summary.elapsed
    );
    println!("📁 Output saved to: {}", summary.path.display());
    Ok(())
}
