use clap::Parser;
use order_lookup::adapters::prompt::run_interactive;
use order_lookup::utils::{logger, validation::Validate};
use order_lookup::{
    CliConfig, HttpOrderSource, LookupConfig, LookupController, TerminalSurface, TomlConfig,
};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting order-lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };
    tracing::info!("🔗 Order service: {}", config.base_url);

    let source = match HttpOrderSource::from_config(&config) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("❌ {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    let controller = LookupController::new(source, TerminalSurface::new());

    match &cli.order_uid {
        Some(order_uid) => controller.perform_lookup(order_uid).await,
        None => {
            run_interactive(
                &controller,
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
        }
    }

    Ok(())
}

/// env defaults < TOML file < CLI flags
fn load_config(cli: &CliConfig) -> order_lookup::Result<LookupConfig> {
    let mut config = LookupConfig::from_env();

    if let Some(path) = &cli.config {
        tracing::info!("📁 Loading configuration from: {}", path);
        let toml = TomlConfig::from_file(path)?;
        toml.validate()?;
        config = config.with_toml(&toml);
    }

    let config = config.with_cli(cli);
    config.validate()?;
    Ok(config)
}
