use clap::Parser;
use exam_score_bot::core::ConfigProvider;
use exam_score_bot::utils::error::BotError;
use exam_score_bot::utils::{logger, validation::Validate};
use exam_score_bot::{BotEngine, CliConfig, MongoStore, TelegramApi, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting exam-score-bot");

    if let Some(path) = cli.config.clone() {
        tracing::debug!(%path, "Loading TOML configuration");
        let config = TomlConfig::from_file(&path)?;
        run(config).await
    } else {
        run(cli).await
    }
}

async fn run(config: impl ConfigProvider + Validate) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        report_failure("Configuration validation failed", &e);
        std::process::exit(1);
    }

    let store = match MongoStore::connect(
        config.storage_url(),
        config.database(),
        config.collection(),
    )
    .await
    {
        Ok(store) => store,
        Err(e) => {
            report_failure("Failed to connect to MongoDB", &e);
            std::process::exit(1);
        }
    };

    let api = TelegramApi::new(
        config.bot_token(),
        config.api_base(),
        config.poll_timeout_seconds(),
    )?;

    let mut engine = BotEngine::new(api, store, config.poll_timeout_seconds());

    // The poll loop only returns on failure.
    if let Err(e) = engine.run().await {
        report_failure("Bot stopped", &e);
        std::process::exit(1);
    }

    Ok(())
}

fn report_failure(context: &str, error: &BotError) {
    tracing::error!("❌ {}: {}", context, error);
    eprintln!("❌ {}: {}", context, error);
    if let Some(hint) = error.recovery_suggestion() {
        eprintln!("💡 {}", hint);
    }
}
