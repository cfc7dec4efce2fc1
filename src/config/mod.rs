pub mod toml_config;

use crate::adapters::telegram::DEFAULT_API_BASE;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

pub const DEFAULT_STORAGE_URL: &str = "mongodb://localhost:27017";
pub const DEFAULT_DATABASE: &str = "exam_scores";
pub const DEFAULT_COLLECTION: &str = "students";
pub const DEFAULT_POLL_TIMEOUT_SECONDS: u64 = 30;

#[derive(Debug, Clone, Parser)]
#[command(name = "exam-score-bot")]
#[command(about = "A Telegram bot that collects exam scores into MongoDB")]
pub struct CliConfig {
    /// Telegram bot token.
    #[arg(long, env = "BOT_TOKEN", default_value = "", hide_env_values = true)]
    pub bot_token: String,

    #[arg(long, env = "MONGODB_URL", default_value = DEFAULT_STORAGE_URL)]
    pub mongodb_url: String,

    #[arg(long, default_value = DEFAULT_DATABASE)]
    pub database: String,

    #[arg(long, default_value = DEFAULT_COLLECTION)]
    pub collection: String,

    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Long-poll timeout for getUpdates, in seconds.
    #[arg(long, default_value_t = DEFAULT_POLL_TIMEOUT_SECONDS)]
    pub poll_timeout: u64,

    /// Load settings from a TOML file instead of the flags above.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bot_token(&self) -> &str {
        &self.bot_token
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn poll_timeout_seconds(&self) -> u64 {
        self.poll_timeout
    }

    fn storage_url(&self) -> &str {
        &self.mongodb_url
    }

    fn database(&self) -> &str {
        &self.database
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_required_string("bot_token", &self.bot_token)?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_storage_url("mongodb_url", &self.mongodb_url)?;
        validation::validate_non_empty_string("database", &self.database)?;
        validation::validate_non_empty_string("collection", &self.collection)?;
        validation::validate_positive_number("poll_timeout", self.poll_timeout, 1)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> CliConfig {
        CliConfig {
            bot_token: "123:abc".to_string(),
            mongodb_url: DEFAULT_STORAGE_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            poll_timeout: DEFAULT_POLL_TIMEOUT_SECONDS,
            config: None,
            verbose: false,
        }
    }

    #[test]
    fn accepts_defaults_with_token() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn rejects_missing_token() {
        let config = CliConfig {
            bot_token: "".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_mongodb_storage_url() {
        let config = CliConfig {
            mongodb_url: "https://localhost:27017".to_string(),
            ..base_config()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_poll_timeout() {
        let config = CliConfig {
            poll_timeout: 0,
            ..base_config()
        };
        assert!(config.validate().is_err());
    }
}
