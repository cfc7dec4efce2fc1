use crate::adapters::telegram::DEFAULT_API_BASE;
use crate::config::{DEFAULT_COLLECTION, DEFAULT_DATABASE, DEFAULT_POLL_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{BotError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub bot: BotSection,
    pub storage: StorageSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotSection {
    pub token: String,
    pub api_base: Option<String>,
    pub poll_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSection {
    pub url: String,
    pub database: Option<String>,
    pub collection: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BotError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| BotError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values, so
    /// tokens and connection strings stay out of the file itself. Unset
    /// variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_required_string("bot.token", &self.bot.token)?;
        validation::validate_storage_url("storage.url", &self.storage.url)?;

        if let Some(api_base) = &self.bot.api_base {
            validation::validate_url("bot.api_base", api_base)?;
        }
        if let Some(timeout) = self.bot.poll_timeout_seconds {
            validation::validate_positive_number("bot.poll_timeout_seconds", timeout, 1)?;
        }
        if let Some(database) = &self.storage.database {
            validation::validate_non_empty_string("storage.database", database)?;
        }
        if let Some(collection) = &self.storage.collection {
            validation::validate_non_empty_string("storage.collection", collection)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn bot_token(&self) -> &str {
        &self.bot.token
    }

    fn api_base(&self) -> &str {
        self.bot.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    fn poll_timeout_seconds(&self) -> u64 {
        self.bot
            .poll_timeout_seconds
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECONDS)
    }

    fn storage_url(&self) -> &str {
        &self.storage.url
    }

    fn database(&self) -> &str {
        self.storage.database.as_deref().unwrap_or(DEFAULT_DATABASE)
    }

    fn collection(&self) -> &str {
        self.storage
            .collection
            .as_deref()
            .unwrap_or(DEFAULT_COLLECTION)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
