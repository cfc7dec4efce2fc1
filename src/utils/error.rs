use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Score format error: {message}")]
    FormatError { message: String },

    #[error("Telegram API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Telegram API rejected the request: {description}")]
    TelegramError { description: String },

    #[error("Database operation failed: {0}")]
    StoreError(#[from] mongodb::error::Error),

    #[error("BSON encoding failed: {0}")]
    BsonError(#[from] mongodb::bson::ser::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl BotError {
    /// Short operator-facing hint printed next to the error on exit.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            BotError::ApiError(_) | BotError::TelegramError { .. } => {
                Some("Check the bot token and network access to the Telegram API")
            }
            BotError::StoreError(_) | BotError::BsonError(_) => {
                Some("Check that MongoDB is reachable at the configured URL")
            }
            BotError::ConfigValidationError { .. }
            | BotError::InvalidConfigValueError { .. }
            | BotError::MissingConfigError { .. } => {
                Some("Review the CLI flags or the TOML configuration file")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
