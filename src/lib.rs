pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::store::{MemoryStore, MongoStore};
pub use adapters::telegram::TelegramApi;
pub use config::{toml_config::TomlConfig, CliConfig};
pub use core::engine::BotEngine;
pub use utils::error::{BotError, Result};
