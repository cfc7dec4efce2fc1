mod client;
mod types;

pub use client::{TelegramApi, DEFAULT_API_BASE};
pub use types::{ApiResponse, Chat, KeyboardButton, Message, ReplyKeyboardMarkup, Update};
