use serde::{Deserialize, Serialize};

/// One long-poll result entry. Only text messages are of interest; every
/// other update kind deserializes with `message: None` and gets skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub username: Option<String>,
}

/// The persistent reply keyboard shown by /start.
#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
}

impl ReplyKeyboardMarkup {
    pub fn new(rows: Vec<Vec<&str>>) -> Self {
        let keyboard = rows
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|label| KeyboardButton {
                        text: label.to_string(),
                    })
                    .collect()
            })
            .collect();

        Self {
            keyboard,
            resize_keyboard: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

/// The Bot API response envelope wrapping every method result.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}
