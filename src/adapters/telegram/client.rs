use crate::adapters::telegram::types::{ApiResponse, ReplyKeyboardMarkup, Update};
use crate::utils::error::{BotError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.telegram.org";

/// Thin Bot API client: long polling in, messages out.
pub struct TelegramApi {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

#[derive(Serialize)]
struct GetUpdatesRequest {
    offset: i64,
    timeout: u64,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: i64,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_markup: Option<&'a ReplyKeyboardMarkup>,
}

impl TelegramApi {
    /// `base_url` is overridable so the tests can point the client at a
    /// mock server. The HTTP timeout must outlast the long-poll window.
    pub fn new(token: &str, base_url: &str, poll_timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(poll_timeout_seconds + 10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        })
    }

    pub async fn get_updates(&self, offset: i64, timeout: u64) -> Result<Vec<Update>> {
        let body = GetUpdatesRequest { offset, timeout };
        let response = self
            .client
            .post(self.method_url("getUpdates"))
            .json(&body)
            .send()
            .await?;

        let envelope: ApiResponse<Vec<Update>> = Self::check(response).await?;
        Ok(envelope.result.unwrap_or_default())
    }

    pub async fn send_message(&self, chat_id: i64, text: &str) -> Result<()> {
        self.send(SendMessageRequest {
            chat_id,
            text,
            reply_markup: None,
        })
        .await
    }

    pub async fn send_message_with_keyboard(
        &self,
        chat_id: i64,
        text: &str,
        keyboard: &ReplyKeyboardMarkup,
    ) -> Result<()> {
        self.send(SendMessageRequest {
            chat_id,
            text,
            reply_markup: Some(keyboard),
        })
        .await
    }

    async fn send(&self, request: SendMessageRequest<'_>) -> Result<()> {
        let response = self
            .client
            .post(self.method_url("sendMessage"))
            .json(&request)
            .send()
            .await?;

        Self::check::<serde_json::Value>(response).await?;
        Ok(())
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{}", self.base_url, self.token, method)
    }

    /// The Bot API reports failures both through the HTTP status and the
    /// envelope `ok` flag; either one surfaces as a typed error.
    async fn check<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiResponse<T>> {
        let status = response.status();
        let body = response.text().await?;

        let envelope: ApiResponse<T> =
            serde_json::from_str(&body).map_err(|_| BotError::TelegramError {
                description: format!("unexpected response ({}): {}", status, body),
            })?;

        if !status.is_success() || !envelope.ok {
            return Err(BotError::TelegramError {
                description: envelope
                    .description
                    .unwrap_or_else(|| format!("HTTP {}", status)),
            });
        }

        Ok(envelope)
    }
}
