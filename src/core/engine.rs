use crate::adapters::telegram::{Message, ReplyKeyboardMarkup, TelegramApi, Update};
use crate::core::session::SessionMap;
use crate::core::{messages, parser, router};
use crate::domain::model::{Action, SessionState, StudentRecord};
use crate::domain::ports::RecordStore;
use crate::utils::error::{BotError, Result};

/// Ties the Telegram client, the command router, the session tracker and
/// the record store together. One instance per process; updates are
/// handled strictly in order.
pub struct BotEngine<S: RecordStore> {
    api: TelegramApi,
    store: S,
    sessions: SessionMap,
    poll_timeout_seconds: u64,
}

impl<S: RecordStore> BotEngine<S> {
    pub fn new(api: TelegramApi, store: S, poll_timeout_seconds: u64) -> Self {
        Self {
            api,
            store,
            sessions: SessionMap::new(),
            poll_timeout_seconds,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Long-polls getUpdates until a transport or store failure. There is
    /// no retry path; the caller decides whether that terminates the
    /// process.
    pub async fn run(&mut self) -> Result<()> {
        tracing::info!("Polling for updates");
        let mut offset = 0;

        loop {
            let updates = self
                .api
                .get_updates(offset, self.poll_timeout_seconds)
                .await?;

            for update in updates {
                offset = offset.max(update.update_id + 1);
                self.handle_update(update).await?;
            }
        }
    }

    /// Routes one update: slash command first, then menu button label,
    /// then whatever the session tracker currently expects. Non-text
    /// updates are skipped.
    pub async fn handle_update(&mut self, update: Update) -> Result<()> {
        let Some(message) = update.message else {
            return Ok(());
        };
        let Some(text) = message.text.clone() else {
            return Ok(());
        };
        let text = text.trim();

        if let Some(token) = router::command_token(text) {
            return match Action::from_command(token) {
                Some(action) => self.dispatch(action, &message).await,
                None => {
                    tracing::debug!(command = token, "Ignoring unknown command");
                    Ok(())
                }
            };
        }

        if let Some(action) = Action::from_label(text) {
            return self.dispatch(action, &message).await;
        }

        self.consume_free_text(&message, text).await
    }

    async fn dispatch(&mut self, action: Action, message: &Message) -> Result<()> {
        let chat_id = message.chat.id;

        match action {
            Action::Start => {
                self.api
                    .send_message_with_keyboard(chat_id, messages::GREETING, &menu_keyboard())
                    .await
            }
            Action::Register => {
                self.api
                    .send_message(chat_id, messages::REGISTER_PROMPT)
                    .await?;
                self.sessions.set(chat_id, SessionState::AwaitingName);
                Ok(())
            }
            Action::EnterScores => {
                self.api
                    .send_message(chat_id, messages::ENTER_SCORES_PROMPT)
                    .await?;
                self.sessions.set(chat_id, SessionState::AwaitingEntryScores);
                Ok(())
            }
            Action::UpdateScores => {
                self.api
                    .send_message(chat_id, messages::UPDATE_SCORES_PROMPT)
                    .await?;
                self.sessions
                    .set(chat_id, SessionState::AwaitingUpdateScores);
                Ok(())
            }
            Action::ViewScores => {
                let handle = account_handle(message);
                let reply = match self.store.get(&handle).await? {
                    Some(record) if !record.scores.is_empty() => {
                        messages::format_scores(&record.scores)
                    }
                    _ => messages::SCORES_NOT_FOUND.to_string(),
                };
                self.api.send_message(chat_id, &reply).await
            }
            Action::DeleteAccount => {
                let handle = account_handle(message);
                self.store.delete(&handle).await?;
                self.api.send_message(chat_id, messages::ACCOUNT_DELETED).await
            }
            Action::Help => self.api.send_message(chat_id, messages::HELP).await,
        }
    }

    /// Consumes free text according to the session state taken for this
    /// chat; the state is back to idle by the time the reply is sent.
    async fn consume_free_text(&mut self, message: &Message, text: &str) -> Result<()> {
        let chat_id = message.chat.id;

        match self.sessions.take(chat_id) {
            SessionState::AwaitingName => {
                self.store.register(StudentRecord::new(text)).await?;
                tracing::info!(chat_id, "Registered new student");
                self.api
                    .send_message(chat_id, &messages::registration_complete(text))
                    .await
            }
            SessionState::AwaitingEntryScores => {
                self.store_scores(message, text, true, messages::SCORES_SAVED)
                    .await
            }
            SessionState::AwaitingUpdateScores => {
                self.store_scores(message, text, false, messages::SCORES_UPDATED)
                    .await
            }
            SessionState::Idle => {
                self.api
                    .send_message(chat_id, messages::UNSUPPORTED_MESSAGE)
                    .await
            }
        }
    }

    /// Parses and stores a score line. A malformed line gets the
    /// corrective reply, and the user must reissue the command to retry;
    /// the line is not re-prompted in place.
    async fn store_scores(
        &mut self,
        message: &Message,
        text: &str,
        upsert: bool,
        confirmation: &str,
    ) -> Result<()> {
        let chat_id = message.chat.id;

        match parser::parse_scores(text) {
            Ok(scores) => {
                let handle = account_handle(message);
                self.store.set_scores(&handle, &scores, upsert).await?;
                self.api.send_message(chat_id, confirmation).await
            }
            Err(BotError::FormatError { message: reason }) => {
                tracing::debug!(chat_id, %reason, "Rejected malformed score line");
                self.api
                    .send_message(chat_id, messages::SCORES_FORMAT_ERROR)
                    .await
            }
            Err(other) => Err(other),
        }
    }
}

/// All operations after registration key on the platform account handle,
/// not the registered name. A chat without a username keys on the empty
/// string and never matches a registered record.
fn account_handle(message: &Message) -> String {
    message.chat.username.clone().unwrap_or_default()
}

/// The /start menu: the six labels in three rows of two.
pub fn menu_keyboard() -> ReplyKeyboardMarkup {
    ReplyKeyboardMarkup::new(vec![
        vec![router::LABEL_REGISTER, router::LABEL_ENTER_SCORES],
        vec![router::LABEL_VIEW_SCORES, router::LABEL_UPDATE_SCORES],
        vec![router::LABEL_DELETE_ACCOUNT, router::LABEL_HELP],
    ])
}
