use crate::domain::model::SessionState;
use std::collections::HashMap;

/// Per-chat conversational state, keyed by Telegram chat id. Owned
/// exclusively by the dispatch loop, which handles one update at a time.
#[derive(Debug, Default)]
pub struct SessionMap {
    states: HashMap<i64, SessionState>,
}

impl SessionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the chat's state, leaving `Idle` behind.
    pub fn take(&mut self, chat_id: i64) -> SessionState {
        self.states.remove(&chat_id).unwrap_or_default()
    }

    pub fn set(&mut self, chat_id: i64, state: SessionState) {
        if state == SessionState::Idle {
            self.states.remove(&chat_id);
        } else {
            self.states.insert(chat_id, state);
        }
    }

    pub fn current(&self, chat_id: i64) -> SessionState {
        self.states.get(&chat_id).copied().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chat_is_idle() {
        let sessions = SessionMap::new();
        assert_eq!(sessions.current(1), SessionState::Idle);
    }

    #[test]
    fn take_resets_to_idle() {
        let mut sessions = SessionMap::new();
        sessions.set(1, SessionState::AwaitingName);
        assert_eq!(sessions.take(1), SessionState::AwaitingName);
        assert_eq!(sessions.current(1), SessionState::Idle);
    }

    #[test]
    fn set_overwrites_previous_state() {
        let mut sessions = SessionMap::new();
        sessions.set(1, SessionState::AwaitingName);
        sessions.set(1, SessionState::AwaitingEntryScores);
        assert_eq!(sessions.take(1), SessionState::AwaitingEntryScores);
    }

    #[test]
    fn states_are_per_chat() {
        let mut sessions = SessionMap::new();
        sessions.set(1, SessionState::AwaitingUpdateScores);
        assert_eq!(sessions.current(2), SessionState::Idle);
        assert_eq!(sessions.current(1), SessionState::AwaitingUpdateScores);
    }
}
