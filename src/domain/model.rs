use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A student's stored document: the registered name plus the
/// subject-to-score mapping. Matches the MongoDB document schema
/// one-to-one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub name: String,
    #[serde(default)]
    pub scores: HashMap<String, i32>,
}

impl StudentRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scores: HashMap::new(),
        }
    }
}

/// What the next free-text message from a chat will be treated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    AwaitingName,
    AwaitingEntryScores,
    AwaitingUpdateScores,
}

/// The conversational actions, each reachable via a slash command or a
/// menu button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Register,
    EnterScores,
    ViewScores,
    UpdateScores,
    DeleteAccount,
    Help,
}
