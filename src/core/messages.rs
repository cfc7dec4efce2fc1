//! User-visible reply text.

use std::collections::HashMap;

pub const GREETING: &str = "Hello! I am a bot for collecting exam scores. \
    Pick a command from the menu below, or use the commands directly.";

pub const REGISTER_PROMPT: &str =
    "Enter your first and last name separated by a space. Example: Ivan Ivanov";

pub const ENTER_SCORES_PROMPT: &str = "Enter your exam scores in the format: \
    subject1 score1, subject2 score2, ... Example: Math 60, Physics 80";

pub const UPDATE_SCORES_PROMPT: &str = "Enter your new exam scores in the format: \
    subject1 score1, subject2 score2, ... Example: Math 60, Physics 80";

pub const SCORES_SAVED: &str = "Scores saved!";

pub const SCORES_UPDATED: &str = "Scores updated.";

pub const SCORES_FORMAT_ERROR: &str = "Error. Enter the scores in the correct format: \
    subject1 score1, subject2 score2, ... Example: Math 60, Physics 80";

pub const SCORES_HEADER: &str = "Your exam scores:";

pub const SCORES_NOT_FOUND: &str = "Scores not found, or you are not registered.";

pub const ACCOUNT_DELETED: &str = "Your account and data have been deleted.";

pub const UNSUPPORTED_MESSAGE: &str =
    "I do not support this kind of message. Use /help for the list of commands.";

pub const HELP: &str = "Available commands:\n\
    /start - Start working with the bot\n\
    /register - Register a user\n\
    /enter_scores - Enter exam scores\n\
    /view_scores - View exam scores\n\
    /delete_account - Delete the account and its data\n\
    /update_scores - Update exam scores\n\
    /help - Show this message";

pub fn registration_complete(name: &str) -> String {
    format!("Registration complete, {}!", name)
}

/// One `subject: score` line per entry under the header. Iteration order
/// is unspecified.
pub fn format_scores(scores: &HashMap<String, i32>) -> String {
    let mut message = String::from(SCORES_HEADER);
    for (subject, score) in scores {
        message.push('\n');
        message.push_str(subject);
        message.push_str(": ");
        message.push_str(&score.to_string());
    }
    message
}
