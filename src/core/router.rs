use crate::domain::model::Action;

pub const LABEL_REGISTER: &str = "Register";
pub const LABEL_ENTER_SCORES: &str = "Enter scores";
pub const LABEL_VIEW_SCORES: &str = "View scores";
pub const LABEL_UPDATE_SCORES: &str = "Update scores";
pub const LABEL_DELETE_ACCOUNT: &str = "Delete account";
pub const LABEL_HELP: &str = "Help";

/// Extracts the command token from a slash-command message, without the
/// leading `/` and without any arguments.
pub fn command_token(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('/')?;
    rest.split_whitespace().next()
}

impl Action {
    /// Maps a slash-command token to its action. A trailing `@botname`
    /// suffix (group-chat addressing) is stripped first.
    pub fn from_command(command: &str) -> Option<Action> {
        let command = command.split('@').next().unwrap_or(command);
        match command {
            "start" => Some(Action::Start),
            "register" => Some(Action::Register),
            "enter_scores" => Some(Action::EnterScores),
            "view_scores" => Some(Action::ViewScores),
            "update_scores" => Some(Action::UpdateScores),
            "delete_account" => Some(Action::DeleteAccount),
            "help" => Some(Action::Help),
            _ => None,
        }
    }

    /// Maps a menu button label to its action. The label set is fixed;
    /// anything else is free text for the session tracker.
    pub fn from_label(text: &str) -> Option<Action> {
        match text {
            LABEL_REGISTER => Some(Action::Register),
            LABEL_ENTER_SCORES => Some(Action::EnterScores),
            LABEL_VIEW_SCORES => Some(Action::ViewScores),
            LABEL_UPDATE_SCORES => Some(Action::UpdateScores),
            LABEL_DELETE_ACCOUNT => Some(Action::DeleteAccount),
            LABEL_HELP => Some(Action::Help),
            _ => None,
        }
    }
}
