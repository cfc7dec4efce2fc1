// Adapters layer: concrete implementations for the external systems the
// domain ports describe (the Telegram Bot API and the record store).

pub mod store;
pub mod telegram;
