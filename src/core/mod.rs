pub mod engine;
pub mod messages;
pub mod parser;
pub mod router;
pub mod session;

pub use crate::domain::model::{Action, SessionState, StudentRecord};
pub use crate::domain::ports::{ConfigProvider, RecordStore};
pub use crate::utils::error::Result;
