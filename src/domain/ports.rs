use crate::domain::model::StudentRecord;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Inserts a fresh record. No uniqueness check: registering twice
    /// under the same name stores two documents.
    async fn register(&self, record: StudentRecord) -> Result<()>;

    /// Replaces the scores of the first record matching `name`. With
    /// `upsert` a missing record is created; without it the call is a
    /// silent no-op.
    async fn set_scores(
        &self,
        name: &str,
        scores: &HashMap<String, i32>,
        upsert: bool,
    ) -> Result<()>;

    /// First record matching `name`, if any.
    async fn get(&self, name: &str) -> Result<Option<StudentRecord>>;

    /// Removes the first record matching `name`.
    async fn delete(&self, name: &str) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn bot_token(&self) -> &str;
    fn api_base(&self) -> &str;
    fn poll_timeout_seconds(&self) -> u64;
    fn storage_url(&self) -> &str;
    fn database(&self) -> &str;
    fn collection(&self) -> &str;
}
