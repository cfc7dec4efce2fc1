use crate::domain::model::StudentRecord;
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use mongodb::bson::{doc, to_bson};
use mongodb::{Client, Collection};
use std::collections::HashMap;

/// MongoDB-backed record store. The collection is created on connect when
/// it does not exist yet.
pub struct MongoStore {
    collection: Collection<StudentRecord>,
}

impl MongoStore {
    pub async fn connect(url: &str, database: &str, collection: &str) -> Result<Self> {
        let client = Client::with_uri_str(url).await?;
        let db = client.database(database);

        let existing = db.list_collection_names().await?;
        if !existing.iter().any(|name| name == collection) {
            db.create_collection(collection).await?;
        }

        tracing::info!(database, collection, "Connected to MongoDB");
        Ok(Self {
            collection: db.collection(collection),
        })
    }
}

#[async_trait]
impl RecordStore for MongoStore {
    async fn register(&self, record: StudentRecord) -> Result<()> {
        self.collection.insert_one(record).await?;
        Ok(())
    }

    async fn set_scores(
        &self,
        name: &str,
        scores: &HashMap<String, i32>,
        upsert: bool,
    ) -> Result<()> {
        let update = doc! { "$set": { "scores": to_bson(scores)? } };
        self.collection
            .update_one(doc! { "name": name }, update)
            .upsert(upsert)
            .await?;
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<StudentRecord>> {
        let record = self.collection.find_one(doc! { "name": name }).await?;
        Ok(record)
    }

    async fn delete(&self, name: &str) -> Result<()> {
        self.collection.delete_one(doc! { "name": name }).await?;
        Ok(())
    }
}
