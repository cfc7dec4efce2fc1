use crate::domain::model::StudentRecord;
use crate::domain::ports::RecordStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory record store backing the test suites. Keeps the same
/// semantics as the MongoDB adapter: duplicate names are stored as
/// separate records, and lookups match the first record inserted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<StudentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored records, in insertion order.
    pub fn records(&self) -> Vec<StudentRecord> {
        self.records.lock().expect("record store poisoned").clone()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn register(&self, record: StudentRecord) -> Result<()> {
        self.records.lock().expect("record store poisoned").push(record);
        Ok(())
    }

    async fn set_scores(
        &self,
        name: &str,
        scores: &HashMap<String, i32>,
        upsert: bool,
    ) -> Result<()> {
        let mut records = self.records.lock().expect("record store poisoned");

        if let Some(record) = records.iter_mut().find(|r| r.name == name) {
            record.scores = scores.clone();
        } else if upsert {
            records.push(StudentRecord {
                name: name.to_string(),
                scores: scores.clone(),
            });
        }

        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<StudentRecord>> {
        let records = self.records.lock().expect("record store poisoned");
        Ok(records.iter().find(|r| r.name == name).cloned())
    }

    async fn delete(&self, name: &str) -> Result<()> {
        let mut records = self.records.lock().expect("record store poisoned");
        if let Some(index) = records.iter().position(|r| r.name == name) {
            records.remove(index);
        }
        Ok(())
    }
}
