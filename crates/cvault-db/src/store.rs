//! Video record store trait and in-memory backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use cvault_models::VideoRecord;

use crate::error::{DbError, DbResult};

/// Read/update access to video records by identifier.
#[async_trait]
pub trait VideoStore: Send + Sync {
    async fn create(&self, record: VideoRecord) -> DbResult<()>;

    async fn get(&self, id: Uuid) -> DbResult<VideoRecord>;

    /// Replace the stored record. Fails with `NotFound` if it was deleted
    /// between read and write.
    async fn update(&self, record: &VideoRecord) -> DbResult<()>;

    async fn delete(&self, id: Uuid) -> DbResult<()>;

    /// All records owned by a user, newest first.
    async fn list_for_user(&self, user_id: Uuid) -> DbResult<Vec<VideoRecord>>;
}

/// In-memory record store.
#[derive(Default)]
pub struct MemoryVideoStore {
    records: RwLock<HashMap<Uuid, VideoRecord>>,
}

impl MemoryVideoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VideoStore for MemoryVideoStore {
    async fn create(&self, record: VideoRecord) -> DbResult<()> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn get(&self, id: Uuid) -> DbResult<VideoRecord> {
        self.records
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(DbError::NotFound(id))
    }

    async fn update(&self, record: &VideoRecord) -> DbResult<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(DbError::NotFound(record.id));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> DbResult<()> {
        self.records
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DbError::NotFound(id))
    }

    async fn list_for_user(&self, user_id: Uuid) -> DbResult<Vec<VideoRecord>> {
        let records = self.records.read().await;
        let mut owned: Vec<VideoRecord> = records
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvault_models::VideoDraft;

    fn draft(title: &str) -> VideoDraft {
        VideoDraft {
            title: title.to_string(),
            description: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_get_update() {
        let store = MemoryVideoStore::new();
        let user = Uuid::new_v4();
        let mut record = VideoRecord::new(user, draft("first"));
        let id = record.id;

        store.create(record.clone()).await.unwrap();
        assert_eq!(store.get(id).await.unwrap().title, "first");

        record.video_url = Some("bucket,landscape/tok.mp4".to_string());
        store.update(&record).await.unwrap();
        assert_eq!(
            store.get(id).await.unwrap().video_url.as_deref(),
            Some("bucket,landscape/tok.mp4")
        );
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = MemoryVideoStore::new();
        assert!(matches!(
            store.get(Uuid::new_v4()).await,
            Err(DbError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_after_delete_fails() {
        let store = MemoryVideoStore::new();
        let record = VideoRecord::new(Uuid::new_v4(), draft("gone"));
        store.create(record.clone()).await.unwrap();
        store.delete(record.id).await.unwrap();
        assert!(matches!(
            store.update(&record).await,
            Err(DbError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_scoped_to_owner() {
        let store = MemoryVideoStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        store
            .create(VideoRecord::new(alice, draft("a")))
            .await
            .unwrap();
        store
            .create(VideoRecord::new(bob, draft("b")))
            .await
            .unwrap();

        let listed = store.list_for_user(alice).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "a");
    }
}
