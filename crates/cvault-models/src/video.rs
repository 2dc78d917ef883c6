//! Video record models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A video record as held by the record store.
///
/// `video_url` and `thumbnail_url` hold the compact `bucket,key` reference
/// once an asset has been ingested (or a legacy direct URL on records
/// written before the reference scheme). Response serialization swaps in a
/// freshly signed URL; the stored form stays compact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl VideoRecord {
    /// Create a fresh draft record with no assets attached.
    pub fn new(user_id: Uuid, draft: VideoDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            user_id,
            title: draft.title,
            description: draft.description,
            video_url: None,
            thumbnail_url: None,
        }
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Client-supplied fields when creating a record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
}
