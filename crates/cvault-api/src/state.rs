//! Application state.

use std::sync::Arc;

use tokio::sync::Semaphore;

use cvault_db::{MemoryVideoStore, VideoStore};
use cvault_media::{FfmpegProcessor, MediaProcessor};
use cvault_storage::{ObjectStore, S3ObjectStore};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub storage: Arc<dyn ObjectStore>,
    pub videos: Arc<dyn VideoStore>,
    pub media: Arc<dyn MediaProcessor>,
    /// Admission limit for in-flight uploads; each upload holds a permit
    /// across staging, remux and probe so concurrent ffmpeg invocations
    /// stay bounded.
    pub upload_permits: Arc<Semaphore>,
}

impl AppState {
    /// Create production state: S3 storage, ffmpeg tools, in-memory records.
    pub async fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let storage = S3ObjectStore::from_env().await?;

        Ok(Self::with_collaborators(
            config.clone(),
            Arc::new(storage),
            Arc::new(MemoryVideoStore::new()),
            Arc::new(FfmpegProcessor),
        ))
    }

    /// Assemble state from explicit collaborators. Tests use this to plug
    /// in fakes for storage and media processing.
    pub fn with_collaborators(
        config: ApiConfig,
        storage: Arc<dyn ObjectStore>,
        videos: Arc<dyn VideoStore>,
        media: Arc<dyn MediaProcessor>,
    ) -> Self {
        let upload_permits = Arc::new(Semaphore::new(config.max_concurrent_uploads));
        Self {
            config,
            storage,
            videos,
            media,
            upload_permits,
        }
    }
}
