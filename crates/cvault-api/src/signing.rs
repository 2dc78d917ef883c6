//! URL materialization for read paths.
//!
//! Records persist the compact `bucket,key` reference; every response that
//! carries a record expands it into a fresh presigned URL. Nothing signed
//! is ever written back to the store.

use cvault_models::{StorageRef, VideoRecord};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Replace stored references on a record with presigned URLs.
///
/// Fields holding no value or a legacy direct URL (no comma) pass through
/// untouched, so pre-migration records keep working.
pub async fn materialize_urls(state: &AppState, mut record: VideoRecord) -> ApiResult<VideoRecord> {
    record.video_url = materialize_field(state, record.video_url).await?;
    record.thumbnail_url = materialize_field(state, record.thumbnail_url).await?;
    Ok(record)
}

async fn materialize_field(
    state: &AppState,
    value: Option<String>,
) -> ApiResult<Option<String>> {
    let Some(raw) = value else {
        return Ok(None);
    };

    let Some(reference) = StorageRef::parse(&raw) else {
        return Ok(Some(raw));
    };

    let url = state
        .storage
        .presign_get(&reference.bucket, &reference.key, state.config.signed_url_ttl)
        .await
        .map_err(|e| ApiError::Signing(e.to_string()))?;

    Ok(Some(url))
}
