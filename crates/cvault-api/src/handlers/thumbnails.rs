//! Thumbnail ingestion.
//!
//! Thumbnails are just another object: same staging scope, same key
//! randomness, same compact reference on the record, same signed URL on
//! read. They skip the remux/probe stages entirely.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use tracing::info;
use uuid::Uuid;

use cvault_models::{StorageRef, VideoRecord};
use cvault_storage::thumbnail_object_key;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::stage_named_field;
use crate::handlers::videos::owned_record;
use crate::signing::materialize_urls;
use crate::state::AppState;

/// Supported thumbnail media types.
const IMAGE_MEDIA_TYPES: &[&str] = &["image/jpeg", "image/png"];

/// Attach a thumbnail image to a record.
pub async fn upload_thumbnail(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    user: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    let mut record = owned_record(&state, video_id, user).await?;

    let (staged, media_type) =
        stage_named_field(multipart, "thumbnail", IMAGE_MEDIA_TYPES).await?;

    let extension = extension_for(media_type)?;
    let key = thumbnail_object_key(extension);

    state
        .storage
        .put_file(staged.path(), &key, media_type)
        .await?;

    let reference = StorageRef::new(state.storage.bucket(), &key);
    record.thumbnail_url = Some(reference.encode());
    record.touch();
    state.videos.update(&record).await?;

    info!(video_id = %video_id, key = %key, "thumbnail ingested");

    Ok(Json(materialize_urls(&state, record).await?))
}

fn extension_for(media_type: &str) -> ApiResult<&'static str> {
    match media_type {
        "image/jpeg" => Ok("jpg"),
        "image/png" => Ok("png"),
        other => Err(ApiError::unsupported_media(other.to_string())),
    }
}
