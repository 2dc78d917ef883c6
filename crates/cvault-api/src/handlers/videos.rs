//! Video record handlers and the upload orchestrator.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use cvault_models::{classify, StorageRef, VideoDraft, VideoRecord};
use cvault_storage::video_object_key;

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::handlers::stage_named_field;
use crate::signing::materialize_urls;
use crate::state::AppState;

/// The single supported upload container type.
const VIDEO_MEDIA_TYPE: &str = "video/mp4";

/// Create a draft record with no assets attached.
pub async fn create_video(
    State(state): State<AppState>,
    user: AuthUser,
    Json(draft): Json<VideoDraft>,
) -> ApiResult<(StatusCode, Json<VideoRecord>)> {
    if draft.title.trim().is_empty() {
        return Err(ApiError::bad_request("title must not be empty"));
    }

    let record = VideoRecord::new(user.id, draft);
    state.videos.create(record.clone()).await?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// List the caller's records, each with freshly signed URLs.
pub async fn list_videos(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<VideoRecord>>> {
    let records = state.videos.list_for_user(user.id).await?;

    let mut signed = Vec::with_capacity(records.len());
    for record in records {
        signed.push(materialize_urls(&state, record).await?);
    }

    Ok(Json(signed))
}

/// Fetch one record (owner only), with freshly signed URLs.
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    user: AuthUser,
) -> ApiResult<Json<VideoRecord>> {
    let record = owned_record(&state, video_id, user).await?;
    Ok(Json(materialize_urls(&state, record).await?))
}

/// Delete a record and best-effort delete its stored object.
pub async fn delete_video(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    user: AuthUser,
) -> ApiResult<StatusCode> {
    let record = owned_record(&state, video_id, user).await?;

    state.videos.delete(video_id).await?;

    // The record is already gone; a dangling object is an acceptable leak.
    if let Some(reference) = record.video_url.as_deref().and_then(StorageRef::parse) {
        let _ = state
            .storage
            .delete_object(&reference.bucket, &reference.key)
            .await;
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Ingest an uploaded video for a record.
///
/// Stages the multipart body to a private temp file, remuxes for fast-start
/// playback, probes the remuxed copy's dimensions, classifies the shape,
/// uploads under a shape-prefixed random key, persists the compact
/// reference and responds with the signed record. Staged files are deleted
/// on every exit path, including cancellation.
pub async fn upload_video(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    user: AuthUser,
    multipart: Multipart,
) -> ApiResult<Json<VideoRecord>> {
    // Ownership is checked before any file I/O happens.
    let mut record = owned_record(&state, video_id, user).await?;

    // Admission limit: held across staging, remux and probe so concurrent
    // ffmpeg invocations stay bounded.
    let _permit = state
        .upload_permits
        .clone()
        .acquire_owned()
        .await
        .map_err(|_| ApiError::Io("upload limiter closed".to_string()))?;

    // Validate media type and stage.
    let (mut staged, _) = stage_named_field(multipart, "video", &[VIDEO_MEDIA_TYPE]).await?;

    // Remux; the derivative joins the staging scope immediately so failure
    // later in the pipeline still deletes it.
    let derived = state.media.remux_faststart(staged.path()).await?;
    staged.attach_derived(derived.clone());

    // Probe & classify (always the post-remux file).
    let dims = state.media.probe_dimensions(&derived).await?;
    let aspect = classify(dims.width, dims.height);

    // Upload.
    let key = video_object_key(aspect);
    state
        .storage
        .put_file(&derived, &key, VIDEO_MEDIA_TYPE)
        .await?;

    // Persist the compact reference only.
    let reference = StorageRef::new(state.storage.bucket(), &key);
    record.video_url = Some(reference.encode());
    record.touch();
    state.videos.update(&record).await?;

    info!(
        video_id = %video_id,
        aspect = %aspect,
        key = %key,
        "video ingested"
    );

    Ok(Json(materialize_urls(&state, record).await?))
}

/// Fetch a record and confirm the caller owns it.
pub(crate) async fn owned_record(
    state: &AppState,
    video_id: Uuid,
    user: AuthUser,
) -> ApiResult<VideoRecord> {
    let record = state.videos.get(video_id).await?;
    if record.user_id != user.id {
        return Err(ApiError::forbidden("video not owned by caller"));
    }
    Ok(record)
}
