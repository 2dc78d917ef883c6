//! API routes.

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;

use crate::handlers::health;
use crate::handlers::thumbnails::upload_thumbnail;
use crate::handlers::videos::{
    create_video, delete_video, get_video, list_videos, upload_video,
};
use crate::middleware::{request_id, request_logging};
use crate::state::AppState;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let record_routes = Router::new()
        .route("/videos", post(create_video).get(list_videos))
        .route("/videos/:video_id", get(get_video).delete(delete_video));

    // Upload routes carry their own body ceilings; axum's default 2 MiB
    // limit would otherwise reject any real video.
    let video_upload = Router::new()
        .route("/videos/:video_id/upload", post(upload_video))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .layer(RequestBodyLimitLayer::new(state.config.max_upload_bytes));

    let thumbnail_upload = Router::new()
        .route("/videos/:video_id/thumbnail", post(upload_thumbnail))
        .layer(DefaultBodyLimit::max(state.config.max_thumbnail_bytes))
        .layer(RequestBodyLimitLayer::new(state.config.max_thumbnail_bytes));

    let api_routes = record_routes.merge(video_upload).merge(thumbnail_upload);

    Router::new()
        .nest("/api", api_routes)
        .route("/healthz", get(health))
        .layer(middleware::from_fn(request_id))
        .layer(middleware::from_fn(request_logging))
        .with_state(state)
}
