//! API handlers.

pub mod thumbnails;
pub mod videos;

use axum::extract::Multipart;
use axum::Json;
use serde_json::{json, Value};

use cvault_media::StagedUpload;

use crate::error::{ApiError, ApiResult};

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Locate the named multipart field, validate its declared media type and
/// stream it into a fresh staging file.
///
/// The media type check runs before the staging file is created, so an
/// unsupported upload touches no disk at all. Returns the staged upload
/// together with the matched media type.
pub(crate) async fn stage_named_field(
    mut multipart: Multipart,
    name: &str,
    allowed: &[&'static str],
) -> ApiResult<(StagedUpload, &'static str)> {
    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart body: {}", e)))?
    {
        if field.name() != Some(name) {
            continue;
        }

        let media_type = require_media_type(field.content_type(), allowed)?;

        let mut staged = StagedUpload::create()
            .await
            .map_err(|e| ApiError::Io(e.to_string()))?;

        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| ApiError::bad_request(format!("failed to read upload body: {}", e)))?
        {
            staged
                .write_chunk(&chunk)
                .await
                .map_err(|e| ApiError::Io(e.to_string()))?;
        }
        staged
            .finish()
            .await
            .map_err(|e| ApiError::Io(e.to_string()))?;

        return Ok((staged, media_type));
    }

    Err(ApiError::bad_request(format!(
        "missing `{}` form field",
        name
    )))
}

/// Check a declared media type against an allow list, ignoring parameters
/// (`video/mp4; codecs=...` still matches `video/mp4`).
pub(crate) fn require_media_type(
    declared: Option<&str>,
    allowed: &[&'static str],
) -> ApiResult<&'static str> {
    let declared = declared.ok_or_else(|| ApiError::unsupported_media("missing content type"))?;

    let essence = declared
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    allowed
        .iter()
        .find(|candidate| essence == **candidate)
        .copied()
        .ok_or_else(|| ApiError::unsupported_media(declared.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_media_type_exact() {
        assert_eq!(
            require_media_type(Some("video/mp4"), &["video/mp4"]).unwrap(),
            "video/mp4"
        );
    }

    #[test]
    fn test_require_media_type_ignores_parameters() {
        assert_eq!(
            require_media_type(Some("video/mp4; codecs=avc1"), &["video/mp4"]).unwrap(),
            "video/mp4"
        );
        assert_eq!(
            require_media_type(Some("IMAGE/PNG"), &["image/jpeg", "image/png"]).unwrap(),
            "image/png"
        );
    }

    #[test]
    fn test_require_media_type_rejects_others() {
        assert!(require_media_type(Some("video/webm"), &["video/mp4"]).is_err());
        assert!(require_media_type(None, &["video/mp4"]).is_err());
    }
}
