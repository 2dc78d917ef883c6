//! API configuration.

use std::time::Duration;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// HMAC secret for bearer tokens
    pub jwt_secret: String,
    /// Max video upload body size
    pub max_upload_bytes: usize,
    /// Max thumbnail upload body size
    pub max_thumbnail_bytes: usize,
    /// Concurrent upload admission limit (bounds in-flight ffmpeg runs)
    pub max_concurrent_uploads: usize,
    /// Lifetime of presigned retrieval URLs
    pub signed_url_ttl: Duration,
    /// Environment (development/production)
    pub environment: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8091,
            jwt_secret: String::new(),
            max_upload_bytes: 1 << 30, // 1 GiB
            max_thumbnail_bytes: 10 << 20,
            max_concurrent_uploads: 4,
            signed_url_ttl: Duration::from_secs(30),
            environment: "development".to_string(),
        }
    }
}

impl ApiConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_default(),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_upload_bytes),
            max_thumbnail_bytes: std::env::var("MAX_THUMBNAIL_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_thumbnail_bytes),
            max_concurrent_uploads: std::env::var("MAX_CONCURRENT_UPLOADS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_concurrent_uploads),
            signed_url_ttl: Duration::from_secs(
                std::env::var("SIGNED_URL_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
        }
    }

    /// Check if running in production mode.
    pub fn is_production(&self) -> bool {
        self.environment.to_lowercase() == "production"
    }
}
