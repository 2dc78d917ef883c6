//! Object key strategy.
//!
//! Video objects are namespaced by shape so renditions of the same aspect
//! class sit under one prefix, with a random token for the leaf name. The
//! token comes from a CSPRNG so keys cannot be guessed or enumerated; the
//! bucket itself stays private and access goes through presigned URLs.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;

use cvault_models::AspectRatio;

/// Entropy per token. 32 bytes encodes to 43 base64url characters.
const TOKEN_BYTES: usize = 32;

/// A fresh URL-safe random token.
fn random_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Key for an ingested video: `<landscape|portrait|other>/<token>.mp4`.
pub fn video_object_key(aspect: AspectRatio) -> String {
    format!("{}/{}.mp4", aspect.folder(), random_token())
}

/// Key for a thumbnail: `thumbnails/<token>.<ext>`.
pub fn thumbnail_object_key(extension: &str) -> String {
    format!("thumbnails/{}.{}", random_token(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_url_safe(token: &str) -> bool {
        token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }

    #[test]
    fn test_video_key_shape() {
        let key = video_object_key(AspectRatio::Landscape);
        let (folder, rest) = key.split_once('/').unwrap();
        assert_eq!(folder, "landscape");

        let token = rest.strip_suffix(".mp4").unwrap();
        assert_eq!(token.len(), 43);
        assert!(is_url_safe(token));

        assert!(video_object_key(AspectRatio::Portrait).starts_with("portrait/"));
        assert!(video_object_key(AspectRatio::Other).starts_with("other/"));
    }

    #[test]
    fn test_thumbnail_key_shape() {
        let key = thumbnail_object_key("png");
        let token = key
            .strip_prefix("thumbnails/")
            .and_then(|r| r.strip_suffix(".png"))
            .unwrap();
        assert_eq!(token.len(), 43);
        assert!(is_url_safe(token));
    }

    #[test]
    fn test_tokens_do_not_collide() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(random_token()), "token collision");
        }
    }
}
