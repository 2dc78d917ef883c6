//! FFprobe stream geometry.

use std::path::Path;
use std::process::Stdio;

use serde::{Deserialize, Serialize};
use tokio::process::Command;

use crate::error::{MediaError, MediaResult};

/// Pixel dimensions of a video stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// FFprobe JSON output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// Probe a local file for the dimensions of its first video stream.
///
/// Callers in the upload pipeline always probe the post-remux file; the
/// remux is a stream copy so geometry is unchanged by it.
pub async fn probe_dimensions(path: impl AsRef<Path>) -> MediaResult<Dimensions> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(MediaError::FileNotFound(path.to_path_buf()));
    }

    which::which("ffprobe").map_err(|_| MediaError::FfprobeNotFound)?;

    let args = ["-v", "error", "-print_format", "json", "-show_streams"];
    let output = Command::new("ffprobe")
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await?;

    let command = format!("ffprobe {} {}", args.join(" "), path.display());

    if !output.status.success() {
        return Err(MediaError::probe_failed(
            command,
            Some(String::from_utf8_lossy(&output.stderr).to_string()),
        ));
    }

    parse_probe_output(&output.stdout)
}

/// Parse ffprobe `-show_streams` JSON into the first video stream's size.
fn parse_probe_output(stdout: &[u8]) -> MediaResult<Dimensions> {
    let probe: FfprobeOutput = serde_json::from_slice(stdout)?;

    let video_stream = probe
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| MediaError::InvalidVideo("no video stream found".to_string()))?;

    match (video_stream.width, video_stream.height) {
        (Some(width), Some(height)) if width > 0 && height > 0 => {
            Ok(Dimensions { width, height })
        }
        _ => Err(MediaError::InvalidVideo(
            "video stream reports no dimensions".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_video_stream() {
        let json = br#"{
            "streams": [
                {"codec_type": "audio", "codec_name": "aac"},
                {"codec_type": "video", "width": 1920, "height": 1080},
                {"codec_type": "video", "width": 640, "height": 480}
            ]
        }"#;
        let dims = parse_probe_output(json).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 1920,
                height: 1080
            }
        );
    }

    #[test]
    fn test_parse_no_video_stream() {
        let json = br#"{"streams": [{"codec_type": "audio"}]}"#;
        assert!(matches!(
            parse_probe_output(json),
            Err(MediaError::InvalidVideo(_))
        ));
    }

    #[test]
    fn test_parse_missing_dimensions() {
        let json = br#"{"streams": [{"codec_type": "video"}]}"#;
        assert!(matches!(
            parse_probe_output(json),
            Err(MediaError::InvalidVideo(_))
        ));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            parse_probe_output(b"not json"),
            Err(MediaError::JsonParse(_))
        ));
    }

    #[test]
    fn test_parse_empty_object() {
        assert!(parse_probe_output(b"{}").is_err());
    }
}
