//! Fast-start remuxing.
//!
//! Rewrites an MP4 container so the moov atom precedes the media data,
//! which lets players start playback before the full file has downloaded.
//! Streams are copied bit-for-bit; nothing is re-encoded.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// Suffix appended to the input path for the remuxed sibling file.
const FASTSTART_SUFFIX: &str = ".faststart.mp4";

/// Sibling path the remux writes to.
pub fn derived_path(input: impl AsRef<Path>) -> PathBuf {
    let input = input.as_ref();
    let mut os = input.as_os_str().to_os_string();
    os.push(FASTSTART_SUFFIX);
    PathBuf::from(os)
}

/// Remux a local file for progressive playback, writing a new sibling file.
///
/// The input is never touched; on failure it remains on disk for the caller
/// to inspect or retry. Returns the derived file's path.
pub async fn remux_faststart(input: impl AsRef<Path>) -> MediaResult<PathBuf> {
    let input = input.as_ref();

    if !input.exists() {
        return Err(MediaError::FileNotFound(input.to_path_buf()));
    }

    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)?;

    let output_path = derived_path(input);

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-y")
        .arg("-v")
        .arg("error")
        .arg("-i")
        .arg(input)
        .args(["-c", "copy", "-movflags", "faststart", "-f", "mp4"])
        .arg(&output_path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let command = format!(
        "ffmpeg -y -v error -i {} -c copy -movflags faststart -f mp4 {}",
        input.display(),
        output_path.display()
    );
    debug!("running remux: {}", command);

    let output = cmd.output().await?;

    if !output.status.success() {
        // A partial output file may exist; remove it so failure leaves
        // nothing behind beyond the untouched input.
        let _ = tokio::fs::remove_file(&output_path).await;
        return Err(MediaError::remux_failed(
            command,
            Some(String::from_utf8_lossy(&output.stderr).to_string()),
            output.status.code(),
        ));
    }

    Ok(output_path)
}
