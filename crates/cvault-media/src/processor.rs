//! Narrow capability interface over the external media tools.
//!
//! The upload pipeline only ever needs two operations, so they live behind
//! a trait and the real subprocess invocations can be swapped for
//! deterministic fakes in tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::MediaResult;
use crate::probe::Dimensions;

/// Probe and remux capabilities used by the upload orchestrator.
#[async_trait]
pub trait MediaProcessor: Send + Sync {
    /// Rewrite the container for progressive playback, returning the path
    /// of the new sibling file. Must never mutate the input.
    async fn remux_faststart(&self, input: &Path) -> MediaResult<PathBuf>;

    /// Report the first video stream's pixel dimensions.
    async fn probe_dimensions(&self, path: &Path) -> MediaResult<Dimensions>;
}

/// Production implementation backed by the `ffmpeg`/`ffprobe` binaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProcessor;

#[async_trait]
impl MediaProcessor for FfmpegProcessor {
    async fn remux_faststart(&self, input: &Path) -> MediaResult<PathBuf> {
        crate::faststart::remux_faststart(input).await
    }

    async fn probe_dimensions(&self, path: &Path) -> MediaResult<Dimensions> {
        crate::probe::probe_dimensions(path).await
    }
}
