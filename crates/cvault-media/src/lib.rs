//! FFmpeg CLI wrappers and upload staging for ClipVault.
//!
//! This crate provides:
//! - Container probing via `ffprobe` (stream dimensions)
//! - Fast-start remuxing via `ffmpeg` (stream copy, metadata up front)
//! - Request-scoped staging files with unconditional cleanup
//! - The [`MediaProcessor`] capability trait so callers can substitute
//!   deterministic fakes for the real subprocess invocations

pub mod error;
pub mod faststart;
pub mod probe;
pub mod processor;
pub mod staging;

pub use error::{MediaError, MediaResult};
pub use faststart::remux_faststart;
pub use probe::{probe_dimensions, Dimensions};
pub use processor::{FfmpegProcessor, MediaProcessor};
pub use staging::StagedUpload;
