//! Shared data models for the ClipVault backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video records and their owning users
//! - Aspect-ratio classification of probed dimensions
//! - The compact `bucket,key` storage reference persisted on records

pub mod aspect;
pub mod storage_ref;
pub mod video;

// Re-export common types
pub use aspect::{classify, AspectRatio};
pub use storage_ref::StorageRef;
pub use video::{VideoDraft, VideoRecord};
