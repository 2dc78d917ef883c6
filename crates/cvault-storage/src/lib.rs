//! S3-compatible object storage for ClipVault.
//!
//! Uploaded assets live in a private bucket; clients never receive the raw
//! location, only short-lived presigned GET URLs. The [`ObjectStore`] trait
//! is the seam tests use to substitute an in-memory store.

pub mod client;
pub mod error;
pub mod key;

pub use client::{ObjectStore, S3Config, S3ObjectStore};
pub use error::{StorageError, StorageResult};
pub use key::{thumbnail_object_key, video_object_key};
