//! Compact storage reference persisted on video records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of a stored object, persisted as `"<bucket>,<key>"`.
///
/// The compact form is what lands on the video record; expansion into a
/// signed URL happens on every read and is never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageRef {
    pub bucket: String,
    pub key: String,
}

impl StorageRef {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Serialize to the persisted `bucket,key` form.
    pub fn encode(&self) -> String {
        format!("{},{}", self.bucket, self.key)
    }

    /// Parse a persisted value. Splits on the first comma; a comma-less
    /// value is a legacy/direct URL from before this scheme existed and
    /// yields `None` so callers pass it through unchanged.
    pub fn parse(value: &str) -> Option<Self> {
        let (bucket, key) = value.split_once(',')?;
        Some(Self::new(bucket, key))
    }
}

impl fmt::Display for StorageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.bucket, self.key)
    }
}
