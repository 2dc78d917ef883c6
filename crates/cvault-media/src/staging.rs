//! Request-scoped staging for uploaded media.
//!
//! A [`StagedUpload`] owns the locally buffered upload and, once remuxing
//! has run, the derived fast-start file. Both are deleted when the value is
//! dropped, so every exit path of a request (success, probe failure, remux
//! failure, store failure, cancellation) releases its disk space.

use std::path::{Path, PathBuf};

use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::warn;

use crate::error::MediaResult;

/// A private, uniquely named staging file plus zero or one derivative.
pub struct StagedUpload {
    path: Option<TempPath>,
    file: Option<File>,
    derived: Option<PathBuf>,
}

impl StagedUpload {
    /// Acquire a fresh staging file in the system temp directory.
    pub async fn create() -> MediaResult<Self> {
        let tmp = tempfile::Builder::new()
            .prefix("cvault-upload-")
            .suffix(".mp4")
            .tempfile()?;
        let (file, path) = tmp.into_parts();

        Ok(Self {
            path: Some(path),
            file: Some(File::from_std(file)),
            derived: None,
        })
    }

    /// Append a chunk of the request body to the staging file.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> MediaResult<()> {
        let file = self
            .file
            .as_mut()
            .expect("write_chunk called after finish");
        file.write_all(chunk).await?;
        Ok(())
    }

    /// Flush and close the write handle. Later pipeline stages reopen the
    /// file by path, so reads always start at the beginning.
    pub async fn finish(&mut self) -> MediaResult<()> {
        if let Some(mut file) = self.file.take() {
            file.flush().await?;
            file.sync_all().await?;
        }
        Ok(())
    }

    /// Path of the staged original.
    pub fn path(&self) -> &Path {
        self.path.as_ref().expect("staged path taken").as_ref()
    }

    /// Tie a derivative file's lifecycle to this staging scope.
    pub fn attach_derived(&mut self, path: PathBuf) {
        self.derived = Some(path);
    }

    /// Path of the attached derivative, if any.
    pub fn derived(&self) -> Option<&Path> {
        self.derived.as_deref()
    }
}

impl Drop for StagedUpload {
    fn drop(&mut self) {
        if let Some(derived) = self.derived.take() {
            if let Err(e) = std::fs::remove_file(&derived) {
                warn!("failed to remove derived file {}: {}", derived.display(), e);
            }
        }
        if let Some(path) = self.path.take() {
            let staged_path = path.to_path_buf();
            if let Err(e) = path.close() {
                warn!("failed to remove staged file {}: {}", staged_path.display(), e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_staged_file_removed_on_drop() {
        let mut staged = StagedUpload::create().await.unwrap();
        staged.write_chunk(b"payload").await.unwrap();
        staged.finish().await.unwrap();

        let path = staged.path().to_path_buf();
        assert!(path.exists());
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");

        drop(staged);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_derived_file_shares_lifecycle() {
        let mut staged = StagedUpload::create().await.unwrap();
        staged.finish().await.unwrap();

        let derived = staged.path().with_extension("derived.mp4");
        tokio::fs::write(&derived, b"remuxed").await.unwrap();
        staged.attach_derived(derived.clone());
        assert_eq!(staged.derived(), Some(derived.as_path()));

        drop(staged);
        assert!(!derived.exists());
    }

    #[tokio::test]
    async fn test_unique_paths_across_requests() {
        let a = StagedUpload::create().await.unwrap();
        let b = StagedUpload::create().await.unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[tokio::test]
    async fn test_missing_derived_only_warns() {
        let mut staged = StagedUpload::create().await.unwrap();
        staged.attach_derived(PathBuf::from("/nonexistent/derived.mp4"));
        // Drop must not panic even when the derivative is already gone.
        drop(staged);
    }
}
