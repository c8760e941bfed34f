//! Scoped temporary storage for uploaded files.
//!
//! The upload is streamed to a temp file as it arrives so the size cap is
//! enforced before the whole body is buffered. The file lives only as long
//! as the request: [`TempUpload::release`] deletes it and logs a failure,
//! and a `TempUpload` dropped on any other path is still removed by
//! `tempfile::TempPath`.

use std::path::Path;

use tempfile::TempPath;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::error::{AnalysisError, CoreResult};
use crate::types::InputDocument;

/// An upload spooled to a temporary file.
#[derive(Debug)]
pub struct TempUpload {
    path: TempPath,
    file: File,
    media_type: String,
    size_bytes: usize,
    limit: usize,
}

impl TempUpload {
    /// Create an empty temp file in `dir` for an upload of `media_type`,
    /// accepting at most `limit` bytes.
    pub fn create(dir: &Path, media_type: impl Into<String>, limit: usize) -> CoreResult<Self> {
        let (file, path) = tempfile::Builder::new()
            .prefix("upload-")
            .tempfile_in(dir)?
            .into_parts();

        debug!(path = %path.display(), "Created upload spool file");

        Ok(Self {
            path,
            file: File::from_std(file),
            media_type: media_type.into(),
            size_bytes: 0,
            limit,
        })
    }

    /// Append a chunk, failing once the running total passes the limit.
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> CoreResult<()> {
        let size = self.size_bytes + chunk.len();
        if size > self.limit {
            return Err(AnalysisError::UploadTooLarge { limit: self.limit });
        }
        self.file.write_all(chunk).await?;
        self.size_bytes = size;
        Ok(())
    }

    /// Read the spooled bytes back as a document.
    pub async fn read_document(&mut self) -> CoreResult<InputDocument> {
        self.file.flush().await?;
        let bytes = tokio::fs::read(&*self.path).await?;
        Ok(InputDocument::new(bytes, self.media_type.clone()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Delete the temp file. A failed delete is logged and otherwise ignored
    /// so it never masks the outcome of the request.
    pub fn release(self) {
        let TempUpload { path, file, .. } = self;
        drop(file);

        let location = path.display().to_string();
        match path.close() {
            Ok(()) => debug!(path = %location, "Removed upload spool file"),
            Err(e) => warn!(path = %location, error = %e, "Failed to remove upload spool file"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir() -> tempfile::TempDir {
        tempfile::tempdir().unwrap()
    }

    fn file_count(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[tokio::test]
    async fn test_spool_and_read_back() {
        let dir = scratch_dir();
        let mut upload = TempUpload::create(dir.path(), "application/pdf", 1024).unwrap();

        upload.write_chunk(b"%PDF-").await.unwrap();
        upload.write_chunk(b"1.5").await.unwrap();
        assert_eq!(upload.size_bytes(), 8);
        assert!(upload.path().starts_with(dir.path()));

        let doc = upload.read_document().await.unwrap();
        assert_eq!(doc.bytes(), b"%PDF-1.5");
        assert_eq!(doc.declared_media_type(), "application/pdf");
        assert_eq!(doc.size_bytes(), 8);

        upload.release();
        assert_eq!(file_count(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_limit_enforced_while_streaming() {
        let dir = scratch_dir();
        let mut upload = TempUpload::create(dir.path(), "image/png", 10).unwrap();

        upload.write_chunk(&[0u8; 6]).await.unwrap();
        upload.write_chunk(&[0u8; 4]).await.unwrap();
        let err = upload.write_chunk(&[0u8; 1]).await.unwrap_err();

        assert!(matches!(err, AnalysisError::UploadTooLarge { limit: 10 }));
        assert_eq!(upload.size_bytes(), 10);

        upload.release();
        assert_eq!(file_count(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_dropped_without_release_is_removed() {
        let dir = scratch_dir();
        {
            let mut upload = TempUpload::create(dir.path(), "image/png", 1024).unwrap();
            upload.write_chunk(b"pixels").await.unwrap();
            assert_eq!(file_count(dir.path()), 1);
        }
        assert_eq!(file_count(dir.path()), 0);
    }

    #[test]
    fn test_release_after_external_delete_does_not_panic() {
        tokio_test::block_on(async {
            let dir = scratch_dir();
            let upload = TempUpload::create(dir.path(), "image/png", 1024).unwrap();
            std::fs::remove_file(upload.path()).unwrap();

            upload.release();
        });
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = scratch_dir();
        let missing = dir.path().join("nope");
        let result = TempUpload::create(&missing, "image/png", 1024);
        assert!(matches!(result, Err(AnalysisError::Io(_))));
    }
}
