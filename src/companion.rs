// SPDX-License-Identifier: MPL-2.0
//! Companion document download.
//!
//! The deck ships with a document (a PDF handout) that lives next to the
//! slides. It is fetched through the same [`AssetSource`] as the slides and
//! written verbatim to a user-chosen path.

use crate::application::port::AssetSource;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Copies the document at `location` from `source` into `target`.
///
/// Parent directories of `target` are created as needed. Returns the path
/// written to.
pub async fn save_companion<S: AssetSource>(
    source: &S,
    location: &str,
    target: &Path,
) -> Result<PathBuf> {
    let bytes = source.load(location).await?;
    if let Some(parent) = target.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(target, &bytes).await?;
    tracing::info!(
        %location,
        target = %target.display(),
        bytes = bytes.len(),
        "companion document saved"
    );
    Ok(target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::SourceError;
    use crate::error::Error;
    use crate::test_utils::FakeSource;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_document_bytes() {
        let source = FakeSource::default().with_blob("/docs/handout.pdf", b"%PDF-1.7");
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("out").join("handout.pdf");

        let written = save_companion(&source, "/docs/handout.pdf", &target)
            .await
            .expect("save succeeds");

        assert_eq!(written, target);
        assert_eq!(std::fs::read(&target).expect("read back"), b"%PDF-1.7");
    }

    #[tokio::test]
    async fn missing_document_is_reported() {
        let source = FakeSource::default();
        let dir = tempdir().expect("temp dir");
        let target = dir.path().join("handout.pdf");

        let result = save_companion(&source, "/docs/handout.pdf", &target).await;

        assert!(matches!(result, Err(Error::Source(SourceError::NotFound))));
        assert!(!target.exists());
    }
}
