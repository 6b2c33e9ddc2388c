// SPDX-License-Identifier: MPL-2.0
//! Local directory adapter for [`AssetSource`].
//!
//! Locations are resolved under a root directory. A leading `/` is stripped so
//! web-style root-relative locations (`/education-assets/...`) map onto the
//! directory that plays the role of the site's public folder.

use crate::application::port::{AssetSource, SourceError};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Loads assets from a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilesystemSource {
    root: PathBuf,
}

impl FilesystemSource {
    /// Creates a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Maps a location onto a path below the root.
    ///
    /// Locations that are empty or would escape the root are rejected.
    pub fn resolve(&self, location: &str) -> Result<PathBuf, SourceError> {
        let relative = location.trim_start_matches('/');
        if relative.is_empty() {
            return Err(SourceError::InvalidLocation(location.to_string()));
        }

        let escapes_root = Path::new(relative).components().any(|component| {
            matches!(
                component,
                Component::ParentDir | Component::RootDir | Component::Prefix(_)
            )
        });
        if escapes_root {
            return Err(SourceError::InvalidLocation(location.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl AssetSource for FilesystemSource {
    fn load(&self, location: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send {
        let resolved = self.resolve(location);
        async move {
            let path = resolved?;
            tokio::fs::read(&path).await.map_err(|err| match err.kind() {
                ErrorKind::NotFound => SourceError::NotFound,
                _ => SourceError::Io(format!("{}: {err}", path.display())),
            })
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }

    fn identity(&self, location: &str) -> String {
        self.resolve(location)
            .map(|path| path.display().to_string())
            .unwrap_or_else(|_| location.to_string())
    }
}
