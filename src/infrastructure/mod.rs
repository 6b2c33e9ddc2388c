// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`. These adapters wrap system I/O and the HTTP client.
//!
//! # Available Adapters
//!
//! - [`filesystem`]: Assets under a local directory (implements [`AssetSource`])
//! - [`http`]: Assets under a base URL (implements [`AssetSource`])
//!
//! [`Source`] picks one of them from a configured asset root.

pub mod filesystem;
pub mod http;

pub use filesystem::FilesystemSource;
pub use http::HttpSource;

use crate::application::port::{AssetSource, SourceError};
use futures_util::future::Either;
use std::future::Future;

/// Asset source selected from the configured root.
#[derive(Debug, Clone)]
pub enum Source {
    /// Local directory.
    Filesystem(FilesystemSource),
    /// Web server.
    Http(HttpSource),
}

impl Source {
    /// Builds a source from a root string.
    ///
    /// `http://` and `https://` roots (any case) select [`HttpSource`];
    /// anything else is treated as a directory path.
    pub fn from_root(root: &str) -> Result<Self, SourceError> {
        let trimmed = root.trim();
        if has_http_scheme(trimmed) {
            HttpSource::new(trimmed).map(Source::Http)
        } else {
            Ok(Source::Filesystem(FilesystemSource::new(trimmed)))
        }
    }
}

fn has_http_scheme(root: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        root.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl AssetSource for Source {
    fn load(&self, location: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send {
        match self {
            Source::Filesystem(source) => Either::Left(source.load(location)),
            Source::Http(source) => Either::Right(source.load(location)),
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Filesystem(source) => source.describe(),
            Source::Http(source) => source.describe(),
        }
    }

    fn identity(&self, location: &str) -> String {
        match self {
            Source::Filesystem(source) => source.identity(location),
            Source::Http(source) => source.identity(location),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_roots_select_http_source() {
        let source = Source::from_root("https://example.org/").expect("valid root");
        assert!(matches!(source, Source::Http(_)));
    }

    #[test]
    fn scheme_match_ignores_case() {
        for root in ["HTTPS://example.org/", "Http://example.org/deck"] {
            let source = Source::from_root(root).expect("valid root");
            assert!(matches!(source, Source::Http(_)), "{root}");
        }
    }

    #[test]
    fn other_roots_select_filesystem_source() {
        let source = Source::from_root("./public").expect("valid root");
        match source {
            Source::Filesystem(fs) => assert_eq!(fs.describe(), "./public"),
            Source::Http(_) => panic!("expected filesystem source"),
        }
    }
}
