// SPDX-License-Identifier: MPL-2.0
//! Asset loading port definition.
//!
//! This module defines the [`AssetSource`] trait, the only capability discovery
//! needs from the host environment: "load the bytes at this location, or say
//! why not". Infrastructure adapters implement it for a local directory and for
//! an HTTP base URL.

use std::fmt;
use std::future::Future;

// =============================================================================
// SourceError
// =============================================================================

/// Errors that can occur while loading an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Nothing exists at the location.
    NotFound,

    /// The location cannot be resolved against the source root.
    InvalidLocation(String),

    /// Local I/O failure other than "not found".
    Io(String),

    /// Transport failure or non-success HTTP status.
    Http(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::NotFound => write!(f, "Asset not found"),
            SourceError::InvalidLocation(location) => {
                write!(f, "Invalid asset location: {location}")
            }
            SourceError::Io(msg) => write!(f, "I/O error: {msg}"),
            SourceError::Http(msg) => write!(f, "HTTP error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

// =============================================================================
// AssetSource Trait
// =============================================================================

/// Loads raw asset bytes by location.
///
/// Locations are the strings produced by naming templates, e.g.
/// `/education-assets/adhd/ADHD01.png`. A leading `/` is relative to the
/// source root, the way a web page resolves a root-relative URL.
///
/// # Example
///
/// ```ignore
/// use iced_slides::application::port::AssetSource;
///
/// async fn exists(source: &impl AssetSource, location: &str) -> bool {
///     source.load(location).await.is_ok()
/// }
/// ```
pub trait AssetSource: Send + Sync {
    /// Loads the complete payload stored at `location`.
    fn load(&self, location: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send;

    /// Short human-readable description of the root, used in logs.
    fn describe(&self) -> String;

    /// Canonical form of `location`: two locations with the same identity
    /// reach the same underlying resource.
    fn identity(&self, location: &str) -> String {
        location.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_location() {
        let err = SourceError::InvalidLocation("::bad".to_string());
        assert_eq!(err.to_string(), "Invalid asset location: ::bad");
    }

    #[test]
    fn display_formats_http_error() {
        let err = SourceError::Http("404 Not Found".to_string());
        assert!(err.to_string().contains("404"));
    }
}
