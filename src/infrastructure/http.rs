// SPDX-License-Identifier: MPL-2.0
//! HTTP adapter for [`AssetSource`].
//!
//! Locations are joined onto a base URL with standard URL resolution, so a
//! leading `/` is relative to the host and anything else is relative to the
//! base path.

use crate::application::port::{AssetSource, SourceError};
use reqwest::{Client, StatusCode, Url};
use std::future::Future;

const USER_AGENT: &str = concat!("iced_slides/", env!("CARGO_PKG_VERSION"));

/// Loads assets from a web server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: Url,
}

impl HttpSource {
    /// Creates a source for `base`, which must be an absolute `http(s)` URL.
    pub fn new(base: &str) -> Result<Self, SourceError> {
        let mut base =
            Url::parse(base).map_err(|err| SourceError::InvalidLocation(format!("{base}: {err}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(SourceError::InvalidLocation(base.to_string()));
        }
        // Without a trailing slash, relative joins would replace the last segment.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| SourceError::Http(err.to_string()))?;

        Ok(Self { client, base })
    }

    /// Resolves a location against the base URL.
    pub fn resolve(&self, location: &str) -> Result<Url, SourceError> {
        self.base
            .join(location)
            .map_err(|err| SourceError::InvalidLocation(format!("{location}: {err}")))
    }
}

impl AssetSource for HttpSource {
    fn load(&self, location: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send {
        let resolved = self.resolve(location);
        let client = self.client.clone();
        async move {
            let url = resolved?;
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|err| SourceError::Http(err.to_string()))?;

            if response.status() == StatusCode::NOT_FOUND {
                return Err(SourceError::NotFound);
            }

            let bytes = response
                .error_for_status()
                .map_err(|err| SourceError::Http(err.to_string()))?
                .bytes()
                .await
                .map_err(|err| SourceError::Http(err.to_string()))?;

            Ok(bytes.to_vec())
        }
    }

    fn describe(&self) -> String {
        self.base.to_string()
    }

    fn identity(&self, location: &str) -> String {
        self.resolve(location)
            .map(String::from)
            .unwrap_or_else(|_| location.to_string())
    }
}
