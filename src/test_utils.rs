// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit tests.
//!
//! [`FakeSource`] is an in-memory [`AssetSource`] with per-location delays and
//! counters for issued and concurrent loads.

use crate::application::port::{AssetSource, SourceError};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Encodes a complete 1x1 PNG.
pub fn tiny_png() -> Vec<u8> {
    let mut bytes = Vec::new();
    image_rs::RgbaImage::new(1, 1)
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .expect("encoding a 1x1 png cannot fail");
    bytes
}

/// In-memory asset source for discovery tests.
#[derive(Debug, Default)]
pub struct FakeSource {
    images: HashSet<String>,
    blobs: HashMap<String, Vec<u8>>,
    delays: HashMap<String, Duration>,
    default_delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeSource {
    /// Creates a source where exactly `locations` exist as images.
    pub fn with_images<I, S>(locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            images: locations.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Stores an arbitrary payload at `location`.
    pub fn with_blob(mut self, location: &str, bytes: &[u8]) -> Self {
        self.blobs.insert(location.to_string(), bytes.to_vec());
        self
    }

    /// Delays every load of `location`.
    pub fn with_delay(mut self, location: &str, delay: Duration) -> Self {
        self.delays.insert(location.to_string(), delay);
        self
    }

    /// Delays every load that has no specific delay.
    pub fn with_default_delay(mut self, delay: Duration) -> Self {
        self.default_delay = delay;
        self
    }

    /// Number of loads issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Highest number of loads observed running at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl AssetSource for FakeSource {
    fn load(&self, location: &str) -> impl Future<Output = Result<Vec<u8>, SourceError>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self
            .delays
            .get(location)
            .copied()
            .unwrap_or(self.default_delay);
        let payload = if self.images.contains(location) {
            Some(tiny_png())
        } else {
            self.blobs.get(location).cloned()
        };

        async move {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            payload.ok_or(SourceError::NotFound)
        }
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
