// SPDX-License-Identifier: MPL-2.0
//! Existence probe for a single candidate.

use crate::application::port::AssetSource;
use crate::domain::slides::ProbeTimeout;
use std::io::Cursor;

/// Result of probing one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The location loaded and its payload is an image.
    Found,
    /// The location failed to load or is not an image.
    Missing,
    /// The load did not settle within the timeout.
    TimedOut,
}

/// Decodes `bytes` with the enabled image decoders.
///
/// A recognised signature is not enough: truncated or corrupt bodies and
/// formats without a compiled-in decoder are rejected.
pub fn decode_image(bytes: &[u8]) -> Result<(), image_rs::ImageError> {
    image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()
        .map(|_| ())
}

/// Probes `location` through `source`.
///
/// Never fails: every error collapses into [`ProbeOutcome::Missing`] and an
/// expired timeout into [`ProbeOutcome::TimedOut`].
pub async fn probe<S: AssetSource>(source: &S, location: &str, timeout: ProbeTimeout) -> ProbeOutcome {
    match tokio::time::timeout(timeout.duration(), source.load(location)).await {
        Err(_) => {
            tracing::warn!(
                location,
                timeout_ms = timeout.as_millis(),
                "probe timed out, treating candidate as missing"
            );
            ProbeOutcome::TimedOut
        }
        Ok(Err(err)) => {
            tracing::trace!(location, error = %err, "candidate missing");
            ProbeOutcome::Missing
        }
        Ok(Ok(bytes)) => match decode_image(&bytes) {
            Ok(()) => ProbeOutcome::Found,
            Err(err) => {
                tracing::debug!(
                    location,
                    len = bytes.len(),
                    error = %err,
                    "candidate is not a loadable image"
                );
                ProbeOutcome::Missing
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{tiny_png, FakeSource};
    use std::time::Duration;

    #[test]
    fn only_complete_images_decode() {
        assert!(decode_image(&tiny_png()).is_ok());
        assert!(decode_image(b"<!doctype html>").is_err());
        assert!(decode_image(&[]).is_err());
    }

    #[tokio::test]
    async fn truncated_png_is_missing() {
        let png = tiny_png();
        let mut broken = png[..png.len() / 2].to_vec();
        broken.extend_from_slice(b"garbage");
        assert!(image_rs::guess_format(&broken).is_ok());

        let source = FakeSource::default().with_blob("broken.png", &broken);
        let outcome = probe(&source, "broken.png", ProbeTimeout::default()).await;
        assert_eq!(outcome, ProbeOutcome::Missing);
    }

    #[tokio::test]
    async fn signature_without_body_is_missing() {
        let source =
            FakeSource::default().with_blob("header.png", b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");
        let outcome = probe(&source, "header.png", ProbeTimeout::default()).await;
        assert_eq!(outcome, ProbeOutcome::Missing);
    }

    #[tokio::test]
    async fn existing_image_is_found() {
        let source = FakeSource::with_images(["a.png"]);
        let outcome = probe(&source, "a.png", ProbeTimeout::default()).await;
        assert_eq!(outcome, ProbeOutcome::Found);
    }

    #[tokio::test]
    async fn absent_location_is_missing() {
        let source = FakeSource::with_images(["a.png"]);
        let outcome = probe(&source, "b.png", ProbeTimeout::default()).await;
        assert_eq!(outcome, ProbeOutcome::Missing);
    }

    #[tokio::test]
    async fn non_image_payload_is_missing() {
        let source = FakeSource::default().with_blob("index.png", b"<html>not found</html>");
        let outcome = probe(&source, "index.png", ProbeTimeout::default()).await;
        assert_eq!(outcome, ProbeOutcome::Missing);
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_load_times_out() {
        let source =
            FakeSource::with_images(["slow.png"]).with_delay("slow.png", Duration::from_secs(600));
        let outcome = probe(&source, "slow.png", ProbeTimeout::from_millis(250)).await;
        assert_eq!(outcome, ProbeOutcome::TimedOut);
    }
}
