// SPDX-License-Identifier: MPL-2.0
//! Ordering keys for confirmed assets.
//!
//! The generator knows the slide number of every templated candidate, so that
//! number is used directly. Path inference only runs for candidates that were
//! supplied without one.

use crate::domain::slides::{CandidatePath, ConfirmedAsset, OrderingKey};
use regex::Regex;
use std::sync::LazyLock;

/// Image suffixes recognised when inferring a slide number from a location.
pub const IMAGE_SUFFIXES: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

static SLIDE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    let suffixes = IMAGE_SUFFIXES.join("|");
    Regex::new(&format!(r"(?i)(\d+)\.(?:{suffixes})")).expect("slide number pattern is valid")
});

/// Extracts the first digit run immediately preceding an image suffix.
///
/// The suffix does not have to end the location, so `slide-05.png_hd` gives 5
/// like `adhd-slide-07.png.PNG` gives 7 and `ADHD12.png` gives 12. Returns `None`
/// when no such run exists or it does not fit in a `u32`.
#[must_use]
pub fn infer_slide_number(location: &str) -> Option<u32> {
    SLIDE_NUMBER
        .captures(location)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Computes the ordering key of a candidate.
#[must_use]
pub fn ordering_key(candidate: &CandidatePath) -> OrderingKey {
    if let Some(slide) = candidate.slide() {
        return OrderingKey::Explicit(slide.value());
    }
    match infer_slide_number(candidate.location()) {
        Some(number) => OrderingKey::Inferred(number),
        None => OrderingKey::Unparsed,
    }
}

/// Sorts assets ascending by key value. Equal keys keep their relative order.
pub fn sort_assets(assets: &mut [ConfirmedAsset]) {
    assets.sort_by_key(|asset| asset.key().value());
}
