// SPDX-License-Identifier: MPL-2.0
//! Core slide discovery types.

use super::newtypes::SlideNumber;
use std::fmt;

// =============================================================================
// CandidatePath
// =============================================================================

/// A guessed asset location that may or may not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidatePath {
    location: String,
    slide: Option<SlideNumber>,
}

impl CandidatePath {
    /// Creates a candidate produced by a naming template for `slide`.
    #[must_use]
    pub fn from_template(location: impl Into<String>, slide: SlideNumber) -> Self {
        Self {
            location: location.into(),
            slide: Some(slide),
        }
    }

    /// Creates a candidate with no known slide number.
    ///
    /// Its ordering key is inferred from the location once confirmed.
    #[must_use]
    pub fn bare(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            slide: None,
        }
    }

    /// Returns the location string.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the slide number that produced this candidate, if any.
    #[must_use]
    pub fn slide(&self) -> Option<SlideNumber> {
        self.slide
    }
}

impl fmt::Display for CandidatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}

// =============================================================================
// OrderingKey
// =============================================================================

/// Sort key of a confirmed asset, tagged with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingKey {
    /// Slide number supplied alongside the location.
    Explicit(u32),
    /// Slide number parsed out of the location.
    Inferred(u32),
    /// No number could be determined. Sorts as 0.
    Unparsed,
}

impl OrderingKey {
    /// Returns the numeric value used for sorting.
    #[must_use]
    pub fn value(self) -> u32 {
        match self {
            OrderingKey::Explicit(n) | OrderingKey::Inferred(n) => n,
            OrderingKey::Unparsed => 0,
        }
    }
}

// =============================================================================
// ConfirmedAsset
// =============================================================================

/// A candidate verified to load as an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmedAsset {
    location: String,
    key: OrderingKey,
}

impl ConfirmedAsset {
    /// Creates a confirmed asset.
    #[must_use]
    pub fn new(location: impl Into<String>, key: OrderingKey) -> Self {
        Self {
            location: location.into(),
            key,
        }
    }

    /// Returns the asset location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the ordering key.
    #[must_use]
    pub fn key(&self) -> OrderingKey {
        self.key
    }
}

// =============================================================================
// ResolvedSequence
// =============================================================================

/// Ordered, deduplicated list of confirmed assets driving gallery and slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedSequence {
    assets: Vec<ConfirmedAsset>,
}

impl ResolvedSequence {
    /// Wraps assets that are already deduplicated and sorted.
    pub(crate) fn from_sorted(assets: Vec<ConfirmedAsset>) -> Self {
        Self { assets }
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Returns true if no asset was confirmed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Returns the asset at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ConfirmedAsset> {
        self.assets.get(index)
    }

    /// Iterates over the assets in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ConfirmedAsset> {
        self.assets.iter()
    }

    /// Returns the locations in display order.
    #[must_use]
    pub fn locations(&self) -> Vec<&str> {
        self.assets.iter().map(ConfirmedAsset::location).collect()
    }
}

// =============================================================================
// DiscoveryState
// =============================================================================

/// Lifecycle of slide discovery as seen by the user interface.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DiscoveryState {
    /// Probes are still in flight.
    #[default]
    Discovering,
    /// Every probe settled and nothing was found.
    Empty,
    /// At least one slide was found.
    Ready(ResolvedSequence),
}

impl DiscoveryState {
    /// Maps a finished sequence to `Empty` or `Ready`.
    #[must_use]
    pub fn settled(sequence: ResolvedSequence) -> Self {
        if sequence.is_empty() {
            DiscoveryState::Empty
        } else {
            DiscoveryState::Ready(sequence)
        }
    }

    /// Returns the sequence when ready.
    #[must_use]
    pub fn sequence(&self) -> Option<&ResolvedSequence> {
        match self {
            DiscoveryState::Ready(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Number of known slides (zero unless ready).
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.sequence().map_or(0, ResolvedSequence::len)
    }
}
