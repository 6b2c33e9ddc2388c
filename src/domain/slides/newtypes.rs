// SPDX-License-Identifier: MPL-2.0
//! Slide discovery newtypes.
//!
//! This module provides type-safe wrappers for discovery values,
//! ensuring they are always within valid ranges.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Maximum slide count bounds (0 to 999 slides).
pub mod max_slides_bounds {
    /// Minimum slide count probed. Zero disables template candidates.
    pub const MIN: u32 = 0;
    /// Maximum slide count probed. Larger numbers are rejected by configuration.
    pub const MAX: u32 = 999;
    /// Default slide count probed.
    pub const DEFAULT: u32 = 30;
}

/// Concurrent probe bounds.
pub mod probe_concurrency_bounds {
    /// Minimum number of probes in flight.
    pub const MIN: usize = 1;
    /// Maximum number of probes in flight.
    pub const MAX: usize = 64;
    /// Default number of probes in flight.
    pub const DEFAULT: usize = 16;
}

/// Per-probe timeout bounds in milliseconds.
pub mod probe_timeout_bounds {
    /// Minimum timeout.
    pub const MIN_MS: u64 = 100;
    /// Maximum timeout.
    pub const MAX_MS: u64 = 60_000;
    /// Default timeout.
    pub const DEFAULT_MS: u64 = 5_000;
}

// =============================================================================
// SlideNumber
// =============================================================================

/// One-based slide number as it appears in asset file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SlideNumber(u32);

impl SlideNumber {
    /// Creates a slide number. Returns `None` for zero.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Returns the raw number.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the number zero-padded to at least two digits (`7` -> `07`).
    #[must_use]
    pub fn padded(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for SlideNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// MaxSlides
// =============================================================================

/// Highest slide number probed for each naming template.
///
/// Zero is valid and yields no template candidates. Numbers wider than two
/// digits are padded to their natural width (`100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxSlides(u32);

impl MaxSlides {
    /// Creates a new maximum, saturating at [`max_slides_bounds::MAX`].
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.min(max_slides_bounds::MAX))
    }

    /// Creates a new maximum, or `None` above [`max_slides_bounds::MAX`].
    #[must_use]
    pub fn try_new(value: u32) -> Option<Self> {
        (value <= max_slides_bounds::MAX).then_some(Self(value))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Iterates over every slide number from 1 up to this maximum.
    pub fn numbers(self) -> impl Iterator<Item = SlideNumber> {
        (1..=self.0).map(SlideNumber)
    }
}

impl Default for MaxSlides {
    fn default() -> Self {
        Self(max_slides_bounds::DEFAULT)
    }
}

// =============================================================================
// ProbeConcurrency
// =============================================================================

/// Upper bound on probes in flight at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConcurrency(usize);

impl ProbeConcurrency {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            probe_concurrency_bounds::MIN,
            probe_concurrency_bounds::MAX,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for ProbeConcurrency {
    fn default() -> Self {
        Self(probe_concurrency_bounds::DEFAULT)
    }
}

// =============================================================================
// ProbeTimeout
// =============================================================================

/// Time a single probe may take before it counts as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTimeout(u64);

impl ProbeTimeout {
    /// Creates a new timeout from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(probe_timeout_bounds::MIN_MS, probe_timeout_bounds::MAX_MS))
    }

    /// Returns the timeout in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a [`Duration`].
    #[must_use]
    pub fn duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ProbeTimeout {
    fn default() -> Self {
        Self(probe_timeout_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
