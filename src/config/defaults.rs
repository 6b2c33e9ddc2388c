// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Discovery**: Asset root, slide count, naming conventions, probing limits
//! - **Companion**: Downloadable companion document

// ==========================================================================
// Discovery Defaults
// ==========================================================================

/// Default asset root: the site's public folder, relative to the working directory.
pub const DEFAULT_ASSET_ROOT: &str = "public";

/// Default highest slide number probed per naming convention.
pub const DEFAULT_MAX_SLIDES: u32 = 30;

/// Minimum allowed slide count. Zero probes only `extra_paths`.
pub const MIN_MAX_SLIDES: u32 = 0;

/// Maximum allowed slide count. Larger values are a configuration error.
pub const MAX_MAX_SLIDES: u32 = 999;

/// Naming conventions the published slide sets have used so far.
///
/// Two directories and two file name styles coexist, including the doubled
/// `.png.PNG` suffix some exports produced.
pub const DEFAULT_TEMPLATES: &[&str] = &[
    "/about-conditions/adhd/adhd-slide-{NN}.png.PNG",
    "/education-assets/adhd/ADHD{NN}.png",
    "/education-assets/adhd/adhd-slide-{NN}.png",
];

/// Default per-probe timeout in milliseconds.
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5_000;

/// Minimum per-probe timeout in milliseconds.
pub const MIN_PROBE_TIMEOUT_MS: u64 = 100;

/// Maximum per-probe timeout in milliseconds.
pub const MAX_PROBE_TIMEOUT_MS: u64 = 60_000;

/// Default number of probes in flight.
pub const DEFAULT_MAX_CONCURRENT_PROBES: usize = 16;

/// Minimum number of probes in flight.
pub const MIN_MAX_CONCURRENT_PROBES: usize = 1;

/// Maximum number of probes in flight.
pub const MAX_MAX_CONCURRENT_PROBES: usize = 64;

// ==========================================================================
// Companion Document Defaults
// ==========================================================================

/// Location of the companion document, resolved like slide locations.
pub const DEFAULT_COMPANION_DOCUMENT: &str = "/about-conditions/adhd/ADHD-Education.pdf";

/// File name suggested when saving the companion document.
pub const DEFAULT_COMPANION_FILE_NAME: &str = "ADHD-Education-Dr-Shapiro.pdf";

// ==========================================================================
// Deck Defaults
// ==========================================================================

/// Name of the condition the slide set covers.
pub const DEFAULT_DECK_CONDITION: &str = "ADHD";

/// Conditions listed as upcoming (shown disabled in the gallery header).
pub const DEFAULT_UPCOMING_CONDITIONS: &[&str] = &[
    "Anxiety",
    "Depression",
    "Bipolar",
    "PTSD",
    "OCD",
    "Autism",
    "Eating Disorders",
    "Substance Use",
    "Sleep Disorders",
    "Personality",
];
