// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`asset_source`]: Loading slide and companion assets by location
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `reqwest` types)
//! - Traits are `Send + Sync` so futures can run on the Iced tokio executor
//! - Methods return `Result` with port-level error types

pub mod asset_source;

// Re-export main types for convenience
pub use asset_source::{AssetSource, SourceError};
