// SPDX-License-Identifier: MPL-2.0
//! Slide domain types.
//!
//! This module contains the value objects shared by discovery and the
//! slideshow: naming templates, candidates, confirmed assets and the
//! resolved sequence.

pub mod newtypes;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use newtypes::{MaxSlides, ProbeConcurrency, ProbeTimeout, SlideNumber};
pub use template::{NamingTemplate, TemplateError, PLACEHOLDER};
pub use types::{CandidatePath, ConfirmedAsset, DiscoveryState, OrderingKey, ResolvedSequence};
