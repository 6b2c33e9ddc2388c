// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` is an educational slide gallery with a fullscreen presenter,
//! built with the Iced GUI framework.
//!
//! Slides are found by probing: naming templates are expanded into candidate
//! locations, each candidate is loaded from an asset source (a directory or a
//! web server), and the ones that turn out to be images are deduplicated and
//! ordered by slide number. A small state machine drives the presentation.
//!
//! # Layers
//!
//! - [`domain`] - Slide numbers, templates, candidates and the resolved sequence
//! - [`application`] - The [`AssetSource`](application::port::AssetSource) port
//! - [`infrastructure`] - Filesystem and HTTP asset sources
//! - [`discovery`] - Candidate generation, probing and resolution
//! - [`slideshow`] - Presentation state machine
//! - [`app`] / [`ui`] - Iced application and views

#![doc(html_root_url = "https://docs.rs/iced_slides/0.1.0")]

pub mod app;
pub mod application;
pub mod companion;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;
pub mod slideshow;
pub mod ui;

#[cfg(test)]
mod test_utils;
