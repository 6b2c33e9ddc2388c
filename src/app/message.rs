// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::SourceError;
use crate::discovery::Resolution;
use crate::error::Error;
use crate::slideshow::KeySignal;
use crate::ui::{gallery, presentation};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Every probe has settled.
    DiscoveryFinished(Resolution),
    /// Image bytes for the slide at `index` arrived (or failed).
    SlideLoaded {
        index: usize,
        result: Result<Vec<u8>, SourceError>,
    },
    Gallery(gallery::Message),
    Presentation(presentation::Message),
    /// Navigation key pressed while the presentation is open.
    Key(KeySignal),
    /// Result from the companion save dialog.
    CompanionTargetChosen(Option<PathBuf>),
    /// Result from writing the companion document.
    CompanionSaved(Result<PathBuf, Error>),
    DismissNotice,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SLIDES_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional asset root (directory or base URL), overriding the config.
    pub root: Option<String>,
    /// Optional highest slide number, overriding the config.
    pub max_slides: Option<u32>,
}
