// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loaded from a
//! `settings.toml` file. The application never writes it.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[discovery]` - Asset root, naming templates and probing limits
//! - `[companion]` - Companion document offered for download
//! - `[deck]` - Condition covered by the slide set, upcoming ones and the
//!   footer disclaimer
//!
//! Naming templates are data, not code: adding a convention means adding a
//! line to `templates`.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `ICED_SLIDES_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_slides::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Override a setting before building the plan
//! config.discovery.max_slides = Some(20);
//! let plan = config.discovery_plan().expect("valid discovery settings");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::discovery::{DiscoveryPlan, ResolverOptions};
use crate::domain::slides::{MaxSlides, NamingTemplate, ProbeConcurrency, ProbeTimeout};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Slide discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryConfig {
    /// Directory or `http(s)://` base URL that locations are resolved against.
    #[serde(default = "default_asset_root")]
    pub asset_root: String,

    /// Highest slide number probed per template.
    #[serde(default = "default_max_slides", skip_serializing_if = "Option::is_none")]
    pub max_slides: Option<u32>,

    /// Naming templates; `{NN}` is replaced by the zero-padded slide number.
    #[serde(default = "default_templates")]
    pub templates: Vec<String>,

    /// Additional locations probed as-is.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_paths: Vec<String>,

    /// Per-probe timeout in milliseconds.
    #[serde(
        default = "default_probe_timeout_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub probe_timeout_ms: Option<u64>,

    /// Maximum probes in flight.
    #[serde(
        default = "default_max_concurrent_probes",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrent_probes: Option<usize>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            asset_root: default_asset_root(),
            max_slides: default_max_slides(),
            templates: default_templates(),
            extra_paths: Vec::new(),
            probe_timeout_ms: default_probe_timeout_ms(),
            max_concurrent_probes: default_max_concurrent_probes(),
        }
    }
}

/// Companion document settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanionConfig {
    /// Document location, resolved against the asset root. Empty disables it.
    #[serde(default = "default_companion_document")]
    pub document: String,

    /// File name suggested in the save dialog.
    #[serde(default = "default_companion_file_name")]
    pub file_name: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            document: default_companion_document(),
            file_name: default_companion_file_name(),
        }
    }
}

impl CompanionConfig {
    /// Returns the document location when one is configured.
    #[must_use]
    pub fn document_location(&self) -> Option<&str> {
        let trimmed = self.document.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Slide set presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeckConfig {
    /// Condition the slides cover, used in headings.
    #[serde(default = "default_deck_condition")]
    pub condition: String,

    /// Conditions announced as coming soon.
    #[serde(default = "default_upcoming_conditions")]
    pub upcoming: Vec<String>,

    /// Footer disclaimer. `None` shows the localized default text and an
    /// empty string hides the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            condition: default_deck_condition(),
            upcoming: default_upcoming_conditions(),
            disclaimer: None,
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Slide discovery settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Companion document settings.
    #[serde(default)]
    pub companion: CompanionConfig,

    /// Slide set presentation settings.
    #[serde(default)]
    pub deck: DeckConfig,
}

impl Config {
    /// Builds the discovery plan described by the `[discovery]` section.
    ///
    /// Fails if any template is blank or `max_slides` exceeds
    /// [`MAX_MAX_SLIDES`]. Probe limits are clamped to their valid ranges.
    pub fn discovery_plan(&self) -> Result<DiscoveryPlan> {
        let discovery = &self.discovery;
        let templates = discovery
            .templates
            .iter()
            .map(|raw| NamingTemplate::parse(raw))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        for template in templates.iter().filter(|t| !t.is_parameterized()) {
            tracing::warn!(%template, "naming template has no {{NN}} placeholder");
        }

        let requested = discovery.max_slides.unwrap_or(DEFAULT_MAX_SLIDES);
        let max_slides = MaxSlides::try_new(requested).ok_or_else(|| {
            Error::Config(format!(
                "max_slides must be at most {MAX_MAX_SLIDES}, got {requested}"
            ))
        })?;

        Ok(DiscoveryPlan {
            templates,
            max_slides,
            extra_paths: discovery.extra_paths.clone(),
            options: ResolverOptions {
                concurrency: ProbeConcurrency::new(
                    discovery
                        .max_concurrent_probes
                        .unwrap_or(DEFAULT_MAX_CONCURRENT_PROBES),
                ),
                timeout: ProbeTimeout::from_millis(
                    discovery
                        .probe_timeout_ms
                        .unwrap_or(DEFAULT_PROBE_TIMEOUT_MS),
                ),
            },
        })
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_asset_root() -> String {
    DEFAULT_ASSET_ROOT.to_string()
}

fn default_max_slides() -> Option<u32> {
    Some(DEFAULT_MAX_SLIDES)
}

fn default_templates() -> Vec<String> {
    DEFAULT_TEMPLATES.iter().map(ToString::to_string).collect()
}

fn default_probe_timeout_ms() -> Option<u64> {
    Some(DEFAULT_PROBE_TIMEOUT_MS)
}

fn default_max_concurrent_probes() -> Option<usize> {
    Some(DEFAULT_MAX_CONCURRENT_PROBES)
}

fn default_companion_document() -> String {
    DEFAULT_COMPANION_DOCUMENT.to_string()
}

fn default_companion_file_name() -> String {
    DEFAULT_COMPANION_FILE_NAME.to_string()
}

fn default_deck_condition() -> String {
    DEFAULT_DECK_CONDITION.to_string()
}

fn default_upcoming_conditions() -> Vec<String> {
    DEFAULT_UPCOMING_CONDITIONS
        .iter()
        .map(ToString::to_string)
        .collect()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
