// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! presentation.
//!
//! The `App` struct wires together discovery, the slideshow state machine and
//! localization, and translates messages into side effects like image loading
//! or saving the companion document. Discovery runs once, right after boot.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::AssetSource;
use crate::config::{self, Config};
use crate::discovery::{self, ResolveReport};
use crate::domain::slides::DiscoveryState;
use crate::i18n::fluent::I18n;
use crate::infrastructure::Source;
use crate::slideshow::SlideshowState;
use crate::ui::notice::Notice;
use crate::ui::slide_image::SlideImage;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `None` when the configured asset root is unusable.
    source: Option<Source>,
    discovery: DiscoveryState,
    report: Option<ResolveReport>,
    slideshow: SlideshowState,
    /// Image data per index into the resolved sequence.
    images: HashMap<usize, SlideImage>,
    theme_mode: ThemeMode,
    notice: Option<Notice>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("discovery", &self.discovery)
            .field("slideshow", &self.slideshow)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let (mut app, task) = Self::with_config(flags, config);
        if let Some(key) = config_warning {
            app.notice = Some(Notice::warning(key));
        }
        (app, task)
    }

    /// Builds the app from an already loaded config and starts discovery.
    fn with_config(flags: Flags, mut config: Config) -> (Self, Task<Message>) {
        if let Some(root) = flags.root {
            config.discovery.asset_root = root;
        }
        if let Some(max_slides) = flags.max_slides {
            config.discovery.max_slides = Some(max_slides);
        }

        let i18n = I18n::new(flags.lang, &config);
        let mut app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            source: None,
            discovery: DiscoveryState::Discovering,
            report: None,
            slideshow: SlideshowState::Closed,
            images: HashMap::new(),
            notice: None,
            config,
        };

        let source = match Source::from_root(&app.config.discovery.asset_root) {
            Ok(source) => source,
            Err(err) => {
                tracing::error!(root = %app.config.discovery.asset_root, error = %err, "unusable asset root");
                app.fail_discovery(crate::error::Error::from(err));
                return (app, Task::none());
            }
        };

        let plan = match app.config.discovery_plan() {
            Ok(plan) => plan,
            Err(err) => {
                tracing::error!(error = %err, "invalid discovery settings");
                app.source = Some(source);
                app.fail_discovery(err);
                return (app, Task::none());
            }
        };

        tracing::info!(
            source = %source.describe(),
            templates = plan.templates.len(),
            max_slides = plan.max_slides.value(),
            "starting slide discovery"
        );
        app.source = Some(source.clone());
        let task = Task::perform(discovery::discover(source, plan), Message::DiscoveryFinished);

        (app, task)
    }

    /// Settles discovery as empty and surfaces `err`.
    fn fail_discovery(&mut self, err: crate::error::Error) {
        self.discovery = DiscoveryState::Empty;
        self.notice = Some(Notice::error(err.i18n_key()));
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.slideshow.position(self.discovery.slide_count()) {
            Some((current, total)) => format!("{current}/{total} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_keyboard_subscription(self.slideshow.is_open())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::Resolution;
    use crate::domain::slides::{ConfirmedAsset, OrderingKey, ResolvedSequence};
    use crate::slideshow::KeySignal;
    use crate::ui::{gallery, presentation};

    fn test_app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            root: Some(std::env::temp_dir().to_string_lossy().into_owned()),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default());
        app
    }

    fn resolution(count: usize) -> Resolution {
        let assets = (1..=count)
            .map(|n| {
                ConfirmedAsset::new(
                    format!("/deck/slide-{n:02}.png"),
                    OrderingKey::Explicit(n as u32),
                )
            })
            .collect();
        Resolution {
            sequence: ResolvedSequence::from_sorted(assets),
            ..Resolution::default()
        }
    }

    #[test]
    fn starts_discovering_and_closed() {
        let app = test_app();
        assert_eq!(app.discovery, DiscoveryState::Discovering);
        assert!(!app.slideshow.is_open());
        assert!(app.source.is_some());
    }

    #[test]
    fn blank_template_settles_empty_with_notice() {
        let mut config = Config::default();
        config.discovery.templates = vec![" ".to_string()];
        let flags = Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        };

        let (app, _task) = App::with_config(flags, config);

        assert_eq!(app.discovery, DiscoveryState::Empty);
        assert_eq!(
            app.notice.as_ref().map(Notice::message_key),
            Some("error-template")
        );
    }

    #[test]
    fn oversized_slide_count_settles_empty_with_notice() {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            max_slides: Some(crate::config::MAX_MAX_SLIDES + 1),
            ..Flags::default()
        };

        let (app, _task) = App::with_config(flags, Config::default());

        assert_eq!(app.discovery, DiscoveryState::Empty);
        assert_eq!(
            app.notice.as_ref().map(Notice::message_key),
            Some("error-config")
        );
    }

    #[test]
    fn flags_override_config() {
        let flags = Flags {
            root: Some("https://example.org/assets".to_string()),
            max_slides: Some(7),
            ..Flags::default()
        };
        let (app, _task) = App::with_config(flags, Config::default());

        assert_eq!(app.config.discovery.asset_root, "https://example.org/assets");
        assert_eq!(app.config.discovery.max_slides, Some(7));
        assert!(matches!(app.source, Some(Source::Http(_))));
    }

    #[test]
    fn empty_discovery_keeps_slideshow_inert() {
        let mut app = test_app();
        let _ = app.update(Message::DiscoveryFinished(Resolution::default()));

        assert_eq!(app.discovery, DiscoveryState::Empty);
        let _ = app.update(Message::Gallery(gallery::Message::SlideSelected(0)));
        assert!(!app.slideshow.is_open());
    }

    #[test]
    fn gallery_selection_opens_presentation() {
        let mut app = test_app();
        let _ = app.update(Message::DiscoveryFinished(resolution(3)));

        assert_eq!(app.discovery.slide_count(), 3);
        assert_eq!(app.images.len(), 3);

        let _ = app.update(Message::Gallery(gallery::Message::SlideSelected(1)));
        assert_eq!(app.slideshow, SlideshowState::Open(1));
        assert_eq!(app.title(), "2/3 - IcedSlides");
    }

    #[test]
    fn presentation_controls_drive_state_machine() {
        let mut app = test_app();
        let _ = app.update(Message::DiscoveryFinished(resolution(3)));
        let _ = app.update(Message::Gallery(gallery::Message::SlideSelected(0)));

        let _ = app.update(Message::Presentation(presentation::Message::Next));
        let _ = app.update(Message::Presentation(presentation::Message::SlideClicked));
        let _ = app.update(Message::Presentation(presentation::Message::Next));
        assert_eq!(app.slideshow, SlideshowState::Open(2));

        let _ = app.update(Message::Key(KeySignal::Backward));
        assert_eq!(app.slideshow, SlideshowState::Open(1));

        let _ = app.update(Message::Key(KeySignal::Escape));
        assert_eq!(app.slideshow, SlideshowState::Closed);
    }

    #[test]
    fn slide_loaded_updates_image_state() {
        let mut app = test_app();
        let _ = app.update(Message::DiscoveryFinished(resolution(2)));

        let _ = app.update(Message::SlideLoaded {
            index: 0,
            result: Ok(crate::test_utils::tiny_png()),
        });
        let _ = app.update(Message::SlideLoaded {
            index: 1,
            result: Err(crate::application::port::SourceError::NotFound),
        });

        assert!(matches!(app.images.get(&0), Some(SlideImage::Ready(_))));
        assert!(matches!(app.images.get(&1), Some(SlideImage::Unavailable)));
    }

    #[test]
    fn stale_slide_result_is_ignored() {
        let mut app = test_app();
        let _ = app.update(Message::DiscoveryFinished(resolution(1)));
        let _ = app.update(Message::SlideLoaded {
            index: 5,
            result: Ok(vec![1]),
        });
        assert!(!app.images.contains_key(&5));
    }

    #[test]
    fn companion_result_sets_notice() {
        let mut app = test_app();
        let _ = app.update(Message::CompanionSaved(Ok(std::path::PathBuf::from(
            "/tmp/handout.pdf",
        ))));
        assert_eq!(
            app.notice.as_ref().map(Notice::message_key),
            Some("companion-saved")
        );

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());

        let _ = app.update(Message::CompanionSaved(Err(crate::error::Error::Io(
            "denied".into(),
        ))));
        assert_eq!(
            app.notice.as_ref().map(Notice::message_key),
            Some("companion-save-failed")
        );
    }
}
