// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! Slideshow inputs are all funneled into [`Trigger`]s so the state machine
//! stays the only place that decides transitions.

use super::{App, Message};
use crate::application::port::AssetSource;
use crate::companion;
use crate::discovery::Resolution;
use crate::domain::slides::DiscoveryState;
use crate::slideshow::Trigger;
use crate::ui::notice::Notice;
use crate::ui::slide_image::SlideImage;
use crate::ui::{gallery, presentation};
use iced::Task;
use std::path::PathBuf;

/// Applies `message` to `app`, returning follow-up work.
pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::DiscoveryFinished(resolution) => handle_discovery_finished(app, resolution),
        Message::SlideLoaded { index, result } => {
            // Results for indices outside the sequence cannot be displayed.
            if index < app.discovery.slide_count() {
                if let Err(err) = &result {
                    tracing::warn!(index, error = %err, "slide image could not be loaded");
                }
                app.images.insert(index, SlideImage::from_load(result));
            }
            Task::none()
        }
        Message::Gallery(gallery::Message::SlideSelected(index)) => {
            apply_trigger(app, Trigger::Open(index));
            Task::none()
        }
        Message::Gallery(gallery::Message::DownloadCompanion) => open_companion_dialog(app),
        Message::Presentation(message) => {
            let trigger = match message {
                presentation::Message::Close => Trigger::Close,
                presentation::Message::Previous => Trigger::Previous,
                presentation::Message::Next => Trigger::Next,
                presentation::Message::SlideClicked => Trigger::SlideClicked,
            };
            apply_trigger(app, trigger);
            Task::none()
        }
        Message::Key(signal) => {
            apply_trigger(app, Trigger::Key(signal));
            Task::none()
        }
        Message::CompanionTargetChosen(Some(path)) => save_companion(app, path),
        Message::CompanionTargetChosen(None) => Task::none(),
        Message::CompanionSaved(Ok(path)) => {
            app.notice = Some(
                Notice::success("companion-saved").with_arg("path", path.display().to_string()),
            );
            Task::none()
        }
        Message::CompanionSaved(Err(err)) => {
            tracing::error!(error = %err, "saving companion document failed");
            app.notice =
                Some(Notice::error("companion-save-failed").with_arg("reason", err.to_string()));
            Task::none()
        }
        Message::DismissNotice => {
            app.notice = None;
            Task::none()
        }
    }
}

fn apply_trigger(app: &mut App, trigger: Trigger) {
    let before = app.slideshow;
    app.slideshow = before.apply(trigger, app.discovery.slide_count());
    if app.slideshow != before {
        tracing::debug!(?trigger, from = ?before, to = ?app.slideshow, "slideshow transition");
    }
}

fn handle_discovery_finished(app: &mut App, resolution: Resolution) -> Task<Message> {
    let Resolution { sequence, report } = resolution;
    tracing::debug!(
        slides = sequence.len(),
        inferred = report.inferred_keys,
        unparsed = report.unparsed_keys,
        "applying discovery result"
    );

    app.report = Some(report);
    app.discovery = DiscoveryState::settled(sequence);
    app.images.clear();

    let (Some(source), Some(sequence)) = (app.source.as_ref(), app.discovery.sequence()) else {
        return Task::none();
    };

    let mut loads = Vec::with_capacity(sequence.len());
    for (index, asset) in sequence.iter().enumerate() {
        app.images.insert(index, SlideImage::Loading);
        let source = source.clone();
        let location = asset.location().to_string();
        loads.push(Task::perform(
            async move { source.load(&location).await },
            move |result| Message::SlideLoaded { index, result },
        ));
    }

    Task::batch(loads)
}

fn open_companion_dialog(app: &App) -> Task<Message> {
    if app.config.companion.document_location().is_none() {
        return Task::none();
    }

    let dialog = rfd::AsyncFileDialog::new()
        .set_file_name(app.config.companion.file_name.clone())
        .add_filter("PDF", &["pdf"]);

    Task::perform(
        async move {
            dialog
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::CompanionTargetChosen,
    )
}

fn save_companion(app: &App, target: PathBuf) -> Task<Message> {
    let (Some(source), Some(location)) = (
        app.source.clone(),
        app.config.companion.document_location().map(str::to_string),
    ) else {
        return Task::none();
    };

    Task::perform(
        async move { companion::save_companion(&source, &location, &target).await },
        Message::CompanionSaved,
    )
}
