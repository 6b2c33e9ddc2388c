// SPDX-License-Identifier: MPL-2.0
//! Fullscreen presentation state machine.
//!
//! The controller only knows indices into the resolved sequence and its length.
//! Every transition is a pure function of the current state, the trigger and
//! the sequence length:
//!
//! ```text
//!            Open(i), 0 <= i < len
//!   Closed ------------------------> Open(i)
//!     ^                              |  Next:     i+1 if i < len-1, else stay
//!     |            Close             |  Previous: i-1 if i > 0,     else stay
//!     +------------------------------+
//! ```
//!
//! Navigation never wraps around.

/// Keyboard signals understood by the presentation surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySignal {
    /// Leave the presentation.
    Escape,
    /// Move to the next slide.
    Forward,
    /// Move to the previous slide.
    Backward,
    /// Any other key.
    Other,
}

/// Inputs that drive the slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A gallery thumbnail at this position was selected.
    Open(usize),
    /// The close button was pressed.
    Close,
    /// The next button was pressed.
    Next,
    /// The previous button was pressed.
    Previous,
    /// A key was pressed on the presentation surface.
    Key(KeySignal),
    /// The displayed slide was clicked ("click to advance").
    SlideClicked,
}

/// Whether the presentation is showing, and which slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideshowState {
    /// Gallery is visible, no slide is presented.
    #[default]
    Closed,
    /// Slide at this index is presented fullscreen.
    Open(usize),
}

impl SlideshowState {
    /// Applies `trigger` for a sequence of `len` slides.
    ///
    /// Invalid transitions (out-of-range open, moves past either end, keys
    /// while closed) leave the state unchanged.
    #[must_use]
    pub fn apply(self, trigger: Trigger, len: usize) -> Self {
        match (self, trigger) {
            (_, Trigger::Open(index)) if index < len => SlideshowState::Open(index),
            (_, Trigger::Open(_)) => self,

            (SlideshowState::Closed, _) => SlideshowState::Closed,

            (SlideshowState::Open(_), Trigger::Close | Trigger::Key(KeySignal::Escape)) => {
                SlideshowState::Closed
            }
            (
                SlideshowState::Open(index),
                Trigger::Next | Trigger::SlideClicked | Trigger::Key(KeySignal::Forward),
            ) if index + 1 < len => SlideshowState::Open(index + 1),
            (SlideshowState::Open(index), Trigger::Previous | Trigger::Key(KeySignal::Backward))
                if index > 0 =>
            {
                SlideshowState::Open(index - 1)
            }
            (SlideshowState::Open(_), _) => self,
        }
    }

    /// Index of the presented slide.
    #[must_use]
    pub fn current_index(self) -> Option<usize> {
        match self {
            SlideshowState::Open(index) => Some(index),
            SlideshowState::Closed => None,
        }
    }

    /// Returns true while a slide is presented.
    #[must_use]
    pub fn is_open(self) -> bool {
        matches!(self, SlideshowState::Open(_))
    }

    /// Returns true if [`Trigger::Next`] would move.
    #[must_use]
    pub fn can_go_next(self, len: usize) -> bool {
        self.current_index().is_some_and(|index| index + 1 < len)
    }

    /// Returns true if [`Trigger::Previous`] would move.
    #[must_use]
    pub fn can_go_previous(self) -> bool {
        self.current_index().is_some_and(|index| index > 0)
    }

    /// One-based position and total, e.g. `(3, 20)` for "3 / 20".
    #[must_use]
    pub fn position(self, len: usize) -> Option<(usize, usize)> {
        self.current_index().map(|index| (index + 1, len))
    }
}
