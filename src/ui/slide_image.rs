// SPDX-License-Identifier: MPL-2.0
//! Decoded slide pixels as the views see them.

use crate::application::port::SourceError;
use iced::widget::image;

/// Load state of one slide's image data.
#[derive(Debug, Clone)]
pub enum SlideImage {
    /// Bytes are still being fetched.
    Loading,
    /// Ready to draw.
    Ready(image::Handle),
    /// The asset was confirmed during discovery but could not be fetched again.
    Unavailable,
}

impl SlideImage {
    /// Converts a fetch result into a slide image.
    #[must_use]
    pub fn from_load(result: Result<Vec<u8>, SourceError>) -> Self {
        match result {
            Ok(bytes) => SlideImage::Ready(image::Handle::from_bytes(bytes)),
            Err(_) => SlideImage::Unavailable,
        }
    }

    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        match self {
            SlideImage::Ready(handle) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_result_maps_to_state() {
        assert!(SlideImage::from_load(Ok(vec![1, 2, 3])).handle().is_some());
        assert!(matches!(
            SlideImage::from_load(Err(SourceError::NotFound)),
            SlideImage::Unavailable
        ));
        assert!(SlideImage::Loading.handle().is_none());
    }
}
