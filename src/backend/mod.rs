//! Document backends.
//!
//! The deck renderer talks to the output format only through
//! [`DocumentBackend`]. Geometry arrives in EMU and colors as RGB, already
//! resolved from the theme; handles are opaque tokens issued by the backend.
//!
//! Two implementations ship:
//!
//! - [`PptxBackend`]: writes a `.pptx` package
//! - [`RecordingBackend`]: records every call, used for dry runs and tests

pub mod pptx;
pub mod recording;

pub use pptx::PptxBackend;
pub use recording::{Call, RecordingBackend};

use crate::common::{RGBColor, Result};
use crate::layout::{Align, EmuRect, ShapeKind};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// A slide issued by [`DocumentBackend::add_slide`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlideHandle(pub(crate) usize);

impl SlideHandle {
    /// Zero-based position of the slide in the deck.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SlideHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

/// A text frame issued by [`DocumentBackend::add_text_box`] or
/// [`DocumentBackend::add_shape`]. Always belongs to exactly one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FrameHandle {
    pub(crate) slide: SlideHandle,
    pub(crate) shape: usize,
}

impl FrameHandle {
    #[inline]
    pub fn slide(&self) -> SlideHandle {
        self.slide
    }

    /// Zero-based position of the shape on its slide.
    #[inline]
    pub fn shape(&self) -> usize {
        self.shape
    }
}

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/frame#{}", self.slide, self.shape)
    }
}

/// One paragraph appended to a text frame: a single run plus paragraph
/// formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub text: String,
    /// Points
    pub font_size: f64,
    pub color: RGBColor,
    pub bold: bool,
    pub align: Align,
    /// Points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_before: Option<f64>,
    /// Points
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, font_size: f64, color: RGBColor) -> Self {
        Self {
            text: text.into(),
            font_size,
            color,
            bold: false,
            align: Align::Left,
            space_before: None,
            space_after: None,
        }
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Same spacing before and after, in points.
    pub fn spacing(mut self, points: f64) -> Self {
        self.space_before = Some(points);
        self.space_after = Some(points);
        self
    }
}

/// The narrow interface through which a deck is encoded into a file.
///
/// Calls must start with [`create_deck`](Self::create_deck); anything else
/// before it fails with [`Error::DeckNotCreated`](crate::Error::DeckNotCreated).
/// Handles not issued by the same backend fail with
/// [`Error::InvalidHandle`](crate::Error::InvalidHandle). Errors are returned
/// as-is and never retried.
pub trait DocumentBackend {
    /// Start a new, empty deck of the given slide size in EMU.
    fn create_deck(&mut self, width: i64, height: i64) -> Result<()>;

    /// Append a blank slide.
    fn add_slide(&mut self) -> Result<SlideHandle>;

    /// Paint the slide's full-bleed background. The last call wins.
    fn set_background(&mut self, slide: SlideHandle, color: RGBColor) -> Result<()>;

    /// Add an empty, word-wrapped text box.
    fn add_text_box(&mut self, slide: SlideHandle, frame: EmuRect) -> Result<FrameHandle>;

    /// Add a filled, outlined auto shape whose text frame centers its content.
    fn add_shape(
        &mut self,
        slide: SlideHandle,
        kind: ShapeKind,
        frame: EmuRect,
        fill: RGBColor,
        line: RGBColor,
    ) -> Result<FrameHandle>;

    /// Append a paragraph to a text frame.
    fn add_paragraph(&mut self, frame: FrameHandle, paragraph: &Paragraph) -> Result<()>;

    /// Write the deck to `path`.
    fn save(&mut self, path: &Path) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_spacing() {
        let paragraph =
            Paragraph::new("• Memory", 16.0, RGBColor::new(255, 255, 255)).spacing(8.0);
        assert_eq!(paragraph.space_before, Some(8.0));
        assert_eq!(paragraph.space_after, Some(8.0));
        assert!(!paragraph.bold);
        assert_eq!(paragraph.align, Align::Left);
    }

    #[test]
    fn test_handle_display() {
        let frame = FrameHandle {
            slide: SlideHandle(2),
            shape: 5,
        };
        assert_eq!(frame.to_string(), "slide#2/frame#5");
        assert_eq!(frame.slide().index(), 2);
    }
}
