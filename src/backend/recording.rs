//! A backend that records calls instead of encoding a file.

use super::{DocumentBackend, FrameHandle, Paragraph, SlideHandle};
use crate::common::{Error, RGBColor, Result};
use crate::layout::{EmuRect, ShapeKind};
use crate::ooxml::pptx::writer::pres::validate_slide_size;
use crate::ooxml::pptx::writer::slide::validate_extent;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One recorded backend operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Call {
    CreateDeck {
        width: i64,
        height: i64,
    },
    AddSlide {
        slide: SlideHandle,
    },
    SetBackground {
        slide: SlideHandle,
        color: RGBColor,
    },
    AddTextBox {
        slide: SlideHandle,
        frame: EmuRect,
        handle: FrameHandle,
    },
    AddShape {
        slide: SlideHandle,
        kind: ShapeKind,
        frame: EmuRect,
        fill: RGBColor,
        line: RGBColor,
        handle: FrameHandle,
    },
    AddParagraph {
        frame: FrameHandle,
        paragraph: Paragraph,
    },
    Save {
        path: PathBuf,
    },
}

impl Call {
    /// The slide this call references, if any.
    pub fn slide(&self) -> Option<SlideHandle> {
        match self {
            Self::AddSlide { slide }
            | Self::SetBackground { slide, .. }
            | Self::AddTextBox { slide, .. }
            | Self::AddShape { slide, .. } => Some(*slide),
            Self::AddParagraph { frame, .. } => Some(frame.slide),
            Self::CreateDeck { .. } | Self::Save { .. } => None,
        }
    }
}

/// Records every [`DocumentBackend`] call in order.
///
/// Handles, slide sizes and frame extents are validated exactly as
/// [`PptxBackend`](super::PptxBackend) validates them, so a deck that renders
/// here renders there. `save` records the path and never touches the
/// filesystem.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<Call>,
    created: bool,
    /// Shape count per slide
    slides: Vec<usize>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn into_calls(self) -> Vec<Call> {
        self.calls
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn check_slide(&self, slide: SlideHandle) -> Result<()> {
        if !self.created {
            return Err(Error::DeckNotCreated);
        }
        if slide.0 >= self.slides.len() {
            return Err(Error::InvalidHandle(slide.to_string()));
        }
        Ok(())
    }

    fn check_frame(&self, frame: FrameHandle) -> Result<()> {
        self.check_slide(frame.slide)?;
        if frame.shape >= self.slides[frame.slide.0] {
            return Err(Error::InvalidHandle(frame.to_string()));
        }
        Ok(())
    }

    fn next_frame(&mut self, slide: SlideHandle) -> FrameHandle {
        let count = &mut self.slides[slide.0];
        let handle = FrameHandle {
            slide,
            shape: *count,
        };
        *count += 1;
        handle
    }
}

impl DocumentBackend for RecordingBackend {
    fn create_deck(&mut self, width: i64, height: i64) -> Result<()> {
        validate_slide_size(width, height)?;
        self.created = true;
        self.slides.clear();
        self.calls.push(Call::CreateDeck { width, height });
        Ok(())
    }

    fn add_slide(&mut self) -> Result<SlideHandle> {
        if !self.created {
            return Err(Error::DeckNotCreated);
        }
        let slide = SlideHandle(self.slides.len());
        self.slides.push(0);
        self.calls.push(Call::AddSlide { slide });
        Ok(slide)
    }

    fn set_background(&mut self, slide: SlideHandle, color: RGBColor) -> Result<()> {
        self.check_slide(slide)?;
        self.calls.push(Call::SetBackground { slide, color });
        Ok(())
    }

    fn add_text_box(&mut self, slide: SlideHandle, frame: EmuRect) -> Result<FrameHandle> {
        self.check_slide(slide)?;
        validate_extent(frame.cx, frame.cy)?;
        let handle = self.next_frame(slide);
        self.calls.push(Call::AddTextBox {
            slide,
            frame,
            handle,
        });
        Ok(handle)
    }

    fn add_shape(
        &mut self,
        slide: SlideHandle,
        kind: ShapeKind,
        frame: EmuRect,
        fill: RGBColor,
        line: RGBColor,
    ) -> Result<FrameHandle> {
        self.check_slide(slide)?;
        validate_extent(frame.cx, frame.cy)?;
        let handle = self.next_frame(slide);
        self.calls.push(Call::AddShape {
            slide,
            kind,
            frame,
            fill,
            line,
            handle,
        });
        Ok(handle)
    }

    fn add_paragraph(&mut self, frame: FrameHandle, paragraph: &Paragraph) -> Result<()> {
        self.check_frame(frame)?;
        self.calls.push(Call::AddParagraph {
            frame,
            paragraph: paragraph.clone(),
        });
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        if !self.created {
            return Err(Error::DeckNotCreated);
        }
        self.calls.push(Call::Save {
            path: path.to_path_buf(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;

    const WHITE: RGBColor = RGBColor::new(255, 255, 255);

    fn rect() -> EmuRect {
        EmuRect {
            x: 0,
            y: 0,
            cx: 914_400,
            cy: 914_400,
        }
    }

    #[test]
    fn test_slide_before_deck() {
        let mut backend = RecordingBackend::new();
        assert!(matches!(backend.add_slide(), Err(Error::DeckNotCreated)));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_handles_are_sequential() {
        let mut backend = RecordingBackend::new();
        backend.create_deck(12_191_695, 6_858_000).unwrap();
        let first = backend.add_slide().unwrap();
        let second = backend.add_slide().unwrap();
        let a = backend.add_text_box(second, rect()).unwrap();
        let b = backend
            .add_shape(first, ShapeKind::RoundedRectangle, rect(), WHITE, WHITE)
            .unwrap();
        let c = backend.add_text_box(second, rect()).unwrap();

        assert_eq!((first.index(), second.index()), (0, 1));
        assert_eq!((a.shape(), b.shape(), c.shape()), (0, 0, 1));
        assert_eq!(backend.calls().len(), 6);
    }

    #[test]
    fn test_unknown_handles_rejected() {
        let mut backend = RecordingBackend::new();
        backend.create_deck(1, 1).unwrap();
        let slide = backend.add_slide().unwrap();

        let err = backend.set_background(SlideHandle(3), WHITE).unwrap_err();
        assert!(matches!(err, Error::InvalidHandle(_)));

        let phantom = FrameHandle { slide, shape: 0 };
        let paragraph = Paragraph::new("x", 18.0, WHITE);
        assert!(matches!(
            backend.add_paragraph(phantom, &paragraph),
            Err(Error::InvalidHandle(_))
        ));
    }

    #[test]
    fn test_save_records_path_only() {
        let mut backend = RecordingBackend::new();
        backend.create_deck(1, 1).unwrap();
        backend.save(Path::new("/nonexistent/dir/deck.pptx")).unwrap();

        assert_eq!(
            backend.calls().last(),
            Some(&Call::Save {
                path: PathBuf::from("/nonexistent/dir/deck.pptx")
            })
        );
    }

    #[test]
    fn test_call_log_serializes_to_yaml() {
        let mut backend = RecordingBackend::new();
        backend.create_deck(12_191_695, 6_858_000).unwrap();
        let slide = backend.add_slide().unwrap();
        backend.set_background(slide, RGBColor::new(26, 26, 46)).unwrap();

        let yaml = serde_saphyr::to_string(&backend.calls().to_vec()).unwrap();
        assert!(yaml.contains("op: create-deck"));
        assert!(yaml.contains("op: set-background"));
        assert!(yaml.contains("1A1A2E"));
    }

    #[test]
    fn test_negative_extent_rejected() {
        let mut backend = RecordingBackend::new();
        backend.create_deck(12_191_695, 6_858_000).unwrap();
        let slide = backend.add_slide().unwrap();
        let bad = EmuRect { cy: -1, ..rect() };

        assert!(matches!(
            backend.add_text_box(slide, bad),
            Err(Error::Ooxml(OoxmlError::InvalidGeometry(_)))
        ));
        assert!(matches!(
            backend.add_shape(slide, ShapeKind::RoundedRectangle, bad, WHITE, WHITE),
            Err(Error::Ooxml(OoxmlError::InvalidGeometry(_)))
        ));
        assert_eq!(backend.calls().len(), 2);
    }

    #[test]
    fn test_empty_slide_size_rejected() {
        let mut backend = RecordingBackend::new();
        assert!(backend.create_deck(0, 6_858_000).is_err());
        assert!(matches!(backend.add_slide(), Err(Error::DeckNotCreated)));
    }
}
