//! PowerPoint backend over [`MutablePresentation`].

use super::{DocumentBackend, FrameHandle, Paragraph, SlideHandle};
use crate::common::{Error, RGBColor, Result};
use crate::layout::{EmuRect, ShapeKind};
use crate::ooxml::pptx::{
    DocumentProperties, MutablePresentation, MutableShape, MutableSlide, MutableTheme,
    TextParagraph,
};
use chrono::Utc;
use std::path::Path;

/// Encodes a deck as a `.pptx` package.
///
/// The theme part and document properties are fixed at construction and
/// applied to every deck created afterwards. Creation and modification
/// dates are stamped when the package is saved.
///
/// # Examples
///
/// ```rust,no_run
/// use deckwright::backend::{DocumentBackend, Paragraph, PptxBackend};
/// use deckwright::common::RGBColor;
/// use deckwright::layout::Rect;
/// use std::path::Path;
///
/// let mut backend = PptxBackend::new();
/// backend.create_deck(12_191_695, 6_858_000)?;
/// let slide = backend.add_slide()?;
/// let frame = backend.add_text_box(slide, Rect::new(0.5, 0.3, 12.333, 1.0).to_emu())?;
/// backend.add_paragraph(frame, &Paragraph::new("Hello", 44.0, RGBColor::new(0, 212, 255)))?;
/// backend.save(Path::new("hello.pptx"))?;
/// # Ok::<(), deckwright::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct PptxBackend {
    presentation: Option<MutablePresentation>,
    theme: MutableTheme,
    properties: DocumentProperties,
}

impl PptxBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: MutableTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_properties(mut self, properties: DocumentProperties) -> Self {
        self.properties = properties;
        self
    }

    /// The presentation under construction, if a deck was created.
    pub fn presentation(&self) -> Option<&MutablePresentation> {
        self.presentation.as_ref()
    }

    fn pres(&self) -> Result<&MutablePresentation> {
        self.presentation.as_ref().ok_or(Error::DeckNotCreated)
    }

    fn pres_mut(&mut self) -> Result<&mut MutablePresentation> {
        self.presentation.as_mut().ok_or(Error::DeckNotCreated)
    }

    fn slide_mut(&mut self, slide: SlideHandle) -> Result<&mut MutableSlide> {
        self.pres_mut()?
            .slide_mut(slide.0)
            .ok_or_else(|| Error::InvalidHandle(slide.to_string()))
    }

    fn shape_mut(&mut self, frame: FrameHandle) -> Result<&mut MutableShape> {
        self.slide_mut(frame.slide)?
            .shape_mut(frame.shape)
            .ok_or_else(|| Error::InvalidHandle(frame.to_string()))
    }
}

impl DocumentBackend for PptxBackend {
    fn create_deck(&mut self, width: i64, height: i64) -> Result<()> {
        let mut pres = MutablePresentation::new();
        pres.set_slide_size(width, height)?;
        pres.set_theme(self.theme.clone());
        pres.set_properties(self.properties.clone());
        self.presentation = Some(pres);
        Ok(())
    }

    fn add_slide(&mut self) -> Result<SlideHandle> {
        let pres = self.pres_mut()?;
        pres.add_slide();
        Ok(SlideHandle(pres.slide_count() - 1))
    }

    fn set_background(&mut self, slide: SlideHandle, color: RGBColor) -> Result<()> {
        self.slide_mut(slide)?.set_background(color);
        Ok(())
    }

    fn add_text_box(&mut self, slide: SlideHandle, frame: EmuRect) -> Result<FrameHandle> {
        let shape = self
            .slide_mut(slide)?
            .add_text_box(frame.x, frame.y, frame.cx, frame.cy)?;
        Ok(FrameHandle { slide, shape })
    }

    fn add_shape(
        &mut self,
        slide: SlideHandle,
        kind: ShapeKind,
        frame: EmuRect,
        fill: RGBColor,
        line: RGBColor,
    ) -> Result<FrameHandle> {
        let shape = self.slide_mut(slide)?.add_auto_shape(
            kind,
            frame.x,
            frame.y,
            frame.cx,
            frame.cy,
            Some(fill),
            Some(line),
        )?;
        Ok(FrameHandle { slide, shape })
    }

    fn add_paragraph(&mut self, frame: FrameHandle, paragraph: &Paragraph) -> Result<()> {
        let mut text = TextParagraph::new(paragraph.text.as_str())
            .size(paragraph.font_size)
            .bold(paragraph.bold)
            .color(paragraph.color)
            .align(paragraph.align);
        text.space_before = paragraph.space_before;
        text.space_after = paragraph.space_after;
        self.shape_mut(frame)?.add_paragraph(text);
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let now = Utc::now();
        let pres = self.pres_mut()?;
        let properties = pres.properties().clone().timestamp(now);
        pres.set_properties(properties);

        let pres = self.pres()?;
        pres.save(path)?;
        log::info!("saved {} slides to {}", pres.slide_count(), path.display());
        Ok(())
    }
}
