//! Slides, decks, and the builder that assembles them.
//!
//! A [`Deck`] is built once through a [`DeckBuilder`] value that is moved
//! through every append, then rendered through any
//! [`DocumentBackend`](crate::backend::DocumentBackend).

mod render;

pub use render::{render_primitive, render_slide};

use crate::backend::DocumentBackend;
use crate::common::Result;
use crate::layout::{Canvas, Primitive};
use crate::theme::{Role, Theme};
use std::path::Path;

/// One page: an ordered list of primitives over a solid background.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    name: String,
    background: Role,
    primitives: Vec<Primitive>,
}

impl Slide {
    /// An empty slide on the theme's background color.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Role::Background,
            primitives: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Paint the full-bleed background. The last call wins.
    pub fn set_background(&mut self, role: Role) {
        self.background = role;
    }

    pub fn background(&self) -> Role {
        self.background
    }

    /// Append a primitive on top of everything added so far.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

/// An immutable, ordered set of slides on a common canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    canvas: Canvas,
    slides: Vec<Slide>,
}

impl Deck {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Emit every slide through `backend`, resolving roles with `theme`.
    ///
    /// The first failing backend call aborts the whole deck.
    pub fn render<B: DocumentBackend + ?Sized>(
        &self,
        theme: &Theme,
        backend: &mut B,
    ) -> Result<()> {
        let (width, height) = self.canvas.size_emu();
        backend.create_deck(width, height)?;
        for (index, slide) in self.slides.iter().enumerate() {
            render_slide(slide, theme, backend)?;
            log::debug!(
                "rendered slide {} ({}) with {} primitives",
                index + 1,
                slide.name,
                slide.len()
            );
        }
        Ok(())
    }

    /// Render, then save to `path` with a single terminal `save` call.
    pub fn export<B: DocumentBackend + ?Sized>(
        &self,
        theme: &Theme,
        backend: &mut B,
        path: &Path,
    ) -> Result<()> {
        self.render(theme, backend)?;
        backend.save(path)
    }
}

/// Append-only deck under construction, passed by value through each append.
///
/// ```rust
/// use deckwright::deck::{DeckBuilder, Slide};
/// use deckwright::layout::Canvas;
///
/// let deck = DeckBuilder::new(Canvas::WIDESCREEN)
///     .push(Slide::new("intro"))
///     .push(Slide::new("outro"))
///     .build();
/// assert_eq!(deck.slide_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    canvas: Canvas,
    slides: Vec<Slide>,
}

impl DeckBuilder {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            slides: Vec::new(),
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    #[must_use]
    pub fn push(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn build(self) -> Deck {
        Deck {
            canvas: self.canvas,
            slides: self.slides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Call, PptxBackend, RecordingBackend};
    use crate::common::Error;
    use crate::layout::{Rect, make_text};
    use crate::ooxml::OoxmlError;

    #[test]
    fn test_background_last_call_wins() {
        let mut slide = Slide::new("s");
        slide.set_background(Role::Surface);
        slide.set_background(Role::Background);
        assert_eq!(slide.background(), Role::Background);
    }

    #[test]
    fn test_builder_keeps_order() {
        let deck = DeckBuilder::new(Canvas::WIDESCREEN)
            .push(Slide::new("a"))
            .push(Slide::new("b"))
            .build();
        let names: Vec<&str> = deck.slides().iter().map(Slide::name).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn test_export_saves_once_at_the_end() {
        let mut slide = Slide::new("only");
        slide.push(make_text("hi", Rect::new(1.0, 1.0, 2.0, 1.0)));
        let deck = DeckBuilder::new(Canvas::WIDESCREEN).push(slide).build();

        let mut backend = RecordingBackend::new();
        deck.export(&Theme::showcase(), &mut backend, Path::new("out.pptx"))
            .unwrap();

        let calls = backend.calls();
        assert!(matches!(calls[0], Call::CreateDeck { width: 12_191_695, height: 6_858_000 }));
        assert!(matches!(calls.last(), Some(Call::Save { .. })));
        assert_eq!(
            calls.iter().filter(|c| matches!(c, Call::Save { .. })).count(),
            1
        );
    }

    #[test]
    fn test_negative_extent_fails_on_both_backends() {
        let mut slide = Slide::new("bad");
        slide.push(make_text("x", Rect::new(0.0, 0.0, -1.0, 1.0)));
        let deck = DeckBuilder::new(Canvas::WIDESCREEN).push(slide).build();
        let theme = Theme::showcase();

        let mut recording = RecordingBackend::new();
        let dry = deck.render(&theme, &mut recording).unwrap_err();
        let mut pptx = PptxBackend::new();
        let real = deck.render(&theme, &mut pptx).unwrap_err();

        assert!(matches!(dry, Error::Ooxml(OoxmlError::InvalidGeometry(_))));
        assert!(matches!(real, Error::Ooxml(OoxmlError::InvalidGeometry(_))));
        assert_eq!(dry.to_string(), real.to_string());
    }
}
