//! Primitive-to-backend translation.

use super::Slide;
use crate::backend::{DocumentBackend, Paragraph, SlideHandle};
use crate::common::Result;
use crate::layout::{Align, Primitive};
use crate::theme::Theme;

/// Add one slide to `backend` and draw its primitives in order.
pub fn render_slide<B: DocumentBackend + ?Sized>(
    slide: &Slide,
    theme: &Theme,
    backend: &mut B,
) -> Result<SlideHandle> {
    let handle = backend.add_slide()?;
    backend.set_background(handle, theme.color(slide.background()))?;
    for primitive in slide.primitives() {
        render_primitive(primitive, handle, theme, backend)?;
    }
    Ok(handle)
}

/// Draw a single primitive onto `slide`.
pub fn render_primitive<B: DocumentBackend + ?Sized>(
    primitive: &Primitive,
    slide: SlideHandle,
    theme: &Theme,
    backend: &mut B,
) -> Result<()> {
    match primitive {
        Primitive::Text(text) => {
            let frame = backend.add_text_box(slide, text.frame().to_emu())?;
            let color = theme.color(text.color());
            let paragraph = Paragraph::new(text.content(), text.font_size(), color)
                .bold(text.is_bold())
                .align(text.align());
            backend.add_paragraph(frame, &paragraph)
        },
        Primitive::Bullets(group) => {
            let frame = backend.add_text_box(slide, group.frame().to_emu())?;
            let color = theme.color(group.color());
            for line in group.paragraphs() {
                let paragraph =
                    Paragraph::new(line, group.font_size(), color).spacing(group.spacing());
                backend.add_paragraph(frame, &paragraph)?;
            }
            Ok(())
        },
        Primitive::Shape(shape) => {
            let frame = backend.add_shape(
                slide,
                shape.kind(),
                shape.frame().to_emu(),
                theme.color(shape.fill()),
                theme.color(shape.border()),
            )?;
            match shape.label() {
                Some(label) => {
                    let color = theme.color(label.color);
                    let paragraph = Paragraph::new(label.text.as_str(), label.font_size, color)
                        .bold(label.bold)
                        .align(Align::Center);
                    backend.add_paragraph(frame, &paragraph)
                },
                None => Ok(()),
            }
        },
    }
}
