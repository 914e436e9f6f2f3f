//! The five slide procedures and the deck assembly that runs them.
//!
//! Each procedure is a pure function of the canvas and its content. All
//! offsets are in inches and named in the module that uses them.

pub mod architecture;
pub mod contrast;
pub mod features;
pub mod impact;
pub mod title;

#[cfg(test)]
mod tests;

use crate::content::{DeckContent, Section};
use crate::deck::{Deck, DeckBuilder, Slide};
use crate::layout::{Canvas, Rect, make_bullet_group, make_text};
use crate::theme::Role;

/// Build the full deck: title, contrast, features, architecture, impact.
pub fn build_deck(canvas: &Canvas, content: &DeckContent) -> Deck {
    DeckBuilder::new(*canvas)
        .push(title::build(canvas, &content.title))
        .push(contrast::build(canvas, &content.contrast))
        .push(features::build(canvas, &content.features))
        .push(architecture::build(canvas, &content.architecture))
        .push(impact::build(canvas, &content.impact))
        .build()
}

/// Place a bold accent heading over its bullet list.
pub(crate) fn push_section(
    slide: &mut Slide,
    section: &Section,
    heading: Rect,
    heading_size: f64,
    accent: Role,
    bullets: Rect,
    bullet_size: f64,
) {
    slide.push(
        make_text(section.heading.as_str(), heading)
            .with_size(heading_size)
            .with_color(accent)
            .with_bold(true),
    );
    let items = section.items.iter().map(String::as_str);
    slide.push(make_bullet_group(items, bullets).with_size(bullet_size));
}
