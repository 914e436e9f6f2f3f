//! Feature cards on a fixed three-column grid.

use crate::content::FeaturesContent;
use crate::deck::Slide;
use crate::layout::{Canvas, GridLayout, Rect, make_panel, make_text, make_title};
use crate::theme::Role;
use std::num::NonZeroUsize;

const TITLE_TOP: f64 = 0.2;

pub const GRID: GridLayout = GridLayout {
    origin_x: 0.5,
    origin_y: 1.4,
    cell_width: 4.2,
    cell_height: 3.0,
    columns: match NonZeroUsize::new(3) {
        Some(columns) => columns,
        None => unreachable!(),
    },
};

pub const CARD_WIDTH: f64 = 3.9;
pub const CARD_HEIGHT: f64 = 2.7;

// Offsets from the card's top-left corner
const ICON: Rect = Rect::new(1.4, 0.2, 1.0, 0.8);
const TITLE: Rect = Rect::new(0.2, 1.1, 3.5, 0.5);
const DESCRIPTION: Rect = Rect::new(0.2, 1.7, 3.5, 0.8);

pub fn build(canvas: &Canvas, content: &FeaturesContent) -> Slide {
    let mut slide = Slide::new("features");
    slide.set_background(Role::Background);
    slide.push(make_title(canvas, content.title.as_str(), TITLE_TOP));

    for (i, feature) in content.features.iter().enumerate() {
        let (left, top) = GRID.cell_origin(i);
        let card = Rect::new(left, top, CARD_WIDTH, CARD_HEIGHT);
        let at = |offset: Rect| card.inset(offset.x, offset.y, offset.w, offset.h);

        slide.push(make_panel(card, Role::Surface, Role::SurfaceBorder));
        slide.push(make_text(feature.icon.as_str(), at(ICON)).with_size(48.0).centered());
        slide.push(
            make_text(feature.title.as_str(), at(TITLE))
                .with_size(20.0)
                .with_bold(true)
                .centered(),
        );
        slide.push(
            make_text(feature.description.as_str(), at(DESCRIPTION))
                .with_size(14.0)
                .with_color(Role::TextMuted)
                .centered(),
        );
    }

    slide
}
