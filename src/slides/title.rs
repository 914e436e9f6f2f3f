//! Opening slide: icon, headline, subtitle, event lines and a row of tag pills.

use crate::content::TitleContent;
use crate::deck::Slide;
use crate::layout::{Canvas, Rect, TagRow, make_panel, make_text, make_title};
use crate::theme::Role;

const ICON: Rect = Rect::new(6.0, 0.8, 1.5, 1.5);
const ICON_SIZE: f64 = 80.0;
const HEADLINE_TOP: f64 = 2.0;
const HEADLINE_SIZE: f64 = 60.0;
const SUBTITLE_TOP: f64 = 3.0;
const SUBTITLE_WIDTH: f64 = 11.333;
const EVENT_TOP: f64 = 4.2;
const MOTTO_TOP: f64 = 4.8;
const EVENT_WIDTH: f64 = 8.333;

pub const TAGS: TagRow = TagRow {
    left: 1.5,
    top: 6.0,
    pill_width: 2.5,
    pill_height: 0.6,
    gap: 0.2,
};
const TAG_SIZE: f64 = 14.0;

pub fn build(canvas: &Canvas, content: &TitleContent) -> Slide {
    let mut slide = Slide::new("title");
    slide.set_background(Role::Background);

    slide.push(make_text(content.icon.as_str(), ICON).with_size(ICON_SIZE).centered());
    slide.push(
        make_title(canvas, content.headline.as_str(), HEADLINE_TOP).with_size(HEADLINE_SIZE),
    );
    slide.push(
        make_text(content.subtitle.as_str(), canvas.centered(SUBTITLE_TOP, SUBTITLE_WIDTH, 0.8))
            .with_size(28.0)
            .with_color(Role::TextMuted)
            .centered(),
    );
    slide.push(
        make_text(content.event.as_str(), canvas.centered(EVENT_TOP, EVENT_WIDTH, 0.6))
            .with_size(24.0)
            .with_color(Role::Highlight)
            .with_bold(true)
            .centered(),
    );
    slide.push(
        make_text(content.motto.as_str(), canvas.centered(MOTTO_TOP, EVENT_WIDTH, 0.5))
            .with_size(20.0)
            .with_color(Role::TextMuted)
            .centered(),
    );

    for (i, tag) in content.tags.iter().enumerate() {
        slide.push(
            make_panel(TAGS.slot(i), Role::PillSurface, Role::PillBorder).with_label(
                tag.as_str(),
                TAG_SIZE,
                Role::TextPrimary,
            ),
        );
    }

    slide
}
