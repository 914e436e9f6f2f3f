//! Impact and roadmap side by side, closed by a call-to-action box.

use super::push_section;
use crate::content::ImpactContent;
use crate::deck::Slide;
use crate::layout::{Canvas, Rect, make_panel, make_text, make_title, split_halves};
use crate::theme::Role;

const TITLE_TOP: f64 = 0.2;
const HEADING_TOP: f64 = 1.2;
const HEADING_HEIGHT: f64 = 0.5;
const BULLETS_TOP: f64 = 1.8;
const BULLETS_HEIGHT: f64 = 2.5;
const GUTTER: f64 = 0.333;

const CALLOUT_TOP: f64 = 4.8;
pub const CALLOUT_WIDTH: f64 = 10.333;
const CALLOUT_HEIGHT: f64 = 2.2;

pub fn build(canvas: &Canvas, content: &ImpactContent) -> Slide {
    let mut slide = Slide::new("impact");
    slide.set_background(Role::Background);
    slide.push(make_title(canvas, content.title.as_str(), TITLE_TOP));

    let headings = split_halves(canvas, HEADING_TOP, HEADING_HEIGHT, GUTTER);
    let sides = [
        (&content.impact, Role::Success),
        (&content.roadmap, Role::Highlight),
    ];
    for (heading, (section, accent)) in headings.into_iter().zip(sides) {
        let bullets = Rect::new(heading.x, BULLETS_TOP, heading.w, BULLETS_HEIGHT);
        push_section(&mut slide, section, heading, 24.0, accent, bullets, 16.0);
    }

    let callout = canvas.centered(CALLOUT_TOP, CALLOUT_WIDTH, CALLOUT_HEIGHT);
    slide.push(make_panel(callout, Role::CalloutSurface, Role::AccentPrimary));

    let line = |top: f64, height: f64| Rect::new(callout.x, top, callout.w, height);
    slide.push(
        make_text(content.callout.headline.as_str(), line(5.0, 0.6))
            .with_size(32.0)
            .with_color(Role::AccentPrimary)
            .with_bold(true)
            .centered(),
    );
    slide.push(
        make_text(content.callout.tagline.as_str(), line(5.7, 0.5))
            .with_size(20.0)
            .with_color(Role::TextMuted)
            .centered(),
    );
    slide.push(
        make_text(content.callout.closing.as_str(), line(6.3, 0.5))
            .with_size(24.0)
            .with_color(Role::Highlight)
            .with_bold(true)
            .centered(),
    );

    slide
}
