//! Problem versus solution, one rounded panel per half of the slide.

use super::push_section;
use crate::content::ContrastContent;
use crate::deck::Slide;
use crate::layout::{Canvas, make_panel, make_title, split_halves};
use crate::theme::Role;

const TITLE_TOP: f64 = 0.3;
const PANEL_TOP: f64 = 1.5;
const PANEL_HEIGHT: f64 = 5.5;
pub const GUTTER: f64 = 0.333;

const PAD_X: f64 = 0.3;
const HEADING_DY: f64 = 0.2;
const BULLETS_DY: f64 = 1.0;
const INNER_WIDTH: f64 = 5.5;

pub fn build(canvas: &Canvas, content: &ContrastContent) -> Slide {
    let mut slide = Slide::new("contrast");
    slide.set_background(Role::Background);
    slide.push(make_title(canvas, content.title.as_str(), TITLE_TOP));

    let halves = split_halves(canvas, PANEL_TOP, PANEL_HEIGHT, GUTTER);
    let sides = [
        (&content.problem, Role::DangerSurface, Role::Danger),
        (&content.solution, Role::SuccessSurface, Role::Success),
    ];
    for (panel, (section, fill, accent)) in halves.into_iter().zip(sides) {
        slide.push(make_panel(panel, fill, accent));
        push_section(
            &mut slide,
            section,
            panel.inset(PAD_X, HEADING_DY, INNER_WIDTH, 0.6),
            28.0,
            accent,
            panel.inset(PAD_X, BULLETS_DY, INNER_WIDTH, 4.2),
            18.0,
        );
    }

    slide
}
