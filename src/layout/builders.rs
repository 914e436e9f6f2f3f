//! Primitive constructors with the deck-wide typography defaults.
//!
//! Every slide goes through these so font sizes, colors and alignment stay
//! consistent. Defaults are overridden with the `with_*` builder methods on
//! the returned value.

use super::geometry::{Canvas, Rect};
use super::primitive::{Align, BulletGroup, ShapeBox, ShapeKind, TextSpec};
use crate::theme::Role;

pub const TITLE_HEIGHT: f64 = 1.0;
pub const TITLE_FONT_SIZE: f64 = 44.0;
pub const TEXT_FONT_SIZE: f64 = 18.0;
pub const BULLET_FONT_SIZE: f64 = 20.0;
/// Space before and after every bullet paragraph, in points.
pub const BULLET_SPACING: f64 = 8.0;

/// A full-width, centered title at the given vertical offset.
///
/// Width always spans the canvas between its side margins; the caller only
/// chooses the vertical position and, through the builder methods, emphasis.
///
/// ```rust
/// use deckwright::layout::{Canvas, make_title};
/// use deckwright::theme::Role;
///
/// let title = make_title(&Canvas::WIDESCREEN, "Roadmap", 0.2);
/// assert_eq!(title.font_size(), 44.0);
/// assert_eq!(title.color(), Role::AccentPrimary);
/// assert!(title.is_bold());
/// ```
pub fn make_title(canvas: &Canvas, text: impl Into<String>, top: f64) -> TextSpec {
    TextSpec {
        content: text.into(),
        frame: canvas.band(top, TITLE_HEIGHT),
        font_size: TITLE_FONT_SIZE,
        color: Role::AccentPrimary,
        bold: true,
        align: Align::Center,
    }
}

/// A text box at explicit coordinates. Bounds are not checked.
pub fn make_text(text: impl Into<String>, frame: Rect) -> TextSpec {
    TextSpec {
        content: text.into(),
        frame,
        font_size: TEXT_FONT_SIZE,
        color: Role::TextPrimary,
        bold: false,
        align: Align::Left,
    }
}

/// A bulleted list; an empty `items` yields a valid group with no paragraphs.
pub fn make_bullet_group<I, S>(items: I, frame: Rect) -> BulletGroup
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    BulletGroup {
        items: items.into_iter().map(Into::into).collect(),
        frame,
        font_size: BULLET_FONT_SIZE,
        color: Role::TextPrimary,
        spacing: BULLET_SPACING,
    }
}

/// A rounded panel with the given fill and border roles and no label.
pub fn make_panel(frame: Rect, fill: Role, border: Role) -> ShapeBox {
    ShapeBox {
        kind: ShapeKind::RoundedRectangle,
        frame,
        fill,
        border,
        label: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_title_spans_usable_width() {
        let canvas = Canvas::WIDESCREEN;
        let title = make_title(&canvas, "DeskBot AI Companion", 2.0).with_size(60.0);

        assert_eq!(title.frame(), Rect::new(0.5, 2.0, canvas.usable_width(), 1.0));
        assert_eq!(title.align(), Align::Center);
        assert_eq!(title.font_size(), 60.0);
    }

    #[test]
    fn test_text_defaults() {
        let text = make_text("hello", Rect::new(1.0, 3.0, 11.333, 0.8));
        assert_eq!(text.font_size(), 18.0);
        assert_eq!(text.color(), Role::TextPrimary);
        assert!(!text.is_bold());
        assert_eq!(text.align(), Align::Left);
    }

    #[test]
    fn test_text_out_of_bounds_is_kept() {
        let text = make_text("off-canvas", Rect::new(-2.0, 40.0, -1.0, 0.5));
        assert_eq!(text.frame(), Rect::new(-2.0, 40.0, -1.0, 0.5));
    }

    #[test]
    fn test_empty_bullet_group() {
        let group = make_bullet_group(Vec::<String>::new(), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(group.paragraphs().count(), 0);
        assert_eq!(group.font_size(), 20.0);
    }

    #[test]
    fn test_bullet_paragraph_order() {
        let group = make_bullet_group(["a", "b"], Rect::new(0.0, 0.0, 1.0, 1.0));
        let paragraphs: Vec<String> = group.paragraphs().collect();
        assert_eq!(paragraphs, vec!["• a".to_string(), "• b".to_string()]);
        assert_eq!(group.spacing(), 8.0);
    }

    #[test]
    fn test_panel_label() {
        let pill = make_panel(Rect::new(1.5, 6.0, 2.5, 0.6), Role::PillSurface, Role::PillBorder)
            .with_label("Gemini AI", 14.0, Role::TextPrimary);
        let label = pill.label().unwrap();
        assert_eq!(label.text, "Gemini AI");
        assert!(!label.bold);
        assert_eq!(pill.kind(), ShapeKind::RoundedRectangle);
    }

    proptest! {
        #[test]
        fn prop_one_bulleted_paragraph_per_item(items in proptest::collection::vec(".*", 0..12)) {
            let group = make_bullet_group(items.clone(), Rect::new(0.0, 0.0, 1.0, 1.0));
            let paragraphs: Vec<String> = group.paragraphs().collect();
            prop_assert_eq!(paragraphs.len(), items.len());
            for (paragraph, item) in paragraphs.iter().zip(&items) {
                prop_assert_eq!(paragraph, &format!("• {item}"));
            }
        }
    }
}
