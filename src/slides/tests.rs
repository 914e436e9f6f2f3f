use super::*;
use crate::backend::{Call, RecordingBackend};
use crate::layout::{Primitive, ShapeBox, TextSpec};
use crate::theme::Theme;
use std::path::Path;

const EPS: f64 = 1e-6;

fn showcase_deck() -> Deck {
    build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase())
}

fn shapes(slide: &Slide) -> Vec<&ShapeBox> {
    slide
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Shape(shape) => Some(shape),
            _ => None,
        })
        .collect()
}

fn texts(slide: &Slide) -> Vec<&TextSpec> {
    slide
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Text(text) => Some(text),
            _ => None,
        })
        .collect()
}

fn record(deck: &Deck) -> Vec<Call> {
    let mut backend = RecordingBackend::new();
    deck.export(&Theme::showcase(), &mut backend, Path::new("deck.pptx"))
        .unwrap();
    backend.into_calls()
}

#[test]
fn test_slide_order() {
    let deck = showcase_deck();
    let names: Vec<&str> = deck.slides().iter().map(Slide::name).collect();
    assert_eq!(names, ["title", "contrast", "features", "architecture", "impact"]);
    assert!(deck.slides().iter().all(|s| s.background() == Role::Background));
}

#[test]
fn test_title_pills() {
    let deck = showcase_deck();
    let pills = shapes(&deck.slides()[0]);
    assert_eq!(pills.len(), 4);
    for (i, pill) in pills.iter().enumerate() {
        assert!((pill.frame().x - (1.5 + i as f64 * 2.7)).abs() < EPS);
        assert!((pill.frame().y - 6.0).abs() < EPS);
        assert_eq!(pill.fill(), Role::PillSurface);
    }
    assert_eq!(pills[1].label().unwrap().text, "🧠 Gemini AI");

    let headline = texts(&deck.slides()[0])[1];
    assert_eq!(headline.font_size(), 60.0);
    assert!((headline.frame().w - 12.333).abs() < EPS);
}

#[test]
fn test_contrast_panels_fill_usable_width() {
    let canvas = Canvas::WIDESCREEN;
    let deck = showcase_deck();
    let panels = shapes(&deck.slides()[1]);
    assert_eq!(panels.len(), 2);

    let (left, right) = (panels[0].frame(), panels[1].frame());
    assert!((left.w - right.w).abs() < EPS);
    assert!((left.w + right.w + contrast::GUTTER - canvas.usable_width()).abs() < EPS);
    assert!((left.x - 0.5).abs() < EPS);
    assert!((right.x - 6.833).abs() < EPS);
    assert!((left.w - 6.0).abs() < EPS);
    assert_eq!(panels[0].border(), Role::Danger);
    assert_eq!(panels[1].border(), Role::Success);
}

#[test]
fn test_feature_grid_positions() {
    let deck = showcase_deck();
    let cards = shapes(&deck.slides()[2]);
    assert_eq!(cards.len(), 6);

    let expected = [(0.5, 1.4), (4.7, 1.4), (8.9, 1.4), (0.5, 4.4), (4.7, 4.4), (8.9, 4.4)];
    for (card, (x, y)) in cards.iter().zip(expected) {
        assert!((card.frame().x - x).abs() < EPS);
        assert!((card.frame().y - y).abs() < EPS);
        assert!((card.frame().w - features::CARD_WIDTH).abs() < EPS);
    }

    // icon, title and description stacked inside the fifth card
    let card_texts = texts(&deck.slides()[2]);
    let fifth = card_texts[1..].chunks(3).nth(4).unwrap();
    assert_eq!(fifth[0].content(), "📱");
    assert!((fifth[0].frame().x - 6.1).abs() < EPS);
    assert!((fifth[1].frame().y - 5.5).abs() < EPS);
    assert!((fifth[2].frame().y - 6.1).abs() < EPS);
}

#[test]
fn test_architecture_columns_and_connectors() {
    let deck = showcase_deck();
    let slide = &deck.slides()[3];
    let boxes = shapes(slide);
    // three tiers then six chips
    assert_eq!(boxes.len(), 9);
    for (i, tier) in boxes[..3].iter().enumerate() {
        assert!((tier.frame().x - (0.7 + i as f64 * 4.3)).abs() < EPS);
        assert_eq!(tier.border(), Role::TextPrimary);
    }
    assert_eq!(
        boxes[..3].iter().map(|b| b.fill()).collect::<Vec<_>>(),
        [Role::AccentSecondary, Role::Info, Role::Growth]
    );
    for (i, chip) in boxes[3..].iter().enumerate() {
        assert!((chip.frame().x - (0.5 + i as f64 * 2.1)).abs() < EPS);
    }

    let connectors: Vec<&TextSpec> = texts(slide)
        .into_iter()
        .filter(|t| t.content() == "⟷")
        .collect();
    assert_eq!(connectors.len(), 2);
    assert!((connectors[0].frame().x - 4.0).abs() < EPS);
    assert!((connectors[1].frame().x - 8.3).abs() < EPS);
}

#[test]
fn test_impact_callout() {
    let deck = showcase_deck();
    let slide = &deck.slides()[4];
    let callout = shapes(slide)[0];
    assert!((callout.frame().x - 1.5).abs() < EPS);
    assert!((callout.frame().w - impact::CALLOUT_WIDTH).abs() < EPS);

    let lines: Vec<&TextSpec> = texts(slide).into_iter().rev().take(3).collect();
    assert!(lines.iter().all(|t| (t.frame().x - 1.5).abs() < EPS));
    assert_eq!(lines[0].content(), "✨ Thank you! Questions Welcome! ✨");
}

#[test]
fn test_every_primitive_uses_a_theme_role() {
    // A palette with every role distinct lets each resolved color be traced
    // back to exactly one role.
    let theme = Theme::showcase().with_overrides(
        Role::ALL
            .iter()
            .enumerate()
            .map(|(i, role)| (*role, crate::common::RGBColor::new(i as u8, 0, 0))),
    );
    let mut backend = RecordingBackend::new();
    showcase_deck().render(&theme, &mut backend).unwrap();

    let known: Vec<_> = theme.iter().map(|(_, color)| color).collect();
    for call in backend.calls() {
        let colors = match call {
            Call::SetBackground { color, .. } => vec![*color],
            Call::AddShape { fill, line, .. } => vec![*fill, *line],
            Call::AddParagraph { paragraph, .. } => vec![paragraph.color],
            _ => continue,
        };
        assert!(colors.iter().all(|c| known.contains(c)));
    }
}

#[test]
fn test_five_slides_each_referencing_only_itself() {
    let calls = record(&showcase_deck());

    let slides: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::AddSlide { slide } => Some(slide.index()),
            _ => None,
        })
        .collect();
    assert_eq!(slides, [0, 1, 2, 3, 4]);

    let mut current = None;
    for call in &calls {
        match call {
            Call::AddSlide { slide } => current = Some(*slide),
            other => {
                if let Some(slide) = other.slide() {
                    assert_eq!(Some(slide), current, "{other:?} outside its slide");
                }
            },
        }
    }
    assert!(matches!(calls.last(), Some(Call::Save { .. })));
}

#[test]
fn test_rebuild_is_deterministic() {
    let first = record(&showcase_deck());
    let second = record(&showcase_deck());
    assert_eq!(first, second);
}

#[test]
fn test_bullet_paragraphs_carry_spacing() {
    let calls = record(&showcase_deck());
    let bullets: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::AddParagraph { paragraph, .. } if paragraph.text.starts_with("• ") => {
                Some(paragraph)
            },
            _ => None,
        })
        .collect();

    // 12 contrast items, 16 tier items, 10 impact items
    assert_eq!(bullets.len(), 38);
    assert!(bullets.iter().all(|p| p.space_before == Some(8.0) && p.space_after == Some(8.0)));
}

#[test]
fn test_showcase_call_log_serializes_to_yaml() {
    let calls = record(&showcase_deck());
    let yaml = serde_saphyr::to_string(&calls).unwrap();

    assert_eq!(yaml.matches("op: add-slide").count(), 5);
    assert_eq!(yaml.matches("op: save").count(), 1);
    assert!(yaml.contains("DeskBot AI Companion"));
    assert!(yaml.contains("rounded-rectangle"));
}
