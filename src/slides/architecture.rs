//! Three-tier architecture diagram with connectors and a tech-stack chip row.

use crate::content::ArchitectureContent;
use crate::deck::Slide;
use crate::layout::{
    Canvas, ColumnLayout, Rect, TagRow, make_bullet_group, make_panel, make_text, make_title,
};
use crate::theme::Role;

const TITLE_TOP: f64 = 0.2;

pub const COLUMNS: ColumnLayout = ColumnLayout {
    left: 0.7,
    top: 1.5,
    column_width: 3.5,
    height: 4.0,
    gutter: 0.8,
};

const HEADING: Rect = Rect::new(0.1, 0.2, 3.3, 0.6);
const ITEMS: Rect = Rect::new(0.2, 0.9, 3.1, 3.0);

/// Connectors straddle each column's right edge.
const CONNECTOR_OVERLAP: f64 = 0.2;
const CONNECTOR_TOP: f64 = 3.2;
const CONNECTOR_SIZE: f64 = 0.6;

pub const STACK: TagRow = TagRow {
    left: 0.5,
    top: 6.2,
    pill_width: 2.0,
    pill_height: 0.5,
    gap: 0.1,
};

pub fn build(canvas: &Canvas, content: &ArchitectureContent) -> Slide {
    let mut slide = Slide::new("architecture");
    slide.set_background(Role::Background);
    slide.push(make_title(canvas, content.title.as_str(), TITLE_TOP));

    for (i, tier) in content.tiers.iter().enumerate() {
        let column = COLUMNS.column(i);
        let at = |offset: Rect| column.inset(offset.x, offset.y, offset.w, offset.h);

        slide.push(make_panel(column, tier.accent, Role::TextPrimary));
        slide.push(
            make_text(tier.section.heading.as_str(), at(HEADING))
                .with_size(20.0)
                .with_bold(true)
                .centered(),
        );
        let items = tier.section.items.iter().map(String::as_str);
        slide.push(make_bullet_group(items, at(ITEMS)).with_size(14.0));
    }

    for i in 1..content.tiers.len() {
        let left = COLUMNS.column(i - 1).right() - CONNECTOR_OVERLAP;
        slide.push(
            make_text(
                content.connector.as_str(),
                Rect::new(left, CONNECTOR_TOP, CONNECTOR_SIZE, CONNECTOR_SIZE),
            )
            .with_size(36.0)
            .with_color(Role::AccentPrimary)
            .centered(),
        );
    }

    for (i, tech) in content.stack.iter().enumerate() {
        slide.push(
            make_panel(STACK.slot(i), Role::ChipSurface, Role::ChipBorder).with_label(
                tech.as_str(),
                12.0,
                Role::TextPrimary,
            ),
        );
    }

    slide
}
