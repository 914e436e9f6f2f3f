//! Visual primitives: the atomic units a slide is composed of.

use super::geometry::Rect;
use crate::theme::Role;
use serde::Serialize;

/// Bullet glyph prefixed to every line of a [`BulletGroup`].
pub const BULLET: &str = "•";

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Value of `a:pPr/@algn`.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Preset geometry of an auto shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    #[default]
    RoundedRectangle,
}

impl ShapeKind {
    /// Value of `a:prstGeom/@prst`.
    pub fn preset(&self) -> &'static str {
        match self {
            Self::RoundedRectangle => "roundRect",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RoundedRectangle => "Rounded Rectangle",
        }
    }
}

/// A single run of text placed in its own word-wrapped text box.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpec {
    pub(crate) content: String,
    pub(crate) frame: Rect,
    pub(crate) font_size: f64,
    pub(crate) color: Role,
    pub(crate) bold: bool,
    pub(crate) align: Align,
}

impl TextSpec {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn color(&self) -> Role {
        self.color
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn align(&self) -> Align {
        self.align
    }

    /// Builder method: set the font size in points.
    pub fn with_size(mut self, points: f64) -> Self {
        self.font_size = points;
        self
    }

    /// Builder method: set the color role.
    pub fn with_color(mut self, color: Role) -> Self {
        self.color = color;
        self
    }

    /// Builder method: set bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Builder method: set alignment.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `with_align(Align::Center)`.
    pub fn centered(self) -> Self {
        self.with_align(Align::Center)
    }
}

/// An ordered list rendered as one text block, one bulleted paragraph per item.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletGroup {
    pub(crate) items: Vec<String>,
    pub(crate) frame: Rect,
    pub(crate) font_size: f64,
    pub(crate) color: Role,
    /// Space before and after each paragraph, in points
    pub(crate) spacing: f64,
}

impl BulletGroup {
    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    pub fn color(&self) -> Role {
        self.color
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// The paragraphs this group renders to, in display order.
    ///
    /// ```rust
    /// use deckwright::layout::{Rect, make_bullet_group};
    ///
    /// let group = make_bullet_group(["a", "b"], Rect::new(0.0, 0.0, 4.0, 2.0));
    /// assert_eq!(group.paragraphs().collect::<Vec<_>>(), ["• a", "• b"]);
    /// ```
    pub fn paragraphs(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(|item| format!("{BULLET} {item}"))
    }

    pub fn with_size(mut self, points: f64) -> Self {
        self.font_size = points;
        self
    }

    pub fn with_color(mut self, color: Role) -> Self {
        self.color = color;
        self
    }
}

/// The single centered run inside a [`ShapeBox`].
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub font_size: f64,
    pub color: Role,
    pub bold: bool,
}

/// A filled, bordered auto shape with an optional centered label.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeBox {
    pub(crate) kind: ShapeKind,
    pub(crate) frame: Rect,
    pub(crate) fill: Role,
    pub(crate) border: Role,
    pub(crate) label: Option<Label>,
}

impl ShapeBox {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn fill(&self) -> Role {
        self.fill
    }

    pub fn border(&self) -> Role {
        self.border
    }

    pub fn label(&self) -> Option<&Label> {
        self.label.as_ref()
    }

    /// Attach a centered, non-bold label.
    pub fn with_label(mut self, text: impl Into<String>, font_size: f64, color: Role) -> Self {
        self.label = Some(Label {
            text: text.into(),
            font_size,
            color,
            bold: false,
        });
        self
    }
}

/// Anything a slide can contain.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Text(TextSpec),
    Bullets(BulletGroup),
    Shape(ShapeBox),
}

impl Primitive {
    pub fn frame(&self) -> Rect {
        match self {
            Self::Text(text) => text.frame,
            Self::Bullets(group) => group.frame,
            Self::Shape(shape) => shape.frame,
        }
    }

    /// Every role this primitive will resolve through the theme.
    pub fn roles(&self) -> Vec<Role> {
        match self {
            Self::Text(text) => vec![text.color],
            Self::Bullets(group) => vec![group.color],
            Self::Shape(shape) => {
                let mut roles = vec![shape.fill, shape.border];
                if let Some(label) = &shape.label {
                    roles.push(label.color);
                }
                roles
            },
        }
    }
}

impl From<TextSpec> for Primitive {
    fn from(text: TextSpec) -> Self {
        Self::Text(text)
    }
}

impl From<BulletGroup> for Primitive {
    fn from(group: BulletGroup) -> Self {
        Self::Bullets(group)
    }
}

impl From<ShapeBox> for Primitive {
    fn from(shape: ShapeBox) -> Self {
        Self::Shape(shape)
    }
}
