//! Format types for PPTX text.

use crate::common::RGBColor;
use crate::layout::Align;

/// Run-level text formatting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
}

/// One `a:p`: a single run plus paragraph properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextParagraph {
    pub text: String,
    pub align: Option<Align>,
    /// Space before the paragraph, in points
    pub space_before: Option<f64>,
    /// Space after the paragraph, in points
    pub space_after: Option<f64>,
    pub format: TextFormat,
}

impl TextParagraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Builder method: set alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Builder method: set equal space before and after, in points.
    pub fn spacing(mut self, points: f64) -> Self {
        self.space_before = Some(points);
        self.space_after = Some(points);
        self
    }

    /// Builder method: set font size.
    pub fn size(mut self, points: f64) -> Self {
        self.format.size = Some(points);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self, bold: bool) -> Self {
        self.format.bold = Some(bold);
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.format.color = Some(color);
        self
    }

    /// Whether an `a:pPr` element has anything to carry.
    pub(crate) fn has_paragraph_properties(&self) -> bool {
        self.align.is_some() || self.space_before.is_some() || self.space_after.is_some()
    }
}
