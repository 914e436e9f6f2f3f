/// Slide types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::layout::ShapeKind;
use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::pptx::template::EMPTY_GROUP_PROPERTIES;

use super::shape::{MutableShape, write_solid_fill};

/// A mutable slide in a presentation.
#[derive(Debug, Clone)]
pub struct MutableSlide {
    /// Slide ID (unique identifier, 256 and up)
    pub(crate) slide_id: u32,
    /// Shapes on the slide, in z-order
    pub(crate) shapes: Vec<MutableShape>,
    /// Solid background color; `None` inherits the master's
    pub(crate) background: Option<RGBColor>,
}

impl MutableSlide {
    pub(crate) fn new(slide_id: u32) -> Self {
        Self {
            slide_id,
            shapes: Vec::new(),
            background: None,
        }
    }

    /// Get the slide ID.
    pub fn slide_id(&self) -> u32 {
        self.slide_id
    }

    /// Paint a solid full-bleed background. Replaces any earlier background.
    pub fn set_background(&mut self, color: RGBColor) {
        self.background = Some(color);
    }

    pub fn background(&self) -> Option<RGBColor> {
        self.background
    }

    /// Add an empty, word-wrapped text box and return its index on the slide.
    pub fn add_text_box(&mut self, x: i64, y: i64, width: i64, height: i64) -> Result<usize> {
        validate_extent(width, height)?;
        let shape = MutableShape::new_text_box(self.next_shape_id(), x, y, width, height);
        self.shapes.push(shape);
        Ok(self.shapes.len() - 1)
    }

    /// Add a preset auto shape and return its index on the slide.
    #[allow(clippy::too_many_arguments)]
    pub fn add_auto_shape(
        &mut self,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
        line_color: Option<RGBColor>,
    ) -> Result<usize> {
        validate_extent(width, height)?;
        let shape = MutableShape::new_auto_shape(
            self.next_shape_id(),
            kind,
            x,
            y,
            width,
            height,
            fill_color,
            line_color,
        );
        self.shapes.push(shape);
        Ok(self.shapes.len() - 1)
    }

    // IDs: 1=group, 2+=user shapes
    fn next_shape_id(&self) -> u32 {
        (self.shapes.len() + 2) as u32
    }

    pub fn shape(&self, index: usize) -> Option<&MutableShape> {
        self.shapes.get(index)
    }

    pub fn shape_mut(&mut self, index: usize) -> Option<&mut MutableShape> {
        self.shapes.get_mut(index)
    }

    pub fn shapes(&self) -> &[MutableShape] {
        &self.shapes
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Generate slide XML content.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048 + self.shapes.len() * 1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        );
        xml.push_str(
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        );
        xml.push_str(r#"xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">"#);

        xml.push_str("<p:cSld>");

        // Background must come before spTree
        if let Some(color) = self.background {
            xml.push_str("<p:bg><p:bgPr>");
            write_solid_fill(&mut xml, color);
            xml.push_str("<a:effectLst/></p:bgPr></p:bg>");
        }

        xml.push_str("<p:spTree>");
        xml.push_str(EMPTY_GROUP_PROPERTIES);
        for shape in &self.shapes {
            shape.to_xml(&mut xml)?;
        }
        xml.push_str("</p:spTree>");
        xml.push_str("</p:cSld>");

        xml.push_str(r#"<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>"#);
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

/// Reject a negative width or height. Offsets may be negative.
pub(crate) fn validate_extent(width: i64, height: i64) -> Result<()> {
    if width < 0 || height < 0 {
        return Err(OoxmlError::InvalidGeometry(format!(
            "negative extent {}x{} EMU",
            width, height
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::pptx::format::TextParagraph;

    #[test]
    fn test_shape_ids_start_after_group() {
        let mut slide = MutableSlide::new(256);
        let first = slide.add_text_box(0, 0, 10, 10).unwrap();
        let second = slide
            .add_auto_shape(ShapeKind::RoundedRectangle, 0, 0, 10, 10, None, None)
            .unwrap();

        assert_eq!((first, second), (0, 1));
        assert_eq!(slide.shape(0).unwrap().shape_id(), 2);
        assert_eq!(slide.shape(1).unwrap().shape_id(), 3);
    }

    #[test]
    fn test_negative_extent_rejected() {
        let mut slide = MutableSlide::new(256);
        let err = slide.add_text_box(0, 0, -1, 10).unwrap_err();
        assert!(matches!(err, OoxmlError::InvalidGeometry(_)));
        assert_eq!(slide.shape_count(), 0);

        // Negative offsets are legal coordinates.
        assert!(slide.add_text_box(-914_400, -10, 10, 10).is_ok());
    }

    #[test]
    fn test_background_last_call_wins() {
        let mut slide = MutableSlide::new(256);
        slide.set_background(RGBColor::new(255, 0, 0));
        slide.set_background(RGBColor::new(26, 26, 46));

        let xml = slide.to_xml().unwrap();
        assert_eq!(xml.matches("<p:bg>").count(), 1);
        assert!(xml.contains(
            r#"<p:bg><p:bgPr><a:solidFill><a:srgbClr val="1A1A2E"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>"#
        ));
        assert!(xml.find("<p:bg>") < xml.find("<p:spTree>"));
    }

    #[test]
    fn test_xml_contains_shapes() {
        let mut slide = MutableSlide::new(256);
        let index = slide.add_text_box(0, 0, 100, 100).unwrap();
        slide
            .shape_mut(index)
            .unwrap()
            .add_paragraph(TextParagraph::new("Hello"));

        let xml = slide.to_xml().unwrap();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<a:t>Hello</a:t>"));
        assert!(xml.ends_with("</p:sld>"));
    }
}
