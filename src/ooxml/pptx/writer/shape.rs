/// Shape types and implementation for PPTX presentations.
use crate::common::RGBColor;
use crate::common::unit::pt_to_centipoints;
use crate::common::xml::escape_xml;
use crate::layout::ShapeKind;
use crate::ooxml::error::Result;
use smallvec::SmallVec;
use std::fmt::Write as FmtWrite;

pub use super::super::format::{TextFormat, TextParagraph};

/// A shape on a slide: a text box or a filled auto shape, both carrying a
/// text frame.
#[derive(Debug, Clone)]
pub struct MutableShape {
    /// Shape ID, unique within the slide
    pub(crate) shape_id: u32,
    pub(crate) shape_type: ShapeType,
    pub(crate) x: i64,
    pub(crate) y: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
    /// Paragraphs of the text frame; most frames hold exactly one
    pub(crate) paragraphs: SmallVec<[TextParagraph; 1]>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShapeType {
    TextBox,
    AutoShape {
        kind: ShapeKind,
        fill_color: Option<RGBColor>,
        line_color: Option<RGBColor>,
    },
}

impl MutableShape {
    pub(crate) fn new_text_box(shape_id: u32, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::TextBox,
            x,
            y,
            width,
            height,
            paragraphs: SmallVec::new(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new_auto_shape(
        shape_id: u32,
        kind: ShapeKind,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        fill_color: Option<RGBColor>,
        line_color: Option<RGBColor>,
    ) -> Self {
        Self {
            shape_id,
            shape_type: ShapeType::AutoShape {
                kind,
                fill_color,
                line_color,
            },
            x,
            y,
            width,
            height,
            paragraphs: SmallVec::new(),
        }
    }

    #[inline]
    pub fn shape_id(&self) -> u32 {
        self.shape_id
    }

    /// Display name, numbered like PowerPoint does (`TextBox 1` for id 2).
    pub fn name(&self) -> String {
        let base = match &self.shape_type {
            ShapeType::TextBox => "TextBox",
            ShapeType::AutoShape { kind, .. } => kind.display_name(),
        };
        format!("{} {}", base, self.shape_id.saturating_sub(1))
    }

    /// Append a paragraph to the text frame.
    pub fn add_paragraph(&mut self, paragraph: TextParagraph) -> &mut Self {
        self.paragraphs.push(paragraph);
        self
    }

    pub fn paragraphs(&self) -> &[TextParagraph] {
        &self.paragraphs
    }

    /// Concatenated text of all paragraphs, newline separated.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generate XML for this shape.
    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<p:sp>");
        xml.push_str("<p:nvSpPr>");
        write!(
            xml,
            r#"<p:cNvPr id="{}" name="{}"/>"#,
            self.shape_id,
            escape_xml(&self.name())
        )?;
        match self.shape_type {
            ShapeType::TextBox => xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#),
            ShapeType::AutoShape { .. } => xml.push_str("<p:cNvSpPr/>"),
        }
        xml.push_str("<p:nvPr/>");
        xml.push_str("</p:nvSpPr>");

        xml.push_str("<p:spPr>");
        self.write_xfrm(xml);
        match &self.shape_type {
            ShapeType::TextBox => {
                xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
                xml.push_str("<a:noFill/>");
            },
            ShapeType::AutoShape {
                kind,
                fill_color,
                line_color,
            } => {
                write!(
                    xml,
                    r#"<a:prstGeom prst="{}"><a:avLst/></a:prstGeom>"#,
                    kind.preset()
                )?;
                match fill_color {
                    Some(color) => write_solid_fill(xml, *color),
                    None => xml.push_str("<a:noFill/>"),
                }
                if let Some(color) = line_color {
                    xml.push_str("<a:ln>");
                    write_solid_fill(xml, *color);
                    xml.push_str("</a:ln>");
                }
            },
        }
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        match self.shape_type {
            ShapeType::TextBox => {
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#)
            },
            ShapeType::AutoShape { .. } => {
                xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0" anchor="ctr"/>"#)
            },
        }
        xml.push_str("<a:lstStyle/>");
        if self.paragraphs.is_empty() {
            // A text body must hold at least one paragraph.
            xml.push_str("<a:p/>");
        }
        for paragraph in &self.paragraphs {
            write_paragraph(xml, paragraph)?;
        }
        xml.push_str("</p:txBody>");

        xml.push_str("</p:sp>");
        Ok(())
    }

    fn write_xfrm(&self, xml: &mut String) {
        let mut buf = itoa::Buffer::new();
        xml.push_str(r#"<a:xfrm><a:off x=""#);
        xml.push_str(buf.format(self.x));
        xml.push_str(r#"" y=""#);
        xml.push_str(buf.format(self.y));
        xml.push_str(r#""/><a:ext cx=""#);
        xml.push_str(buf.format(self.width));
        xml.push_str(r#"" cy=""#);
        xml.push_str(buf.format(self.height));
        xml.push_str(r#""/></a:xfrm>"#);
    }
}

pub(crate) fn write_solid_fill(xml: &mut String, color: RGBColor) {
    xml.push_str(r#"<a:solidFill><a:srgbClr val=""#);
    xml.push_str(&color.to_hex());
    xml.push_str(r#""/></a:solidFill>"#);
}

fn write_paragraph(xml: &mut String, paragraph: &TextParagraph) -> Result<()> {
    xml.push_str("<a:p>");

    if paragraph.has_paragraph_properties() {
        xml.push_str("<a:pPr");
        if let Some(align) = paragraph.align {
            write!(xml, r#" algn="{}""#, align.as_ooxml())?;
        }
        xml.push('>');
        if let Some(points) = paragraph.space_before {
            write!(
                xml,
                r#"<a:spcBef><a:spcPts val="{}"/></a:spcBef>"#,
                pt_to_centipoints(points)
            )?;
        }
        if let Some(points) = paragraph.space_after {
            write!(
                xml,
                r#"<a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                pt_to_centipoints(points)
            )?;
        }
        xml.push_str("</a:pPr>");
    }

    if paragraph.text.is_empty() {
        xml.push_str("<a:endParaRPr lang=\"en-US\"");
        write_run_attributes(xml, &paragraph.format)?;
        xml.push_str("/>");
    } else {
        xml.push_str("<a:r>");
        xml.push_str("<a:rPr lang=\"en-US\"");
        write_run_attributes(xml, &paragraph.format)?;
        xml.push_str(" dirty=\"0\">");

        // Runs carry no typeface; text falls back to the theme's minor font
        if let Some(color) = paragraph.format.color {
            write_solid_fill(xml, color);
        }

        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&paragraph.text))?;
        xml.push_str("</a:r>");
    }

    xml.push_str("</a:p>");
    Ok(())
}

fn write_run_attributes(xml: &mut String, format: &TextFormat) -> Result<()> {
    if let Some(size) = format.size {
        write!(xml, r#" sz="{}""#, pt_to_centipoints(size))?;
    }
    match format.bold {
        Some(true) => xml.push_str(r#" b="1""#),
        Some(false) => xml.push_str(r#" b="0""#),
        None => {},
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Align;

    fn render(shape: &MutableShape) -> String {
        let mut xml = String::new();
        shape.to_xml(&mut xml).unwrap();
        xml
    }

    #[test]
    fn test_empty_text_box_keeps_one_paragraph() {
        let shape = MutableShape::new_text_box(2, 0, 0, 100, 100);
        let xml = render(&shape);

        assert_eq!(shape.paragraphs().len(), 0);
        assert!(xml.contains("<a:lstStyle/><a:p/></p:txBody>"));
        assert!(xml.contains(r#"txBox="1""#));
        assert!(xml.contains(r#"name="TextBox 1""#));
    }

    #[test]
    fn test_text_box_paragraph() {
        let mut shape = MutableShape::new_text_box(2, 457_200, 1_828_800, 11_277_295, 914_400);
        shape.add_paragraph(
            TextParagraph::new("DeskBot & Friends")
                .size(44.0)
                .bold(true)
                .color(RGBColor::new(0, 212, 255))
                .align(Align::Center),
        );
        let xml = render(&shape);

        assert!(xml.contains(r#"<a:off x="457200" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="11277295" cy="914400"/>"#));
        assert!(xml.contains(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr">"#));
        assert!(xml.contains(r#"sz="4400" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="00D4FF"/>"#));
        assert!(xml.contains("<a:t>DeskBot &amp; Friends</a:t>"));
    }

    #[test]
    fn test_spacing_in_centipoints() {
        let mut shape = MutableShape::new_text_box(2, 0, 0, 10, 10);
        shape.add_paragraph(TextParagraph::new("• item").spacing(8.0));
        let xml = render(&shape);

        assert!(xml.contains(r#"<a:spcBef><a:spcPts val="800"/></a:spcBef>"#));
        assert!(xml.contains(r#"<a:spcAft><a:spcPts val="800"/></a:spcAft>"#));
    }

    #[test]
    fn test_rounded_rectangle() {
        let mut shape = MutableShape::new_auto_shape(
            3,
            ShapeKind::RoundedRectangle,
            0,
            0,
            2_286_000,
            548_640,
            Some(RGBColor::new(40, 40, 70)),
            Some(RGBColor::new(80, 80, 120)),
        );
        shape.add_paragraph(TextParagraph::new("ESP32-S3").align(Align::Center));
        let xml = render(&shape);

        assert!(xml.contains(r#"name="Rounded Rectangle 2""#));
        assert!(xml.contains(r#"<a:prstGeom prst="roundRect">"#));
        assert!(xml.contains(
            r#"<a:solidFill><a:srgbClr val="282846"/></a:solidFill><a:ln><a:solidFill><a:srgbClr val="505078"/></a:solidFill></a:ln>"#
        ));
        assert!(xml.contains(r#"anchor="ctr""#));
        assert_eq!(shape.text(), "ESP32-S3");
    }
}
