//! Document properties parts: `docProps/core.xml` and `docProps/app.xml`.

use crate::common::xml::escape_xml;
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt::Write as FmtWrite;

/// Name written to `app.xml` as the producing application.
pub const APPLICATION_NAME: &str = "deckwright";

/// Document core properties (metadata).
///
/// These properties are stored in the `docProps/core.xml` file in the OPC package.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentProperties {
    /// Document title
    pub title: Option<String>,
    /// Document creator/author
    pub creator: Option<String>,
    /// Last modified by
    pub last_modified_by: Option<String>,
    /// Creation date
    pub created: Option<DateTime<Utc>>,
    /// Last modification date
    pub modified: Option<DateTime<Utc>>,
}

impl DocumentProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Set the document creator/author. Also used as the last modifier.
    pub fn creator(mut self, creator: &str) -> Self {
        self.creator = Some(creator.to_string());
        self.last_modified_by = Some(creator.to_string());
        self
    }

    /// Stamp both the created and modified dates.
    pub fn timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.created = Some(at);
        self.modified = Some(at);
        self
    }

    /// Generate core.xml content for this properties set.
    pub fn to_xml(&self) -> String {
        let mut xml = String::with_capacity(1024);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);

        let mut text_element = |tag: &str, value: &Option<String>| {
            if let Some(value) = value {
                let _ = write!(xml, "<{tag}>{}</{tag}>", escape_xml(value));
            }
        };
        text_element("dc:title", &self.title);
        text_element("dc:creator", &self.creator);
        text_element("cp:lastModifiedBy", &self.last_modified_by);

        xml.push_str("<cp:revision>1</cp:revision>");

        if let Some(created) = self.created {
            let _ = write!(
                xml,
                r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
                created.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
        }

        if let Some(modified) = self.modified {
            let _ = write!(
                xml,
                r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
                modified.to_rfc3339_opts(SecondsFormat::Secs, true)
            );
        }

        xml.push_str("</cp:coreProperties>");
        xml
    }
}

/// PowerPoint's name for a slide size, as shown under Design > Slide Size.
pub fn presentation_format(width: i64, height: i64) -> &'static str {
    const WIDESCREEN_WIDTH: i64 = 12_192_000;
    const TOLERANCE: f64 = 0.005;

    if width <= 0 || height <= 0 {
        return "Custom";
    }
    let ratio = width as f64 / height as f64;
    let near = |w: f64, h: f64| (ratio - w / h).abs() < TOLERANCE;
    if near(16.0, 9.0) {
        // 13.333 in wide; the 10 in variant is the older on-screen show
        if (width - WIDESCREEN_WIDTH).abs() < 9_144 {
            "Widescreen"
        } else {
            "On-screen Show (16:9)"
        }
    } else if near(4.0, 3.0) {
        "On-screen Show (4:3)"
    } else if near(16.0, 10.0) {
        "On-screen Show (16:10)"
    } else {
        "Custom"
    }
}

/// Generate app.xml (extended properties) for a presentation of `slide_count`
/// slides measuring `width` by `height` EMU.
pub fn app_properties_xml(slide_count: usize, width: i64, height: i64) -> String {
    let mut xml = String::with_capacity(512);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#);
    let _ = write!(xml, "<Application>{}</Application>", APPLICATION_NAME);
    let _ = write!(
        xml,
        "<PresentationFormat>{}</PresentationFormat>",
        presentation_format(width, height)
    );
    let _ = write!(xml, "<Slides>{}</Slides>", slide_count);
    xml.push_str("</Properties>");
    xml
}
