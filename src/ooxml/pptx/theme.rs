/// Theme part (`ppt/theme/theme1.xml`) for generated presentations.
///
/// The color scheme is derived from the deck's palette so that anything
/// PowerPoint colors by scheme (new shapes, hyperlinks, the master's own
/// text) matches the explicitly colored content.
use crate::common::RGBColor;
use crate::common::xml::escape_xml;
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::namespace;
use crate::theme::{Role, Theme};
use std::fmt::Write as FmtWrite;

pub const DEFAULT_TYPEFACE: &str = "Calibri";

#[derive(Debug, Clone)]
pub struct MutableTheme {
    name: String,
    major_font: String,
    minor_font: String,
    color_scheme: ColorScheme,
}

/// The twelve scheme colors of `a:clrScheme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorScheme {
    name: String,
    dk1: RGBColor,
    lt1: RGBColor,
    dk2: RGBColor,
    lt2: RGBColor,
    accents: [RGBColor; 6],
    hlink: RGBColor,
    fol_hlink: RGBColor,
}

impl MutableTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            major_font: DEFAULT_TYPEFACE.to_string(),
            minor_font: DEFAULT_TYPEFACE.to_string(),
            color_scheme: ColorScheme::default(),
        }
    }

    /// A theme whose color scheme follows `palette` and whose fonts are
    /// both `typeface`.
    pub fn from_palette(name: impl Into<String>, palette: &Theme, typeface: &str) -> Self {
        Self {
            name: name.into(),
            major_font: typeface.to_string(),
            minor_font: typeface.to_string(),
            color_scheme: ColorScheme::from_palette(palette),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn major_font(&self) -> &str {
        &self.major_font
    }

    #[inline]
    pub fn minor_font(&self) -> &str {
        &self.minor_font
    }

    #[inline]
    pub fn color_scheme(&self) -> &ColorScheme {
        &self.color_scheme
    }

    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            &mut xml,
            r#"<a:theme xmlns:a="{}" name="{}">"#,
            namespace::DML_MAIN,
            escape_xml(&self.name)
        )?;

        xml.push_str("<a:themeElements>");

        self.color_scheme.to_xml(&mut xml)?;

        xml.push_str(r#"<a:fontScheme name="Office">"#);
        xml.push_str("<a:majorFont>");
        write!(
            &mut xml,
            r#"<a:latin typeface="{}"/>"#,
            escape_xml(&self.major_font)
        )?;
        xml.push_str(r#"<a:ea typeface=""/><a:cs typeface=""/>"#);
        xml.push_str("</a:majorFont>");
        xml.push_str("<a:minorFont>");
        write!(
            &mut xml,
            r#"<a:latin typeface="{}"/>"#,
            escape_xml(&self.minor_font)
        )?;
        xml.push_str(r#"<a:ea typeface=""/><a:cs typeface=""/>"#);
        xml.push_str("</a:minorFont>");
        xml.push_str("</a:fontScheme>");

        // Format scheme: the three entries per list the schema requires
        xml.push_str(r#"<a:fmtScheme name="Office">"#);
        xml.push_str("<a:fillStyleLst>");
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
        xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="50000"/><a:satMod val="300000"/></a:schemeClr></a:gs><a:gs pos="35000"><a:schemeClr val="phClr"><a:tint val="37000"/><a:satMod val="300000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:tint val="15000"/><a:satMod val="350000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="16200000" scaled="1"/></a:gradFill>"#);
        xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:shade val="51000"/><a:satMod val="130000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="94000"/><a:satMod val="135000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="16200000" scaled="0"/></a:gradFill>"#);
        xml.push_str("</a:fillStyleLst>");
        xml.push_str("<a:lnStyleLst>");
        xml.push_str(r#"<a:ln w="9525" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
        xml.push_str(r#"<a:ln w="25400" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
        xml.push_str(r#"<a:ln w="38100" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#);
        xml.push_str("</a:lnStyleLst>");
        xml.push_str("<a:effectStyleLst>");
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
        xml.push_str(r#"<a:effectStyle><a:effectLst><a:outerShdw blurRad="40000" dist="23000" dir="5400000" rotWithShape="0"><a:srgbClr val="000000"><a:alpha val="35000"/></a:srgbClr></a:outerShdw></a:effectLst></a:effectStyle>"#);
        xml.push_str("</a:effectStyleLst>");
        xml.push_str("<a:bgFillStyleLst>");
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
        xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"><a:tint val="95000"/></a:schemeClr></a:solidFill>"#);
        xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst><a:gs pos="0"><a:schemeClr val="phClr"><a:tint val="80000"/></a:schemeClr></a:gs><a:gs pos="100000"><a:schemeClr val="phClr"><a:shade val="30000"/></a:schemeClr></a:gs></a:gsLst><a:lin ang="5400000" scaled="0"/></a:gradFill>"#);
        xml.push_str("</a:bgFillStyleLst>");
        xml.push_str("</a:fmtScheme>");

        xml.push_str("</a:themeElements>");
        xml.push_str("<a:objectDefaults/>");
        xml.push_str("<a:extraClrSchemeLst/>");
        xml.push_str("</a:theme>");

        Ok(xml)
    }
}

impl Default for MutableTheme {
    fn default() -> Self {
        Self::new("Office Theme")
    }
}

impl ColorScheme {
    /// The stock Office scheme.
    pub fn office() -> Self {
        Self {
            name: "Office".to_string(),
            dk1: RGBColor::new(0x00, 0x00, 0x00),
            lt1: RGBColor::new(0xFF, 0xFF, 0xFF),
            dk2: RGBColor::new(0x44, 0x54, 0x6A),
            lt2: RGBColor::new(0xE7, 0xE6, 0xE6),
            accents: [
                RGBColor::new(0x44, 0x72, 0xC4),
                RGBColor::new(0xED, 0x7D, 0x31),
                RGBColor::new(0xA5, 0xA5, 0xA5),
                RGBColor::new(0xFF, 0xC0, 0x00),
                RGBColor::new(0x5B, 0x9B, 0xD5),
                RGBColor::new(0x70, 0xAD, 0x47),
            ],
            hlink: RGBColor::new(0x05, 0x63, 0xC1),
            fol_hlink: RGBColor::new(0x95, 0x4F, 0x72),
        }
    }

    /// Map palette roles onto scheme slots. Dark 1 is the slide background
    /// and Light 1 the body text, so the scheme reads as a dark theme.
    pub fn from_palette(palette: &Theme) -> Self {
        Self {
            name: "Deck".to_string(),
            dk1: palette.color(Role::Background),
            lt1: palette.color(Role::TextPrimary),
            dk2: palette.color(Role::Surface),
            lt2: palette.color(Role::TextMuted),
            accents: [
                palette.color(Role::AccentPrimary),
                palette.color(Role::AccentSecondary),
                palette.color(Role::Highlight),
                palette.color(Role::Success),
                palette.color(Role::Danger),
                palette.color(Role::Info),
            ],
            hlink: palette.color(Role::AccentPrimary),
            fol_hlink: palette.color(Role::AccentSecondary),
        }
    }

    #[inline]
    pub fn dark1(&self) -> RGBColor {
        self.dk1
    }

    #[inline]
    pub fn light1(&self) -> RGBColor {
        self.lt1
    }

    /// Accent `index` (0-based, `0..6`).
    pub fn accent(&self, index: usize) -> Option<RGBColor> {
        self.accents.get(index).copied()
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        write!(xml, r#"<a:clrScheme name="{}">"#, escape_xml(&self.name))?;

        write!(xml, r#"<a:dk1><a:srgbClr val="{}"/></a:dk1>"#, self.dk1.to_hex())?;
        write!(xml, r#"<a:lt1><a:srgbClr val="{}"/></a:lt1>"#, self.lt1.to_hex())?;
        write!(xml, r#"<a:dk2><a:srgbClr val="{}"/></a:dk2>"#, self.dk2.to_hex())?;
        write!(xml, r#"<a:lt2><a:srgbClr val="{}"/></a:lt2>"#, self.lt2.to_hex())?;

        for (i, accent) in self.accents.iter().enumerate() {
            write!(
                xml,
                r#"<a:accent{0}><a:srgbClr val="{1}"/></a:accent{0}>"#,
                i + 1,
                accent.to_hex()
            )?;
        }

        write!(xml, r#"<a:hlink><a:srgbClr val="{}"/></a:hlink>"#, self.hlink.to_hex())?;
        write!(
            xml,
            r#"<a:folHlink><a:srgbClr val="{}"/></a:folHlink>"#,
            self.fol_hlink.to_hex()
        )?;

        xml.push_str("</a:clrScheme>");

        Ok(())
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::office()
    }
}
