/// Assembly of a [`MutablePresentation`] into an OPC package.
///
/// Part layout follows what PowerPoint itself writes: one master, one blank
/// layout, one theme, the three presentation property parts, and one part
/// per slide.
use crate::ooxml::error::Result;
use crate::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
use crate::ooxml::opc::error::OpcError;
use crate::ooxml::opc::{OpcPackage, PackURI, Part, XmlPart};
use crate::ooxml::pptx::props::app_properties_xml;
use crate::ooxml::pptx::template;
use crate::ooxml::pptx::writer::MutablePresentation;

pub const PRESENTATION_URI: &str = "/ppt/presentation.xml";
pub const SLIDE_MASTER_URI: &str = "/ppt/slideMasters/slideMaster1.xml";
pub const SLIDE_LAYOUT_URI: &str = "/ppt/slideLayouts/slideLayout1.xml";
pub const THEME_URI: &str = "/ppt/theme/theme1.xml";
pub const PRES_PROPS_URI: &str = "/ppt/presProps.xml";
pub const VIEW_PROPS_URI: &str = "/ppt/viewProps.xml";
pub const TABLE_STYLES_URI: &str = "/ppt/tableStyles.xml";
pub const CORE_PROPS_URI: &str = "/docProps/core.xml";
pub const APP_PROPS_URI: &str = "/docProps/app.xml";

/// Part name of slide `index` (0-based); slide parts are numbered from 1.
pub fn slide_uri(index: usize) -> Result<PackURI> {
    pack_uri(&format!("/ppt/slides/slide{}.xml", index + 1))
}

fn pack_uri(uri: &str) -> Result<PackURI> {
    Ok(PackURI::new(uri).map_err(OpcError::InvalidPackUri)?)
}

/// Build the complete package for `pres`.
pub(crate) fn build_package(pres: &MutablePresentation) -> Result<OpcPackage> {
    let presentation_uri = pack_uri(PRESENTATION_URI)?;
    let master_uri = pack_uri(SLIDE_MASTER_URI)?;
    let layout_uri = pack_uri(SLIDE_LAYOUT_URI)?;
    let theme_uri = pack_uri(THEME_URI)?;
    let pres_props_uri = pack_uri(PRES_PROPS_URI)?;
    let view_props_uri = pack_uri(VIEW_PROPS_URI)?;
    let table_styles_uri = pack_uri(TABLE_STYLES_URI)?;
    let core_uri = pack_uri(CORE_PROPS_URI)?;
    let app_uri = pack_uri(APP_PROPS_URI)?;
    let slide_uris = (0..pres.slide_count())
        .map(slide_uri)
        .collect::<Result<Vec<_>>>()?;

    let mut package = OpcPackage::new();
    package.relate_to(&presentation_uri, rt::OFFICE_DOCUMENT);
    package.relate_to(&core_uri, rt::CORE_PROPERTIES);
    package.relate_to(&app_uri, rt::EXTENDED_PROPERTIES);

    // presentation.xml references its master and slides by rId
    let mut presentation =
        XmlPart::new(presentation_uri, ct::PML_PRESENTATION_MAIN, Vec::new());
    let master_rel_id = presentation.relate_to(&master_uri, rt::SLIDE_MASTER);
    let slide_rel_ids: Vec<String> = slide_uris
        .iter()
        .map(|uri| presentation.relate_to(uri, rt::SLIDE))
        .collect();
    presentation.relate_to(&pres_props_uri, rt::PRES_PROPS);
    presentation.relate_to(&view_props_uri, rt::VIEW_PROPS);
    presentation.relate_to(&theme_uri, rt::THEME);
    presentation.relate_to(&table_styles_uri, rt::TABLE_STYLES);
    presentation.set_xml(pres.generate_presentation_xml(&master_rel_id, &slide_rel_ids)?);
    package.add_part(Box::new(presentation))?;

    // The master's layout list hardcodes rId1, so the layout is related first
    let mut master = XmlPart::new(
        master_uri.clone(),
        ct::PML_SLIDE_MASTER,
        template::slide_master_xml(),
    );
    master.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
    master.relate_to(&theme_uri, rt::THEME);
    package.add_part(Box::new(master))?;

    let mut layout = XmlPart::new(
        layout_uri.clone(),
        ct::PML_SLIDE_LAYOUT,
        template::blank_layout_xml(),
    );
    layout.relate_to(&master_uri, rt::SLIDE_MASTER);
    package.add_part(Box::new(layout))?;

    let theme = XmlPart::new(theme_uri, ct::OFC_THEME, pres.theme().to_xml()?);
    package.add_part(Box::new(theme))?;

    for (slide, uri) in pres.slides().iter().zip(slide_uris) {
        log::debug!("serializing slide {} as {}", slide.slide_id(), uri);
        let mut part = XmlPart::new(uri, ct::PML_SLIDE, slide.to_xml()?);
        part.relate_to(&layout_uri, rt::SLIDE_LAYOUT);
        package.add_part(Box::new(part))?;
    }

    package.add_part(Box::new(XmlPart::new(
        pres_props_uri,
        ct::PML_PRES_PROPS,
        template::pres_props_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        view_props_uri,
        ct::PML_VIEW_PROPS,
        template::view_props_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        table_styles_uri,
        ct::PML_TABLE_STYLES,
        template::table_styles_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        core_uri,
        ct::OPC_CORE_PROPERTIES,
        pres.properties().to_xml(),
    )))?;
    package.add_part(Box::new(XmlPart::new(
        app_uri,
        ct::OFC_EXTENDED_PROPERTIES,
        app_properties_xml(pres.slide_count(), pres.slide_width(), pres.slide_height()),
    )))?;

    Ok(package)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_inventory() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        let names: Vec<String> = package
            .iter_parts()
            .map(|part| part.partname().to_string())
            .collect();

        assert_eq!(package.part_count(), 11);
        assert!(names.contains(&"/ppt/slides/slide2.xml".to_string()));
        assert!(names.contains(&TABLE_STYLES_URI.to_string()));
        assert_eq!(package.rels().len(), 3);
    }

    #[test]
    fn test_slides_relate_to_blank_layout() {
        let mut pres = MutablePresentation::new();
        pres.add_slide();

        let package = build_package(&pres).unwrap();
        let slide = package
            .iter_parts()
            .find(|part| part.partname().as_str() == "/ppt/slides/slide1.xml")
            .unwrap();
        let rel = slide.rels().get("rId1").unwrap();
        assert_eq!(rel.reltype(), rt::SLIDE_LAYOUT);
        assert_eq!(rel.target_ref(), "../slideLayouts/slideLayout1.xml");
    }

    #[test]
    fn test_master_layout_is_rid1() {
        let package = build_package(&MutablePresentation::new()).unwrap();
        let master = package
            .iter_parts()
            .find(|part| part.partname().as_str() == SLIDE_MASTER_URI)
            .unwrap();
        assert_eq!(master.rels().get("rId1").unwrap().reltype(), rt::SLIDE_LAYOUT);
    }
}
