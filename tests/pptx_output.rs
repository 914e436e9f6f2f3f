use deckwright::backend::{DocumentBackend, PptxBackend};
use deckwright::content::DeckContent;
use deckwright::layout::Canvas;
use deckwright::slides::build_deck;
use deckwright::theme::Theme;
use deckwright::{Config, Error};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;
use zip::ZipArchive;

fn write_showcase(path: &Path) {
    let config = Config::default();
    let theme = config.theme().unwrap();
    let deck = build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase());
    let mut backend = PptxBackend::new()
        .with_theme(config.package_theme(&theme))
        .with_properties(config.document_properties());
    deck.export(&theme, &mut backend, path).unwrap();
}

fn read_entry(archive: &mut ZipArchive<File>, name: &str) -> String {
    let mut entry = archive.by_name(name).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

fn assert_well_formed(name: &str, xml: &str) {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(_) => {},
            Err(e) => panic!("{name} is not well-formed: {e}"),
        }
    }
}

#[test]
fn test_showcase_package_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("showcase.pptx");
    write_showcase(&path);

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let names: Vec<String> = archive.file_names().map(str::to_string).collect();

    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "ppt/presProps.xml",
        "ppt/viewProps.xml",
        "ppt/tableStyles.xml",
    ] {
        assert!(names.iter().any(|n| n == required), "missing {required}");
    }

    let slides = names
        .iter()
        .filter(|n| n.starts_with("ppt/slides/slide") && n.ends_with(".xml"))
        .count();
    assert_eq!(slides, 5);
    assert_eq!(names[0], "[Content_Types].xml");

    for name in &names {
        let xml = read_entry(&mut archive, name);
        assert_well_formed(name, &xml);
    }
}

#[test]
fn test_showcase_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("showcase.pptx");
    write_showcase(&path);
    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();

    let presentation = read_entry(&mut archive, "ppt/presentation.xml");
    assert!(presentation.contains(r#"<p:sldSz cx="12191695" cy="6858000"/>"#));
    assert_eq!(presentation.matches("<p:sldId ").count(), 5);

    let title = read_entry(&mut archive, "ppt/slides/slide1.xml");
    assert!(title.contains("<a:t>DeskBot AI Companion</a:t>"));
    assert!(title.contains(r#"sz="6000""#));
    assert!(title.contains(r#"<a:srgbClr val="1A1A2E"/>"#));

    let impact = read_entry(&mut archive, "ppt/slides/slide5.xml");
    assert!(impact.contains("Thank you! Questions Welcome!"));

    let slide_rels = read_entry(&mut archive, "ppt/slides/_rels/slide3.xml.rels");
    assert!(slide_rels.contains("../slideLayouts/slideLayout1.xml"));

    let content_types = read_entry(&mut archive, "[Content_Types].xml");
    assert!(content_types.contains(r#"PartName="/ppt/slides/slide5.xml""#));

    let app = read_entry(&mut archive, "docProps/app.xml");
    assert!(app.contains("<Slides>5</Slides>"));
    assert!(app.contains("<PresentationFormat>Widescreen</PresentationFormat>"));

    let core = read_entry(&mut archive, "docProps/core.xml");
    assert!(core.contains("<dc:title>DeskBot AI Companion</dc:title>"));
    assert!(core.contains("dcterms:created"));
}

#[test]
fn test_theme_part_follows_palette() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("themed.pptx");
    let yaml = "palette:\n  accent-primary: \"#FF8800\"\ntypeface: Segoe UI\n";
    let config = Config::from_yaml(yaml).unwrap();
    let theme = config.theme().unwrap();
    let deck = build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase());
    let mut backend = PptxBackend::new().with_theme(config.package_theme(&theme));
    deck.export(&theme, &mut backend, &path).unwrap();

    let mut archive = ZipArchive::new(File::open(&path).unwrap()).unwrap();
    let theme_xml = read_entry(&mut archive, "ppt/theme/theme1.xml");
    assert!(theme_xml.contains(r#"<a:accent1><a:srgbClr val="FF8800"/></a:accent1>"#));
    assert!(theme_xml.contains(r#"typeface="Segoe UI""#));

    let title = read_entry(&mut archive, "ppt/slides/slide2.xml");
    assert!(title.contains(r#"<a:srgbClr val="FF8800"/>"#));
}

#[test]
fn test_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let deck = build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase());
    let mut backend = PptxBackend::new();
    let err = deck
        .export(&Theme::showcase(), &mut backend, &dir.path().join("no/such/dir.pptx"))
        .unwrap_err();
    assert!(matches!(err, Error::Ooxml(_)));
}

#[test]
fn test_deck_must_exist_before_slides() {
    let mut backend = PptxBackend::new();
    assert!(matches!(backend.add_slide(), Err(Error::DeckNotCreated)));
}
