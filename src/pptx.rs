// ABOUTME: PPTX package writer for the smartcart-deck application
// ABOUTME: Encodes a Deck into the ZIP container of a PowerPoint presentation

use crate::errors::Result;
use crate::model::{Deck, DeckProps};
use crate::slide::{self, Layout};
use crate::template;
use log::{debug, info};
use quick_xml::escape::escape;
use std::fs;
use std::io::{Seek, Write};
use std::path::Path;
use zip::{write::FileOptions, CompressionMethod, DateTime, ZipWriter};

/// Identifier of the first slide in `presentation.xml`
const FIRST_SLIDE_ID: usize = 256;

/// Relationship ids 1 and 2 of the presentation part go to the master and theme
const FIRST_SLIDE_REL: usize = 3;

/// Entries carry a fixed timestamp so repeated builds produce the same archive
/// apart from the creation time recorded in `docProps/core.xml`.
fn entry_options() -> FileOptions {
    FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

fn write_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    debug!("Writing part {}", name);
    zip.start_file(name, entry_options())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

/// Write `deck` as a PPTX package at `output_file`.
pub fn write_package(deck: &Deck, output_file: &Path, props: &DeckProps) -> Result<()> {
    info!("Generating PPTX with {} slides at {:?}", deck.len(), output_file);

    let file = fs::File::create(output_file)?;
    let mut zip = ZipWriter::new(file);
    write_parts(&mut zip, deck, props)?;

    info!("Finalizing PPTX file");
    let mut file = zip.finish()?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}

/// Write every part of the package into an open archive.
pub fn write_parts<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    deck: &Deck,
    props: &DeckProps,
) -> Result<()> {
    let slide_count = deck.len();

    info!("Creating PPTX structure: [Content_Types].xml");
    write_part(zip, "[Content_Types].xml", &content_types_xml(slide_count))?;

    info!("Creating PPTX structure: _rels/.rels");
    write_part(zip, "_rels/.rels", ROOT_RELS)?;

    info!("Creating PPTX structure: docProps");
    write_part(zip, "docProps/app.xml", &app_xml(slide_count))?;
    write_part(zip, "docProps/core.xml", &core_xml(props))?;

    info!("Creating PPTX structure: ppt/presentation.xml");
    write_part(zip, "ppt/_rels/presentation.xml.rels", &presentation_rels_xml(slide_count))?;
    write_part(zip, "ppt/presentation.xml", &presentation_xml(deck))?;

    info!("Creating PPTX structure: slide master, layouts and theme");
    write_part(zip, "ppt/slideMasters/slideMaster1.xml", &template::slide_master_xml())?;
    write_part(
        zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        &template::slide_master_rels_xml(),
    )?;
    for (layout, xml) in [
        (Layout::TitleAndContent, template::title_and_content_layout_xml()),
        (Layout::Blank, template::blank_layout_xml()),
    ] {
        write_part(zip, &format!("ppt/slideLayouts/{}", layout.part_name()), &xml)?;
        write_part(
            zip,
            &format!("ppt/slideLayouts/_rels/{}.rels", layout.part_name()),
            &template::layout_rels_xml(),
        )?;
    }
    write_part(zip, "ppt/theme/theme1.xml", template::theme_xml())?;

    for (i, spec) in deck.slides().iter().enumerate() {
        let slide_num = i + 1;
        info!("Creating slide XML: ppt/slides/slide{}.xml ({:?})", slide_num, spec.title);

        write_part(
            zip,
            &format!("ppt/slides/slide{}.xml", slide_num),
            &slide::slide_xml(spec)?,
        )?;
        write_part(
            zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &slide::slide_rels_xml(Layout::for_kind(spec.kind)),
        )?;
    }

    Ok(())
}

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="ppt/presentation.xml"/>
    <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
    <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#;

fn content_types_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout2.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#,
        slides = (1..=slide_count)
            .map(|n| {
                format!(
                    r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#,
                    n
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    )
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>smartcart-deck</Application>
    <Slides>{}</Slides>
</Properties>"#,
        slide_count
    )
}

fn core_xml(props: &DeckProps) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>{}</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        escape(props.title.as_str()),
        escape(props.creator.as_str()),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

fn presentation_rels_xml(slide_count: usize) -> String {
    let mut rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>
    <Relationship Id="rId2" Type="{}" Target="theme/theme1.xml"/>
"#,
        template::REL_SLIDE_MASTER,
        template::REL_THEME
    );

    // Add relationship for each slide
    for i in 0..slide_count {
        rels.push_str(&format!(
            r#"    <Relationship Id="rId{}" Type="{}" Target="slides/slide{}.xml"/>"#,
            FIRST_SLIDE_REL + i,
            template::REL_SLIDE,
            i + 1
        ));
        rels.push('\n');
    }

    rels.push_str("</Relationships>");
    rels
}

fn presentation_xml(deck: &Deck) -> String {
    let page = deck.page();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation {ns} saveSubsetFonts="1">
    <p:sldMasterIdLst>
        <p:sldMasterId id="{master_id}" r:id="rId1"/>
    </p:sldMasterIdLst>
    <p:sldIdLst>
{slide_ids}
    </p:sldIdLst>
    <p:sldSz cx="{cx}" cy="{cy}"/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        ns = template::NS_DECLS,
        master_id = template::MASTER_ID,
        slide_ids = (0..deck.len())
            .map(|i| {
                format!(
                    r#"        <p:sldId id="{}" r:id="rId{}"/>"#,
                    FIRST_SLIDE_ID + i,
                    FIRST_SLIDE_REL + i
                )
            })
            .collect::<Vec<String>>()
            .join("\n"),
        cx = page.width,
        cy = page.height
    )
}
