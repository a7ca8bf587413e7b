// ABOUTME: Slide rendering for the smartcart-deck application
// ABOUTME: Turns a SlideSpec into PresentationML slide XML with textboxes and placeholders

use crate::errors::Result;
use crate::model::{Alignment, Frame, RgbColor, SlideKind, SlideSpec, TextStyle};
use crate::template::{self, NS_DECLS};
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Headline size on the title slide, in points
pub const HEADLINE_SIZE: f64 = 72.0;

/// Subtitle size on the title slide, in points
pub const SUBTITLE_SIZE: f64 = 24.0;

/// Brand color of the title slide headline
pub const BRAND_COLOR: RgbColor = RgbColor(0, 102, 204);

/// Headline textbox: 1in from the left, 2in from the top, 8in x 1.5in
pub fn headline_frame() -> Frame {
    Frame::inches(1.0, 2.0, 8.0, 1.5)
}

/// Subtitle textbox directly beneath the headline, 8in x 1in
pub fn subtitle_frame() -> Frame {
    Frame::inches(1.0, 3.5, 8.0, 1.0)
}

/// Slide layouts shipped in every package, numbered as their part names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    TitleAndContent,
    Blank,
}

impl Layout {
    pub fn for_kind(kind: SlideKind) -> Self {
        match kind {
            SlideKind::Title => Layout::Blank,
            SlideKind::BulletedContent => Layout::TitleAndContent,
        }
    }

    pub fn part_name(&self) -> &'static str {
        match self {
            Layout::TitleAndContent => "slideLayout1.xml",
            Layout::Blank => "slideLayout2.xml",
        }
    }
}

/// One paragraph with a single formatted run.
#[derive(Debug, Clone)]
struct Paragraph<'a> {
    text: &'a str,
    style: TextStyle,
    alignment: Option<Alignment>,
    level: Option<u8>,
}

impl<'a> Paragraph<'a> {
    fn new(text: &'a str, style: TextStyle) -> Self {
        Self {
            text,
            style,
            alignment: None,
            level: None,
        }
    }

    fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    fn at_level(mut self, level: u8) -> Self {
        self.level = Some(level);
        self
    }

    fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<a:p>");

        if self.level.is_some() || self.alignment.is_some() {
            xml.push_str("<a:pPr");
            if let Some(level) = self.level {
                write!(xml, r#" lvl="{}""#, level)?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, r#" algn="{}""#, alignment.as_ooxml())?;
            }
            xml.push_str("/>");
        }

        if self.text.is_empty() {
            xml.push_str(r#"<a:endParaRPr lang="en-US"/>"#);
            xml.push_str("</a:p>");
            return Ok(());
        }

        xml.push_str("<a:r>");
        xml.push_str(r#"<a:rPr lang="en-US""#);
        if let Some(size) = self.style.size {
            // Hundredths of a point
            write!(xml, r#" sz="{}""#, (size * 100.0).round() as u32)?;
        }
        if self.style.bold {
            xml.push_str(r#" b="1""#);
        }
        xml.push_str(r#" dirty="0""#);

        match self.style.color {
            Some(color) => {
                xml.push('>');
                write!(
                    xml,
                    r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#,
                    color
                )?;
                xml.push_str("</a:rPr>");
            }
            None => xml.push_str("/>"),
        }

        write!(xml, "<a:t>{}</a:t>", escape(self.text))?;
        xml.push_str("</a:r>");
        xml.push_str("</a:p>");
        Ok(())
    }
}

/// Placeholder kinds used by the "Title and Content" layout
#[derive(Debug, Clone, Copy)]
enum Placeholder {
    Title,
    Body,
}

fn text_box_xml(xml: &mut String, shape_id: u32, frame: Frame, paragraphs: &[Paragraph]) -> Result<()> {
    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(
        xml,
        r#"<p:cNvPr id="{}" name="TextBox {}"/>"#,
        shape_id,
        shape_id - 1
    )?;
    xml.push_str(r#"<p:cNvSpPr txBox="1"/>"#);
    xml.push_str("<p:nvPr/>");
    xml.push_str("</p:nvSpPr>");

    xml.push_str("<p:spPr>");
    xml.push_str("<a:xfrm>");
    write!(xml, r#"<a:off x="{}" y="{}"/>"#, frame.x, frame.y)?;
    write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, frame.width, frame.height)?;
    xml.push_str("</a:xfrm>");
    xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#);
    xml.push_str("<a:noFill/>");
    xml.push_str("</p:spPr>");

    xml.push_str("<p:txBody>");
    xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:spAutoFit/></a:bodyPr>"#);
    xml.push_str("<a:lstStyle/>");
    for paragraph in paragraphs {
        paragraph.to_xml(xml)?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn placeholder_xml(
    xml: &mut String,
    shape_id: u32,
    placeholder: Placeholder,
    paragraphs: &[Paragraph],
) -> Result<()> {
    let (name, ph) = match placeholder {
        Placeholder::Title => ("Title", r#"<p:ph type="title"/>"#),
        Placeholder::Body => ("Content Placeholder", r#"<p:ph idx="1"/>"#),
    };

    xml.push_str("<p:sp>");
    xml.push_str("<p:nvSpPr>");
    write!(xml, r#"<p:cNvPr id="{}" name="{} {}"/>"#, shape_id, name, shape_id - 1)?;
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>"#);
    write!(xml, "<p:nvPr>{}</p:nvPr>", ph)?;
    xml.push_str("</p:nvSpPr>");
    xml.push_str("<p:spPr/>");
    xml.push_str("<p:txBody><a:bodyPr/><a:lstStyle/>");
    for paragraph in paragraphs {
        paragraph.to_xml(xml)?;
    }
    xml.push_str("</p:txBody>");
    xml.push_str("</p:sp>");
    Ok(())
}

fn title_slide_shapes(xml: &mut String, spec: &SlideSpec) -> Result<()> {
    let headline = [Paragraph::new(
        &spec.title,
        TextStyle::sized(HEADLINE_SIZE).bold().colored(BRAND_COLOR),
    )
    .aligned(Alignment::Center)];
    text_box_xml(xml, 2, headline_frame(), &headline)?;

    let subtitle: Vec<Paragraph> = spec
        .subtitle_lines()
        .into_iter()
        .map(|line| Paragraph::new(line, TextStyle::sized(SUBTITLE_SIZE)).aligned(Alignment::Center))
        .collect();
    if !subtitle.is_empty() {
        text_box_xml(xml, 3, subtitle_frame(), &subtitle)?;
    }
    Ok(())
}

fn content_slide_shapes(xml: &mut String, spec: &SlideSpec) -> Result<()> {
    let title = [Paragraph::new(&spec.title, TextStyle::default())];
    placeholder_xml(xml, 2, Placeholder::Title, &title)?;

    let mut body = Vec::with_capacity(spec.bullets.len() + 1);
    if let Some(lead_in) = &spec.lead_in {
        body.push(Paragraph::new(
            &lead_in.text,
            TextStyle::sized(lead_in.font_size).bold(),
        ));
    }
    body.extend(spec.bullets.iter().map(|bullet| {
        Paragraph::new(&bullet.text, TextStyle::sized(bullet.font_size)).at_level(bullet.level)
    }));
    placeholder_xml(xml, 3, Placeholder::Body, &body)
}

/// Render one slide part (`ppt/slides/slideN.xml`).
pub fn slide_xml(spec: &SlideSpec) -> Result<String> {
    let mut xml = String::with_capacity(4096);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    write!(xml, "<p:sld {}>", NS_DECLS)?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    match spec.kind {
        SlideKind::Title => title_slide_shapes(&mut xml, spec)?,
        SlideKind::BulletedContent => content_slide_shapes(&mut xml, spec)?,
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
    xml.push_str("</p:sld>");
    Ok(xml)
}

/// Slide relationships: just the layout the slide is based on
pub fn slide_rels_xml(layout: Layout) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="{}" Target="../slideLayouts/{}"/>
</Relationships>"#,
        template::REL_SLIDE_LAYOUT,
        layout.part_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_slide_formatting() {
        let spec = SlideSpec::title_slide("SmartCart", "Line one\nLine two");
        let xml = slide_xml(&spec).unwrap();

        assert!(xml.contains(r#"<a:off x="914400" y="1828800"/>"#));
        assert!(xml.contains(r#"<a:ext cx="7315200" cy="1371600"/>"#));
        assert!(xml.contains(r#"sz="7200" b="1""#));
        assert!(xml.contains(r#"<a:srgbClr val="0066CC"/>"#));
        assert!(xml.contains(r#"<a:pPr algn="ctr"/>"#));
        assert!(xml.contains("<a:t>Line one</a:t>"));
        assert!(xml.contains("<a:t>Line two</a:t>"));
        assert_eq!(xml.matches(r#"sz="2400""#).count(), 2);
        assert!(!xml.contains("<p:ph"));
    }

    #[test]
    fn test_content_slide_uses_placeholders() {
        let spec = SlideSpec::content_slide("Heading", "Lead in", 32.0)
            .with_bullets(&["first", "second"], 18.0);
        let xml = slide_xml(&spec).unwrap();

        assert!(xml.contains(r#"<p:ph type="title"/>"#));
        assert!(xml.contains(r#"<p:ph idx="1"/>"#));
        assert!(xml.contains(r#"<a:rPr lang="en-US" sz="3200" b="1" dirty="0"/>"#));
        assert_eq!(xml.matches(r#"<a:pPr lvl="0"/>"#).count(), 2);

        let first = xml.find("<a:t>first</a:t>").unwrap();
        let second = xml.find("<a:t>second</a:t>").unwrap();
        assert!(xml.find("<a:t>Lead in</a:t>").unwrap() < first);
        assert!(first < second);
    }

    #[test]
    fn test_text_is_escaped() {
        let spec = SlideSpec::content_slide("A & B", "<lead>", 20.0);
        let xml = slide_xml(&spec).unwrap();
        assert!(xml.contains("<a:t>A &amp; B</a:t>"));
        assert!(xml.contains("<a:t>&lt;lead&gt;</a:t>"));
    }

    #[test]
    fn test_slide_rels_point_at_layout() {
        assert!(slide_rels_xml(Layout::Blank).contains("../slideLayouts/slideLayout2.xml"));
        assert!(
            slide_rels_xml(Layout::for_kind(SlideKind::BulletedContent))
                .contains("../slideLayouts/slideLayout1.xml")
        );
    }
}
