// ABOUTME: PPTX reader for the smartcart-deck application
// ABOUTME: Extracts per-slide paragraph text and run formatting from a saved deck

use crate::errors::{DeckError, Result};
use crate::model::{Alignment, RgbColor};
use crate::utils;
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// One paragraph of a slide as it was read back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParagraphSummary {
    /// Concatenated text of all runs
    pub text: String,
    /// Font size of the first run, in points
    pub size: Option<f64>,
    /// Whether the first run is bold
    pub bold: bool,
    /// Color of the first run
    pub color: Option<RgbColor>,
    pub level: Option<u8>,
    pub alignment: Option<Alignment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideSummary {
    /// 1-based slide number
    pub number: usize,
    pub paragraphs: Vec<ParagraphSummary>,
}

impl SlideSummary {
    pub fn texts(&self) -> Vec<&str> {
        self.paragraphs.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Text content of every slide of a deck, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckSummary {
    pub slides: Vec<SlideSummary>,
}

impl DeckSummary {
    /// Read a saved `.pptx` file.
    pub fn from_file(path: &Path) -> Result<Self> {
        utils::validate_file_exists(path)?;
        let file = fs::File::open(path).map_err(DeckError::FileReadError)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| DeckError::InvalidPackage(format!("{:?} is not a ZIP archive: {}", path, e)))?;

        let mut slides = Vec::new();
        for number in 1.. {
            let name = format!("ppt/slides/slide{}.xml", number);
            let xml = match archive.by_name(&name) {
                Ok(mut entry) => {
                    let mut xml = String::new();
                    entry
                        .read_to_string(&mut xml)
                        .map_err(DeckError::FileReadError)?;
                    xml
                }
                Err(ZipError::FileNotFound) => break,
                Err(e) => return Err(e.into()),
            };
            debug!("Parsing {}", name);
            slides.push(parse_slide(number, &xml)?);
        }

        if slides.is_empty() {
            return Err(DeckError::InvalidPackage(format!(
                "No slides found in {:?}",
                path
            )));
        }
        Ok(Self { slides })
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Numbered plain-text outline of the deck
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for slide in &self.slides {
            let _ = writeln!(out, "Slide {}", slide.number);
            for paragraph in &slide.paragraphs {
                let indent = "  ".repeat(paragraph.level.unwrap_or(0) as usize + 1);
                let _ = writeln!(out, "{}{}", indent, paragraph.text);
            }
        }
        out
    }
}

fn attribute(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    Ok(match element.try_get_attribute(name)? {
        Some(attr) => Some(attr.unescape_value()?.into_owned()),
        None => None,
    })
}

fn read_run_props(paragraph: &mut ParagraphSummary, element: &BytesStart) -> Result<()> {
    paragraph.size = attribute(element, b"sz")?
        .and_then(|v| v.parse::<f64>().ok())
        .map(|hundredths| hundredths / 100.0);
    paragraph.bold = matches!(attribute(element, b"b")?.as_deref(), Some("1" | "true"));
    Ok(())
}

/// Parse the paragraphs of one slide part.
pub fn parse_slide(number: usize, xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current: Option<ParagraphSummary> = None;
    let mut runs_seen = 0usize;
    let mut in_first_run_props = false;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"a:p" => {
                current = Some(ParagraphSummary::default());
                runs_seen = 0;
            }
            Event::Empty(e) if e.name().as_ref() == b"a:p" => {
                paragraphs.push(ParagraphSummary::default());
            }
            Event::End(e) if e.name().as_ref() == b"a:p" => {
                if let Some(paragraph) = current.take() {
                    paragraphs.push(paragraph);
                }
            }
            Event::Start(e) | Event::Empty(e) if e.name().as_ref() == b"a:pPr" => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.level = attribute(&e, b"lvl")?.and_then(|v| v.parse().ok());
                    paragraph.alignment = attribute(&e, b"algn")?
                        .map(|v| Alignment::from_ooxml(&v))
                        .transpose()?;
                }
            }
            Event::Start(e) if e.name().as_ref() == b"a:rPr" => {
                runs_seen += 1;
                if let (Some(paragraph), 1) = (current.as_mut(), runs_seen) {
                    read_run_props(paragraph, &e)?;
                    in_first_run_props = true;
                }
            }
            Event::Empty(e) if e.name().as_ref() == b"a:rPr" => {
                runs_seen += 1;
                if let (Some(paragraph), 1) = (current.as_mut(), runs_seen) {
                    read_run_props(paragraph, &e)?;
                }
            }
            Event::End(e) if e.name().as_ref() == b"a:rPr" => {
                in_first_run_props = false;
            }
            Event::Empty(e) if in_first_run_props && e.name().as_ref() == b"a:srgbClr" => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.color = attribute(&e, b"val")?
                        .map(|v| RgbColor::from_hex(&v))
                        .transpose()?;
                }
            }
            Event::Start(e) if e.name().as_ref() == b"a:t" => in_text = true,
            Event::End(e) if e.name().as_ref() == b"a:t" => in_text = false,
            Event::Text(t) if in_text => {
                if let Some(paragraph) = current.as_mut() {
                    paragraph.text.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(SlideSummary { number, paragraphs })
}
