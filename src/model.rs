// ABOUTME: Slide content model for the smartcart-deck application
// ABOUTME: Describes slides, bullets, geometry and formatting before they are rendered

use crate::errors::{DeckError, Result};
use crate::utils;
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

/// EMUs per inch (English Metric Units)
pub const EMU_PER_INCH: i64 = 914_400;

/// A length in English Metric Units, the unit OOXML uses for geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Emu(pub i64);

impl Emu {
    pub fn inches(value: f64) -> Self {
        Emu((value * EMU_PER_INCH as f64).round() as i64)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    /// Parse a color from a `RRGGBB` hex string (a leading `#` is accepted).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(DeckError::ValidationError(format!(
                "Invalid RGB color: {:?}",
                hex
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|e| DeckError::ValidationError(format!("Invalid RGB color: {}", e)))
        };
        Ok(RgbColor(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// The DrawingML `algn` attribute value
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
        }
    }

    /// Parse a DrawingML `algn` attribute value
    pub fn from_ooxml(value: &str) -> Result<Self> {
        match value {
            "l" => Ok(Alignment::Left),
            "ctr" => Ok(Alignment::Center),
            "r" => Ok(Alignment::Right),
            other => Err(DeckError::ValidationError(format!(
                "Unsupported alignment: {:?}",
                other
            ))),
        }
    }
}

/// Run-level formatting applied to every run of a paragraph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    /// Font size in points
    pub size: Option<f64>,
    pub bold: bool,
    pub color: Option<RgbColor>,
}

impl TextStyle {
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn colored(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// Position and size of a shape on the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Frame {
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: Emu::inches(x),
            y: Emu::inches(y),
            width: Emu::inches(width),
            height: Emu::inches(height),
        }
    }
}

/// The two slide kinds the deck is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    /// Blank layout with a centered headline and subtitle
    Title,
    /// "Title and Content" layout with a lead-in line followed by bullets
    BulletedContent,
}

/// A bold line opening the body of a content slide.
#[derive(Debug, Clone, PartialEq)]
pub struct LeadIn {
    pub text: String,
    pub font_size: f64,
}

/// One bullet paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub text: String,
    pub font_size: f64,
    /// Indentation level, 0 is the outermost
    pub level: u8,
}

/// Description of one slide prior to rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSpec {
    pub kind: SlideKind,
    pub title: String,
    pub subtitle: Option<String>,
    pub lead_in: Option<LeadIn>,
    pub bullets: Vec<Bullet>,
}

impl SlideSpec {
    /// A title slide. Each line of `subtitle` becomes its own paragraph.
    pub fn title_slide(title: &str, subtitle: &str) -> Self {
        Self {
            kind: SlideKind::Title,
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            lead_in: None,
            bullets: Vec::new(),
        }
    }

    /// A bulleted content slide opening with a bold lead-in line.
    pub fn content_slide(title: &str, lead_in: &str, lead_in_size: f64) -> Self {
        Self {
            kind: SlideKind::BulletedContent,
            title: title.to_string(),
            subtitle: None,
            lead_in: Some(LeadIn {
                text: lead_in.to_string(),
                font_size: lead_in_size,
            }),
            bullets: Vec::new(),
        }
    }

    /// Append bullets at the outermost level, all at the same size.
    pub fn with_bullets(mut self, texts: &[&str], font_size: f64) -> Self {
        self.bullets.extend(texts.iter().map(|text| Bullet {
            text: text.to_string(),
            font_size,
            level: 0,
        }));
        self
    }

    /// Subtitle split into one entry per line
    pub fn subtitle_lines(&self) -> Vec<&str> {
        self.subtitle
            .as_deref()
            .map(|s| s.lines().collect())
            .unwrap_or_default()
    }
}

/// Page geometry of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize {
    pub width: Emu,
    pub height: Emu,
}

impl Default for PageSize {
    /// 10in x 7.5in, the classic 4:3 page
    fn default() -> Self {
        Self {
            width: Emu::inches(10.0),
            height: Emu::inches(7.5),
        }
    }
}

/// Document metadata written into `docProps`.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckProps {
    pub title: String,
    pub creator: String,
}

impl Default for DeckProps {
    fn default() -> Self {
        Self {
            title: "Presentation".to_string(),
            creator: "smartcart-deck".to_string(),
        }
    }
}

/// An ordered collection of slides plus page geometry.
///
/// Slides can only be added while the deck is being assembled. [`Deck::save`]
/// consumes the deck, so nothing can change a slide once it has been written.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    page: PageSize,
    slides: Vec<SlideSpec>,
}

impl Deck {
    pub fn new(page: PageSize) -> Self {
        Self {
            page,
            slides: Vec::new(),
        }
    }

    pub fn push(&mut self, slide: SlideSpec) -> &mut Self {
        self.slides.push(slide);
        self
    }

    pub fn page(&self) -> PageSize {
        self.page
    }

    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Finalize the deck and write it to `output`.
    ///
    /// The package is written next to `output` under a temporary name and only
    /// renamed into place once complete, so a failed run never leaves a
    /// truncated file at `output`. Failures clean up the temporary file, but a
    /// process killed mid-write leaves a hidden `.<name>.<uuid>.tmp` sibling
    /// that later runs do not remove.
    pub fn save(self, output: &Path, props: &DeckProps) -> Result<PathBuf> {
        if self.slides.is_empty() {
            return Err(DeckError::ValidationError(
                "Cannot save a deck without slides".to_string(),
            ));
        }

        utils::ensure_parent_directory_exists(output)?;
        let temp_path = utils::temp_path_for(output);

        if let Err(e) = crate::pptx::write_package(&self, &temp_path, props) {
            utils::remove_if_exists(&temp_path);
            return Err(e);
        }

        if let Err(e) = std::fs::rename(&temp_path, output) {
            utils::remove_if_exists(&temp_path);
            return Err(DeckError::FileWriteError(e));
        }

        info!("Saved {} slides to {:?}", self.slides.len(), output);
        Ok(output.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_conversions() {
        assert_eq!(Emu::inches(10.0), Emu(9_144_000));
        assert_eq!(Emu::inches(7.5), Emu(6_858_000));
        assert_eq!(Emu::inches(1.5), Emu(1_371_600));
    }

    #[test]
    fn test_color_hex() {
        let color = RgbColor::from_hex("#0066cc").unwrap();
        assert_eq!(color, RgbColor(0, 102, 204));
        assert_eq!(color.to_string(), "0066CC");
        assert!(RgbColor::from_hex("12345").is_err());
        assert!(RgbColor::from_hex("zz0000").is_err());
    }

    #[test]
    fn test_alignment_round_trips_ooxml_values() {
        for alignment in [Alignment::Left, Alignment::Center, Alignment::Right] {
            assert_eq!(Alignment::from_ooxml(alignment.as_ooxml()).unwrap(), alignment);
        }
        assert!(Alignment::from_ooxml("just").is_err());
    }

    #[test]
    fn test_subtitle_lines() {
        let slide = SlideSpec::title_slide("Title", "first\nsecond");
        assert_eq!(slide.subtitle_lines(), vec!["first", "second"]);

        let content = SlideSpec::content_slide("Heading", "Lead", 20.0);
        assert!(content.subtitle_lines().is_empty());
    }

    #[test]
    fn test_bullets_keep_order() {
        let slide = SlideSpec::content_slide("Heading", "Lead", 20.0)
            .with_bullets(&["one", "two", "three"], 18.0);
        let texts: Vec<&str> = slide.bullets.iter().map(|b| b.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
        assert!(slide.bullets.iter().all(|b| b.level == 0 && b.font_size == 18.0));
    }

    #[test]
    fn test_save_rejects_empty_deck() {
        let dir = tempfile::TempDir::new().unwrap();
        let output = dir.path().join("empty.pptx");
        let result = Deck::default().save(&output, &DeckProps::default());
        assert!(matches!(result, Err(DeckError::ValidationError(_))));
        assert!(!output.exists());
    }
}
