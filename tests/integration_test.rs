use smartcart_deck::{Config, DeckBuilder, DeckError, DeckSummary};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

fn build(output: PathBuf) -> smartcart_deck::Result<PathBuf> {
    DeckBuilder::new(Config::new().with_output(Some(output))).build()
}

fn read_part(path: &Path, name: &str) -> Vec<u8> {
    let file = fs::File::open(path).expect("Failed to open PPTX file");
    let mut archive = ZipArchive::new(file).expect("Failed to read PPTX as ZIP");
    let mut entry = archive.by_name(name).expect("Missing part");
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).expect("Failed to read part");
    bytes
}

#[test]
fn test_slide_text_matches_pitch() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = build(temp_dir.path().join("deck.pptx")).expect("Build failed");

    let summary = DeckSummary::from_file(&path).expect("Failed to read deck");
    assert_eq!(summary.slide_count(), 3);

    let title = summary.slides[0].texts();
    assert_eq!(title[0], "SmartCart");
    assert_eq!(title[1], "Intelligent Grocery Shopping Agent");
    assert_eq!(title[2], "Powered by AI & Blockchain - BNB Chain Testnet");

    let problem = summary.slides[1].texts();
    assert_eq!(problem.len(), 2 + 5);
    assert_eq!(problem[2], "🛒 Waste: $218B wasted annually on expired groceries");
    assert_eq!(problem[6], "🏪 Vendor Confusion: Hard to compare prices across platforms");

    let solution = summary.slides[2].texts();
    assert_eq!(solution.len(), 2 + 6);
    assert_eq!(solution[2], "📦 Tracks inventory automatically with expiration alerts");
    assert_eq!(solution[5], "🛍️ Compares prices across Amazon & Walmart");
    assert_eq!(solution[7], "📝 Maintains audit logs for compliance");
}

#[test]
fn test_repeated_builds_are_identical_apart_from_metadata() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = build(temp_dir.path().join("first.pptx")).expect("Build failed");
    let second = build(temp_dir.path().join("second.pptx")).expect("Build failed");

    for part in [
        "ppt/presentation.xml",
        "ppt/slides/slide1.xml",
        "ppt/slides/slide2.xml",
        "ppt/slides/slide3.xml",
        "ppt/slideMasters/slideMaster1.xml",
    ] {
        assert_eq!(read_part(&first, part), read_part(&second, part), "{} differs", part);
    }
}

#[test]
fn test_presentation_geometry_is_four_by_three() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = build(temp_dir.path().join("deck.pptx")).expect("Build failed");

    let xml = String::from_utf8(read_part(&path, "ppt/presentation.xml")).unwrap();
    assert!(xml.contains(r#"<p:sldSz cx="9144000" cy="6858000"/>"#));
}

#[test]
fn test_output_over_directory_leaves_nothing_behind() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let target = temp_dir.path().join("deck.pptx");
    fs::create_dir(&target).unwrap();

    let result = build(target.clone());
    assert!(matches!(result, Err(DeckError::FileWriteError(_))));
    assert!(target.is_dir());

    // The staging file was cleaned up
    let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_output_under_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "x").unwrap();

    let result = build(blocker.join("deck.pptx"));
    assert!(result.is_err());
    assert!(!blocker.join("deck.pptx").exists());
}
