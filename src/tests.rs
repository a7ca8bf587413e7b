use super::*;
use std::fs;
use tempfile::TempDir;

fn build_into(dir: &TempDir, name: &str) -> std::path::PathBuf {
    let config = Config::new().with_output(Some(dir.path().join(name)));
    DeckBuilder::new(config).build().expect("Failed to build deck")
}

#[test]
fn test_deck_has_three_slides_in_order() {
    let deck = content::smartcart_deck();
    let kinds: Vec<SlideKind> = deck.slides().iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![SlideKind::Title, SlideKind::BulletedContent, SlideKind::BulletedContent]
    );

    let titles: Vec<&str> = deck.slides().iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["SmartCart", "The Problem", "The Solution"]);
    assert_eq!(deck.page(), PageSize::default());
}

#[test]
fn test_bullet_counts_and_sizes() {
    let deck = content::smartcart_deck();
    let problem = &deck.slides()[1];
    let solution = &deck.slides()[2];

    assert_eq!(problem.bullets.len(), 5);
    assert!(problem.bullets.iter().all(|b| b.font_size == 18.0 && b.level == 0));
    assert_eq!(problem.lead_in.as_ref().map(|l| l.font_size), Some(32.0));

    assert_eq!(solution.bullets.len(), 6);
    assert!(solution.bullets.iter().all(|b| b.font_size == 16.0 && b.level == 0));
    assert_eq!(solution.lead_in.as_ref().map(|l| l.font_size), Some(28.0));
}

#[test]
fn test_build_writes_readable_deck() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = build_into(&dir, "deck.pptx");
    assert!(path.exists());

    let summary = DeckSummary::from_file(&path).expect("Failed to read deck");
    assert_eq!(summary.slide_count(), 3);

    let title = &summary.slides[0];
    assert_eq!(
        title.texts(),
        vec![
            "SmartCart",
            "Intelligent Grocery Shopping Agent",
            "Powered by AI & Blockchain - BNB Chain Testnet"
        ]
    );
    let headline = &title.paragraphs[0];
    assert_eq!(headline.size, Some(72.0));
    assert!(headline.bold);
    assert_eq!(headline.color, Some(RgbColor(0, 102, 204)));
    assert_eq!(headline.alignment, Some(model::Alignment::Center));
    assert_eq!(title.paragraphs[1].size, Some(24.0));
    assert_eq!(title.paragraphs[1].alignment, Some(model::Alignment::Center));
}

#[test]
fn test_content_slides_round_trip_text() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = build_into(&dir, "deck.pptx");
    let summary = DeckSummary::from_file(&path).expect("Failed to read deck");

    let problem = &summary.slides[1];
    assert_eq!(problem.paragraphs[0].text, "The Problem");
    assert_eq!(problem.paragraphs[1].text, "Grocery Shopping is Broken");
    assert!(problem.paragraphs[1].bold);
    let bullets: Vec<&str> = problem.texts()[2..].to_vec();
    assert_eq!(bullets, content::PROBLEM_BULLETS.to_vec());
    assert!(problem.paragraphs[2..].iter().all(|p| p.level == Some(0)));

    let solution = &summary.slides[2];
    assert_eq!(solution.paragraphs[1].text, content::SOLUTION_LEAD_IN);
    assert_eq!(solution.paragraphs[1].size, Some(28.0));
    let bullets: Vec<&str> = solution.texts()[2..].to_vec();
    assert_eq!(bullets, content::SOLUTION_BULLETS.to_vec());
    assert!(solution.paragraphs[2..].iter().all(|p| p.size == Some(16.0)));
}

#[test]
fn test_rebuild_overwrites_with_same_slides() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let first = build_into(&dir, "deck.pptx");
    let before = DeckSummary::from_file(&first).unwrap();

    let second = build_into(&dir, "deck.pptx");
    assert_eq!(first, second);
    assert_eq!(before, DeckSummary::from_file(&second).unwrap());

    // Only the output file is left behind, no staging files
    let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_inspect_rejects_non_zip() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("not_a_deck.pptx");
    fs::write(&path, "plain text").unwrap();

    assert!(matches!(
        DeckSummary::from_file(&path),
        Err(DeckError::InvalidPackage(_))
    ));
}

#[test]
fn test_inspect_reports_unreadable_slide_as_read_error() {
    use std::io::Write;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("broken.pptx");
    let file = fs::File::create(&path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("ppt/slides/slide1.xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
    zip.finish().unwrap();

    let result = DeckSummary::from_file(&path);
    assert!(matches!(result, Err(DeckError::FileReadError(_))));
    assert!(result.unwrap_err().to_string().starts_with("Failed to read file"));
}

#[test]
fn test_outline_lists_every_paragraph() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = build_into(&dir, "deck.pptx");
    let outline = DeckSummary::from_file(&path).unwrap().outline();

    assert!(outline.starts_with("Slide 1\n  SmartCart\n"));
    assert!(outline.contains("Slide 3\n"));
    assert!(outline.contains("  📝 Maintains audit logs for compliance\n"));
}

#[test]
fn test_success_message() {
    let message = success_message(std::path::Path::new("SmartCart_Pitch_Deck.pptx"));
    assert_eq!(message, "✅ Pitch deck created: SmartCart_Pitch_Deck.pptx");
}
