// ABOUTME: Deck builder for the smartcart-deck application
// ABOUTME: Assembles the fixed SmartCart slides and saves them as one PPTX file

use crate::config::Config;
use crate::content;
use crate::errors::Result;
use crate::model::Deck;
use log::info;
use std::path::PathBuf;

/// Builds the SmartCart pitch deck and writes it to the configured path.
#[derive(Debug, Clone, Default)]
pub struct DeckBuilder {
    config: Config,
}

impl DeckBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The deck this builder renders, in slide order
    pub fn deck(&self) -> Deck {
        content::smartcart_deck()
    }

    /// Render every slide in order and save the presentation.
    ///
    /// Returns the path of the written file. Running it again overwrites the
    /// same file with the same slide content.
    pub fn build(&self) -> Result<PathBuf> {
        let deck = self.deck();
        info!(
            "Building deck with {} slides into {:?}",
            deck.len(),
            self.config.output_path
        );
        deck.save(&self.config.output_path, &self.config.deck_props())
    }
}

/// The line printed after a successful build
pub fn success_message(path: &std::path::Path) -> String {
    format!("✅ Pitch deck created: {}", path.display())
}
