// ABOUTME: Configuration module for the smartcart-deck application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::model::DeckProps;
use std::env;
use std::path::PathBuf;

/// File name the deck is saved under when nothing overrides it
pub const DEFAULT_OUTPUT: &str = "SmartCart_Pitch_Deck.pptx";

/// Global configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub output_path: PathBuf,
    pub title: String,
    pub creator: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            title: "SmartCart Pitch Deck".to_string(),
            creator: "smartcart-deck".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let output_path = env::var("SMARTCART_DECK_OUTPUT")
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_path);
        let title = env::var("SMARTCART_DECK_TITLE")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.title);

        Self {
            output_path,
            title,
            creator: defaults.creator,
        }
    }

    /// Replace the output path when one is given
    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        if let Some(path) = output {
            self.output_path = path;
        }
        self
    }

    /// Metadata for the package's `docProps` parts
    pub fn deck_props(&self) -> DeckProps {
        DeckProps {
            title: self.title.clone(),
            creator: self.creator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_is_fixed_file_name() {
        let config = Config::new();
        assert_eq!(config.output_path, PathBuf::from("SmartCart_Pitch_Deck.pptx"));
    }

    #[test]
    fn test_with_output_overrides() {
        let config = Config::new().with_output(Some(PathBuf::from("out/deck.pptx")));
        assert_eq!(config.output_path, PathBuf::from("out/deck.pptx"));

        let unchanged = Config::new().with_output(None);
        assert_eq!(unchanged.output_path, PathBuf::from(DEFAULT_OUTPUT));
    }

    #[test]
    fn test_deck_props_follow_config() {
        let props = Config::new().deck_props();
        assert_eq!(props.title, "SmartCart Pitch Deck");
        assert_eq!(props.creator, "smartcart-deck");
    }
}
