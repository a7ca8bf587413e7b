// ABOUTME: Library module for the smartcart-deck program.
// ABOUTME: Contains the slide model, the PPTX package writer and the deck builder.

// Reexport modules
pub mod builder;
pub mod config;
pub mod content;
pub mod errors;
pub mod inspect;
pub mod model;
pub mod pptx;
pub mod slide;
pub mod template;
pub mod utils;

// Reexport common types and functions
pub use builder::{success_message, DeckBuilder};
pub use config::Config;
pub use errors::{DeckError, Result};
pub use inspect::{DeckSummary, ParagraphSummary, SlideSummary};
pub use model::{Bullet, Deck, DeckProps, Emu, PageSize, RgbColor, SlideKind, SlideSpec};
pub use pptx::write_package;

#[cfg(test)]
mod tests;
