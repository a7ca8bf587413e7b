// ABOUTME: Error types for the smartcart-deck application
// ABOUTME: Provides structured error handling for building, writing and reading decks

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to write file: {0}")]
    FileWriteError(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    FileReadError(std::io::Error),

    #[error("Render failure: {0}")]
    RenderFailure(String),

    #[error("XML error: {0}")]
    XmlError(String),

    #[error("Invalid presentation package: {0}")]
    InvalidPackage(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),
}

// Implement conversion from zip errors
impl From<zip::result::ZipError> for DeckError {
    fn from(err: zip::result::ZipError) -> Self {
        DeckError::RenderFailure(format!("ZIP operation failed: {}", err))
    }
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::XmlError(err.to_string())
    }
}

impl From<std::fmt::Error> for DeckError {
    fn from(err: std::fmt::Error) -> Self {
        DeckError::XmlError(format!("Failed to format XML: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, DeckError>;
