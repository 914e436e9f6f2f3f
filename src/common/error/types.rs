//! Unified error types for deckwright.
//!
//! Layout and slide composition cannot fail; everything here surfaces from a
//! document backend, the configuration layer, or the final package write.
use thiserror::Error;

/// Main error type for deckwright operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while encoding the OOXML package
    #[error("OOXML error: {0}")]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// A slide or frame handle that the backend never issued
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// A backend call arrived before `create_deck`
    #[error("Deck has not been created")]
    DeckNotCreated,

    /// Color literal that is not `RRGGBB` / `#RRGGBB`
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Configuration could not be parsed or is inconsistent
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for deckwright operations.
pub type Result<T> = std::result::Result<T, Error>;
