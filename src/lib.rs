//! Deckwright - a declarative slide layout engine with a PowerPoint writer
//!
//! Slides are composed from a handful of themed primitives (text boxes,
//! bullet groups and rounded panels) placed by small layout algorithms
//! (grids, equal-width columns, two-column contrast and tag rows). The
//! finished [`Deck`](deck::Deck) is then encoded by a
//! [`DocumentBackend`](backend::DocumentBackend).
//!
//! # Features
//!
//! - **Semantic colors**: primitives carry [`Role`](theme::Role)s, resolved
//!   through a swappable [`Theme`](theme::Theme) only at render time
//! - **Pure layout**: every slide is a function of the canvas and its content
//! - **PPTX output**: an OPC package writer with theme, master, layout and
//!   document properties
//! - **Dry runs**: a recording backend that captures every backend call
//!
//! # Example
//!
//! ```no_run
//! use deckwright::backend::PptxBackend;
//! use deckwright::content::DeckContent;
//! use deckwright::layout::Canvas;
//! use deckwright::slides::build_deck;
//! use deckwright::theme::Theme;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), deckwright::Error> {
//! let deck = build_deck(&Canvas::WIDESCREEN, &DeckContent::showcase());
//! let mut backend = PptxBackend::new();
//! deck.export(&Theme::showcase(), &mut backend, Path::new("showcase.pptx"))?;
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod common;
pub mod config;
pub mod content;
pub mod deck;
pub mod layout;
pub mod logging;
pub mod ooxml;
pub mod slides;
pub mod theme;

pub use common::{Error, RGBColor, Result};
pub use config::Config;
