//! PowerPoint (.pptx) presentation writing.
//!
//! A presentation is assembled in memory through [`MutablePresentation`],
//! which owns its slides, theme and document properties, and is then
//! serialized into an OPC package.
//!
//! # Example
//!
//! ```rust,no_run
//! use deckwright::ooxml::pptx::{MutablePresentation, TextParagraph};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! let frame = slide.add_text_box(457_200, 457_200, 8_229_600, 914_400)?;
//! if let Some(shape) = slide.shape_mut(frame) {
//!     shape.add_paragraph(TextParagraph::new("Hello").size(44.0).bold(true));
//! }
//! pres.save("hello.pptx")?;
//! # Ok::<(), deckwright::ooxml::OoxmlError>(())
//! ```
pub mod format;
pub mod package;
pub mod props;
pub mod template;
pub mod theme;
pub mod writer;

pub use format::{TextFormat, TextParagraph};
pub use props::DocumentProperties;
pub use theme::MutableTheme;
pub use writer::{MutablePresentation, MutableShape, MutableSlide};
