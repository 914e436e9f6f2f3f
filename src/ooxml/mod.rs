//! Office Open XML (OOXML) writing.
//!
//! The module is organized in two layers:
//!
//! 1. **OPC Layer** (`opc`): package structure (parts, relationships,
//!    content types) and the ZIP container
//! 2. **PresentationML** (`pptx`): the mutable presentation model and the
//!    parts it serializes to
pub mod error;
pub mod opc;
pub mod pptx;

pub use error::{OoxmlError, Result};
pub use opc::{OpcPackage, PackURI};
