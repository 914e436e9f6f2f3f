//! Unified error types for deckwright.
//!
//! This module provides a single error type that encompasses backend, package
//! and configuration failures, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
