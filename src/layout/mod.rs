//! Layout engine: geometry, visual primitives and the repeated-layout
//! algorithms slides are built from.
//!
//! Everything here works in inches and semantic color roles. Conversion to
//! EMU and RGB happens only when a deck is rendered through a backend.

pub mod builders;
pub mod geometry;
pub mod grid;
pub mod primitive;

pub use builders::{make_bullet_group, make_panel, make_text, make_title};
pub use geometry::{Canvas, EmuRect, Rect};
pub use grid::{ColumnLayout, GridLayout, TagRow, split_halves};
pub use primitive::{Align, BULLET, BulletGroup, Label, Primitive, ShapeBox, ShapeKind, TextSpec};
