//! Repeated-layout algorithms: grids, equal-width columns, contrast halves and
//! tag rows.
//!
//! All of these are pure position arithmetic. None of them guard against
//! overflowing the canvas.

use super::geometry::{Canvas, Rect};
use std::num::NonZeroUsize;

/// Fixed-column grid. Entry `i` lands in row `i / columns`, column `i % columns`.
///
/// A count that is not a multiple of `columns` leaves the last row partially
/// filled from the left; no filler cells are produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    /// Horizontal distance between the left edges of neighboring cells
    pub cell_width: f64,
    /// Vertical distance between the top edges of neighboring rows
    pub cell_height: f64,
    pub columns: NonZeroUsize,
}

impl GridLayout {
    /// `(row, col)` of entry `index`.
    #[inline]
    pub fn cell(&self, index: usize) -> (usize, usize) {
        let columns = self.columns.get();
        (index / columns, index % columns)
    }

    /// Top-left corner of entry `index`.
    pub fn cell_origin(&self, index: usize) -> (f64, f64) {
        let (row, col) = self.cell(index);
        (
            self.origin_x + col as f64 * self.cell_width,
            self.origin_y + row as f64 * self.cell_height,
        )
    }

    /// Number of rows needed for `count` entries.
    pub fn rows_for(&self, count: usize) -> usize {
        count.div_ceil(self.columns.get())
    }
}

/// Equal-width columns separated by a fixed gutter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnLayout {
    pub left: f64,
    pub top: f64,
    pub column_width: f64,
    pub height: f64,
    pub gutter: f64,
}

impl ColumnLayout {
    /// Frame of column `index`: `left + index * (column_width + gutter)`.
    pub fn column(&self, index: usize) -> Rect {
        Rect::new(
            self.left + index as f64 * (self.column_width + self.gutter),
            self.top,
            self.column_width,
            self.height,
        )
    }
}

/// Split the canvas's usable width into two equal boxes separated by `gutter`.
///
/// `2 * width + gutter` equals the usable width.
pub fn split_halves(canvas: &Canvas, top: f64, height: f64, gutter: f64) -> [Rect; 2] {
    let width = (canvas.usable_width() - gutter) / 2.0;
    let left = canvas.content_left();
    [
        Rect::new(left, top, width, height),
        Rect::new(left + width + gutter, top, width, height),
    ]
}

/// A single left-to-right row of uniformly sized pills.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TagRow {
    pub left: f64,
    pub top: f64,
    pub pill_width: f64,
    pub pill_height: f64,
    pub gap: f64,
}

impl TagRow {
    #[inline]
    pub fn step(&self) -> f64 {
        self.pill_width + self.gap
    }

    /// Frame of pill `index`. Never wraps.
    pub fn slot(&self, index: usize) -> Rect {
        Rect::new(
            self.left + index as f64 * self.step(),
            self.top,
            self.pill_width,
            self.pill_height,
        )
    }
}
