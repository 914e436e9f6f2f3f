//! Slide geometry in inches.

use crate::common::unit::inches_to_emu;
use serde::Serialize;

/// An axis-aligned rectangle, in inches from the slide's top-left corner.
///
/// Negative sizes are representable on purpose: the layout engine never
/// validates geometry, the backend does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    #[inline]
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// A rectangle of the given size whose origin is offset from this one's.
    #[inline]
    pub fn inset(&self, dx: f64, dy: f64, w: f64, h: f64) -> Rect {
        Rect::new(self.x + dx, self.y + dy, w, h)
    }

    pub fn to_emu(&self) -> EmuRect {
        EmuRect {
            x: inches_to_emu(self.x),
            y: inches_to_emu(self.y),
            cx: inches_to_emu(self.w),
            cy: inches_to_emu(self.h),
        }
    }
}

/// A rectangle in EMU, the form every backend receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EmuRect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Slide dimensions plus the side margin that bounds full-width content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Canvas {
    /// 16:9 widescreen, 13.333 × 7.5 in with half-inch side margins.
    pub const WIDESCREEN: Canvas = Canvas {
        width: 13.333,
        height: 7.5,
        margin: 0.5,
    };

    /// Width available between the side margins.
    #[inline]
    pub fn usable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Left edge of the usable area.
    #[inline]
    pub fn content_left(&self) -> f64 {
        self.margin
    }

    /// A band spanning the usable width.
    pub fn band(&self, top: f64, height: f64) -> Rect {
        Rect::new(self.content_left(), top, self.usable_width(), height)
    }

    /// A band of the given width centered horizontally on the slide.
    pub fn centered(&self, top: f64, width: f64, height: f64) -> Rect {
        Rect::new((self.width - width) / 2.0, top, width, height)
    }

    pub fn size_emu(&self) -> (i64, i64) {
        (inches_to_emu(self.width), inches_to_emu(self.height))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::WIDESCREEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_width() {
        let canvas = Canvas::WIDESCREEN;
        assert!((canvas.usable_width() - 12.333).abs() < 1e-9);
        let band = canvas.band(2.0, 1.0);
        assert!((band.x - 0.5).abs() < 1e-9);
        assert!((band.right() - 12.833).abs() < 1e-9);
    }

    #[test]
    fn test_centered_band() {
        let cta = Canvas::WIDESCREEN.centered(4.8, 10.333, 2.2);
        assert!((cta.x - 1.5).abs() < 1e-9);
        assert!((cta.bottom() - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_to_emu() {
        let r = Rect::new(0.5, 1.0, 6.0, 5.5).to_emu();
        assert_eq!(r, EmuRect { x: 457_200, y: 914_400, cx: 5_486_400, cy: 5_029_200 });
        assert_eq!(Canvas::WIDESCREEN.size_emu(), (12_191_695, 6_858_000));
    }
}
