//! Unit conversion utilities.
//!
//! Layout code works in inches and points; OOXML parts store English Metric
//! Units (EMU). Conversions happen once, at the backend boundary.

pub const EMUS_PER_INCH: i64 = 914_400;

/// Convert inches to EMU, truncating like python-pptx's `Inches`.
#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64) as i64
}

/// Font size in points to the hundredths-of-a-point value used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inch_conversion() {
        assert_eq!(inches_to_emu(1.0), 914_400);
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert_eq!(inches_to_emu(-0.5), -457_200);
    }

    #[test]
    fn test_point_conversion() {
        assert_eq!(pt_to_centipoints(44.0), 4400);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_centipoints(-3.0), 0);
    }
}
