//! Viewport transforms between screen pixels and logical document units.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default thickness of the ruler strip around a page, in screen pixels.
pub const RULER_OFFSET: f64 = 16.0;

/// Default zoom factor applied by the surrounding viewer.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Geometry conversion errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("Malformed pixel value: {0:?}")]
    MalformedPixelValue(String),
}

/// Result type for geometry conversions.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Round a logical quantity to the precision kept by the schema (2 decimals).
pub fn round_logical(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Viewport manages the scale between screen pixels and document units.
///
/// `zoom` is the process-wide scale factor set by the surrounding viewer;
/// `ruler_offset` is the fixed ruler/header thickness added when projecting
/// page-space values onto the screen. All conversions are pure functions of
/// their inputs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// Scale factor from document units to screen pixels (> 0).
    pub zoom: f64,
    /// Fixed ruler/header thickness in screen pixels.
    pub ruler_offset: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            ruler_offset: RULER_OFFSET,
        }
    }
}

impl Viewport {
    /// Create a viewport with the given zoom and ruler offset.
    pub fn new(zoom: f64, ruler_offset: f64) -> Self {
        debug_assert!(zoom > 0.0, "zoom must be positive");
        Self { zoom, ruler_offset }
    }

    /// Convert a screen pixel value to logical units, rounded to 2 decimals.
    pub fn to_logical(&self, pixel: f64) -> f64 {
        round_logical(pixel / self.zoom)
    }

    /// Convert a logical value to screen pixels.
    pub fn to_screen(&self, logical: f64) -> f64 {
        logical * self.zoom
    }

    /// Project a page-space offset (e.g. a guide line) to screen space.
    ///
    /// Guides are stored in document units; on screen they sit past the
    /// ruler strip, so the fixed offset is added after scaling.
    pub fn project(&self, logical: f64) -> f64 {
        logical * self.zoom + self.ruler_offset
    }

    /// Parse a pixel style value like `"12.5px"` and convert it to logical
    /// units. The interaction surface is required to supply well-formed
    /// values; anything non-numeric after stripping the suffix is an error.
    pub fn logical_from_px(&self, value: &str) -> GeometryResult<f64> {
        Ok(self.to_logical(parse_px(value)?))
    }
}

/// Strip a trailing unit suffix (`px`) and parse the numeric part.
pub fn parse_px(value: &str) -> GeometryResult<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number
        .trim()
        .parse::<f64>()
        .map_err(|_| GeometryError::MalformedPixelValue(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_logical_rounds_to_two_decimals() {
        let viewport = Viewport::new(3.0, 0.0);
        // 10 / 3 = 3.333... -> 3.33
        assert!((viewport.to_logical(10.0) - 3.33).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_trip_within_precision() {
        let viewport = Viewport::new(2.0, 16.0);
        for v in [0.0, 1.0, 37.5, 123.46, 999.98] {
            let logical = viewport.to_logical(v);
            let back = viewport.to_screen(logical);
            assert!((back - v).abs() <= 0.01 * viewport.zoom, "v = {v}");
        }
    }

    #[test]
    fn test_guide_projection() {
        // zoom = 2, ruler offset = 16: logical 50 lands at 116 on screen.
        let viewport = Viewport::new(2.0, 16.0);
        assert!((viewport.project(50.0) - 116.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_px_strips_suffix() {
        assert!((parse_px("12.5px").unwrap() - 12.5).abs() < f64::EPSILON);
        assert!((parse_px("40").unwrap() - 40.0).abs() < f64::EPSILON);
        assert!((parse_px(" -3px ").unwrap() + 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_px_rejects_garbage() {
        assert_eq!(
            parse_px("abcpx"),
            Err(GeometryError::MalformedPixelValue("abcpx".to_string()))
        );
        assert!(parse_px("").is_err());
    }

    #[test]
    fn test_logical_from_px() {
        let viewport = Viewport::new(2.0, 16.0);
        assert!((viewport.logical_from_px("25px").unwrap() - 12.5).abs() < f64::EPSILON);
    }
}
