//! Pixel/percent conversion for stored offsets.
//!
//! Stored offsets are percentages so the same collage reproduces the same
//! crop at any display size. Both axes are normalized by tile *width*, not
//! height for the vertical axis. That asymmetry matches the persisted
//! legacy content format and must not be "fixed" here: top offsets written
//! by older documents are width-relative too.
//!
//! No integer rounding happens at this layer; pixel snapping, if any, is a
//! rendering concern.

use collagekit_core::Vec2;

/// Converts a pixel offset to a width-relative percentage offset.
///
/// Formula (both axes):
/// ```text
/// percent = pixels / (tile_width / 100)
/// ```
///
/// `tile_width` must be positive; the tile is not laid out otherwise and
/// callers are required to guard that state before converting.
pub fn to_percent(offset_px: Vec2, tile_width: f64) -> Vec2 {
    debug_assert!(tile_width > 0.0, "offset codec used before tile layout");
    let unit = tile_width / 100.0;
    Vec2::new(offset_px.x / unit, offset_px.y / unit)
}

/// Converts a width-relative percentage offset back to pixels.
///
/// Exact inverse of [`to_percent`] for the same `tile_width`.
pub fn to_pixels(offset_percent: Vec2, tile_width: f64) -> Vec2 {
    debug_assert!(tile_width > 0.0, "offset codec used before tile layout");
    let unit = tile_width / 100.0;
    Vec2::new(offset_percent.x * unit, offset_percent.y * unit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_to_percent_is_width_relative_on_both_axes() {
        // Tile 200px wide: 1% == 2px regardless of tile height.
        let percent = to_percent(Vec2::new(-200.0, -100.0), 200.0);
        assert_eq!(percent, Vec2::new(-100.0, -50.0));
    }

    #[test]
    fn test_to_pixels_inverts_to_percent() {
        let px = Vec2::new(-137.5, -42.25);
        let back = to_pixels(to_percent(px, 320.0), 320.0);
        assert!((back.x - px.x).abs() < 1e-12);
        assert!((back.y - px.y).abs() < 1e-12);
    }

    #[test]
    fn test_zero_offset_is_zero_percent() {
        assert_eq!(to_percent(Vec2::ZERO, 640.0), Vec2::ZERO);
        assert_eq!(to_pixels(Vec2::ZERO, 640.0), Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn prop_roundtrip_is_lossless(
            x in -10_000.0..10_000.0f64,
            y in -10_000.0..10_000.0f64,
            width in 1.0..10_000.0f64,
        ) {
            let px = Vec2::new(x, y);
            let back = to_pixels(to_percent(px, width), width);
            prop_assert!((back.x - px.x).abs() <= px.x.abs() * 1e-12 + 1e-9);
            prop_assert!((back.y - px.y).abs() <= px.y.abs() * 1e-12 + 1e-9);
        }

        #[test]
        fn prop_percent_is_independent_of_height(
            x in -1000.0..0.0f64,
            y in -1000.0..0.0f64,
            width in 1.0..5000.0f64,
        ) {
            // The vertical axis divides by width as well, so varying an
            // imaginary tile height changes nothing.
            let px = Vec2::new(x, y);
            let percent = to_percent(px, width);
            prop_assert!((percent.y - y / (width / 100.0)).abs() < 1e-9);
        }
    }
}
