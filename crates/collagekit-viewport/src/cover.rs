//! Cover sizing: scaling an image so it fully spans its tile.
//!
//! The fill axis is chosen by comparing aspect ratios. An image wider than
//! its tile fills the tile's height and overflows horizontally; a taller
//! image fills the width and overflows vertically. At `scale == 1.0` the
//! result is the smallest size with no gaps; larger scales magnify the
//! whole placement uniformly.

use collagekit_core::{Size, Vec2};

/// Computes the rendered size of an image covering a tile at a given scale.
///
/// Both `image` and `tile` must be non-degenerate; the viewport controller
/// guards that before calling.
pub fn cover_size(image: Size, tile: Size, scale: f64) -> Size {
    if image.aspect_ratio() > tile.aspect_ratio() {
        // Image is wider than the tile: fill height, overflow width.
        let height = tile.height * scale;
        Size::new(height * image.aspect_ratio(), height)
    } else {
        // Image is taller (or same shape): fill width, overflow height.
        let width = tile.width * scale;
        Size::new(width, width / image.aspect_ratio())
    }
}

/// Maximum distance the image may be slid before an edge enters the tile.
///
/// Per axis `rendered - tile`, floored at zero so a rendered size that
/// matches the tile exactly (within floating point) yields no excursion.
pub fn max_excursion(rendered: Size, tile: Size) -> Vec2 {
    Vec2::new(
        (rendered.width - tile.width).max(0.0),
        (rendered.height - tile.height).max(0.0),
    )
}
