//! Margin clamp keeping an oversized image inside its tile.
//!
//! Offsets are CSS-margin style: `0` means the image's top/left edge is
//! flush with the tile's, and negative values slide the image up/left so the
//! overflow is cropped. The clamp guarantees neither edge of the image ever
//! retreats inside the tile.

use collagekit_core::Vec2;

/// Applies a gesture delta to an offset and clamps the result.
///
/// `delta` uses grab-and-slide semantics (pointer start minus pointer
/// position), so it is subtracted from `current`. Each axis is then clamped
/// independently to `[-max_excursion.axis, 0]`:
///
/// ```text
/// offset.axis = clamp(current.axis - delta.axis, -max_excursion.axis, 0)
/// ```
///
/// Total for all inputs. When `max_excursion.axis == 0` the image exactly
/// fills the tile on that axis and the offset is pinned to `0`; negative
/// excursions are treated the same way.
pub fn clamp_offset(current: Vec2, delta: Vec2, max_excursion: Vec2) -> Vec2 {
    Vec2::new(
        clamp_axis(current.x - delta.x, max_excursion.x),
        clamp_axis(current.y - delta.y, max_excursion.y),
    )
}

fn clamp_axis(value: f64, max_excursion: f64) -> f64 {
    let max_excursion = max_excursion.max(0.0);
    value.clamp(-max_excursion, 0.0)
}
