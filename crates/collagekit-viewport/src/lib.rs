//! # CollageKit Viewport
//!
//! Per-tile viewport transform engine for CollageKit.
//! Converts pointer drags and wheel/key zoom gestures into clamped image
//! placements, and serializes those placements as container-size-independent
//! percentages so the same collage renders the same crop at any display
//! size.

pub mod clamp;
pub mod codec;
pub mod controller;
pub mod cover;
pub mod modifier;

pub use clamp::clamp_offset;
pub use codec::{to_percent, to_pixels};
pub use controller::{
    Placement, PointerButton, ViewportController, ViewportState, MAX_SCALE, MIN_SCALE, ZOOM_STEP,
};
pub use cover::{cover_size, max_excursion};
pub use modifier::{key_zoom_step, ZoomModifier};
