//! Zoom key-chord state.
//!
//! Wheel scrolling only zooms while the zoom modifier key is held, so
//! ordinary page scrolling over the collage stays a scroll. The held state
//! is explicit, owned by the host, and passed into the wheel routing rather
//! than living in a global; it must be cleared when the window loses focus
//! or a release missed during the blur leaves the widget stuck in
//! "always zooming".

use crate::controller::ZOOM_STEP;

/// Tracks whether the zoom modifier key is currently held.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoomModifier {
    held: bool,
}

impl ZoomModifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The modifier key went down.
    pub fn press(&mut self) {
        self.held = true;
    }

    /// The modifier key was released.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// The window lost focus: the key-up may never arrive, so reset.
    pub fn window_blurred(&mut self) {
        self.held = false;
    }

    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Routes a wheel tick to a zoom step.
    ///
    /// `wheel_delta` is the normalized wheel movement, positive for
    /// scroll-up. Returns the signed scale step while the modifier is held,
    /// `None` otherwise (the host lets the event scroll the page instead).
    pub fn wheel_zoom_step(&self, wheel_delta: f64) -> Option<f64> {
        if !self.held || wheel_delta == 0.0 {
            return None;
        }
        Some(if wheel_delta > 0.0 {
            ZOOM_STEP
        } else {
            -ZOOM_STEP
        })
    }
}

/// Zoom step for the plus/minus keys, which work without the modifier.
pub fn key_zoom_step(zoom_in: bool) -> f64 {
    if zoom_in {
        ZOOM_STEP
    } else {
        -ZOOM_STEP
    }
}
