//! Per-tile viewport controller.
//!
//! Owns one tile's live placement state and turns pointer drags, zoom ticks,
//! and container resizes into clamped, resolution-independent placements.
//! All geometry (tile size, image natural size, pointer positions) arrives
//! as explicit parameters so the controller has no dependency on a live
//! visual tree and can be driven directly from tests.
//!
//! The state machine is `Empty` (no image) → `Idle` (image bound) →
//! `Panning` (pointer held) → `Idle`. Zoom is applied atomically per tick
//! from `Idle` and needs no state of its own. Operations invoked in the
//! wrong state are no-ops rather than errors, tolerating event ordering
//! races from the host's input dispatch.

use collagekit_core::{Size, Vec2};
use tracing::warn;

use crate::clamp::clamp_offset;
use crate::codec::{to_percent, to_pixels};
use crate::cover::{cover_size, max_excursion};

/// Minimum zoom: the image at its natural cover size.
pub const MIN_SCALE: f64 = 1.0;
/// Maximum zoom-in.
pub const MAX_SCALE: f64 = 3.0;
/// Scale change per wheel tick or zoom key press.
pub const ZOOM_STEP: f64 = 0.1;

/// Gesture lifecycle state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportState {
    /// No image bound; all gestures are ignored.
    Empty,
    /// Image bound, no active gesture.
    Idle,
    /// A pointer drag is in progress.
    Panning,
}

/// Pointer button reported with a pan start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// The primary (usually left) button; the only one that starts a drag.
    Primary,
    /// Any other button.
    Other,
}

/// A committed placement: what the host should persist after an operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Stored offset in width-relative percentages (`x` = left, `y` = top).
    pub offset_percent: Vec2,
    /// Stored scale within `[MIN_SCALE, MAX_SCALE]`.
    pub scale: f64,
}

/// Ephemeral drag session, alive between `pan_start` and `pan_end`.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    /// Pointer position when the drag started.
    origin: Vec2,
    /// Pixel offset snapshot at drag start.
    start_offset: Vec2,
    /// Excursion bound from the rendered size at drag start.
    max_excursion: Vec2,
    /// Last clamped pixel offset applied to the render.
    live_offset: Vec2,
    /// Whether any move was observed (a pure click commits nothing).
    moved: bool,
}

/// Viewport transform state for a single collage tile.
#[derive(Debug, Clone)]
pub struct ViewportController {
    state: ViewportState,
    /// Laid-out tile size; degenerate until the host reports layout.
    tile: Size,
    /// Natural size of the bound image, if any.
    image: Option<Size>,
    scale: f64,
    /// Committed offset in width-relative percentages.
    offset: Vec2,
    drag: Option<DragSession>,
}

impl ViewportController {
    /// Creates an empty controller with no image and no laid-out tile.
    pub fn new() -> Self {
        Self {
            state: ViewportState::Empty,
            tile: Size::default(),
            image: None,
            scale: MIN_SCALE,
            offset: Vec2::ZERO,
            drag: None,
        }
    }

    /// Creates an empty controller with a known tile size.
    pub fn with_tile_size(tile: Size) -> Self {
        let mut controller = Self::new();
        controller.tile = tile;
        controller
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// The committed offset in width-relative percentages.
    pub fn offset_percent(&self) -> Vec2 {
        self.offset
    }

    pub fn tile_size(&self) -> Size {
        self.tile
    }

    /// Natural size of the bound image, if one is bound.
    pub fn natural_size(&self) -> Option<Size> {
        self.image
    }

    pub fn is_empty(&self) -> bool {
        self.state == ViewportState::Empty
    }

    /// Current rendered size of the image covering the tile.
    ///
    /// `None` while empty or before the tile has been laid out.
    pub fn rendered_size(&self) -> Option<Size> {
        let image = self.image?;
        if self.tile.is_degenerate() {
            return None;
        }
        Some(cover_size(image, self.tile, self.scale))
    }

    /// Records the tile's laid-out size without touching the placement.
    ///
    /// Used for the initial layout and while no image is bound. Once an
    /// image is bound, [`refit`](Self::refit) is the right call: it re-clamps
    /// the stored offset against the new geometry.
    pub fn set_tile_size(&mut self, tile: Size) {
        if tile.is_degenerate() {
            warn!("Ignoring degenerate tile size {}", tile);
            return;
        }
        self.tile = tile;
    }

    /// Binds an image, resetting the placement to the natural cover fit.
    ///
    /// Valid from `Empty` and `Idle`; an in-flight drag is discarded because
    /// the host replaced the image under it. Returns the reset placement.
    pub fn bind_image(&mut self, natural_size: Size) -> Option<Placement> {
        if natural_size.is_degenerate() {
            warn!(
                "Rejecting image with degenerate natural size {}",
                natural_size
            );
            self.unbind_image();
            return None;
        }

        self.image = Some(natural_size);
        self.scale = MIN_SCALE;
        self.offset = Vec2::ZERO;
        self.drag = None;
        self.state = ViewportState::Idle;
        Some(self.placement())
    }

    /// Rebinds an image together with a previously stored placement.
    ///
    /// Used when a persisted collage is loaded: instead of resetting to the
    /// natural fit, the stored scale is clamped into range and the stored
    /// percentages re-clamped against the cover size for the current tile,
    /// reproducing the saved crop at whatever display size the tile now
    /// has. Returns the (possibly corrected) placement.
    pub fn restore(
        &mut self,
        natural_size: Size,
        scale: f64,
        offset_percent: Vec2,
    ) -> Option<Placement> {
        self.bind_image(natural_size)?;
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);

        if self.tile.is_degenerate() {
            // Tile not laid out yet: keep the stored offset verbatim and
            // let the first refit re-clamp it.
            self.offset = offset_percent;
            return Some(self.placement());
        }

        let rendered = cover_size(natural_size, self.tile, self.scale);
        let offset_px = to_pixels(offset_percent, self.tile.width);
        self.offset = to_percent(
            clamp_offset(offset_px, Vec2::ZERO, max_excursion(rendered, self.tile)),
            self.tile.width,
        );
        Some(self.placement())
    }

    /// Resets to `Empty`: no image, natural scale, zero offset.
    ///
    /// Used when the image fails to load or the layout template changes.
    pub fn unbind_image(&mut self) {
        self.image = None;
        self.scale = MIN_SCALE;
        self.offset = Vec2::ZERO;
        self.drag = None;
        self.state = ViewportState::Empty;
    }

    /// Starts a drag at the given pointer position.
    ///
    /// No-op unless idle with a bound image, a laid-out tile, and the
    /// primary button. Snapshots the committed offset and computes the
    /// excursion bound from the live rendered size.
    pub fn pan_start(&mut self, pointer: Vec2, button: PointerButton) {
        if button != PointerButton::Primary || self.state != ViewportState::Idle {
            return;
        }
        let Some(rendered) = self.rendered_size() else {
            warn!("Ignoring pan start before tile layout");
            return;
        };

        self.drag = Some(DragSession {
            origin: pointer,
            start_offset: to_pixels(self.offset, self.tile.width),
            max_excursion: max_excursion(rendered, self.tile),
            live_offset: to_pixels(self.offset, self.tile.width),
            moved: false,
        });
        self.state = ViewportState::Panning;
    }

    /// Moves the drag to a new pointer position.
    ///
    /// Returns the clamped live pixel offset the render should apply, or
    /// `None` when no drag is in progress. Nothing is committed until
    /// [`pan_end`](Self::pan_end).
    pub fn pan_move(&mut self, pointer: Vec2) -> Option<Vec2> {
        if self.state != ViewportState::Panning {
            return None;
        }
        let drag = self.drag.as_mut()?;

        // Grab-and-slide: moving the pointer left exposes content on the
        // right, so the delta is start minus current.
        let delta = drag.origin - pointer;
        drag.live_offset = clamp_offset(drag.start_offset, delta, drag.max_excursion);
        drag.moved = true;
        Some(drag.live_offset)
    }

    /// Ends the drag and commits the live offset as percentages.
    ///
    /// A pure click (no move observed) commits nothing. Must also be routed
    /// here when the pointer is released outside the tile or focus is lost;
    /// the host listens globally for the release.
    pub fn pan_end(&mut self) -> Option<Placement> {
        if self.state != ViewportState::Panning {
            return None;
        }
        let drag = self.drag.take();
        self.state = ViewportState::Idle;

        let drag = drag?;
        if !drag.moved {
            return None;
        }
        self.offset = to_percent(drag.live_offset, self.tile.width);
        Some(self.placement())
    }

    /// Applies one zoom step, keeping the visible crop centered.
    ///
    /// The scale delta is clamped into `[MIN_SCALE, MAX_SCALE]` silently.
    /// The rendered size change is split evenly between both ends of each
    /// axis and the offset re-clamped against the new excursion bound, so
    /// the previously visible center stays put as far as coverage allows.
    /// Commits immediately; no-op while panning or empty.
    pub fn zoom_by(&mut self, delta: f64) -> Option<Placement> {
        if self.state != ViewportState::Idle {
            return None;
        }
        let image = self.image?;
        if self.tile.is_degenerate() {
            warn!("Ignoring zoom before tile layout");
            return None;
        }

        let new_scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);

        let before = cover_size(image, self.tile, self.scale);
        let after = cover_size(image, self.tile, new_scale);

        let current = to_pixels(self.offset, self.tile.width);
        let growth = Vec2::new(
            (after.width - before.width) / 2.0,
            (after.height - before.height) / 2.0,
        );

        self.scale = new_scale;
        self.offset = to_percent(
            clamp_offset(current, growth, max_excursion(after, self.tile)),
            self.tile.width,
        );
        Some(self.placement())
    }

    /// Re-derives the placement for a new tile size at the current scale.
    ///
    /// The stored percentages are reinterpreted against the new tile width,
    /// the cover size recomputed, and the offset re-clamped with a zero
    /// delta. Idempotent for a repeated identical size. No-op unless idle
    /// with a bound image.
    pub fn refit(&mut self, new_tile: Size) -> Option<Placement> {
        if self.state != ViewportState::Idle {
            return None;
        }
        let image = self.image?;
        if new_tile.is_degenerate() {
            warn!("Ignoring refit to degenerate tile size {}", new_tile);
            return None;
        }

        let rendered = cover_size(image, new_tile, self.scale);
        let offset_px = to_pixels(self.offset, new_tile.width);

        self.tile = new_tile;
        self.offset = to_percent(
            clamp_offset(offset_px, Vec2::ZERO, max_excursion(rendered, new_tile)),
            new_tile.width,
        );
        Some(self.placement())
    }

    fn placement(&self) -> Placement {
        Placement {
            offset_percent: self.offset,
            scale: self.scale,
        }
    }
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}
