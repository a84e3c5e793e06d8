//! # CollageKit
//!
//! An authoring engine for image collages: a grid of fixed-aspect tiles,
//! each holding one photo the user can pan and zoom within its frame. The
//! engine converts pointer drags and wheel/key zoom gestures into clamped
//! placements and stores them as container-size-independent percentages, so
//! the same collage reproduces the same crops at any display size.
//!
//! ## Architecture
//!
//! CollageKit is organized as a workspace with multiple crates:
//!
//! 1. **collagekit-core** - Geometry value types, errors, event bus
//! 2. **collagekit-viewport** - Per-tile transform engine: margin clamp,
//!    pixel/percent codec, cover sizing, gesture state machine
//! 3. **collagekit-editor** - Persisted document model, layout templates,
//!    host-facing editor facade
//! 4. **collagekit** - This crate: re-exports and logging setup
//!
//! The host (form rendering, file upload transport, persistence of the
//! surrounding document) stays outside: it feeds input and collaborator
//! signals into [`CollageEditor`] and subscribes to the event bus for the
//! placement commits it should persist.

pub use collagekit_core::{
    event_bus, AssetError, AssetEvent, ClipEvent, CollageEvent, Error, ErrorEvent, EventBus,
    EventBusConfig, EventCategory, EventFilter, GeometryError, LayoutEvent, Result, Size,
    SubscriptionId, TemplateError, Vec2,
};

pub use collagekit_viewport::{
    clamp_offset, cover_size, key_zoom_step, max_excursion, to_percent, to_pixels, Placement,
    PointerButton, ViewportController, ViewportState, ZoomModifier, MAX_SCALE, MIN_SCALE,
    ZOOM_STEP,
};

pub use collagekit_editor::{
    Clip, Collage, CollageEditor, CollageOptions, ImageRef, Offset, Template,
};

/// Crate version at build time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Timestamp of the build, stamped by the build script.
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging for host applications
///
/// Sets up tracing with:
/// - Console output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    tracing::info!("CollageKit {} ({})", VERSION, BUILD_DATE);
    Ok(())
}
