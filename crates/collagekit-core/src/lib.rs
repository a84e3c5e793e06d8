//! # CollageKit Core
//!
//! Core types, errors, and events for CollageKit.
//! Provides the geometry value types the viewport engine computes with, the
//! error taxonomy for precondition violations, and the event bus the engine
//! uses to notify its host of committed placement changes.

pub mod error;
pub mod event_bus;
pub mod geometry;

pub use error::{AssetError, Error, GeometryError, Result, TemplateError};

pub use geometry::{Size, Vec2};

// Re-export event bus for convenience
pub use event_bus::{
    event_bus, AssetEvent, ClipEvent, CollageEvent, ErrorEvent, EventBus, EventBusConfig,
    EventCategory, EventFilter, LayoutEvent, SubscriptionId,
};
