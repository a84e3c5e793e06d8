//! # Event Bus Module
//!
//! Provides a unified event bus for decoupled communication between the
//! viewport engine and its host.
//!
//! ## Overview
//!
//! The event bus enables publish/subscribe patterns across the widget:
//! - The engine emits typed events without knowing its subscribers
//! - The host filters and receives the events it wants to persist or react
//!   to (offset and scale commits, clip resets, asset failures)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use collagekit_core::event_bus::{event_bus, CollageEvent, ClipEvent, EventFilter, EventCategory};
//!
//! // Persist committed placements
//! let subscription = event_bus().subscribe(
//!     EventFilter::Categories(vec![EventCategory::Clip]),
//!     |event| {
//!         if let CollageEvent::Clip(clip) = event {
//!             println!("Clip event: {:?}", clip);
//!         }
//!     },
//! );
//!
//! // Unsubscribe when done
//! event_bus().unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
