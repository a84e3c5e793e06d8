//! Event type definitions for the event bus.
//!
//! This module defines the collaborator-facing signals organized by
//! category. Events are designed to be cloneable and serializable for
//! logging/replay: the engine emits clip placement changes for the host to
//! persist, and echoes the layout/asset signals it consumes so other parts
//! of the host UI can observe them.

use serde::{Deserialize, Serialize};

/// Root event enum for all collage events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollageEvent {
    /// Per-clip placement changes (offset, scale, reset)
    Clip(ClipEvent),
    /// Layout template and tile geometry changes
    Layout(LayoutEvent),
    /// Image binding lifecycle
    Asset(AssetEvent),
    /// Rejected operations and diagnostics
    Error(ErrorEvent),
}

impl CollageEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            CollageEvent::Clip(_) => EventCategory::Clip,
            CollageEvent::Layout(_) => EventCategory::Layout,
            CollageEvent::Asset(_) => EventCategory::Asset,
            CollageEvent::Error(_) => EventCategory::Error,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            CollageEvent::Clip(e) => e.description(),
            CollageEvent::Layout(e) => e.description(),
            CollageEvent::Asset(e) => e.description(),
            CollageEvent::Error(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Per-clip placement events.
    Clip,
    /// Layout and tile geometry events.
    Layout,
    /// Image binding lifecycle events.
    Asset,
    /// Rejected operations and diagnostics.
    Error,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Clip => write!(f, "Clip"),
            EventCategory::Layout => write!(f, "Layout"),
            EventCategory::Asset => write!(f, "Asset"),
            EventCategory::Error => write!(f, "Error"),
        }
    }
}

/// Per-clip placement events emitted for persistence by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ClipEvent {
    /// A pan or refit committed a new stored offset (width-relative
    /// percentages).
    OffsetChanged {
        /// Index of the clip within the collage.
        clip: usize,
        /// Committed top offset, percent of tile width.
        top: f64,
        /// Committed left offset, percent of tile width.
        left: f64,
    },
    /// A zoom committed a new scale factor.
    ScaleChanged {
        /// Index of the clip within the collage.
        clip: usize,
        /// Committed scale, within `[1.0, 3.0]`.
        scale: f64,
    },
    /// The clip was reset to its empty state.
    Reset {
        /// Index of the clip within the collage.
        clip: usize,
    },
}

impl ClipEvent {
    /// Get a short description for logging
    pub fn description(&self) -> String {
        match self {
            ClipEvent::OffsetChanged { clip, top, left } => {
                format!("Clip {} offset changed to ({:.2}%, {:.2}%)", clip, top, left)
            }
            ClipEvent::ScaleChanged { clip, scale } => {
                format!("Clip {} scale changed to {:.1}", clip, scale)
            }
            ClipEvent::Reset { clip } => format!("Clip {} reset", clip),
        }
    }
}

/// Layout template and tile geometry events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// The user switched to a different layout template; all clips were
    /// reset.
    TemplateChanged {
        /// The new template identifier.
        template: String,
    },
    /// A tile's laid-out size changed (container resize, spacing or height
    /// ratio change).
    TileResized {
        /// Index of the clip within the collage.
        clip: usize,
        /// New tile width in pixels.
        width: f64,
        /// New tile height in pixels.
        height: f64,
    },
    /// Collage presentation options changed.
    OptionsChanged {
        /// Tile height as a fraction of tile width.
        height_ratio: f64,
        /// Spacing between tiles, in percent of collage width.
        spacing: f64,
        /// Whether an outer frame is drawn.
        frame: bool,
    },
}

impl LayoutEvent {
    /// Get a short description for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::TemplateChanged { template } => {
                format!("Template changed to {:?}", template)
            }
            LayoutEvent::TileResized {
                clip,
                width,
                height,
            } => {
                format!("Clip {} tile resized to {:.0}x{:.0}", clip, width, height)
            }
            LayoutEvent::OptionsChanged {
                height_ratio,
                spacing,
                frame,
            } => {
                format!(
                    "Options changed: heightRatio={} spacing={} frame={}",
                    height_ratio, spacing, frame
                )
            }
        }
    }
}

/// Image binding lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AssetEvent {
    /// An image was bound to a clip; placement was reset to the natural
    /// cover fit.
    ImageBound {
        /// Index of the clip within the collage.
        clip: usize,
    },
    /// Image binding failed; the clip was reset to empty.
    ImageFailed {
        /// Index of the clip within the collage.
        clip: usize,
        /// Host-provided failure description.
        reason: String,
    },
}

impl AssetEvent {
    /// Get a short description for logging
    pub fn description(&self) -> String {
        match self {
            AssetEvent::ImageBound { clip } => format!("Clip {} image bound", clip),
            AssetEvent::ImageFailed { clip, reason } => {
                format!("Clip {} image failed: {}", clip, reason)
            }
        }
    }
}

/// Rejected operations and diagnostics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ErrorEvent {
    /// An operation was skipped because the tile or image geometry was
    /// unusable.
    GeometryRejected {
        /// Index of the clip within the collage.
        clip: usize,
        /// Description of the rejected precondition.
        reason: String,
    },
}

impl ErrorEvent {
    /// Get a short description for logging
    pub fn description(&self) -> String {
        match self {
            ErrorEvent::GeometryRejected { clip, reason } => {
                format!("Clip {} geometry rejected: {}", clip, reason)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_categories() {
        let event = CollageEvent::Clip(ClipEvent::Reset { clip: 0 });
        assert_eq!(event.category(), EventCategory::Clip);

        let event = CollageEvent::Layout(LayoutEvent::TemplateChanged {
            template: "2-1".to_string(),
        });
        assert_eq!(event.category(), EventCategory::Layout);
    }

    #[test]
    fn test_event_serialization_roundtrip() {
        let event = CollageEvent::Clip(ClipEvent::OffsetChanged {
            clip: 2,
            top: -50.0,
            left: -100.0,
        });

        let json = serde_json::to_string(&event).expect("serialize");
        let back: CollageEvent = serde_json::from_str(&json).expect("deserialize");

        match back {
            CollageEvent::Clip(ClipEvent::OffsetChanged { clip, top, left }) => {
                assert_eq!(clip, 2);
                assert_eq!(top, -50.0);
                assert_eq!(left, -100.0);
            }
            other => panic!("Wrong event after roundtrip: {:?}", other),
        }
    }

    #[test]
    fn test_descriptions_mention_clip() {
        let event = CollageEvent::Asset(AssetEvent::ImageFailed {
            clip: 1,
            reason: "upload rejected".to_string(),
        });
        assert!(event.description().contains("upload rejected"));
    }
}
