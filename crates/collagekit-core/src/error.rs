//! Error handling for CollageKit
//!
//! Provides error types for all layers of the engine:
//! - Geometry errors (precondition violations on tile/image dimensions)
//! - Template errors (layout identifiers, clip addressing)
//! - Asset errors (image binding failures reported by the host)
//!
//! All error types use `thiserror` for ergonomic error handling. Nothing in
//! this engine is fatal: geometry violations are logged and the offending
//! operation skipped, asset failures reset the clip to empty, and
//! out-of-range numeric input is clamped silently rather than reported.

use thiserror::Error;

/// Geometry precondition violations
///
/// Raised when an operation receives dimensions it cannot derive a valid
/// placement from. Callers log these and skip the operation; they never
/// propagate as a panic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The tile has no laid-out extent yet
    #[error("Tile has zero or invalid size ({width}x{height})")]
    ZeroSizedTile {
        /// Reported tile width in pixels.
        width: f64,
        /// Reported tile height in pixels.
        height: f64,
    },

    /// The bound image reported a natural size no cover fit exists for
    #[error("Image has degenerate natural size ({width}x{height})")]
    DegenerateImage {
        /// Reported natural width in pixels.
        width: f64,
        /// Reported natural height in pixels.
        height: f64,
    },
}

/// Layout template and clip addressing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TemplateError {
    /// The layout identifier does not encode a valid row layout
    #[error("Invalid layout template: {id:?}")]
    InvalidTemplate {
        /// The rejected identifier.
        id: String,
    },

    /// A clip index outside the current template's clip count
    #[error("Clip index {index} out of bounds (collage has {len} clips)")]
    ClipIndexOutOfBounds {
        /// The requested clip index.
        index: usize,
        /// The number of clips in the collage.
        len: usize,
    },
}

/// Asset binding errors surfaced by the transport collaborator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// The host failed to resolve the uploaded image
    #[error("Image load failed: {reason}")]
    LoadFailed {
        /// Host-provided failure description.
        reason: String,
    },
}

/// Top-level error type aggregating all layers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A geometry precondition violation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A template or clip addressing error.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// An asset binding failure.
    #[error(transparent)]
    Asset(#[from] AssetError),
}

/// Convenience result alias used throughout the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::ZeroSizedTile {
            width: 0.0,
            height: 120.0,
        };
        assert_eq!(err.to_string(), "Tile has zero or invalid size (0x120)");

        let err = TemplateError::ClipIndexOutOfBounds { index: 4, len: 3 };
        assert_eq!(
            err.to_string(),
            "Clip index 4 out of bounds (collage has 3 clips)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = AssetError::LoadFailed {
            reason: "timeout".to_string(),
        }
        .into();
        assert!(matches!(err, Error::Asset(_)));
        assert_eq!(err.to_string(), "Image load failed: timeout");
    }
}
