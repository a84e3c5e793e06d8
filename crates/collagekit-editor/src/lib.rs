//! # CollageKit Editor
//!
//! Collage document model and host-facing editor facade.
//! Holds the persisted record (template, options, clips), parses layout
//! template identifiers, and routes host input and collaborator signals to
//! the per-clip viewport controllers.

pub mod collage;
pub mod editor;
pub mod template;

pub use collage::{Clip, Collage, CollageOptions, ImageRef, Offset};
pub use editor::CollageEditor;
pub use template::Template;
