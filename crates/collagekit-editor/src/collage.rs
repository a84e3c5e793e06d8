//! The persisted collage record.
//!
//! This is the schema the host stores and reloads; field names follow the
//! legacy JSON format (`heightRatio`, width-relative `offset` percentages)
//! so existing documents keep deserializing.

use collagekit_core::Vec2;
use serde::{Deserialize, Serialize};

use crate::template::Template;

/// Opaque reference to the bound raster asset.
///
/// Owned by the transport collaborator; the engine stores and round-trips
/// the host's JSON payload without interpreting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(pub serde_json::Value);

/// Stored clip offset in width-relative percentages.
///
/// `0` means the image edge is flush with the tile edge; negative values
/// slide the image so it overflows the tile in that direction. Both `top`
/// and `left` are percentages of tile *width* (legacy convention).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Converts to the engine's vector form (`x` = left, `y` = top).
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Converts from the engine's vector form (`x` = left, `y` = top).
    pub fn from_vec2(v: Vec2) -> Self {
        Self {
            top: v.y,
            left: v.x,
        }
    }
}

/// Collage presentation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollageOptions {
    /// Tile height as a fraction of tile width.
    pub height_ratio: f64,
    /// Spacing between tiles, percent of collage width.
    pub spacing: f64,
    /// Whether an outer frame is drawn.
    pub frame: bool,
}

impl Default for CollageOptions {
    fn default() -> Self {
        Self {
            height_ratio: 0.75,
            spacing: 0.5,
            frame: true,
        }
    }
}

/// One collage cell's persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    /// Bound asset, `None` while the cell is empty.
    #[serde(default)]
    pub image: Option<ImageRef>,
    /// Zoom factor, `1.0` (natural cover fit) to `3.0`.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Stored offset, width-relative percentages.
    #[serde(default)]
    pub offset: Offset,
}

fn default_scale() -> f64 {
    1.0
}

impl Clip {
    /// True while no image is bound.
    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    /// Resets to the empty state: no image, natural scale, zero offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self {
            image: None,
            scale: default_scale(),
            offset: Offset::default(),
        }
    }
}

/// The whole persisted collage document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collage {
    /// Layout identifier, opaque to the viewport engine.
    pub template: String,
    /// Presentation options.
    #[serde(default)]
    pub options: CollageOptions,
    /// One clip per collage cell, in template order.
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Collage {
    /// Creates an empty collage for the given template.
    pub fn for_template(template: &Template) -> Self {
        Self {
            template: template.id().to_string(),
            options: CollageOptions::default(),
            clips: vec![Clip::default(); template.clip_count()],
        }
    }

    /// Resizes `clips` to the template's clip count, filling with empty
    /// clips and dropping extras from the end.
    pub fn resize_clips(&mut self, template: &Template) {
        self.clips.resize(template.clip_count(), Clip::default());
    }
}

impl Default for Collage {
    fn default() -> Self {
        // The legacy editor's defaults for a fresh document.
        let template = Template::parse("2-1").expect("default template is valid");
        Self::for_template(&template)
    }
}
