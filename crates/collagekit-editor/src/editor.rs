//! Host-facing editor facade.
//!
//! Owns the persisted collage record plus one viewport controller per clip,
//! routes the host's input and collaborator signals to the right
//! controller, and publishes the resulting commits on the event bus so the
//! host can persist them. The facade is the only place record and
//! controllers are mutated together, which keeps the two views of a clip
//! (stored percentages vs. live gesture state) from drifting apart.

use std::sync::Arc;

use collagekit_core::error::{AssetError, GeometryError, TemplateError};
use collagekit_core::{
    event_bus, AssetEvent, ClipEvent, CollageEvent, ErrorEvent, EventBus, LayoutEvent, Result,
    Size, Vec2,
};
use collagekit_viewport::{Placement, PointerButton, ViewportController, ZoomModifier};
use tracing::{debug, info};

use crate::collage::{Clip, Collage, CollageOptions, ImageRef, Offset};
use crate::template::Template;

/// Editor facade over one collage document.
pub struct CollageEditor {
    collage: Collage,
    template: Template,
    controllers: Vec<ViewportController>,
    zoom_modifier: ZoomModifier,
    /// Explicit bus for embedding/tests; the global bus otherwise.
    bus: Option<Arc<EventBus>>,
}

impl CollageEditor {
    /// Creates an editor over a document, publishing to the global bus.
    ///
    /// Fails if the document's template identifier does not parse. Clips
    /// are resized to the template's clip count; controllers for non-empty
    /// clips stay `Empty` until the host reports the image's natural size
    /// via [`image_restored`](Self::image_restored).
    pub fn new(collage: Collage) -> Result<Self> {
        Self::build(collage, None)
    }

    /// Creates an editor publishing to an explicit bus.
    pub fn with_bus(collage: Collage, bus: Arc<EventBus>) -> Result<Self> {
        Self::build(collage, Some(bus))
    }

    fn build(mut collage: Collage, bus: Option<Arc<EventBus>>) -> Result<Self> {
        let template = Template::parse(&collage.template).map_err(collagekit_core::Error::from)?;
        collage.resize_clips(&template);
        let controllers = (0..template.clip_count())
            .map(|_| ViewportController::new())
            .collect();

        info!(
            "Collage editor opened: template {} with {} clips",
            template,
            template.clip_count()
        );

        Ok(Self {
            collage,
            template,
            controllers,
            zoom_modifier: ZoomModifier::new(),
            bus,
        })
    }

    /// The current document.
    pub fn collage(&self) -> &Collage {
        &self.collage
    }

    /// The parsed layout template.
    pub fn template(&self) -> &Template {
        &self.template
    }

    /// The viewport controller for one clip.
    pub fn controller(&self, clip: usize) -> Result<&ViewportController> {
        self.check_clip(clip)?;
        Ok(&self.controllers[clip])
    }

    /// True if any clip holds an image.
    ///
    /// The host shows a confirmation dialog before a template switch while
    /// this is set, since switching resets every clip.
    pub fn has_content(&self) -> bool {
        self.collage.clips.iter().any(|clip| !clip.is_empty())
    }

    // --- collaborator signals -------------------------------------------

    /// A new image finished uploading and was bound to a clip.
    ///
    /// Resets the clip's placement to the natural cover fit and publishes
    /// the reset placement for persistence.
    pub fn image_bound(
        &mut self,
        clip: usize,
        image: ImageRef,
        natural_size: Size,
    ) -> Result<()> {
        self.check_clip(clip)?;

        match self.controllers[clip].bind_image(natural_size) {
            Some(placement) => {
                self.collage.clips[clip].image = Some(image);
                self.publish(CollageEvent::Asset(AssetEvent::ImageBound { clip }));
                self.commit(clip, placement);
                Ok(())
            }
            None => {
                self.reset_clip(clip);
                self.reject_geometry(
                    clip,
                    GeometryError::DegenerateImage {
                        width: natural_size.width,
                        height: natural_size.height,
                    },
                );
                Ok(())
            }
        }
    }

    /// A persisted clip's image was loaded again (document reopened).
    ///
    /// Unlike [`image_bound`](Self::image_bound) this keeps the stored
    /// scale and offset, re-clamped against the current tile, so the saved
    /// crop reappears.
    pub fn image_restored(&mut self, clip: usize, natural_size: Size) -> Result<()> {
        self.check_clip(clip)?;
        let stored = &self.collage.clips[clip];
        if stored.is_empty() {
            debug!("Restore for empty clip {} ignored", clip);
            return Ok(());
        }

        let scale = stored.scale;
        let offset = stored.offset.to_vec2();
        if let Some(placement) = self.controllers[clip].restore(natural_size, scale, offset) {
            self.commit(clip, placement);
        } else {
            self.reset_clip(clip);
            self.reject_geometry(
                clip,
                GeometryError::DegenerateImage {
                    width: natural_size.width,
                    height: natural_size.height,
                },
            );
        }
        Ok(())
    }

    /// The upload or load of a clip's image failed.
    ///
    /// The clip resets to empty and the failure is surfaced to the host.
    pub fn image_failed(&mut self, clip: usize, reason: &str) -> Result<()> {
        self.check_clip(clip)?;
        let error = AssetError::LoadFailed {
            reason: reason.to_string(),
        };
        tracing::warn!("Clip {}: {}", clip, error);

        self.reset_clip(clip);
        self.publish(CollageEvent::Asset(AssetEvent::ImageFailed {
            clip,
            reason: reason.to_string(),
        }));
        Ok(())
    }

    /// The user switched layout templates.
    ///
    /// Every clip resets to empty and the controller set is rebuilt at the
    /// new clip count. Fails (leaving the document untouched) if the new
    /// identifier does not parse.
    pub fn template_changed(&mut self, new_template: &str) -> Result<()> {
        let template = Template::parse(new_template).map_err(collagekit_core::Error::from)?;

        info!(
            "Template changed {} -> {}; resetting {} clips",
            self.template,
            template,
            self.collage.clips.len()
        );

        let count = template.clip_count();
        self.collage.template = template.id().to_string();
        self.collage.clips = vec![Clip::default(); count];
        self.controllers = (0..count).map(|_| ViewportController::new()).collect();
        self.template = template;

        self.publish(CollageEvent::Layout(LayoutEvent::TemplateChanged {
            template: new_template.to_string(),
        }));
        for clip in 0..count {
            self.publish(CollageEvent::Clip(ClipEvent::Reset { clip }));
        }
        Ok(())
    }

    /// A tile's laid-out size changed (container resize, options change).
    ///
    /// Empty clips just record the size; bound clips refit, and a changed
    /// stored offset is republished for persistence.
    pub fn tile_resized(&mut self, clip: usize, size: Size) -> Result<()> {
        self.check_clip(clip)?;
        if size.is_degenerate() {
            self.reject_geometry(
                clip,
                GeometryError::ZeroSizedTile {
                    width: size.width,
                    height: size.height,
                },
            );
            return Ok(());
        }

        self.publish(CollageEvent::Layout(LayoutEvent::TileResized {
            clip,
            width: size.width,
            height: size.height,
        }));

        let controller = &mut self.controllers[clip];
        if controller.is_empty() {
            controller.set_tile_size(size);
        } else if let Some(placement) = controller.refit(size) {
            self.commit(clip, placement);
        }
        Ok(())
    }

    /// The collage presentation options changed.
    ///
    /// Tiles get new sizes out of this; the host re-measures and reports
    /// them per clip through [`tile_resized`](Self::tile_resized).
    pub fn options_changed(&mut self, options: CollageOptions) {
        self.collage.options = options;
        self.publish(CollageEvent::Layout(LayoutEvent::OptionsChanged {
            height_ratio: options.height_ratio,
            spacing: options.spacing,
            frame: options.frame,
        }));
    }

    // --- input events ----------------------------------------------------

    /// Pointer went down on a clip.
    pub fn pan_start(&mut self, clip: usize, pointer: Vec2, button: PointerButton) -> Result<()> {
        self.check_clip(clip)?;
        self.controllers[clip].pan_start(pointer, button);
        Ok(())
    }

    /// Pointer moved during a drag. Returns the live pixel offset the host
    /// should apply to the clip's render, if a drag is in progress.
    pub fn pan_move(&mut self, clip: usize, pointer: Vec2) -> Result<Option<Vec2>> {
        self.check_clip(clip)?;
        Ok(self.controllers[clip].pan_move(pointer))
    }

    /// Pointer released (anywhere; the host listens globally).
    pub fn pan_end(&mut self, clip: usize) -> Result<()> {
        self.check_clip(clip)?;
        if let Some(placement) = self.controllers[clip].pan_end() {
            self.commit(clip, placement);
        }
        Ok(())
    }

    /// Applies a signed zoom step to a clip.
    pub fn zoom_by(&mut self, clip: usize, delta: f64) -> Result<()> {
        self.check_clip(clip)?;
        if let Some(placement) = self.controllers[clip].zoom_by(delta) {
            self.commit(clip, placement);
        }
        Ok(())
    }

    /// A wheel tick over a clip; zooms only while the modifier key is held.
    pub fn wheel(&mut self, clip: usize, wheel_delta: f64) -> Result<()> {
        match self.zoom_modifier.wheel_zoom_step(wheel_delta) {
            Some(step) => self.zoom_by(clip, step),
            None => self.check_clip(clip),
        }
    }

    /// Plus/minus key pressed while a clip is focused.
    pub fn zoom_key(&mut self, clip: usize, zoom_in: bool) -> Result<()> {
        self.zoom_by(clip, collagekit_viewport::key_zoom_step(zoom_in))
    }

    /// The zoom modifier key went down.
    pub fn modifier_pressed(&mut self) {
        self.zoom_modifier.press();
    }

    /// The zoom modifier key was released.
    pub fn modifier_released(&mut self) {
        self.zoom_modifier.release();
    }

    /// The window lost focus; clears held-key state and ends any drag.
    pub fn window_blurred(&mut self) {
        self.zoom_modifier.window_blurred();
        for clip in 0..self.controllers.len() {
            if let Some(placement) = self.controllers[clip].pan_end() {
                self.commit(clip, placement);
            }
        }
    }

    // --- internals -------------------------------------------------------

    fn check_clip(&self, clip: usize) -> Result<()> {
        let len = self.collage.clips.len();
        if clip >= len {
            return Err(TemplateError::ClipIndexOutOfBounds { index: clip, len }.into());
        }
        Ok(())
    }

    /// Writes a committed placement into the record and publishes whichever
    /// parts actually changed.
    fn commit(&mut self, clip: usize, placement: Placement) {
        let new_offset = Offset::from_vec2(placement.offset_percent);
        let (offset_changed, scale_changed) = {
            let record = &mut self.collage.clips[clip];
            let offset_changed = record.offset != new_offset;
            let scale_changed = record.scale != placement.scale;
            record.offset = new_offset;
            record.scale = placement.scale;
            (offset_changed, scale_changed)
        };

        if offset_changed {
            self.publish(CollageEvent::Clip(ClipEvent::OffsetChanged {
                clip,
                top: new_offset.top,
                left: new_offset.left,
            }));
        }
        if scale_changed {
            self.publish(CollageEvent::Clip(ClipEvent::ScaleChanged {
                clip,
                scale: placement.scale,
            }));
        }
    }

    fn reject_geometry(&self, clip: usize, error: GeometryError) {
        tracing::warn!("Clip {}: {}", clip, error);
        self.publish(CollageEvent::Error(ErrorEvent::GeometryRejected {
            clip,
            reason: error.to_string(),
        }));
    }

    fn reset_clip(&mut self, clip: usize) {
        self.collage.clips[clip].reset();
        self.controllers[clip].unbind_image();
        self.publish(CollageEvent::Clip(ClipEvent::Reset { clip }));
    }

    fn publish(&self, event: CollageEvent) {
        debug!("{}", event.description());
        let result = match &self.bus {
            Some(bus) => bus.publish(event),
            None => event_bus().publish(event),
        };
        // Nobody listening is fine; the record itself is still consistent.
        let _ = result;
    }
}

impl std::fmt::Debug for CollageEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollageEditor")
            .field("template", &self.template.id())
            .field("clips", &self.collage.clips.len())
            .field("has_content", &self.has_content())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collagekit_core::EventFilter;
    use std::sync::Mutex;

    fn editor_with_events() -> (CollageEditor, Arc<Mutex<Vec<CollageEvent>>>, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        bus.subscribe(EventFilter::All, move |event| {
            sink.lock().unwrap().push(event);
        });

        let editor = CollageEditor::with_bus(Collage::default(), bus.clone()).unwrap();
        (editor, events, bus)
    }

    fn test_image() -> ImageRef {
        ImageRef(serde_json::json!({ "path": "images/photo.jpg" }))
    }

    #[test]
    fn test_invalid_template_rejected_at_open() {
        let collage = Collage {
            template: "2-x".to_string(),
            ..Collage::default()
        };
        assert!(CollageEditor::new(collage).is_err());
    }

    #[test]
    fn test_image_bound_resets_and_publishes() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();

        editor
            .image_bound(0, test_image(), Size::new(800.0, 600.0))
            .unwrap();

        let clip = &editor.collage().clips[0];
        assert!(!clip.is_empty());
        assert_eq!(clip.scale, 1.0);
        assert_eq!(clip.offset, Offset::default());

        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, CollageEvent::Asset(AssetEvent::ImageBound { clip: 0 }))));
    }

    #[test]
    fn test_degenerate_image_rejected() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();

        editor
            .image_bound(0, test_image(), Size::new(0.0, 600.0))
            .unwrap();

        assert!(editor.collage().clips[0].is_empty());
        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, CollageEvent::Error(ErrorEvent::GeometryRejected { .. }))));
    }

    #[test]
    fn test_degenerate_tile_resize_rejected() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();
        editor
            .image_bound(0, test_image(), Size::new(800.0, 600.0))
            .unwrap();

        editor.tile_resized(0, Size::new(0.0, 0.0)).unwrap();

        // Placement untouched, rejection surfaced.
        assert_eq!(
            editor.controller(0).unwrap().tile_size(),
            Size::new(200.0, 100.0)
        );
        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, CollageEvent::Error(ErrorEvent::GeometryRejected { clip: 0, .. }))));
    }

    #[test]
    fn test_image_failed_resets_clip() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(1, Size::new(200.0, 100.0)).unwrap();
        editor
            .image_bound(1, test_image(), Size::new(800.0, 600.0))
            .unwrap();
        assert!(editor.has_content());

        editor.image_failed(1, "upload rejected").unwrap();

        assert!(!editor.has_content());
        assert!(editor.collage().clips[1].is_empty());
        let events = events.lock().unwrap();
        assert!(events.iter().any(|e| matches!(
            e,
            CollageEvent::Asset(AssetEvent::ImageFailed { clip: 1, .. })
        )));
        assert!(events
            .iter()
            .any(|e| matches!(e, CollageEvent::Clip(ClipEvent::Reset { clip: 1 }))));
    }

    #[test]
    fn test_template_change_resets_nonempty_clips() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();
        editor
            .image_bound(0, test_image(), Size::new(800.0, 600.0))
            .unwrap();
        editor.zoom_by(0, 0.5).unwrap();
        assert!(editor.has_content());

        editor.template_changed("2-2").unwrap();

        assert_eq!(editor.collage().template, "2-2");
        assert_eq!(editor.collage().clips.len(), 4);
        for clip in &editor.collage().clips {
            assert!(clip.is_empty());
            assert_eq!(clip.scale, 1.0);
            assert_eq!(clip.offset, Offset::default());
        }
        assert!(!editor.has_content());

        let events = events.lock().unwrap();
        assert!(events
            .iter()
            .any(|e| matches!(e, CollageEvent::Layout(LayoutEvent::TemplateChanged { .. }))));
        let resets = events
            .iter()
            .filter(|e| matches!(e, CollageEvent::Clip(ClipEvent::Reset { .. })))
            .count();
        assert!(resets >= 4);
    }

    #[test]
    fn test_invalid_template_change_leaves_document() {
        let (mut editor, _events, _bus) = editor_with_events();
        assert!(editor.template_changed("nope").is_err());
        assert_eq!(editor.collage().template, "2-1");
        assert_eq!(editor.collage().clips.len(), 3);
    }

    #[test]
    fn test_drag_commit_published_once_on_release() {
        let (mut editor, events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();
        editor
            .image_bound(0, test_image(), Size::new(400.0, 100.0))
            .unwrap();

        editor
            .pan_start(0, Vec2::ZERO, PointerButton::Primary)
            .unwrap();
        editor.pan_move(0, Vec2::new(-50.0, 0.0)).unwrap();
        editor.pan_move(0, Vec2::new(-80.0, 0.0)).unwrap();

        let offset_events_before = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, CollageEvent::Clip(ClipEvent::OffsetChanged { .. })))
            .count();
        assert_eq!(offset_events_before, 0);

        editor.pan_end(0).unwrap();

        let clip = &editor.collage().clips[0];
        // Pointer moved 80px right; image slid right, left margin -80px of
        // a 200px tile = -40%.
        assert_eq!(clip.offset.left, -40.0);
        assert_eq!(clip.offset.top, 0.0);

        let offset_events = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| matches!(e, CollageEvent::Clip(ClipEvent::OffsetChanged { .. })))
            .count();
        assert_eq!(offset_events, 1);
    }

    #[test]
    fn test_wheel_requires_modifier() {
        let (mut editor, _events, _bus) = editor_with_events();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();
        editor
            .image_bound(0, test_image(), Size::new(800.0, 600.0))
            .unwrap();

        editor.wheel(0, 120.0).unwrap();
        assert_eq!(editor.collage().clips[0].scale, 1.0);

        editor.modifier_pressed();
        editor.wheel(0, 120.0).unwrap();
        assert!((editor.collage().clips[0].scale - 1.1).abs() < 1e-9);

        editor.window_blurred();
        editor.wheel(0, 120.0).unwrap();
        assert!((editor.collage().clips[0].scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_restore_keeps_saved_crop() {
        let bus = Arc::new(EventBus::new());
        let mut collage = Collage::default();
        collage.clips[0] = Clip {
            image: Some(test_image()),
            scale: 2.0,
            offset: Offset::new(-50.0, -100.0),
        };

        let mut editor = CollageEditor::with_bus(collage, bus).unwrap();
        editor.tile_resized(0, Size::new(200.0, 100.0)).unwrap();
        editor.image_restored(0, Size::new(200.0, 100.0)).unwrap();

        let clip = &editor.collage().clips[0];
        assert_eq!(clip.scale, 2.0);
        assert_eq!(clip.offset, Offset::new(-50.0, -100.0));
    }

    #[test]
    fn test_clip_index_out_of_bounds() {
        let (mut editor, _events, _bus) = editor_with_events();
        assert!(editor.pan_end(3).is_err());
        assert!(editor
            .image_bound(7, test_image(), Size::new(10.0, 10.0))
            .is_err());
        assert!(editor.tile_resized(99, Size::new(10.0, 10.0)).is_err());
    }
}
