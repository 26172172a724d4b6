//! Editor session state and intent dispatch.
//!
//! [`FocalPointEditor`] holds everything the label editor needs between
//! events: which wine is open, its transform, the lock, and the drag. UI
//! events are translated into an [`EditorIntent`] and fed through
//! [`FocalPointEditor::dispatch`], which answers with the single
//! [`EditorEffect`] the UI should carry out.

use crate::config::EditorConfig;
use crate::focal::{
    FocalDragger, FocalPoint, ImageStyle, ImageTransformState, LockState, Point, PointerTarget,
    ViewportGeometry,
};
use crate::persist::FocalPointUpdate;

/// Something the user did in the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Open the editor for a wine, using its stored image settings.
    Load {
        identifier: String,
        focal_point: Option<String>,
        zoom: Option<f32>,
        tilt: Option<f32>,
    },
    /// Lock or unlock editing.
    ToggleLock,
    /// Zoom slider moved.
    SetZoom(f32),
    /// Tilt slider moved.
    SetTilt(f32),
    /// Pointer or touch went down.
    PointerDown {
        pointer: Point,
        target: PointerTarget,
    },
    /// Pointer or touch moved.
    PointerMove {
        pointer: Point,
        geometry: ViewportGeometry,
    },
    /// Pointer or touch released.
    PointerUp,
}

/// What the UI should do in response to an intent.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEffect {
    /// Nothing changed.
    Nothing,
    /// Re-apply these styles to the image.
    Render(ImageStyle),
    /// The lock changed.
    LockChanged(LockState),
    /// A drag started; the UI should stop default pointer handling.
    DragStarted,
    /// A drag ended; save this update.
    Persist(FocalPointUpdate),
}

/// State of one open label editor.
#[derive(Debug, Clone, Default)]
pub struct FocalPointEditor {
    config: EditorConfig,
    identifier: String,
    state: ImageTransformState,
    lock: LockState,
    dragger: FocalDragger,
}

impl FocalPointEditor {
    /// Create a locked editor with no wine loaded.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Identifier of the loaded wine, empty if none.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn state(&self) -> &ImageTransformState {
        &self.state
    }

    pub fn lock(&self) -> LockState {
        self.lock
    }

    pub fn is_dragging(&self) -> bool {
        self.dragger.is_dragging()
    }

    /// Current CSS styles for the image.
    pub fn style(&self) -> ImageStyle {
        self.state.style()
    }

    /// Handle one intent.
    pub fn dispatch(&mut self, intent: EditorIntent) -> EditorEffect {
        match intent {
            EditorIntent::Load {
                identifier,
                focal_point,
                zoom,
                tilt,
            } => self.load(identifier, focal_point.as_deref(), zoom, tilt),
            EditorIntent::ToggleLock => {
                self.lock = self.lock.toggled();
                log::debug!("Focal point editor {:?}", self.lock);
                EditorEffect::LockChanged(self.lock)
            }
            EditorIntent::SetZoom(zoom) => {
                if !self.lock.is_unlocked() {
                    return EditorEffect::Nothing;
                }
                self.state.set_zoom(zoom, self.config.max_zoom);
                EditorEffect::Render(self.style())
            }
            EditorIntent::SetTilt(tilt) => {
                if !self.lock.is_unlocked() {
                    return EditorEffect::Nothing;
                }
                self.state.set_tilt(tilt);
                EditorEffect::Render(self.style())
            }
            EditorIntent::PointerDown { pointer, target } => {
                if self.dragger.begin(pointer, &self.state, self.lock, target) {
                    EditorEffect::DragStarted
                } else {
                    EditorEffect::Nothing
                }
            }
            EditorIntent::PointerMove { pointer, geometry } => {
                match self
                    .dragger
                    .update(pointer, &geometry, self.state.zoom, self.state.tilt_degrees)
                {
                    Some(focal) => {
                        self.state.set_focal(focal);
                        EditorEffect::Render(self.style())
                    }
                    None => EditorEffect::Nothing,
                }
            }
            EditorIntent::PointerUp => self.end_drag(),
        }
    }

    fn load(
        &mut self,
        identifier: String,
        focal_point: Option<&str>,
        zoom: Option<f32>,
        tilt: Option<f32>,
    ) -> EditorEffect {
        self.dragger.end();
        self.lock = LockState::Locked;
        self.identifier = identifier;

        let mut state = ImageTransformState::default();
        state.set_focal(FocalPoint::from_stored(focal_point));
        state.set_zoom(zoom.unwrap_or(1.0), self.config.max_zoom);
        state.set_tilt(tilt.unwrap_or(0.0));
        self.state = state;

        EditorEffect::Render(self.style())
    }

    fn end_drag(&mut self) -> EditorEffect {
        if self.dragger.end().is_none() {
            return EditorEffect::Nothing;
        }
        if self.identifier.is_empty() {
            log::warn!("Focal drag ended with no wine loaded, not saving");
            return EditorEffect::Nothing;
        }
        EditorEffect::Persist(FocalPointUpdate::new(
            self.identifier.clone(),
            self.state.focal(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::{commit, FocalPointStore, SaveError};
    use futures::executor::block_on;
    use std::cell::RefCell;

    const URL: &str = "https://www.vivino.com/wines/123";

    fn loaded(focal: Option<&str>) -> FocalPointEditor {
        let mut editor = FocalPointEditor::new(EditorConfig::default());
        editor.dispatch(EditorIntent::Load {
            identifier: URL.to_string(),
            focal_point: focal.map(str::to_string),
            zoom: Some(1.0),
            tilt: Some(0.0),
        });
        editor
    }

    fn unlocked(focal: Option<&str>) -> FocalPointEditor {
        let mut editor = loaded(focal);
        editor.dispatch(EditorIntent::ToggleLock);
        editor
    }

    fn landscape() -> ViewportGeometry {
        ViewportGeometry::new(300.0, 300.0, 600.0, 300.0)
    }

    fn down(editor: &mut FocalPointEditor, x: f32, y: f32) -> EditorEffect {
        editor.dispatch(EditorIntent::PointerDown {
            pointer: Point::new(x, y),
            target: PointerTarget::Image,
        })
    }

    fn drag_to(editor: &mut FocalPointEditor, x: f32, y: f32) -> EditorEffect {
        editor.dispatch(EditorIntent::PointerMove {
            pointer: Point::new(x, y),
            geometry: landscape(),
        })
    }

    #[derive(Default)]
    struct RecordingStore {
        saved: RefCell<Vec<FocalPointUpdate>>,
    }

    impl FocalPointStore for RecordingStore {
        async fn save(&self, update: &FocalPointUpdate) -> Result<(), SaveError> {
            self.saved.borrow_mut().push(update.clone());
            Ok(())
        }
    }

    #[test]
    fn test_load_upgrades_legacy_focal_point() {
        let editor = loaded(Some("37%"));
        assert_eq!(editor.style().object_position, "50.00% 37.00%");
        assert_eq!(editor.lock(), LockState::Locked);
    }

    #[test]
    fn test_load_defaults() {
        let mut editor = FocalPointEditor::new(EditorConfig::default());
        let effect = editor.dispatch(EditorIntent::Load {
            identifier: URL.to_string(),
            focal_point: None,
            zoom: None,
            tilt: None,
        });
        assert_eq!(effect, EditorEffect::Render(ImageTransformState::default().style()));
    }

    #[test]
    fn test_load_clamps_zoom_to_config() {
        let mut editor = FocalPointEditor::new(EditorConfig::default());
        editor.dispatch(EditorIntent::Load {
            identifier: URL.to_string(),
            focal_point: Some("50% 50%".to_string()),
            zoom: Some(10.0),
            tilt: Some(200.0),
        });
        assert_eq!(editor.state().zoom, 3.0);
        assert_eq!(editor.state().tilt_degrees, -160.0);
    }

    #[test]
    fn test_locked_editor_ignores_drag_and_sliders() {
        let mut editor = loaded(None);
        assert_eq!(down(&mut editor, 10.0, 10.0), EditorEffect::Nothing);
        assert_eq!(drag_to(&mut editor, 500.0, 10.0), EditorEffect::Nothing);
        assert_eq!(editor.dispatch(EditorIntent::SetZoom(2.0)), EditorEffect::Nothing);
        assert_eq!(editor.dispatch(EditorIntent::SetTilt(45.0)), EditorEffect::Nothing);
        assert_eq!(editor.dispatch(EditorIntent::PointerUp), EditorEffect::Nothing);
        assert_eq!(*editor.state(), ImageTransformState::default());
    }

    #[test]
    fn test_toggle_lock() {
        let mut editor = loaded(None);
        assert_eq!(
            editor.dispatch(EditorIntent::ToggleLock),
            EditorEffect::LockChanged(LockState::Unlocked)
        );
        assert_eq!(
            editor.dispatch(EditorIntent::ToggleLock),
            EditorEffect::LockChanged(LockState::Locked)
        );
    }

    #[test]
    fn test_pointer_down_off_image() {
        let mut editor = unlocked(None);
        let effect = editor.dispatch(EditorIntent::PointerDown {
            pointer: Point::new(0.0, 0.0),
            target: PointerTarget::Other,
        });
        assert_eq!(effect, EditorEffect::Nothing);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_drag_renders_focal_and_origin() {
        let mut editor = unlocked(None);
        assert_eq!(down(&mut editor, 200.0, 200.0), EditorEffect::DragStarted);
        match drag_to(&mut editor, 50.0, 200.0) {
            EditorEffect::Render(style) => {
                assert_eq!(style.object_position, "100.00% 50.00%");
                assert_eq!(style.transform_origin, "100.00% 50.00%");
            }
            other => panic!("expected render, got {:?}", other),
        }
    }

    #[test]
    fn test_zoom_change_mid_drag_applies() {
        let mut editor = unlocked(None);
        down(&mut editor, 200.0, 200.0);
        drag_to(&mut editor, 200.0, 230.0);
        assert_eq!(editor.state().focal_y, 50.0);

        editor.dispatch(EditorIntent::SetZoom(2.0));
        drag_to(&mut editor, 200.0, 230.0);
        assert!((editor.state().focal_y - 40.0).abs() < 1e-3);
    }

    #[test]
    fn test_unloaded_image_keeps_state() {
        let mut editor = unlocked(Some("20% 30%"));
        down(&mut editor, 0.0, 0.0);
        let effect = editor.dispatch(EditorIntent::PointerMove {
            pointer: Point::new(100.0, 100.0),
            geometry: ViewportGeometry::new(300.0, 300.0, 0.0, 0.0),
        });
        assert_eq!(effect, EditorEffect::Nothing);
        assert_eq!(editor.state().focal(), FocalPoint::new(20.0, 30.0));
    }

    #[test]
    fn test_pointer_up_persists_once() {
        let mut editor = unlocked(None);
        down(&mut editor, 200.0, 200.0);
        drag_to(&mut editor, 230.0, 200.0);

        let update = match editor.dispatch(EditorIntent::PointerUp) {
            EditorEffect::Persist(update) => update,
            other => panic!("expected persist, got {:?}", other),
        };
        assert_eq!(update.identifier, URL);
        assert_eq!(update.focal_point, "40.00% 50.00%");

        // A second release has no drag to end
        assert_eq!(editor.dispatch(EditorIntent::PointerUp), EditorEffect::Nothing);

        let store = RecordingStore::default();
        assert!(block_on(commit(&store, &update)));
        assert_eq!(store.saved.borrow().len(), 1);
        assert_eq!(store.saved.borrow()[0].focal_point, "40.00% 50.00%");
    }

    #[test]
    fn test_locking_mid_drag_still_finishes() {
        let mut editor = unlocked(None);
        down(&mut editor, 200.0, 200.0);
        editor.dispatch(EditorIntent::ToggleLock);
        assert!(editor.is_dragging());
        assert!(matches!(
            editor.dispatch(EditorIntent::PointerUp),
            EditorEffect::Persist(_)
        ));
    }

    #[test]
    fn test_no_identifier_does_not_persist() {
        let mut editor = FocalPointEditor::new(EditorConfig::default());
        editor.dispatch(EditorIntent::ToggleLock);
        down(&mut editor, 0.0, 0.0);
        assert!(editor.is_dragging());
        assert_eq!(editor.dispatch(EditorIntent::PointerUp), EditorEffect::Nothing);
        assert!(!editor.is_dragging());
    }

    #[test]
    fn test_load_cancels_open_drag() {
        let mut editor = unlocked(None);
        down(&mut editor, 0.0, 0.0);
        editor.dispatch(EditorIntent::Load {
            identifier: "other".to_string(),
            focal_point: None,
            zoom: None,
            tilt: None,
        });
        assert!(!editor.is_dragging());
        assert_eq!(editor.identifier(), "other");
    }
}
