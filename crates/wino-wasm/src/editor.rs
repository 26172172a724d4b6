//! WASM bindings for the focal point editor.
//!
//! Wraps the core [`FocalPointEditor`] so the page can forward pointer, touch
//! and slider events to it and apply the styles it returns. Releasing the
//! pointer saves the focal point through [`HttpFocalPointStore`].
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const editor = new JsFocalPointEditor({ base_url: BASE_URL });
//! applyStyle(editor.load(wine.vivino_url, wine.image_focal_point, wine.image_zoom, wine.image_tilt));
//!
//! lockButton.onclick = () => setUnlocked(editor.toggle_lock());
//! zoomSlider.oninput = () => applyStyle(editor.set_zoom(zoomSlider.valueAsNumber));
//!
//! img.onpointerdown = (e) => { if (editor.pointer_down(e.clientX, e.clientY, e.target === img)) e.preventDefault(); };
//! window.onpointermove = (e) => applyStyle(editor.pointer_move(
//!   e.clientX, e.clientY, box.clientWidth, box.clientHeight, img.naturalWidth, img.naturalHeight));
//! window.onpointerup = () => editor.pointer_up();
//! ```

use crate::persist::HttpFocalPointStore;
use crate::types::{config_from_js, target_from_bool, JsImageStyle};
use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use wino_core::{
    commit, EditorConfig, EditorEffect, EditorIntent, FocalPointEditor, Point, ViewportGeometry,
};

/// Focal point editor handle for JavaScript.
#[wasm_bindgen]
pub struct JsFocalPointEditor {
    inner: FocalPointEditor,
}

/// Style to apply, if the effect asks for a render.
fn rendered(effect: EditorEffect) -> Option<JsImageStyle> {
    match effect {
        EditorEffect::Render(style) => Some(style.into()),
        _ => None,
    }
}

#[wasm_bindgen]
impl JsFocalPointEditor {
    /// Create a locked editor.
    ///
    /// # Arguments
    ///
    /// * `config` - Editor settings object, or `undefined` for defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the config object has the wrong shape or invalid values.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsFocalPointEditor, JsValue> {
        let config = config_from_js(config)?;
        if let Ok(level) = config.level() {
            log::set_max_level(level.to_level_filter());
        }
        Ok(Self::with_config(config))
    }

    /// Open the editor for a wine.
    ///
    /// Missing values fall back to a centered focal point, zoom 1 and no tilt.
    /// The editor is locked again and any drag is dropped.
    pub fn load(
        &mut self,
        identifier: String,
        focal_point: Option<String>,
        zoom: Option<f32>,
        tilt: Option<f32>,
    ) -> JsImageStyle {
        self.inner.dispatch(EditorIntent::Load {
            identifier,
            focal_point,
            zoom,
            tilt,
        });
        self.style()
    }

    /// Flip the lock. Returns `true` when the editor is now unlocked.
    pub fn toggle_lock(&mut self) -> bool {
        self.inner.dispatch(EditorIntent::ToggleLock);
        self.unlocked()
    }

    #[wasm_bindgen(getter)]
    pub fn unlocked(&self) -> bool {
        self.inner.lock().is_unlocked()
    }

    #[wasm_bindgen(getter)]
    pub fn dragging(&self) -> bool {
        self.inner.is_dragging()
    }

    /// Zoom slider changed. Returns `undefined` while locked.
    pub fn set_zoom(&mut self, zoom: f32) -> Option<JsImageStyle> {
        rendered(self.inner.dispatch(EditorIntent::SetZoom(zoom)))
    }

    /// Tilt slider changed. Returns `undefined` while locked.
    pub fn set_tilt(&mut self, tilt: f32) -> Option<JsImageStyle> {
        rendered(self.inner.dispatch(EditorIntent::SetTilt(tilt)))
    }

    /// Pointer or touch went down. Returns `true` if a drag started, in
    /// which case the caller should prevent the default action.
    pub fn pointer_down(&mut self, x: f32, y: f32, on_image: bool) -> bool {
        let effect = self.inner.dispatch(EditorIntent::PointerDown {
            pointer: Point::new(x, y),
            target: target_from_bool(on_image),
        });
        effect == EditorEffect::DragStarted
    }

    /// Pointer or touch moved.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Pointer position in client pixels
    /// * `container_width`, `container_height` - Viewport size
    /// * `natural_width`, `natural_height` - Intrinsic image size (0 until loaded)
    ///
    /// # Returns
    ///
    /// The new style, or `undefined` when not dragging or the image has no size yet.
    pub fn pointer_move(
        &mut self,
        x: f32,
        y: f32,
        container_width: f32,
        container_height: f32,
        natural_width: f32,
        natural_height: f32,
    ) -> Option<JsImageStyle> {
        rendered(self.inner.dispatch(EditorIntent::PointerMove {
            pointer: Point::new(x, y),
            geometry: ViewportGeometry::new(
                container_width,
                container_height,
                natural_width,
                natural_height,
            ),
        }))
    }

    /// Pointer or touch released.
    ///
    /// Ends the drag and saves the focal point. The promise resolves to
    /// `true` once the backend accepted it, and `false` when there was
    /// nothing to save or the save failed (failures are logged).
    pub fn pointer_up(&mut self) -> Promise {
        let EditorEffect::Persist(update) = self.inner.dispatch(EditorIntent::PointerUp) else {
            return Promise::resolve(&JsValue::FALSE);
        };

        let store = HttpFocalPointStore::new(self.inner.config().focal_point_url());
        future_to_promise(async move {
            let saved = commit(&store, &update).await;
            Ok(JsValue::from_bool(saved))
        })
    }

    /// Current style for the image.
    pub fn style(&self) -> JsImageStyle {
        self.inner.style().into()
    }

    /// Current focal point as `"X.XX% Y.YY%"`.
    #[wasm_bindgen(getter)]
    pub fn focal_point(&self) -> String {
        self.inner.state().focal().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f32 {
        self.inner.state().zoom
    }

    #[wasm_bindgen(getter)]
    pub fn tilt(&self) -> f32 {
        self.inner.state().tilt_degrees
    }
}

impl JsFocalPointEditor {
    /// Create an editor from an already parsed config.
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            inner: FocalPointEditor::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unlocked_editor() -> JsFocalPointEditor {
        let mut editor = JsFocalPointEditor::with_config(EditorConfig::default());
        editor.load(
            "https://www.vivino.com/wines/1".to_string(),
            Some("50% 50%".to_string()),
            Some(1.0),
            Some(0.0),
        );
        assert!(editor.toggle_lock());
        editor
    }

    #[test]
    fn test_load_returns_style() {
        let mut editor = JsFocalPointEditor::with_config(EditorConfig::default());
        let style = editor.load("w".to_string(), Some("25%".to_string()), Some(2.0), None);
        assert_eq!(style.object_position(), "50.00% 25.00%");
        assert_eq!(style.transform(), "scale(2) rotate(0deg)");
        assert!(!editor.unlocked());
    }

    #[test]
    fn test_sliders_need_unlock() {
        let mut editor = JsFocalPointEditor::with_config(EditorConfig::default());
        assert!(editor.set_zoom(2.0).is_none());
        assert!(editor.set_tilt(10.0).is_none());

        editor.toggle_lock();
        let style = editor.set_tilt(10.0).unwrap();
        assert_eq!(style.transform(), "scale(1) rotate(10deg)");
        assert_eq!(editor.tilt(), 10.0);
    }

    #[test]
    fn test_drag_moves_focal_point() {
        let mut editor = unlocked_editor();
        assert!(editor.pointer_down(200.0, 200.0, true));
        assert!(editor.dragging());

        let style = editor
            .pointer_move(50.0, 200.0, 300.0, 300.0, 600.0, 300.0)
            .unwrap();
        assert_eq!(style.object_position(), "100.00% 50.00%");
        assert_eq!(editor.focal_point(), "100.00% 50.00%");
    }

    #[test]
    fn test_drag_before_image_loads() {
        let mut editor = unlocked_editor();
        editor.pointer_down(0.0, 0.0, true);
        assert!(editor
            .pointer_move(100.0, 0.0, 300.0, 300.0, 0.0, 0.0)
            .is_none());
    }

    #[test]
    fn test_pointer_down_elsewhere() {
        let mut editor = unlocked_editor();
        assert!(!editor.pointer_down(0.0, 0.0, false));
        assert!(!editor.dragging());
    }
}
