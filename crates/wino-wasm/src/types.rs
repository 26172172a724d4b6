//! WASM-compatible wrapper types.
//!
//! This module provides JavaScript-friendly types that wrap the core Wino types,
//! handling the conversion between Rust and JavaScript data representations.

use wasm_bindgen::prelude::*;
use wino_core::{EditorConfig, ImageStyle, PointerTarget};

/// CSS values for the label image, as returned to JavaScript.
///
/// # Example (TypeScript)
///
/// ```typescript
/// const style = editor.pointer_move(x, y, box.width, box.height, img.naturalWidth, img.naturalHeight);
/// if (style) {
///   img.style.objectPosition = style.object_position;
///   img.style.transformOrigin = style.transform_origin;
///   img.style.transform = style.transform;
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq)]
pub struct JsImageStyle {
    object_position: String,
    transform_origin: String,
    transform: String,
}

#[wasm_bindgen]
impl JsImageStyle {
    /// `object-position` value, `"X% Y%"`
    #[wasm_bindgen(getter)]
    pub fn object_position(&self) -> String {
        self.object_position.clone()
    }

    /// `transform-origin` value, same as `object_position`
    #[wasm_bindgen(getter)]
    pub fn transform_origin(&self) -> String {
        self.transform_origin.clone()
    }

    /// `transform` value, `"scale(Z) rotate(Tdeg)"`
    #[wasm_bindgen(getter)]
    pub fn transform(&self) -> String {
        self.transform.clone()
    }

    /// All three values as an inline `style` attribute.
    pub fn inline(&self) -> String {
        ImageStyle::from(self.clone()).inline()
    }
}

impl From<ImageStyle> for JsImageStyle {
    fn from(style: ImageStyle) -> Self {
        Self {
            object_position: style.object_position,
            transform_origin: style.transform_origin,
            transform: style.transform,
        }
    }
}

impl From<JsImageStyle> for ImageStyle {
    fn from(style: JsImageStyle) -> Self {
        ImageStyle {
            object_position: style.object_position,
            transform_origin: style.transform_origin,
            transform: style.transform,
        }
    }
}

/// Convert the "pointer went down on the image" flag from JavaScript.
pub(crate) fn target_from_bool(on_image: bool) -> PointerTarget {
    if on_image {
        PointerTarget::Image
    } else {
        PointerTarget::Other
    }
}

/// Read an editor config passed from JavaScript.
///
/// `undefined` and `null` mean defaults; missing fields also default. An
/// empty `base_url` is resolved from the current page.
pub(crate) fn config_from_js(value: JsValue) -> Result<EditorConfig, JsValue> {
    let config: EditorConfig = if value.is_undefined() || value.is_null() {
        EditorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid editor config: {}", e)))?
    };
    config
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(with_window_base(config))
}

/// Fill an empty `base_url` from `window.__ingress_url` and the page path.
fn with_window_base(config: EditorConfig) -> EditorConfig {
    if !config.base_url.is_empty() {
        return config;
    }
    let Some(window) = web_sys::window() else {
        return config;
    };

    let ingress = js_sys::Reflect::get(&window, &JsValue::from_str("__ingress_url"))
        .ok()
        .and_then(|v| v.as_string());
    match window.location().pathname() {
        Ok(path) => config.with_page_base(ingress.as_deref(), &path),
        Err(_) => {
            log::warn!("Could not read page path, using relative API URLs");
            config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wino_core::ImageTransformState;

    #[test]
    fn test_style_conversion() {
        let style = ImageTransformState::default().style();
        let js_style = JsImageStyle::from(style.clone());
        assert_eq!(js_style.object_position(), "50.00% 50.00%");
        assert_eq!(js_style.transform_origin(), "50.00% 50.00%");
        assert_eq!(js_style.transform(), "scale(1) rotate(0deg)");
        assert_eq!(js_style.inline(), style.inline());
    }

    #[test]
    fn test_target_from_bool() {
        assert_eq!(target_from_bool(true), PointerTarget::Image);
        assert_eq!(target_from_bool(false), PointerTarget::Other);
    }
}
