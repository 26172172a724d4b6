//! Wino WASM - WebAssembly bindings for the wine label editor
//!
//! This crate exposes the wino-core focal point engine to the inventory
//! front end.
//!
//! # Module Structure
//!
//! - `editor` - The stateful [`JsFocalPointEditor`] driven by pointer and slider events
//! - `persist` - HTTP store that saves focal points to the backend
//! - `types` - WASM-compatible wrapper types and config parsing
//!
//! # Usage
//!
//! ```typescript
//! import init, { JsFocalPointEditor, image_style } from '@wino/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Style a thumbnail in the inventory table
//! img.setAttribute('style', image_style(wine.image_focal_point, wine.image_zoom, wine.image_tilt).inline());
//! ```

use wasm_bindgen::prelude::*;

mod editor;
mod persist;
mod types;

// Re-export public types
pub use editor::JsFocalPointEditor;
pub use persist::HttpFocalPointStore;
pub use types::JsImageStyle;

use wino_core::{FocalPoint, ImageTransformState};

/// Initialize the WASM module (called automatically on load)
///
/// Routes panics and `log` records to the browser console. The logger starts
/// at `Info`; each [`JsFocalPointEditor`] then sets the maximum level from its
/// config's `log_level`.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"wino: console logger already installed".into());
    }
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Upgrade a stored focal point to the two-value form.
///
/// A legacy `"37%"` (Y only) becomes `"50% 37%"`; missing values become
/// `"50% 50%"`.
#[wasm_bindgen]
pub fn normalize_focal_point(stored: Option<String>) -> String {
    wino_core::normalize_focal_point(stored.as_deref())
}

/// Styles for a label image from its stored settings.
///
/// Used for read-only thumbnails, where no editor is open.
#[wasm_bindgen]
pub fn image_style(
    focal_point: Option<String>,
    zoom: Option<f32>,
    tilt: Option<f32>,
) -> JsImageStyle {
    let state = ImageTransformState::new(
        FocalPoint::from_stored(focal_point.as_deref()),
        zoom.unwrap_or(1.0),
        tilt.unwrap_or(0.0),
    );
    state.style().into()
}

/// API base URL for the current page.
///
/// # Arguments
///
/// * `ingress_url` - Home Assistant ingress path, if the page has one
/// * `page_path` - `window.location.pathname`
#[wasm_bindgen]
pub fn resolve_base_url(ingress_url: Option<String>, page_path: &str) -> String {
    wino_core::resolve_base_url(ingress_url.as_deref(), page_path)
}
