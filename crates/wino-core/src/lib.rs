//! Wino Core - label image focal-point engine
//!
//! This crate holds the logic behind the wine label editor: positioning a
//! zoomed and tilted label inside its square thumbnail by dragging, and
//! handing the resulting focal point to the inventory backend.
//!
//! # Module Structure
//!
//! - `focal` - Focal point types, viewport geometry and the drag engine
//! - `editor` - Editor session state driven by [`EditorIntent`]s
//! - `persist` - Save payload and the [`FocalPointStore`] contract
//! - `config` - Editor settings and API base URL resolution

pub mod config;
pub mod editor;
pub mod focal;
pub mod persist;

pub use config::{resolve_base_url, ConfigError, EditorConfig};
pub use editor::{EditorEffect, EditorIntent, FocalPointEditor};
pub use focal::{
    FocalDragger, FocalPoint, FocalPointError, ImageStyle, ImageTransformState, LockState, Point,
    PointerTarget, ViewportGeometry,
};
pub use persist::{commit, FocalPointStore, FocalPointUpdate, SaveError};

/// Upgrade a stored focal point string to the two-value `"X% Y%"` form.
///
/// Rows saved before horizontal focal points existed hold only the Y value,
/// so a single token gets a centered X prepended. Missing or blank values
/// become `"50% 50%"`; anything else is returned trimmed but otherwise as is.
pub fn normalize_focal_point(stored: Option<&str>) -> String {
    let text = stored.map(str::trim).unwrap_or_default();
    if text.is_empty() {
        "50% 50%".to_string()
    } else if text.split_whitespace().nth(1).is_none() {
        format!("50% {text}")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_legacy() {
        assert_eq!(normalize_focal_point(Some("37%")), "50% 37%");
        let upgraded: FocalPoint = normalize_focal_point(Some("37%")).parse().unwrap();
        assert_eq!(upgraded, FocalPoint::new(50.0, 37.0));
    }

    #[test]
    fn test_normalize_missing() {
        assert_eq!(normalize_focal_point(None), "50% 50%");
        assert_eq!(normalize_focal_point(Some("  ")), "50% 50%");
    }

    #[test]
    fn test_normalize_two_values() {
        assert_eq!(normalize_focal_point(Some(" 12.5% 80% ")), "12.5% 80%");
    }
}
