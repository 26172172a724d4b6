//! Focal-point, zoom and tilt engine for label images.
//!
//! A label image sits in a square viewport with `object-fit: cover`. The user
//! can zoom and tilt it, then drag it to choose which part stays visible.
//! This module turns those drags into a focal point expressed as X/Y
//! percentages, suitable for CSS `object-position`.
//!
//! # Coordinate System
//!
//! - Focal percentages run 0 to 100, origin top-left
//! - Pointer coordinates are screen pixels
//! - Tilt is in degrees, normalized to (-180, 180]

mod drag;
mod geometry;
mod types;

pub use drag::{DragSession, FocalDragger, LockState, Point, PointerTarget};
pub use geometry::{rotate_delta, RenderedSize, TravelRange, ViewportGeometry};
pub use types::{
    clamp_percent, normalize_tilt, FocalPoint, FocalPointError, ImageStyle, ImageTransformState,
    CENTER_PERCENT, MIN_ZOOM,
};
