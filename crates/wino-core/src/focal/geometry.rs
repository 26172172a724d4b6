//! Viewport geometry: cover-fit sizing, travel ranges and delta rotation.
//!
//! The label image is rendered with `object-fit: cover` inside a square
//! viewport, then scaled by the zoom factor. Whatever overflows the viewport
//! is the distance the focal point can travel on that axis.
//!
//! # Rotation
//!
//! A tilted image moves in its own frame, so screen-space pointer deltas are
//! rotated by `-tilt` before being applied:
//! ```text
//! dx' = dx * cos(-θ) - dy * sin(-θ)
//! dy' = dx * sin(-θ) + dy * cos(-θ)
//! ```

use serde::{Deserialize, Serialize};

/// Viewport and image dimensions for one drag, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportGeometry {
    /// Viewport width
    pub container_width: f32,
    /// Viewport height (equal to the width for the square editor)
    pub container_height: f32,
    /// Intrinsic image width, 0 until the image has loaded
    pub natural_width: f32,
    /// Intrinsic image height, 0 until the image has loaded
    pub natural_height: f32,
}

/// Rendered size of the image, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedSize {
    pub width: f32,
    pub height: f32,
}

/// How far the rendered image overflows the viewport on each axis.
///
/// A zero range means the axis does not overflow and cannot be dragged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelRange {
    pub x: f32,
    pub y: f32,
}

impl TravelRange {
    /// True when neither axis can move.
    pub fn is_locked(&self) -> bool {
        self.x <= 0.0 && self.y <= 0.0
    }
}

#[inline]
fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl ViewportGeometry {
    /// Create a new geometry.
    pub fn new(
        container_width: f32,
        container_height: f32,
        natural_width: f32,
        natural_height: f32,
    ) -> Self {
        Self {
            container_width,
            container_height,
            natural_width,
            natural_height,
        }
    }

    /// Whether both the image and the viewport have usable dimensions.
    ///
    /// Images report a natural size of zero until they finish loading.
    pub fn is_ready(&self) -> bool {
        is_positive(self.container_width)
            && is_positive(self.container_height)
            && is_positive(self.natural_width)
            && is_positive(self.natural_height)
    }

    /// Cover-fit size at zoom 1.0.
    ///
    /// Landscape and square images fit the viewport height, portrait images
    /// fit its width; the other side follows the aspect ratio.
    pub fn cover_fit(&self) -> Option<RenderedSize> {
        if !self.is_ready() {
            return None;
        }

        let aspect = self.natural_width / self.natural_height;
        let size = if aspect >= 1.0 {
            let height = self.container_height;
            RenderedSize {
                width: height * aspect,
                height,
            }
        } else {
            let width = self.container_width;
            RenderedSize {
                width,
                height: width / aspect,
            }
        };
        Some(size)
    }

    /// Rendered size after applying `zoom` to the cover-fit size.
    pub fn rendered_size(&self, zoom: f32) -> Option<RenderedSize> {
        self.cover_fit().map(|base| RenderedSize {
            width: base.width * zoom,
            height: base.height * zoom,
        })
    }

    /// Draggable overflow on each axis at the given zoom.
    pub fn travel_range(&self, zoom: f32) -> Option<TravelRange> {
        self.rendered_size(zoom).map(|size| TravelRange {
            x: (size.width - self.container_width).max(0.0),
            y: (size.height - self.container_height).max(0.0),
        })
    }
}

/// Rotate a screen-space delta into the frame of an image tilted by
/// `tilt_degrees`.
///
/// Returns `(dx', dy')`. A zero tilt returns the delta unchanged.
pub fn rotate_delta(dx: f32, dy: f32, tilt_degrees: f32) -> (f32, f32) {
    if tilt_degrees == 0.0 {
        return (dx, dy);
    }

    let theta = -tilt_degrees.to_radians();
    let (sin, cos) = theta.sin_cos();
    (dx * cos - dy * sin, dx * sin + dy * cos)
}
