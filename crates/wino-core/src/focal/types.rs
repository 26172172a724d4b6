//! Core types for the focal-point editor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default focal percentage on either axis (image centered).
pub const CENTER_PERCENT: f32 = 50.0;

/// Smallest allowed zoom factor. At 1.0 the image exactly covers the viewport.
pub const MIN_ZOOM: f32 = 1.0;

/// Error types for focal point parsing.
#[derive(Debug, Error, PartialEq)]
pub enum FocalPointError {
    /// A token could not be read as a percentage.
    #[error("Invalid focal point percentage: {0:?}")]
    InvalidPercent(String),

    /// More than two tokens were supplied.
    #[error("Focal point has too many values: {0:?}")]
    TooManyValues(String),
}

/// Clamp a percentage into the valid `[0, 100]` range.
///
/// NaN collapses to the center so a bad value never escapes into CSS.
#[inline]
pub fn clamp_percent(value: f32) -> f32 {
    if value.is_nan() {
        return CENTER_PERCENT;
    }
    value.clamp(0.0, 100.0)
}

/// Normalize a tilt angle into `(-180, 180]` degrees.
pub fn normalize_tilt(degrees: f32) -> f32 {
    if !degrees.is_finite() {
        return 0.0;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // Avoid "-0deg" in rendered transforms
    if wrapped == 0.0 {
        0.0
    } else if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// A normalized anchor within an image, as X/Y percentages (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FocalPoint {
    /// Horizontal position (0 = left edge, 100 = right edge)
    pub x: f32,
    /// Vertical position (0 = top edge, 100 = bottom edge)
    pub y: f32,
}

impl Default for FocalPoint {
    fn default() -> Self {
        Self::CENTER
    }
}

impl FocalPoint {
    /// The centered focal point, `50% 50%`.
    pub const CENTER: FocalPoint = FocalPoint {
        x: CENTER_PERCENT,
        y: CENTER_PERCENT,
    };

    /// Create a focal point, clamping both axes to `[0, 100]`.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Parse a stored focal point, falling back to the center when the
    /// value is missing or unreadable.
    ///
    /// Stored rows may predate horizontal focal points, so a lone value is
    /// treated as the Y axis.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(text) => text.parse().unwrap_or_else(|e| {
                log::warn!("Ignoring stored focal point: {e}");
                Self::CENTER
            }),
            None => Self::CENTER,
        }
    }
}

/// Parse one CSS-style percentage token (`"37%"`, `"37.5"`).
fn parse_percent(token: &str) -> Result<f32, FocalPointError> {
    let number = token.trim().trim_end_matches('%').trim();
    number
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(clamp_percent)
        .ok_or_else(|| FocalPointError::InvalidPercent(token.to_string()))
}

impl FromStr for FocalPoint {
    type Err = FocalPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (None, _, _) => Ok(Self::CENTER),
            // Legacy single-value format only ever stored the Y axis
            (Some(y), None, _) => Ok(Self {
                x: CENTER_PERCENT,
                y: parse_percent(y)?,
            }),
            (Some(x), Some(y), None) => Ok(Self {
                x: parse_percent(x)?,
                y: parse_percent(y)?,
            }),
            (Some(_), Some(_), Some(_)) => Err(FocalPointError::TooManyValues(s.to_string())),
        }
    }
}

impl fmt::Display for FocalPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}% {:.2}%", self.x, self.y)
    }
}

/// Focal point, zoom and tilt of a label image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransformState {
    /// Horizontal focal point (0 to 100)
    pub focal_x: f32,
    /// Vertical focal point (0 to 100)
    pub focal_y: f32,
    /// Zoom factor (1.0 and up)
    pub zoom: f32,
    /// Rotation in degrees (-180 to 180]
    pub tilt_degrees: f32,
}

impl Default for ImageTransformState {
    fn default() -> Self {
        Self {
            focal_x: CENTER_PERCENT,
            focal_y: CENTER_PERCENT,
            zoom: MIN_ZOOM,
            tilt_degrees: 0.0,
        }
    }
}

impl ImageTransformState {
    /// Create a new state, clamping every field into its valid range.
    pub fn new(focal: FocalPoint, zoom: f32, tilt_degrees: f32) -> Self {
        let mut state = Self::default();
        state.set_focal(focal);
        state.set_zoom(zoom, f32::INFINITY);
        state.set_tilt(tilt_degrees);
        state
    }

    /// Current focal point.
    pub fn focal(&self) -> FocalPoint {
        FocalPoint {
            x: self.focal_x,
            y: self.focal_y,
        }
    }

    /// Replace the focal point, keeping both axes in `[0, 100]`.
    pub fn set_focal(&mut self, focal: FocalPoint) {
        self.focal_x = clamp_percent(focal.x);
        self.focal_y = clamp_percent(focal.y);
    }

    /// Set the zoom factor, clamped to `[MIN_ZOOM, max_zoom]`.
    ///
    /// Zero and unparseable slider values fall back to no zoom.
    pub fn set_zoom(&mut self, zoom: f32, max_zoom: f32) {
        self.zoom = if zoom.is_nan() || zoom <= 0.0 {
            MIN_ZOOM
        } else {
            zoom.clamp(MIN_ZOOM, max_zoom.max(MIN_ZOOM))
        };
    }

    /// Set the tilt, normalized into `(-180, 180]`.
    pub fn set_tilt(&mut self, degrees: f32) {
        self.tilt_degrees = normalize_tilt(degrees);
    }

    /// CSS style values for rendering this state.
    pub fn style(&self) -> ImageStyle {
        let focal = self.focal().to_string();
        ImageStyle {
            object_position: focal.clone(),
            transform_origin: focal,
            transform: format!("scale({}) rotate({}deg)", self.zoom, self.tilt_degrees),
        }
    }
}

/// CSS values the UI layer applies to the label `<img>`.
///
/// The transform origin follows the focal point so zoom and rotation pivot
/// around the visible anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageStyle {
    /// `object-position` value, `"X% Y%"`
    pub object_position: String,
    /// `transform-origin` value, same as `object_position`
    pub transform_origin: String,
    /// `transform` value, `"scale(Z) rotate(Tdeg)"`
    pub transform: String,
}

impl ImageStyle {
    /// Render as an inline `style` attribute.
    pub fn inline(&self) -> String {
        format!(
            "object-position: {}; transform: {}; transform-origin: {};",
            self.object_position, self.transform, self.transform_origin
        )
    }
}
