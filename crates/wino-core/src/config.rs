//! Editor configuration.
//!
//! Every field has a default, so the UI may pass a partial object (or
//! nothing at all).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path of the focal point endpoint, relative to the base URL.
pub const DEFAULT_FOCAL_POINT_ENDPOINT: &str = "api/wine/focal-point";

/// Largest zoom the slider offers by default.
pub const DEFAULT_MAX_ZOOM: f32 = 3.0;

/// Error types for invalid configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `max_zoom` must be a finite value of at least 1.
    #[error("max_zoom must be at least 1.0, got {0}")]
    InvalidMaxZoom(f32),

    /// The log level is not one of error, warn, info, debug, trace.
    #[error("Unknown log level: {0:?}")]
    UnknownLogLevel(String),
}

/// Settings for a focal point editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Prefix for API paths, e.g. an ingress path ending in `/`
    pub base_url: String,
    /// Focal point endpoint, joined onto `base_url`
    pub focal_point_endpoint: String,
    /// Upper bound for the zoom factor
    pub max_zoom: f32,
    /// Console log level
    pub log_level: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            focal_point_endpoint: DEFAULT_FOCAL_POINT_ENDPOINT.to_string(),
            max_zoom: DEFAULT_MAX_ZOOM,
            log_level: "info".to_string(),
        }
    }
}

impl EditorConfig {
    /// Check that the values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(ConfigError::InvalidMaxZoom(self.max_zoom));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::UnknownLogLevel(self.log_level.clone()))
    }

    /// Fill in `base_url` from the page when it was left empty.
    ///
    /// An explicitly configured base is kept as is.
    pub fn with_page_base(mut self, ingress_url: Option<&str>, page_path: &str) -> Self {
        if self.base_url.is_empty() {
            self.base_url = resolve_base_url(ingress_url, page_path);
        }
        self
    }

    /// Full URL of the focal point endpoint.
    pub fn focal_point_url(&self) -> String {
        format!("{}{}", self.base_url, self.focal_point_endpoint)
    }
}

/// Work out the API base URL for the page the editor runs in.
///
/// Behind Home Assistant ingress the add-on lives under a sub-path, which the
/// host page exposes as `ingress_url`. Without it, the base is the directory
/// of the current page: a trailing file segment (one containing a `.`) is
/// dropped and a trailing `/` is ensured.
pub fn resolve_base_url(ingress_url: Option<&str>, page_path: &str) -> String {
    if let Some(ingress) = ingress_url.filter(|u| !u.is_empty()) {
        return ingress.to_string();
    }

    let mut parts: Vec<&str> = page_path.split('/').collect();
    if parts.last().is_some_and(|last| last.contains('.')) {
        parts.pop();
    }
    let mut base = parts.join("/");
    if !base.is_empty() && !base.ends_with('/') {
        base.push('/');
    }
    base
}
