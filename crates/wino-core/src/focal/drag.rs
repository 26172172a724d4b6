//! Drag-to-position state machine.
//!
//! A drag moves through `idle -> dragging -> idle`. It can only start while
//! the editor is unlocked and the pointer went down on the image itself. It
//! always ends on pointer-up, wherever the pointer is.

use super::geometry::{rotate_delta, ViewportGeometry};
use super::types::{clamp_percent, FocalPoint, ImageTransformState};
use serde::{Deserialize, Serialize};

/// Pointer position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Whether the editor accepts drags and slider changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LockState {
    #[default]
    Locked,
    Unlocked,
}

impl LockState {
    pub fn is_unlocked(self) -> bool {
        self == LockState::Unlocked
    }

    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            LockState::Locked => LockState::Unlocked,
            LockState::Unlocked => LockState::Locked,
        }
    }
}

/// What the pointer went down on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The draggable label image
    Image,
    /// Anything else in the page
    Other,
}

/// One continuous drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer position at pointer-down
    pub pointer_start: Point,
    /// Focal point at pointer-down
    pub focal_start: FocalPoint,
}

impl DragSession {
    /// Focal point for the pointer at `pointer`.
    ///
    /// Zoom and tilt are taken per call so slider changes during a drag
    /// apply immediately. Returns `None` when the geometry is not ready.
    pub fn focal_at(
        &self,
        pointer: Point,
        geometry: &ViewportGeometry,
        zoom: f32,
        tilt_degrees: f32,
    ) -> Option<FocalPoint> {
        let range = geometry.travel_range(zoom)?;
        if range.is_locked() {
            return Some(self.focal_start);
        }

        let dx = pointer.x - self.pointer_start.x;
        let dy = pointer.y - self.pointer_start.y;
        let (rdx, rdy) = rotate_delta(dx, dy, tilt_degrees);

        // Subtract: dragging moves the visible window, not the content
        let x = if range.x > 0.0 {
            clamp_percent(self.focal_start.x - rdx * (100.0 / range.x))
        } else {
            self.focal_start.x
        };
        let y = if range.y > 0.0 {
            clamp_percent(self.focal_start.y - rdy * (100.0 / range.y))
        } else {
            self.focal_start.y
        };

        Some(FocalPoint { x, y })
    }
}

/// Owns the drag session, if any.
#[derive(Debug, Clone, Default)]
pub struct FocalDragger {
    session: Option<DragSession>,
}

impl FocalDragger {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The open drag session.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Start a drag at `pointer`.
    ///
    /// Returns `false` and leaves the dragger idle when the editor is locked
    /// or the pointer is not on the image.
    pub fn begin(
        &mut self,
        pointer: Point,
        state: &ImageTransformState,
        lock: LockState,
        target: PointerTarget,
    ) -> bool {
        if !lock.is_unlocked() || target != PointerTarget::Image {
            return false;
        }

        self.session = Some(DragSession {
            pointer_start: pointer,
            focal_start: state.focal(),
        });
        log::debug!("Focal drag started at {} {}", pointer.x, pointer.y);
        true
    }

    /// New focal point for the pointer at `pointer`.
    ///
    /// `None` when idle or when the image has no size yet.
    pub fn update(
        &self,
        pointer: Point,
        geometry: &ViewportGeometry,
        zoom: f32,
        tilt_degrees: f32,
    ) -> Option<FocalPoint> {
        self.session
            .as_ref()?
            .focal_at(pointer, geometry, zoom, tilt_degrees)
    }

    /// Close the drag, returning the session that was open.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }
}
