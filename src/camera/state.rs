//! Session state, notifications and viewport geometry for the camera
//! controls.

use glam::Vec3;

/// The active gesture session. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No session in progress.
    #[default]
    None,
    /// Mouse drag orbiting the camera around the target.
    Rotate,
    /// Mouse drag zooming toward/away from the target.
    Zoom,
    /// Mouse drag translating camera and target together.
    Pan,
    /// One-finger touch orbit.
    TouchRotate,
    /// Two-finger pinch zoom combined with midpoint pan.
    TouchZoomPan,
}

impl InputState {
    /// Whether a session is in progress.
    #[must_use]
    pub fn is_active(self) -> bool {
        self != Self::None
    }
}

/// Notification emitted by the controls for renderer synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A gesture session began (or an instantaneous gesture fired).
    Start,
    /// The camera pose changed and the scene should be redrawn.
    Change,
    /// A gesture session ended.
    End,
}

/// Viewport rectangle in page coordinates, used to normalize pointer and
/// touch positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Left edge in page pixels.
    pub left: f32,
    /// Top edge in page pixels.
    pub top: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl ScreenRect {
    /// A viewport anchored at the page origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width,
            height,
        }
    }

    /// Copy with width and height forced to at least one pixel.
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            width: if self.width.is_finite() { self.width.max(1.0) } else { 1.0 },
            height: if self.height.is_finite() { self.height.max(1.0) } else { 1.0 },
            ..self
        }
    }
}

impl Default for ScreenRect {
    fn default() -> Self {
        Self::from_size(1.0, 1.0)
    }
}

/// Pose captured at construction and restored by
/// [`CameraControls::reset`](super::CameraControls::reset).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResetSnapshot {
    /// Orbit target.
    pub target: Vec3,
    /// Camera position.
    pub position: Vec3,
    /// Camera up vector.
    pub up: Vec3,
}
