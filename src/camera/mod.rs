//! Camera system for 3D scene viewing.
//!
//! Provides a perspective camera and the trackball controls that drive it
//! from pointer, touch, keyboard and hand-tracking input.

/// Trackball controls: sample bookkeeping and the per-frame update.
pub mod controller;
/// Core camera struct and projection math.
pub mod core;
/// Session state, notifications and viewport geometry.
pub mod state;

pub use controller::CameraControls;
pub use self::core::Camera;
pub use state::{ControlEvent, InputState, ResetSnapshot, ScreenRect};
