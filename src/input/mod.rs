//! Input handling: event types, hand-tracking data, and the handlers that
//! turn raw events into camera-control samples.

/// Event routing into the camera controls.
mod dispatch;
/// Platform-agnostic input events.
pub mod event;
/// Hand-tracking frames, matchers and the per-frame camera hook.
pub mod gesture;
/// Keyboard and swipe yaw/pitch steering.
pub mod keyboard;
/// winit window-event translation.
#[cfg(feature = "winit")]
pub mod winit;

pub use event::{InputEvent, MouseButton, WheelDelta};
pub use gesture::{
    DeltaBaseline, Frame, GestureExtent, GestureMatcher, GestureState, Hand,
    Pointable, SwipeGesture,
};
pub use keyboard::{DiscreteOrientation, KeyAction};
