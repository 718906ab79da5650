use glam::Vec2;

use super::gesture::{Frame, SwipeGesture};

/// Platform-agnostic input events.
///
/// Every raw input the camera reacts to is one of these variants. They are
/// fed into [`CameraControls::dispatch`](crate::camera::CameraControls::dispatch),
/// which handles them in arrival order.
///
/// # Example
///
/// ```
/// # use datasphere::input::{InputEvent, MouseButton};
/// let down = InputEvent::PointerDown { button: MouseButton::Left, x: 400.0, y: 300.0 };
/// let drag = InputEvent::PointerMove { x: 450.0, y: 300.0 };
/// # let _ = (down, drag);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button pressed at a page position.
    PointerDown {
        /// Which button went down.
        button: MouseButton,
        /// Horizontal page position in pixels.
        x: f32,
        /// Vertical page position in pixels.
        y: f32,
    },
    /// Cursor moved to a page position.
    PointerMove {
        /// Horizontal page position in pixels.
        x: f32,
        /// Vertical page position in pixels.
        y: f32,
    },
    /// Mouse button released.
    PointerUp {
        /// Horizontal page position in pixels.
        x: f32,
        /// Vertical page position in pixels.
        y: f32,
    },
    /// Scroll wheel.
    Wheel {
        /// Scroll amount in one of the legacy DOM units.
        delta: WheelDelta,
    },
    /// Touches began; carries every active touch point.
    TouchStart {
        /// Page positions of the active touches.
        touches: Vec<Vec2>,
    },
    /// Touches moved; carries every active touch point.
    TouchMove {
        /// Page positions of the active touches.
        touches: Vec<Vec2>,
    },
    /// A touch lifted; carries the touches that remain down.
    TouchEnd {
        /// Page positions of the remaining touches.
        touches: Vec<Vec2>,
    },
    /// Key pressed.
    KeyDown {
        /// Key code string (`"ArrowLeft"`, `"Space"`, ...).
        key: String,
    },
    /// Key released.
    KeyUp {
        /// Key code string.
        key: String,
    },
    /// One hand-tracking sample.
    GestureFrame(Frame),
    /// A discrete swipe gesture update.
    Swipe(SwipeGesture),
}

/// Scroll amount in the units the two legacy DOM wheel APIs report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelDelta {
    /// `wheelDelta` units: ±120 per notch, positive when scrolling up.
    Pixels(f32),
    /// `detail` units: ±3 per notch, positive when scrolling down.
    Lines(f32),
}

impl WheelDelta {
    /// Normalized notch count, positive when scrolling up.
    #[must_use]
    pub fn notches(self) -> f32 {
        match self {
            Self::Pixels(d) => d / 40.0,
            Self::Lines(d) => -d / 3.0,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Middle mouse button (wheel click).
    Middle,
    /// Secondary (right) mouse button.
    Right,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wheel_units_agree_on_direction() {
        // One notch up in each API.
        assert_eq!(WheelDelta::Pixels(120.0).notches(), 3.0);
        assert_eq!(WheelDelta::Lines(-3.0).notches(), 1.0);
        assert!(WheelDelta::Lines(3.0).notches() < 0.0);
    }
}
