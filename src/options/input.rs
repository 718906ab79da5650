use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Input", inline)]
#[serde(default)]
/// Which input families drive the camera, plus the discrete-step tuning
/// for keyboard and swipe input.
pub struct InputChannelOptions {
    /// Mouse button drags.
    #[schemars(title = "Mouse")]
    pub pointer: bool,
    /// Mouse wheel zoom.
    #[schemars(title = "Wheel")]
    pub wheel: bool,
    /// One- and two-finger touch.
    #[schemars(title = "Touch")]
    pub touch: bool,
    /// Arrow-key yaw/pitch.
    #[schemars(title = "Keyboard")]
    pub keyboard: bool,
    /// Hand-tracking frames.
    #[schemars(title = "Hand Tracking")]
    pub gesture_frame: bool,
    /// Hand-tracking swipe gestures.
    #[schemars(title = "Swipe")]
    pub swipe: bool,
    /// Yaw/pitch change per arrow key press, in degrees.
    #[schemars(title = "Key Step", range(min = 1.0, max = 45.0), extend("step" = 1.0))]
    pub key_step_degrees: f32,
    /// Minimum |direction.x| for a swipe to count as horizontal.
    #[schemars(skip)]
    pub swipe_threshold: f32,
    /// Radians of yaw per unit of swipe speed.
    #[schemars(skip)]
    pub swipe_yaw_scale: f32,
}

impl Default for InputChannelOptions {
    fn default() -> Self {
        Self {
            pointer: true,
            wheel: true,
            touch: true,
            keyboard: true,
            gesture_frame: true,
            swipe: true,
            key_step_degrees: 10.0,
            swipe_threshold: 0.8,
            swipe_yaw_scale: 0.000_2,
        }
    }
}
