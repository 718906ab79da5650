//! Discrete yaw/pitch steering from the keyboard and swipe gestures.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::gesture::{GestureState, SwipeGesture};
use crate::camera::{CameraControls, ControlEvent};

/// Actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// yaw_left = "KeyA"
/// reset_camera = "Escape"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Swing the view left about world up.
    YawLeft,
    /// Swing the view right about world up.
    YawRight,
    /// Tilt the view up.
    PitchUp,
    /// Tilt the view down.
    PitchDown,
    /// Zero both discrete accumulators.
    ResetOrientation,
    /// Restore the construction-time pose.
    ResetCamera,
}

/// Pitch never reaches the poles, so the yawed horizontal axis stays
/// well defined.
const MAX_PITCH: f32 = 80.0 * std::f32::consts::PI / 180.0;

/// Yaw/pitch accumulators (radians) for keyboard and swipe input,
/// summed since the last reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DiscreteOrientation {
    /// Rotation about world +Y.
    pub yaw: f32,
    /// Rotation about the yawed horizontal axis.
    pub pitch: f32,
}

impl DiscreteOrientation {
    fn apply(&mut self, action: KeyAction, step: f32) {
        match action {
            KeyAction::YawLeft => self.yaw += step,
            KeyAction::YawRight => self.yaw -= step,
            KeyAction::PitchUp => self.pitch += step,
            KeyAction::PitchDown => self.pitch -= step,
            KeyAction::ResetOrientation => *self = Self::default(),
            KeyAction::ResetCamera => {}
        }
        self.pitch = self.pitch.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Accumulator change from `previous` to `self`.
    #[must_use]
    pub fn since(&self, previous: Self) -> Self {
        Self {
            yaw: self.yaw - previous.yaw,
            pitch: self.pitch - previous.pitch,
        }
    }

    /// World rotation relative to a reference pose whose right axis is
    /// `right`: yaw about world up, then pitch about the yawed right axis.
    #[must_use]
    pub fn rotation(&self, right: Vec3) -> Quat {
        let yaw = Quat::from_rotation_y(self.yaw);
        let pitch_axis = (yaw * right).normalize_or(Vec3::X);
        Quat::from_axis_angle(pitch_axis, self.pitch) * yaw
    }
}

impl CameraControls {
    /// Key press. Bound arrow keys step the accumulators, `ResetCamera`
    /// restores the snapshot, and every press re-applies the discrete
    /// orientation.
    pub(crate) fn handle_key_down(&mut self, key: &str) {
        let previous = self.orientation;
        match self.keybindings.lookup(key) {
            Some(KeyAction::ResetCamera) => {
                log::debug!("key {key}: reset camera");
                self.reset();
                return;
            }
            Some(action) => {
                let step = self.channels.key_step_degrees.to_radians();
                self.orientation.apply(action, step);
            }
            None => log::trace!("key {key} is not bound"),
        }
        self.apply_discrete_orientation(previous);
    }

    /// Horizontal swipe: nudge yaw proportionally to swipe speed once the
    /// gesture finishes.
    pub(crate) fn handle_swipe(&mut self, swipe: &SwipeGesture) {
        if swipe.state != GestureState::Stop
            || swipe.direction.x.abs() <= self.channels.swipe_threshold
        {
            return;
        }
        let previous = self.orientation;
        self.orientation.yaw +=
            swipe.direction.x.signum() * swipe.speed * self.channels.swipe_yaw_scale;
        self.apply_discrete_orientation(previous);
    }

    /// Orbit the current pose about the target by the accumulator change
    /// since `previous`. Bypasses the damped samples, so poses reached
    /// through any other channel are kept.
    pub(crate) fn apply_discrete_orientation(&mut self, previous: DiscreteOrientation) {
        let right = self.camera.orientation * Vec3::X;
        let rotation = self.orientation.since(previous).rotation(right);

        let eye = self.camera.position - self.target;
        self.camera.position = self.target + rotation * eye;
        self.camera.orientation = (rotation * self.camera.orientation).normalize();
        self.emit(ControlEvent::Change);
    }

    /// Current discrete yaw/pitch accumulators.
    #[must_use]
    pub fn discrete_orientation(&self) -> DiscreteOrientation {
        self.orientation
    }
}
