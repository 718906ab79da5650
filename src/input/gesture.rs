//! Hand-tracking input: frame data, gesture matchers, and the frame hook
//! that turns tracked hand motion into camera rotation, zoom and pan.

use std::f32::consts::PI;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{CameraControls, ControlEvent};
use crate::error::SphereError;
use crate::options::GestureChannelOptions;
use crate::util::math::{angle_between, map_linear};

// ── Tracking SDK data ────────────────────────────────────────────────────

/// One tracked hand.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hand {
    /// Raw palm position (sensor millimetres).
    pub palm_position: Vec3,
    /// Smoothed palm position.
    pub stabilized_palm_position: Vec3,
}

/// One tracked finger or tool.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pointable {
    /// Raw tip position (sensor millimetres).
    pub tip_position: Vec3,
    /// Smoothed tip position.
    pub stabilized_tip_position: Vec3,
}

/// A single tracking frame as delivered by the SDK.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
    /// Visible hands.
    pub hands: Vec<Hand>,
    /// Visible fingers and tools.
    pub pointables: Vec<Pointable>,
}

impl Frame {
    /// The hand a channel should track.
    ///
    /// With one hand visible that hand is used. With two, they are ordered
    /// by palm x and `right_handed` picks the rightmost. Any other count
    /// yields `None`.
    #[must_use]
    pub fn select_hand(&self, right_handed: bool) -> Option<&Hand> {
        match self.hands.as_slice() {
            [only] => Some(only),
            [a, b] => {
                let (left, right) = if a.palm_position.x < b.palm_position.x {
                    (a, b)
                } else {
                    (b, a)
                };
                Some(if right_handed { right } else { left })
            }
            _ => None,
        }
    }
}

/// Lifecycle phase of a discrete SDK gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    /// Gesture recognized.
    Start,
    /// Gesture in progress.
    Update,
    /// Gesture finished.
    Stop,
}

/// A swipe gesture update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    /// Unit direction of the swipe.
    pub direction: Vec3,
    /// Swipe speed (sensor millimetres per second).
    pub speed: f32,
    /// Lifecycle phase.
    pub state: GestureState,
}

// ── Matchers ─────────────────────────────────────────────────────────────

/// Accepted count of hands or fingers: an exact value or an inclusive
/// range.
///
/// In TOML an extent is either a scalar (`fingers = 3`) or a two-element
/// array (`fingers = [3, 5]`). Anything else is rejected at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExtentRepr", into = "ExtentRepr")]
pub enum GestureExtent {
    /// Exactly this many.
    Fixed(u32),
    /// Between the two bounds, inclusive.
    Range(u32, u32),
}

impl GestureExtent {
    /// Build a validated inclusive range.
    pub fn range(min: u32, max: u32) -> Result<Self, SphereError> {
        let extent = Self::Range(min, max);
        extent.validate()?;
        Ok(extent)
    }

    /// Whether `n` falls within the extent.
    #[must_use]
    pub fn contains(self, n: usize) -> bool {
        let n = n as u64;
        match self {
            Self::Fixed(v) => n == u64::from(v),
            Self::Range(lo, hi) => u64::from(lo) <= n && n <= u64::from(hi),
        }
    }

    /// Smallest accepted count.
    #[must_use]
    pub fn min(self) -> u32 {
        match self {
            Self::Fixed(v) | Self::Range(v, _) => v,
        }
    }

    /// Reject ranges whose bounds are inverted.
    pub fn validate(self) -> Result<(), SphereError> {
        match self {
            Self::Range(lo, hi) if lo > hi => Err(SphereError::config(format!(
                "gesture range [{lo}, {hi}] has min above max"
            ))),
            _ => Ok(()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ExtentRepr {
    Scalar(i64),
    List(Vec<i64>),
}

impl TryFrom<ExtentRepr> for GestureExtent {
    type Error = SphereError;

    fn try_from(repr: ExtentRepr) -> Result<Self, Self::Error> {
        let count = |v: i64| {
            u32::try_from(v).map_err(|_| {
                SphereError::config(format!("gesture count {v} is out of range"))
            })
        };
        match repr {
            ExtentRepr::Scalar(v) => Ok(Self::Fixed(count(v)?)),
            ExtentRepr::List(values) => match values.as_slice() {
                [lo, hi] => Self::range(count(*lo)?, count(*hi)?),
                other => Err(SphereError::config(format!(
                    "gesture range needs exactly two bounds, got {}",
                    other.len()
                ))),
            },
        }
    }
}

impl From<GestureExtent> for ExtentRepr {
    fn from(extent: GestureExtent) -> Self {
        match extent {
            GestureExtent::Fixed(v) => Self::Scalar(i64::from(v)),
            GestureExtent::Range(lo, hi) => {
                Self::List(vec![i64::from(lo), i64::from(hi)])
            }
        }
    }
}

/// Hand-count and finger-count predicate selecting which frames drive a
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureMatcher {
    /// Accepted hand count.
    pub hands: GestureExtent,
    /// Accepted finger count.
    pub fingers: GestureExtent,
}

impl GestureMatcher {
    /// Whether the frame's hand and finger counts both fit.
    #[must_use]
    pub fn matches(&self, frame: &Frame) -> bool {
        self.hands.contains(frame.hands.len())
            && self.fingers.contains(frame.pointables.len())
    }
}

/// Previous-frame sample a channel measures its delta against.
///
/// Cleared whenever the channel stops matching, so the first frame of a
/// new match yields a zero delta instead of a jump.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DeltaBaseline {
    last: Option<Vec3>,
}

impl DeltaBaseline {
    /// Movement since the previous sample; records `sample` as the new
    /// baseline.
    pub fn advance(&mut self, sample: Vec3) -> Vec3 {
        let delta = sample - self.last.unwrap_or(sample);
        self.last = Some(sample);
        delta
    }

    /// Forget the baseline.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// The stored baseline, if any.
    #[must_use]
    pub fn last(&self) -> Option<Vec3> {
        self.last
    }
}

// ── Frame hook ───────────────────────────────────────────────────────────

/// Sensor millimetres mapped onto ±π of rotation.
const ROTATE_SWEEP: f32 = 100.0;
/// Sensor millimetres mapped onto ±`step` of zoom or pan.
const TRANSLATE_SWEEP: f32 = 400.0;

impl CameraControls {
    /// Per-frame hand-tracking hook.
    ///
    /// Each enabled channel whose matcher accepts the frame applies its
    /// motion immediately to the camera (no damping). A channel that does
    /// not match drops its baseline. Frames are ignored while a pointer or
    /// touch session is active.
    pub fn update_frame(&mut self, frame: &Frame) {
        if !self.enabled || !self.channels.gesture_frame {
            return;
        }
        if self.state.is_active() {
            self.clear_gesture_baselines();
            return;
        }

        self.leap_rotate(frame);
        self.leap_zoom(frame);
        self.leap_pan(frame);
        self.emit(ControlEvent::Change);
    }

    pub(crate) fn clear_gesture_baselines(&mut self) {
        self.rotate_baseline.clear();
        self.zoom_baseline.clear();
        self.pan_baseline.clear();
    }

    fn rotate_transform(&self, delta: f32) -> f32 {
        self.gestures.transform_factor(&self.gestures.rotate)
            * map_linear(delta, ROTATE_SWEEP, -ROTATE_SWEEP, -PI, PI)
    }

    fn translate_transform(&self, channel: &GestureChannelOptions, delta: f32) -> f32 {
        let step = self.gestures.step;
        self.gestures.transform_factor(channel)
            * map_linear(delta, -TRANSLATE_SWEEP, TRANSLATE_SWEEP, -step, step)
    }

    /// Orbit from hand motion: vertical motion pitches about the horizontal
    /// axis orthogonal to the eye (bounded by the channel's polar range),
    /// horizontal motion yaws about world +Y.
    fn leap_rotate(&mut self, frame: &Frame) {
        let channel = &self.gestures.rotate;
        let sample = if channel.enabled { channel.sample(frame) } else { None };
        let Some(sample) = sample else {
            self.rotate_baseline.clear();
            return;
        };
        let (min, max) = (channel.min, channel.max);
        log::trace!("rotate gesture matched at {sample}");

        let delta = self.rotate_baseline.advance(sample);

        let eye = self.camera.position - self.target;
        let pitch = self.rotate_transform(delta.y);
        let polar = angle_between(eye, Vec3::Y) + pitch;
        if min < polar && polar < max {
            let axis = Vec3::new(eye.z, 0.0, -eye.x).normalize_or_zero();
            if axis != Vec3::ZERO {
                self.camera.position =
                    self.target + Quat::from_axis_angle(axis, pitch) * eye;
            }
        }

        let yaw = -self.rotate_transform(delta.x);
        let eye = self.camera.position - self.target;
        self.camera.position = self.target + Quat::from_rotation_y(yaw) * eye;
        self.camera.look_at(self.target);
    }

    /// Change the orbit radius from hand motion toward or away from the
    /// sensor, within the channel's radius bounds.
    fn leap_zoom(&mut self, frame: &Frame) {
        let channel = &self.gestures.zoom;
        let sample = if channel.enabled { channel.sample(frame) } else { None };
        let Some(sample) = sample else {
            self.zoom_baseline.clear();
            return;
        };
        let (min, max) = (channel.min, channel.max);

        let delta = self.zoom_baseline.advance(sample);
        let length_delta = self.translate_transform(&self.gestures.zoom, delta.z);

        let eye = self.camera.position - self.target;
        let length = eye.length();
        let new_length = length + length_delta;
        if length > 0.0 && min < new_length && new_length < max {
            self.camera.position = self.target + eye * (new_length / length);
        }
    }

    /// Drag the scene with the tracked hand: camera and target move
    /// together, opposite to the hand, in the camera's local frame.
    fn leap_pan(&mut self, frame: &Frame) {
        let channel = &self.gestures.pan;
        let sample = if channel.enabled { channel.sample(frame) } else { None };
        let Some(sample) = sample else {
            self.pan_baseline.clear();
            return;
        };

        let delta = self.pan_baseline.advance(sample);
        let local = Vec3::new(
            self.translate_transform(&self.gestures.pan, delta.x),
            self.translate_transform(&self.gestures.pan, delta.y),
            self.translate_transform(&self.gestures.pan, delta.z),
        );
        let offset = self.camera.local_to_world_direction(local);
        self.camera.position -= offset;
        self.target -= offset;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::camera::{Camera, ScreenRect};

    fn frame(hands: usize, fingers: usize, palm: Vec3) -> Frame {
        Frame {
            hands: vec![
                Hand {
                    palm_position: palm,
                    stabilized_palm_position: palm,
                };
                hands
            ],
            pointables: vec![Pointable::default(); fingers],
        }
    }

    fn controls() -> CameraControls {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3000.0), 40.0, 1.0, 1.0, 1e5);
        let mut controls =
            CameraControls::new(camera, ScreenRect::from_size(800.0, 600.0));
        let _ = controls.drain_events();
        controls
    }

    #[test]
    fn extent_contains_fixed_and_range() {
        assert!(GestureExtent::Fixed(1).contains(1));
        assert!(!GestureExtent::Fixed(1).contains(2));
        let range = GestureExtent::Range(3, 5);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(8));
    }

    #[test]
    fn inverted_range_is_invalid_configuration() {
        assert!(matches!(
            GestureExtent::range(5, 3),
            Err(SphereError::InvalidConfiguration(_))
        ));
        assert_eq!(GestureExtent::range(3, 5).ok(), Some(GestureExtent::Range(3, 5)));
    }

    #[test]
    fn matcher_checks_hands_and_fingers() {
        let matcher = GestureMatcher {
            hands: GestureExtent::Fixed(1),
            fingers: GestureExtent::Range(3, 5),
        };
        assert!(matcher.matches(&frame(1, 3, Vec3::ZERO)));
        assert!(!matcher.matches(&frame(1, 8, Vec3::ZERO)));
        assert!(!matcher.matches(&frame(2, 4, Vec3::ZERO)));
    }

    #[test]
    fn baseline_first_sample_has_zero_delta() {
        let mut baseline = DeltaBaseline::default();
        assert_eq!(baseline.advance(Vec3::new(5.0, 5.0, 5.0)), Vec3::ZERO);
        assert_eq!(baseline.advance(Vec3::new(6.0, 7.0, 5.0)), Vec3::new(1.0, 2.0, 0.0));
        baseline.clear();
        assert_eq!(baseline.last(), None);
        assert_eq!(baseline.advance(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn matching_stream_rotates_then_non_match_freezes() {
        let mut controls = controls();
        let start = controls.camera.position;

        controls.update_frame(&frame(1, 3, Vec3::new(0.0, 150.0, 0.0)));
        // First frame only establishes the baseline.
        assert_relative_eq!(controls.camera.position.x, start.x, epsilon = 1e-3);
        assert_eq!(controls.rotate_baseline.last(), Some(Vec3::new(0.0, 150.0, 0.0)));

        controls.update_frame(&frame(1, 3, Vec3::new(10.0, 150.0, 0.0)));
        let moved = controls.camera.position;
        assert!(moved.x.abs() > 1.0, "yaw should move the camera: {moved}");
        // Orbit radius is untouched by rotation.
        assert_relative_eq!(moved.length(), 3000.0, epsilon = 0.5);

        // Eight fingers: no match, pose frozen, baseline dropped.
        controls.update_frame(&frame(1, 8, Vec3::new(90.0, 40.0, 0.0)));
        assert_eq!(controls.camera.position, moved);
        assert_eq!(controls.rotate_baseline.last(), None);

        // Re-matching far away starts a fresh baseline: no jump.
        controls.update_frame(&frame(1, 4, Vec3::new(-200.0, 300.0, 0.0)));
        assert_relative_eq!(controls.camera.position.x, moved.x, epsilon = 1e-2);
        assert_relative_eq!(controls.camera.position.z, moved.z, epsilon = 1e-2);
    }

    #[test]
    fn yaw_direction_follows_mapping() {
        let mut controls = controls();
        controls.update_frame(&frame(1, 3, Vec3::ZERO));
        // +x hand motion: rotate_transform(+10) < 0, yaw = -that > 0,
        // so eye (0,0,z) swings toward +x.
        controls.update_frame(&frame(1, 3, Vec3::new(10.0, 0.0, 0.0)));
        assert!(controls.camera.position.x > 0.0);
    }

    #[test]
    fn pitch_outside_polar_range_is_skipped() {
        let mut controls = controls();
        controls.gestures.rotate.min = 1.5;
        controls.gestures.rotate.max = 1.6;
        controls.update_frame(&frame(1, 3, Vec3::ZERO));
        // Large downward pitch would leave the (1.5, 1.6) band.
        controls.update_frame(&frame(1, 3, Vec3::new(0.0, -40.0, 0.0)));
        assert_relative_eq!(controls.camera.position.y, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn zoom_channel_changes_radius_within_bounds() {
        let mut controls = controls();
        controls.gestures.rotate.enabled = false;
        controls.gestures.zoom.enabled = true;
        controls.update_frame(&frame(1, 2, Vec3::ZERO));
        // Hand 80 mm toward the sensor: radius shrinks by step × 80/400.
        controls.update_frame(&frame(1, 2, Vec3::new(0.0, 0.0, -80.0)));
        assert_relative_eq!(
            (controls.camera.position - controls.target).length(),
            2800.0,
            epsilon = 0.5
        );
    }

    #[test]
    fn pan_channel_moves_camera_and_target_together() {
        let mut controls = controls();
        controls.gestures.rotate.enabled = false;
        controls.gestures.pan.enabled = true;
        let two_hands = |x: f32| Frame {
            hands: vec![
                Hand {
                    palm_position: Vec3::new(x - 100.0, 0.0, 0.0),
                    stabilized_palm_position: Vec3::ZERO,
                },
                Hand {
                    palm_position: Vec3::new(x + 100.0, 0.0, 0.0),
                    stabilized_palm_position: Vec3::ZERO,
                },
            ],
            pointables: vec![Pointable::default(); 8],
        };
        let eye_before = controls.camera.position - controls.target;
        controls.update_frame(&two_hands(0.0));
        controls.update_frame(&two_hands(40.0));
        assert_relative_eq!(controls.target.x, -100.0, epsilon = 1e-2);
        let eye_after = controls.camera.position - controls.target;
        assert_relative_eq!(eye_after.x, eye_before.x, epsilon = 1e-2);
        assert_relative_eq!(eye_after.z, eye_before.z, epsilon = 1e-2);
    }

    #[test]
    fn frames_ignored_during_pointer_session() {
        let mut controls = controls();
        controls.dispatch(&crate::input::InputEvent::PointerDown {
            button: crate::input::MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        let before = controls.camera.position;
        controls.update_frame(&frame(1, 3, Vec3::ZERO));
        controls.update_frame(&frame(1, 3, Vec3::new(50.0, 0.0, 0.0)));
        assert_eq!(controls.camera.position, before);
    }

    #[test]
    fn every_frame_emits_change() {
        let mut controls = controls();
        controls.update_frame(&frame(0, 0, Vec3::ZERO));
        assert_eq!(controls.drain_events(), vec![ControlEvent::Change]);
    }
}
