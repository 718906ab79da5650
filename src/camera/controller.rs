use glam::{Quat, Vec2, Vec3};

use super::core::Camera;
use super::state::{ControlEvent, InputState, ResetSnapshot, ScreenRect};
use crate::error::SphereError;
use crate::input::{DeltaBaseline, DiscreteOrientation};
use crate::options::{
    ControlOptions, GestureOptions, InputChannelOptions, KeybindingOptions, Options,
};
use crate::util::math::set_length;

/// Squared distance the camera must move before a frame counts as a change.
const CHANGE_EPSILON: f32 = 1e-6;

/// Trackball-style camera controls.
///
/// Input handlers record start/end samples for the active gesture; each
/// [`update`](Self::update) closes part of the gap between them and moves
/// the camera accordingly. With damping enabled the gap shrinks
/// geometrically, which gives drags their inertia.
///
/// The controls own the camera. Notifications accumulate in an internal
/// queue and are collected with [`drain_events`](Self::drain_events).
#[derive(Debug, Clone)]
pub struct CameraControls {
    /// The controlled camera.
    pub camera: Camera,
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    /// When `false`, every input event is ignored.
    pub enabled: bool,

    pub(crate) settings: ControlOptions,
    pub(crate) channels: InputChannelOptions,
    pub(crate) gestures: GestureOptions,
    pub(crate) keybindings: KeybindingOptions,
    screen: ScreenRect,

    pub(crate) state: InputState,
    pub(crate) pointer_session: bool,

    eye: Vec3,
    pub(crate) rotate_start: Vec3,
    pub(crate) rotate_end: Vec3,
    pub(crate) zoom_start: Vec2,
    pub(crate) zoom_end: Vec2,
    pub(crate) pan_start: Vec2,
    pub(crate) pan_end: Vec2,
    pub(crate) pinch_start: f32,
    pub(crate) pinch_end: f32,

    pub(crate) rotate_baseline: DeltaBaseline,
    pub(crate) zoom_baseline: DeltaBaseline,
    pub(crate) pan_baseline: DeltaBaseline,
    pub(crate) orientation: DiscreteOrientation,

    pub(crate) snapshot: ResetSnapshot,
    last_position: Vec3,
    events: Vec<ControlEvent>,
}

impl CameraControls {
    /// Take control of `camera`, orbiting the world origin.
    ///
    /// The current pose becomes the reset snapshot and an initial
    /// [`update`](Self::update) runs so the camera faces the target.
    #[must_use]
    pub fn new(camera: Camera, screen: ScreenRect) -> Self {
        let target = Vec3::ZERO;
        let snapshot = ResetSnapshot {
            target,
            position: camera.position,
            up: camera.up,
        };

        let mut controls = Self {
            eye: camera.position - target,
            camera,
            target,
            enabled: true,
            settings: ControlOptions::default(),
            channels: InputChannelOptions::default(),
            gestures: GestureOptions::default(),
            keybindings: KeybindingOptions::default(),
            screen: screen.sanitized(),
            state: InputState::None,
            pointer_session: false,
            rotate_start: Vec3::ZERO,
            rotate_end: Vec3::ZERO,
            zoom_start: Vec2::ZERO,
            zoom_end: Vec2::ZERO,
            pan_start: Vec2::ZERO,
            pan_end: Vec2::ZERO,
            pinch_start: 0.0,
            pinch_end: 0.0,
            rotate_baseline: DeltaBaseline::default(),
            zoom_baseline: DeltaBaseline::default(),
            pan_baseline: DeltaBaseline::default(),
            orientation: DiscreteOrientation::default(),
            snapshot,
            last_position: Vec3::ZERO,
            events: Vec::new(),
        };
        controls.update();
        controls
    }

    /// Apply validated options: control tuning, channel switches, gesture
    /// matchers and key bindings.
    pub fn configure(&mut self, options: &Options) -> Result<(), SphereError> {
        if let Err(e) = options.validate() {
            log::warn!("rejected camera control options: {e}");
            return Err(e);
        }
        self.settings = options.controls.clone();
        self.channels = options.input.clone();
        self.gestures = options.gestures.clone();
        self.keybindings = options.keybindings.clone();
        self.clear_gesture_baselines();
        log::debug!("camera controls reconfigured");
        Ok(())
    }

    /// Control tuning currently in effect.
    #[must_use]
    pub fn settings(&self) -> &ControlOptions {
        &self.settings
    }

    /// Store the viewport rectangle used to normalize page coordinates.
    pub fn handle_resize(&mut self, screen: ScreenRect) {
        self.screen = screen.sanitized();
    }

    /// Viewport rectangle currently used for normalization.
    #[must_use]
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Active gesture session.
    #[must_use]
    pub fn state(&self) -> InputState {
        self.state
    }

    /// Offset from the target to the camera as of the last update.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Take every notification emitted since the last call, oldest first.
    pub fn drain_events(&mut self) -> Vec<ControlEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: ControlEvent) {
        self.events.push(event);
    }

    // ── Per-frame step ───────────────────────────────────────────────────

    /// Advance the controls by one animation frame.
    pub fn update(&mut self) {
        self.eye = self.camera.position - self.target;

        if !self.settings.no_rotate {
            self.rotate_camera();
        }
        if !self.settings.no_zoom {
            self.zoom_camera();
        }
        if !self.settings.no_pan {
            self.pan_camera();
        }

        self.camera.position = self.target + self.eye;
        if !self.settings.no_zoom || !self.settings.no_pan {
            self.check_distances();
        }
        self.camera.look_at(self.target);

        if self.last_position.distance_squared(self.camera.position) > CHANGE_EPSILON {
            self.emit(ControlEvent::Change);
            self.last_position = self.camera.position;
        }
    }

    /// Rotate the eye by the arc between the rotate samples.
    pub(crate) fn rotate_camera(&mut self) {
        let (start, end) = (self.rotate_start, self.rotate_end);
        let angle = (start.dot(end) / (start.length() * end.length())).acos();
        if !angle.is_finite() || angle == 0.0 {
            return;
        }
        let axis = start.cross(end).normalize_or_zero();
        if axis == Vec3::ZERO {
            return;
        }

        let angle = angle * self.settings.rotate_speed;
        let rotation = Quat::from_axis_angle(axis, -angle);
        self.eye = rotation * self.eye;
        self.rotate_end = rotation * self.rotate_end;

        if self.settings.static_moving {
            self.rotate_start = self.rotate_end;
        } else {
            let damping = self.settings.dynamic_damping_factor;
            let ease = Quat::from_axis_angle(axis, angle * (damping - 1.0));
            self.rotate_start = ease * self.rotate_start;
        }
    }

    /// Scale the eye by the pinch ratio or the vertical zoom drag.
    pub(crate) fn zoom_camera(&mut self) {
        if self.state == InputState::TouchZoomPan {
            let factor = self.pinch_start / self.pinch_end;
            self.pinch_start = self.pinch_end;
            if factor.is_finite() && factor > 0.0 {
                self.eye *= factor;
            }
            return;
        }

        let factor = 1.0 + (self.zoom_end.y - self.zoom_start.y) * self.settings.zoom_speed;
        if factor != 1.0 && factor > 0.0 {
            self.eye *= factor;
            if self.settings.static_moving {
                self.zoom_start = self.zoom_end;
            } else {
                self.zoom_start.y += (self.zoom_end.y - self.zoom_start.y)
                    * self.settings.dynamic_damping_factor;
            }
        }
    }

    /// Translate camera and target by the pan drag, scaled by distance.
    pub(crate) fn pan_camera(&mut self) {
        let change = (self.pan_end - self.pan_start) * self.eye.length() * self.settings.pan_speed;
        if change == Vec2::ZERO {
            return;
        }

        let up = self.camera.up;
        let pan = set_length(self.eye.cross(up), change.x) + set_length(up, change.y);
        self.camera.position += pan;
        self.target += pan;

        if self.settings.static_moving {
            self.pan_start = self.pan_end;
        } else {
            self.pan_start += (self.pan_end - self.pan_start) * self.settings.dynamic_damping_factor;
        }
    }

    /// Keep the orbit radius within `[min_distance, max_distance]`.
    pub(crate) fn check_distances(&mut self) {
        let (min, max) = (self.settings.min_distance, self.settings.max_distance);
        let length = self.eye.length_squared();
        if length > max * max {
            self.eye = set_length(self.eye, max);
        } else if length < min * min {
            self.eye = set_length(self.eye, min);
        } else {
            return;
        }
        self.camera.position = self.target + self.eye;
    }

    /// Restore the construction-time pose and end any session.
    pub fn reset(&mut self) {
        self.state = InputState::None;
        self.pointer_session = false;

        self.target = self.snapshot.target;
        self.camera.position = self.snapshot.position;
        self.camera.up = self.snapshot.up;

        self.rotate_start = self.rotate_end;
        self.zoom_start = self.zoom_end;
        self.pan_start = self.pan_end;
        self.pinch_start = 0.0;
        self.pinch_end = 0.0;
        self.orientation = DiscreteOrientation::default();
        self.clear_gesture_baselines();

        self.eye = self.camera.position - self.target;
        self.camera.look_at(self.target);
        log::debug!("camera reset to {}", self.camera.position);
        self.emit(ControlEvent::Change);
        self.last_position = self.camera.position;
    }

    // ── Screen mapping ───────────────────────────────────────────────────

    /// Project a page position onto the virtual trackball, in world space.
    #[must_use]
    pub fn ball_projection(&self, page: Vec2) -> Vec3 {
        let ScreenRect { left, top, width, height } = self.screen;
        let half = Vec2::new(width, height) * 0.5;
        let mut m = Vec3::new(
            (page.x - half.x - left) / half.x,
            (half.y + top - page.y) / half.y,
            0.0,
        );
        let length = m.length();

        if self.settings.no_roll {
            m.z = if length < std::f32::consts::FRAC_1_SQRT_2 {
                (1.0 - length * length).sqrt()
            } else {
                0.5 / length
            };
        } else if length > 1.0 {
            m /= length;
        } else {
            m.z = (1.0 - length * length).sqrt();
        }

        let eye = self.camera.position - self.target;
        let up = self.camera.up;
        set_length(up, -m.y) - set_length(up.cross(eye), m.x) + set_length(eye, m.z)
    }

    /// Normalize a page position to `[0, 1]²` over the viewport.
    #[must_use]
    pub fn screen_position(&self, page: Vec2) -> Vec2 {
        Vec2::new(
            (page.x - self.screen.left) / self.screen.width,
            (page.y - self.screen.top) / self.screen.height,
        )
    }
}
