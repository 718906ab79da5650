//! Routing of [`InputEvent`]s into the camera controls.
//!
//! Pointer, wheel and touch handlers only record samples and switch the
//! session state; the camera itself moves on the next
//! [`update`](CameraControls::update). Keyboard, swipe and hand-tracking
//! input move the camera immediately.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, WheelDelta};
use crate::camera::{CameraControls, ControlEvent, InputState};

/// Wheel notches to zoom-sample units.
const WHEEL_ZOOM_SCALE: f32 = 0.01;

impl CameraControls {
    /// Feed one input event to the controls.
    ///
    /// Ignored entirely while the controls are disabled; each input family
    /// can also be switched off through the channel options.
    pub fn dispatch(&mut self, event: &InputEvent) {
        if !self.enabled {
            return;
        }
        match event {
            InputEvent::PointerDown { button, x, y } if self.channels.pointer => {
                self.pointer_down(*button, Vec2::new(*x, *y));
            }
            InputEvent::PointerMove { x, y } if self.channels.pointer => {
                self.pointer_move(Vec2::new(*x, *y));
            }
            InputEvent::PointerUp { .. } if self.channels.pointer => self.pointer_up(),
            InputEvent::Wheel { delta } if self.channels.wheel => self.wheel(*delta),
            InputEvent::TouchStart { touches } if self.channels.touch => {
                self.touch_start(touches);
            }
            InputEvent::TouchMove { touches } if self.channels.touch => {
                self.touch_move(touches);
            }
            InputEvent::TouchEnd { touches } if self.channels.touch => {
                self.touch_end(touches);
            }
            InputEvent::KeyDown { key } if self.channels.keyboard => {
                self.handle_key_down(key);
            }
            InputEvent::GestureFrame(frame) => self.update_frame(frame),
            InputEvent::Swipe(swipe) if self.channels.swipe => self.handle_swipe(swipe),
            _ => {}
        }
    }

    // ── Pointer ──────────────────────────────────────────────────────────

    fn pointer_down(&mut self, button: MouseButton, page: Vec2) {
        if self.state == InputState::None {
            self.state = match button {
                MouseButton::Left => InputState::Rotate,
                MouseButton::Middle => InputState::Zoom,
                MouseButton::Right => InputState::Pan,
            };
        }

        match self.state {
            InputState::Rotate if !self.settings.no_rotate => {
                self.rotate_start = self.ball_projection(page);
                self.rotate_end = self.rotate_start;
            }
            InputState::Zoom if !self.settings.no_zoom => {
                self.zoom_start = self.screen_position(page);
                self.zoom_end = self.zoom_start;
            }
            InputState::Pan if !self.settings.no_pan => {
                self.pan_start = self.screen_position(page);
                self.pan_end = self.pan_start;
            }
            _ => {}
        }

        self.pointer_session = true;
        log::debug!("pointer session opened in {:?}", self.state);
        self.emit(ControlEvent::Start);
    }

    fn pointer_move(&mut self, page: Vec2) {
        if !self.pointer_session {
            return;
        }
        match self.state {
            InputState::Rotate if !self.settings.no_rotate => {
                self.rotate_end = self.ball_projection(page);
            }
            InputState::Zoom if !self.settings.no_zoom => {
                self.zoom_end = self.screen_position(page);
            }
            InputState::Pan if !self.settings.no_pan => {
                self.pan_end = self.screen_position(page);
            }
            _ => {}
        }
    }

    fn pointer_up(&mut self) {
        if !self.pointer_session {
            return;
        }
        log::debug!("pointer session closed from {:?}", self.state);
        self.state = InputState::None;
        self.pointer_session = false;
        self.emit(ControlEvent::End);
    }

    // ── Wheel ────────────────────────────────────────────────────────────

    fn wheel(&mut self, delta: WheelDelta) {
        self.zoom_start.y += delta.notches() * WHEEL_ZOOM_SCALE;
        self.emit(ControlEvent::Start);
        self.emit(ControlEvent::End);
    }

    // ── Touch ────────────────────────────────────────────────────────────

    fn touch_start(&mut self, touches: &[Vec2]) {
        match *touches {
            [touch] => {
                self.state = InputState::TouchRotate;
                self.rotate_start = self.ball_projection(touch);
                self.rotate_end = self.rotate_start;
            }
            [a, b] => {
                self.state = InputState::TouchZoomPan;
                self.pinch_start = a.distance(b);
                self.pinch_end = self.pinch_start;
                self.pan_start = self.screen_position((a + b) * 0.5);
                self.pan_end = self.pan_start;
            }
            _ => self.state = InputState::None,
        }
        log::debug!("touch session started in {:?}", self.state);
        self.emit(ControlEvent::Start);
    }

    fn touch_move(&mut self, touches: &[Vec2]) {
        match *touches {
            [touch] => self.rotate_end = self.ball_projection(touch),
            [a, b] => {
                self.pinch_end = a.distance(b);
                self.pan_end = self.screen_position((a + b) * 0.5);
            }
            _ => self.state = InputState::None,
        }
    }

    /// `touches` are the points still down after the lift.
    fn touch_end(&mut self, touches: &[Vec2]) {
        match *touches {
            [touch] => {
                self.rotate_end = self.ball_projection(touch);
                self.rotate_start = self.rotate_end;
            }
            [a, b] => {
                self.pinch_start = 0.0;
                self.pinch_end = 0.0;
                self.pan_end = self.screen_position((a + b) * 0.5);
                self.pan_start = self.pan_end;
            }
            _ => {}
        }
        self.state = InputState::None;
        self.emit(ControlEvent::End);
    }
}
