//! Input forwarding for [`DataSphereEngine`].

use super::{DataSphereEngine, SceneRenderer};
use crate::input::{Frame, InputEvent};

impl<R: SceneRenderer> DataSphereEngine<R> {
    /// Process a platform-agnostic input event.
    ///
    /// The event goes to the camera controls; the renderer sees every
    /// resulting notification and the scene is redrawn on a change.
    /// Returns `true` if a frame was rendered.
    ///
    /// # Example
    ///
    /// ```ignore
    /// engine.handle_input(&InputEvent::KeyDown { key: "ArrowLeft".into() });
    /// engine.handle_input(&InputEvent::Wheel { delta: WheelDelta::Pixels(120.0) });
    /// ```
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        self.controls.dispatch(event);
        self.redraw_on_change()
    }

    /// Per-frame hand-tracking hook. Returns `true` if a frame was
    /// rendered.
    pub fn on_gesture_frame(&mut self, frame: &Frame) -> bool {
        self.controls.update_frame(frame);
        self.redraw_on_change()
    }

    fn redraw_on_change(&mut self) -> bool {
        if self.flush_control_events() {
            self.render();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::super::tests::{cards, engine};
    use crate::camera::ControlEvent;
    use crate::input::{GestureState, Hand, MouseButton, Pointable, SwipeGesture, WheelDelta};

    use super::*;

    #[test]
    fn wheel_notifies_without_redraw() {
        let mut engine = engine();
        engine.initialize(cards(3));
        let renders = engine.renderer().renders;
        assert!(!engine.handle_input(&InputEvent::Wheel {
            delta: WheelDelta::Pixels(120.0),
        }));
        assert_eq!(engine.renderer().renders, renders);
        assert_eq!(
            engine.renderer().events,
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn key_press_redraws_immediately() {
        let mut engine = engine();
        engine.initialize(cards(3));
        assert!(engine.handle_input(&InputEvent::KeyDown {
            key: "ArrowRight".into()
        }));
        let camera = engine.renderer().last_camera.unwrap_or(Vec3::ZERO);
        assert!(camera.x < -1.0, "yaw right should swing toward -x: {camera}");
    }

    #[test]
    fn swipe_redraws_when_it_counts() {
        let mut engine = engine();
        let swipe = SwipeGesture {
            direction: Vec3::X,
            speed: 500.0,
            state: GestureState::Stop,
        };
        assert!(engine.handle_input(&InputEvent::Swipe(swipe)));
    }

    #[test]
    fn drag_moves_camera_on_next_animate() {
        let mut engine = engine();
        engine.initialize(cards(3));
        let before = engine.camera().position;
        let _ = engine.handle_input(&InputEvent::PointerDown {
            button: MouseButton::Left,
            x: 400.0,
            y: 300.0,
        });
        let _ = engine.handle_input(&InputEvent::PointerMove { x: 300.0, y: 250.0 });
        assert_eq!(engine.camera().position, before);
        assert!(engine.animate(web_time::Instant::now()));
        assert_ne!(engine.camera().position, before);
    }

    #[test]
    fn gesture_frame_always_redraws() {
        let mut engine = engine();
        let frame = Frame {
            hands: vec![Hand::default()],
            pointables: vec![Pointable::default(); 4],
        };
        assert!(engine.on_gesture_frame(&frame));
        assert!(engine.handle_input(&InputEvent::GestureFrame(frame)));
    }
}
