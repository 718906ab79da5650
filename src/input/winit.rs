//! Translation of winit window events into [`InputEvent`]s.

use ::winit::event::{ElementState, MouseScrollDelta, Touch, TouchPhase, WindowEvent};
use ::winit::keyboard::PhysicalKey;
use glam::Vec2;

use super::event::{InputEvent, MouseButton, WheelDelta};

/// Lines reported per wheel notch by the DOM `detail` API.
const LINES_PER_NOTCH: f32 = 3.0;

/// Stateful winit adapter.
///
/// winit reports button presses without a position and touches one at a
/// time, so the translator remembers the cursor and the set of active
/// touches to produce the position-carrying events the controls expect.
#[derive(Debug, Clone, Default)]
pub struct WinitTranslator {
    cursor: Vec2,
    touches: Vec<(u64, Vec2)>,
}

impl WinitTranslator {
    /// Create a translator with no active touches.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known cursor position in physical pixels.
    #[must_use]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// Convert one window event, or `None` if the controls do not care
    /// about it.
    pub fn translate(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                Some(InputEvent::PointerMove {
                    x: self.cursor.x,
                    y: self.cursor.y,
                })
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let (x, y) = (self.cursor.x, self.cursor.y);
                Some(match state {
                    ElementState::Pressed => InputEvent::PointerDown {
                        button: MouseButton::from(*button),
                        x,
                        y,
                    },
                    ElementState::Released => InputEvent::PointerUp { x, y },
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => {
                        WheelDelta::Lines(-y * LINES_PER_NOTCH)
                    }
                    MouseScrollDelta::PixelDelta(pos) => WheelDelta::Pixels(pos.y as f32),
                };
                Some(InputEvent::Wheel { delta })
            }
            WindowEvent::Touch(touch) => Some(self.touch(touch)),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                let key = format!("{code:?}");
                Some(match event.state {
                    ElementState::Pressed => InputEvent::KeyDown { key },
                    ElementState::Released => InputEvent::KeyUp { key },
                })
            }
            _ => None,
        }
    }

    fn touch(&mut self, touch: &Touch) -> InputEvent {
        let point = Vec2::new(touch.location.x as f32, touch.location.y as f32);
        match touch.phase {
            TouchPhase::Started => {
                self.touches.retain(|(id, _)| *id != touch.id);
                self.touches.push((touch.id, point));
                InputEvent::TouchStart {
                    touches: self.points(),
                }
            }
            TouchPhase::Moved => {
                if let Some(entry) = self.touches.iter_mut().find(|(id, _)| *id == touch.id) {
                    entry.1 = point;
                }
                InputEvent::TouchMove {
                    touches: self.points(),
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                self.touches.retain(|(id, _)| *id != touch.id);
                InputEvent::TouchEnd {
                    touches: self.points(),
                }
            }
        }
    }

    fn points(&self) -> Vec<Vec2> {
        self.touches.iter().map(|(_, p)| *p).collect()
    }
}
