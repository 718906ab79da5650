use crate::camera::{Camera, ControlEvent};
use crate::scene::Scene;

/// Drawing backend the engine hands the scene to.
///
/// The engine never draws anything itself. A host implements this trait
/// for its CSS3D, WebGL or GPU backend and the engine calls it whenever
/// the camera or the element transforms change.
pub trait SceneRenderer {
    /// Draw the scene from the camera's point of view.
    fn render(&mut self, scene: &Scene, camera: &Camera);

    /// Resize the drawing surface, in pixels.
    fn set_size(&mut self, width: f32, height: f32);

    /// Observe a camera-control notification. Called before any redraw the
    /// notification triggers.
    fn on_control_event(&mut self, _event: ControlEvent) {}
}
