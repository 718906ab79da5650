use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Controls", inline)]
#[serde(default)]
/// Orbit/zoom/pan tuning for the camera controls.
pub struct ControlOptions {
    /// Rotation sensitivity multiplier.
    #[schemars(title = "Rotate Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub rotate_speed: f32,
    /// Zoom sensitivity multiplier.
    #[schemars(title = "Zoom Speed", range(min = 0.1, max = 5.0), extend("step" = 0.05))]
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    #[schemars(title = "Pan Speed", range(min = 0.05, max = 2.0), extend("step" = 0.05))]
    pub pan_speed: f32,
    /// Disable orbiting.
    #[schemars(title = "Lock Rotation")]
    pub no_rotate: bool,
    /// Disable zooming.
    #[schemars(title = "Lock Zoom")]
    pub no_zoom: bool,
    /// Disable panning.
    #[schemars(title = "Lock Pan")]
    pub no_pan: bool,
    /// Suppress roll about the view axis during trackball drags.
    #[schemars(title = "No Roll")]
    pub no_roll: bool,
    /// Snap samples instead of easing them (no inertia).
    #[schemars(title = "Static Moving")]
    pub static_moving: bool,
    /// Fraction of the remaining sample gap closed per frame when easing.
    #[schemars(title = "Damping", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub dynamic_damping_factor: f32,
    /// Closest allowed orbit radius.
    #[schemars(skip)]
    pub min_distance: f32,
    /// Farthest allowed orbit radius.
    #[schemars(skip)]
    pub max_distance: f32,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 0.5,
            zoom_speed: 1.2,
            pan_speed: 0.3,
            no_rotate: false,
            no_zoom: false,
            no_pan: false,
            no_roll: false,
            static_moving: false,
            dynamic_damping_factor: 0.2,
            min_distance: 100.0,
            max_distance: 6000.0,
        }
    }
}
