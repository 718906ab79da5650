use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
/// Layout geometry and transition timing.
pub struct SceneOptions {
    /// Duration of a layout transition in milliseconds.
    #[schemars(title = "Transition (ms)", range(min = 0, max = 5000), extend("step" = 50))]
    pub transform_duration_ms: u64,
    /// Easing curve for layout transitions.
    #[schemars(skip)]
    pub easing: EasingFunction,
    /// Half-extent of the cube the random scatter fills.
    #[schemars(skip)]
    pub scatter_extent: f32,
    /// Radius of the sphere layout.
    #[schemars(title = "Sphere Radius", range(min = 100.0, max = 3000.0), extend("step" = 10.0))]
    pub sphere_radius: f32,
    /// Radius of the helix layout.
    #[schemars(title = "Helix Radius", range(min = 100.0, max = 3000.0), extend("step" = 10.0))]
    pub helix_radius: f32,
    /// Distance between neighbouring cells of the grid layout.
    #[schemars(skip)]
    pub grid_spacing: f32,
    /// Distance between stacked 5×5 grid slabs.
    #[schemars(skip)]
    pub grid_layer_spacing: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            transform_duration_ms: 1000,
            easing: EasingFunction::SinusoidalInOut,
            scatter_extent: 2000.0,
            sphere_radius: 800.0,
            helix_radius: 1000.0,
            grid_spacing: 400.0,
            grid_layer_spacing: 1000.0,
        }
    }
}
