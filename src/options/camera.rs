use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and starting pose.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Initial distance from the orbit target along +Z.
    #[schemars(title = "Start Distance", range(min = 100.0, max = 10000.0), extend("step" = 50.0))]
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 1.0,
            zfar: 100_000.0,
            distance: 3000.0,
        }
    }
}
