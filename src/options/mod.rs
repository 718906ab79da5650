//! Centralized configuration with TOML preset support.
//!
//! Camera projection, control tuning, input channel switches, hand-tracking
//! gestures, layout geometry and key bindings are consolidated here.
//! Options serialize to/from TOML so a host can ship presets alongside the
//! dataset.

mod camera;
mod controls;
mod gesture;
mod input;
mod keybindings;
mod scene;

use std::path::Path;

pub use camera::CameraOptions;
pub use controls::ControlOptions;
pub use gesture::{GestureChannelOptions, GestureOptions};
pub use input::InputChannelOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
pub use scene::SceneOptions;
use serde::{Deserialize, Serialize};

use crate::error::SphereError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[controls]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and starting pose.
    pub camera: CameraOptions,
    /// Orbit/zoom/pan tuning.
    pub controls: ControlOptions,
    /// Input channel switches and discrete-step tuning.
    pub input: InputChannelOptions,
    /// Hand-tracking gesture channels.
    #[schemars(skip)]
    pub gestures: GestureOptions,
    /// Layout geometry and transition timing.
    pub scene: SceneOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

/// Finite and strictly positive.
pub(crate) fn is_positive(x: f32) -> bool {
    x.is_finite() && x > 0.0
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml(content: &str) -> Result<Self, SphereError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| SphereError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, SphereError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("Loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), SphereError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SphereError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the camera controls cannot work with.
    pub fn validate(&self) -> Result<(), SphereError> {
        let camera = &self.camera;
        if !is_positive(camera.fovy) || camera.fovy >= 180.0 {
            return Err(SphereError::config("camera.fovy must be in (0, 180)"));
        }
        if !is_positive(camera.znear) || camera.zfar.is_nan() || camera.zfar <= camera.znear {
            return Err(SphereError::config(
                "camera clip planes must satisfy 0 < znear < zfar",
            ));
        }
        if !is_positive(camera.distance) {
            return Err(SphereError::config("camera.distance must be positive"));
        }

        let controls = &self.controls;
        for (name, speed) in [
            ("rotate_speed", controls.rotate_speed),
            ("zoom_speed", controls.zoom_speed),
            ("pan_speed", controls.pan_speed),
        ] {
            if !speed.is_finite() || speed < 0.0 {
                return Err(SphereError::config(format!(
                    "controls.{name} must be a non-negative number"
                )));
            }
        }
        let damping = controls.dynamic_damping_factor;
        if !is_positive(damping) || damping > 1.0 {
            return Err(SphereError::config(
                "controls.dynamic_damping_factor must be in (0, 1]",
            ));
        }
        if controls.min_distance.is_nan()
            || controls.max_distance.is_nan()
            || controls.min_distance < 0.0
            || controls.min_distance > controls.max_distance
        {
            return Err(SphereError::config(
                "controls distances must satisfy 0 <= min_distance <= max_distance",
            ));
        }

        let input = &self.input;
        if !is_positive(input.key_step_degrees) {
            return Err(SphereError::config("input.key_step_degrees must be positive"));
        }
        if !(0.0..=1.0).contains(&input.swipe_threshold) {
            return Err(SphereError::config("input.swipe_threshold must be in [0, 1]"));
        }
        if !input.swipe_yaw_scale.is_finite() {
            return Err(SphereError::config("input.swipe_yaw_scale must be finite"));
        }

        self.gestures.validate()?;
        self.keybindings.validate()?;

        let scene = &self.scene;
        for (name, value) in [
            ("scatter_extent", scene.scatter_extent),
            ("sphere_radius", scene.sphere_radius),
            ("helix_radius", scene.helix_radius),
            ("grid_spacing", scene.grid_spacing),
            ("grid_layer_spacing", scene.grid_layer_spacing),
        ] {
            if !is_positive(value) {
                return Err(SphereError::config(format!(
                    "scene.{name} must be positive"
                )));
            }
        }
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gesture::GestureExtent;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[controls]
rotate_speed = 0.8
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.controls.rotate_speed, 0.8);
        assert_eq!(opts.controls.zoom_speed, 1.2);
        assert_eq!(opts.controls.max_distance, 6000.0);
        assert_eq!(opts.scene.transform_duration_ms, 1000);
        assert!(opts.input.keyboard);
    }

    #[test]
    fn gesture_extents_parse_scalar_and_range() {
        let toml_str = r"
[gestures.rotate]
hands = [1, 2]
fingers = 4
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.gestures.rotate.hands, GestureExtent::Range(1, 2));
        assert_eq!(opts.gestures.rotate.fingers, GestureExtent::Fixed(4));
    }

    #[test]
    fn malformed_gesture_extent_fails_at_load() {
        for bad in ["fingers = [5, 3]", "fingers = [1, 2, 3]", "fingers = -1"] {
            let toml_str = format!("[gestures.rotate]\n{bad}\n");
            assert!(
                Options::from_toml(&toml_str).is_err(),
                "accepted {bad}"
            );
        }
    }

    #[test]
    fn inconsistent_distances_are_rejected() {
        let mut opts = Options::default();
        opts.controls.min_distance = 500.0;
        opts.controls.max_distance = 100.0;
        assert!(matches!(
            opts.validate(),
            Err(SphereError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn damping_out_of_range_is_rejected() {
        let mut opts = Options::default();
        opts.controls.dynamic_damping_factor = 0.0;
        assert!(opts.validate().is_err());
        opts.controls.dynamic_damping_factor = 1.5;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::YawLeft)
        );
        assert_eq!(
            opts.keybindings.lookup("Space"),
            Some(KeyAction::ResetOrientation)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir().join(format!(
            "datasphere-presets-{}",
            std::process::id()
        ));
        let mut opts = Options::default();
        opts.scene.sphere_radius = 640.0;
        opts.save(&dir.join("wide.toml")).unwrap();

        let loaded = Options::load(&dir.join("wide.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["wide".to_owned()]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("controls"));
        assert!(props.contains_key("input"));
        assert!(props.contains_key("scene"));

        // Skipped sections should be absent
        assert!(!props.contains_key("gestures"));
        assert!(!props.contains_key("keybindings"));

        let controls = &props["controls"]["properties"];
        assert!(controls.get("rotate_speed").is_some());
        assert!(controls.get("min_distance").is_none());
    }
}
