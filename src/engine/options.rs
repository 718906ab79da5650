//! Options methods for [`DataSphereEngine`].

use std::path::Path;

use super::{DataSphereEngine, SceneRenderer};
use crate::error::SphereError;
use crate::options::Options;

impl<R: SceneRenderer> DataSphereEngine<R> {
    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validate and replace the options, pushing them to the camera and
    /// the controls. Running transitions keep their original timing.
    pub fn set_options(&mut self, new: Options) -> Result<(), SphereError> {
        self.controls.configure(&new)?;
        self.options = new;
        self.apply_camera();
        self.render();
        Ok(())
    }

    /// Push camera projection options to the camera.
    fn apply_camera(&mut self) {
        let co = &self.options.camera;
        self.controls.camera.fovy = co.fovy;
        self.controls.camera.znear = co.znear;
        self.controls.camera.zfar = co.zfar;
    }

    /// Load a named options preset (`<name>.toml`) from `presets_dir`.
    pub fn load_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), SphereError> {
        let path = presets_dir.join(format!("{name}.toml"));
        let options = Options::load(&path).inspect_err(|e| {
            log::warn!("Failed to load preset '{name}': {e}");
        })?;
        self.set_options(options)?;
        log::info!("Loaded preset '{name}'");
        self.active_preset = Some(name.to_owned());
        Ok(())
    }

    /// Save the current options as a named preset in `presets_dir`.
    pub fn save_preset(
        &mut self,
        name: &str,
        presets_dir: &Path,
    ) -> Result<(), SphereError> {
        let path = presets_dir.join(format!("{name}.toml"));
        self.options.save(&path)?;
        log::info!("Saved preset '{name}'");
        self.active_preset = Some(name.to_owned());
        Ok(())
    }

    /// Name of the last loaded or saved preset.
    #[must_use]
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::engine;
    use super::*;

    #[test]
    fn set_options_applies_projection_and_controls() {
        let mut engine = engine();
        let mut options = Options::default();
        options.camera.fovy = 60.0;
        options.controls.rotate_speed = 1.5;
        engine.set_options(options).unwrap();
        assert_eq!(engine.camera().fovy, 60.0);
        assert_eq!(engine.controls().settings().rotate_speed, 1.5);
    }

    #[test]
    fn invalid_options_leave_engine_untouched() {
        let mut engine = engine();
        let mut options = Options::default();
        options.camera.fovy = -5.0;
        assert!(engine.set_options(options).is_err());
        assert_eq!(engine.options().camera.fovy, 40.0);
    }

    #[test]
    fn preset_round_trip() {
        let dir = std::env::temp_dir().join(format!(
            "datasphere-engine-presets-{}",
            std::process::id()
        ));
        let mut engine = engine();
        let mut options = Options::default();
        options.controls.zoom_speed = 2.0;
        engine.set_options(options).unwrap();
        engine.save_preset("zoomy", &dir).unwrap();

        let mut other = super::super::tests::engine();
        other.load_preset("zoomy", &dir).unwrap();
        assert_eq!(other.options().controls.zoom_speed, 2.0);
        assert_eq!(other.active_preset(), Some("zoomy"));
        assert!(other.load_preset("missing", &dir).is_err());
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
