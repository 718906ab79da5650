//! The application context tying scene, camera controls, tweens and the
//! host's renderer together.

mod input;
mod options;
mod renderer;

pub use renderer::SceneRenderer;

use std::time::Duration;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_time::Instant;

use crate::animation::{TweenConfig, TweenSet};
use crate::camera::{Camera, CameraControls, ControlEvent, ScreenRect};
use crate::error::SphereError;
use crate::options::{is_positive, Options};
use crate::scene::dataset::CardData;
use crate::scene::{Layout, Scene};

/// Card visualization engine.
///
/// Owns the scene, the camera controls and the running tweens, and drives
/// a host-supplied [`SceneRenderer`]. The host forwards input through
/// [`handle_input`](Self::handle_input) and calls
/// [`animate`](Self::animate) once per display frame.
///
/// # Example
///
/// ```ignore
/// let mut engine = DataSphereEngine::new(Options::default(), renderer, viewport)?;
/// engine.initialize(load_cards(path)?);
/// engine.transform_by_name("sphere")?;
/// loop {
///     for event in pending_events() {
///         engine.handle_input(&event);
///     }
///     engine.animate(Instant::now());
/// }
/// ```
pub struct DataSphereEngine<R: SceneRenderer> {
    options: Options,
    renderer: R,
    scene: Scene,
    controls: CameraControls,
    tweens: TweenSet,
    rng: StdRng,
    active_layout: Option<Layout>,
    active_preset: Option<String>,
}

impl<R: SceneRenderer> DataSphereEngine<R> {
    /// Build an engine with validated options and a non-empty viewport.
    pub fn new(
        options: Options,
        renderer: R,
        viewport: ScreenRect,
    ) -> Result<Self, SphereError> {
        Self::with_rng(options, renderer, viewport, StdRng::from_rng(&mut rand::rng()))
    }

    /// Like [`new`](Self::new), with a fixed seed for the random scatter so
    /// scenes are reproducible.
    pub fn with_seed(
        options: Options,
        renderer: R,
        viewport: ScreenRect,
        seed: u64,
    ) -> Result<Self, SphereError> {
        Self::with_rng(options, renderer, viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        options: Options,
        mut renderer: R,
        viewport: ScreenRect,
        rng: StdRng,
    ) -> Result<Self, SphereError> {
        options.validate()?;
        if !is_positive(viewport.width) || !is_positive(viewport.height) {
            return Err(SphereError::config(format!(
                "viewport must be positive, got {}x{}",
                viewport.width, viewport.height
            )));
        }

        let co = &options.camera;
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, co.distance),
            co.fovy,
            viewport.width / viewport.height,
            co.znear,
            co.zfar,
        );
        let mut controls = CameraControls::new(camera, viewport);
        controls.configure(&options)?;
        let _ = controls.drain_events();
        renderer.set_size(viewport.width, viewport.height);

        log::debug!(
            "engine created: {}x{} viewport, camera at {}",
            viewport.width,
            viewport.height,
            controls.camera.position
        );

        Ok(Self {
            options,
            renderer,
            scene: Scene::new(),
            controls,
            tweens: TweenSet::new(),
            rng,
            active_layout: None,
            active_preset: None,
        })
    }

    /// Populate the scene with one element per card at its random-layout
    /// position, settle the camera and draw the first frame.
    pub fn initialize(&mut self, cards: Vec<CardData>) {
        self.tweens.clear();
        self.scene.populate(cards, &self.options.scene, &mut self.rng);
        self.active_layout = Some(Layout::Random);
        log::info!("initialized scene with {} elements", self.scene.len());

        self.controls.update();
        let _ = self.flush_control_events();
        self.render();
    }

    /// Hand the scene and camera to the renderer.
    pub fn render(&mut self) {
        self.renderer.render(&self.scene, &self.controls.camera);
        self.scene.mark_rendered();
    }

    /// Move every element to `layout`, cancelling any running transition.
    pub fn transform(&mut self, layout: Layout) {
        self.transform_at(layout, Instant::now());
    }

    /// [`transform`](Self::transform) with an explicit start time.
    pub fn transform_at(&mut self, layout: Layout, now: Instant) {
        self.tweens.clear();
        let config = TweenConfig {
            duration: Duration::from_millis(self.options.scene.transform_duration_ms),
            easing: self.options.scene.easing,
        };
        self.tweens
            .start_towards(&self.scene, now, config, |element| element.targets.get(layout));
        self.active_layout = Some(layout);
        log::debug!("transform to {layout}: {} tweens", self.tweens.len());
    }

    /// [`transform`](Self::transform) by layout name (`"sphere"`,
    /// `"helix"`, `"grid"` or `"random"`).
    pub fn transform_by_name(&mut self, name: &str) -> Result<(), SphereError> {
        let layout = name.parse::<Layout>().inspect_err(|_| {
            log::warn!("unknown layout '{name}'");
        })?;
        self.transform(layout);
        Ok(())
    }

    /// React to a window resize: camera aspect, renderer surface and the
    /// controls' normalization rectangle all follow, then redraw.
    pub fn on_window_resize(&mut self, width: f32, height: f32) {
        let screen = ScreenRect::from_size(width, height).sanitized();
        self.controls.camera.aspect = screen.width / screen.height;
        self.renderer.set_size(screen.width, screen.height);
        self.controls.handle_resize(screen);
        self.render();
    }

    /// One animation tick: advance tweens, update the controls and redraw
    /// if anything moved. Returns `true` if a frame was rendered.
    pub fn animate(&mut self, now: Instant) -> bool {
        let tweening = self.tweens.update(now, &mut self.scene);
        self.controls.update();
        let changed = self.flush_control_events();
        if tweening || changed {
            self.render();
            return true;
        }
        false
    }

    /// Forward queued control notifications to the renderer. Returns
    /// `true` if any of them was a [`ControlEvent::Change`].
    fn flush_control_events(&mut self) -> bool {
        let mut changed = false;
        for event in self.controls.drain_events() {
            changed |= event == ControlEvent::Change;
            self.renderer.on_control_event(event);
        }
        changed
    }

    // ── Accessors ──

    /// The scene.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.controls.camera
    }

    /// The camera controls.
    #[must_use]
    pub fn controls(&self) -> &CameraControls {
        &self.controls
    }

    /// Mutable access to the camera controls (enable/disable, reset).
    pub fn controls_mut(&mut self) -> &mut CameraControls {
        &mut self.controls
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Layout the elements are in or moving towards.
    #[must_use]
    pub fn active_layout(&self) -> Option<Layout> {
        self.active_layout
    }

    /// Whether a layout transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tweens.is_animating()
    }
}
