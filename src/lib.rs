// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Interactive 3D card visualization with trackball camera controls.
//!
//! A set of data cards is laid out in 3D (random scatter, sphere, helix or
//! grid) and explored with a camera that fuses mouse, wheel, touch,
//! keyboard and hand-tracking input. Drawing is left to the host through
//! the [`engine::SceneRenderer`] trait.
//!
//! # Key entry points
//!
//! - [`engine::DataSphereEngine`] - the application context
//! - [`camera::CameraControls`] - trackball controls driving the camera
//! - [`input::InputEvent`] - platform-agnostic input fed to the controls
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`scene::Scene`] - the card elements and their layout targets
//!
//! # Architecture
//!
//! Everything runs on the host's thread. Input handlers only record
//! gesture samples; once per display frame [`engine::DataSphereEngine::animate`]
//! advances the layout tweens, lets the controls ease the camera towards
//! the recorded samples, and redraws if anything moved.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;

pub use camera::{Camera, CameraControls, ControlEvent, InputState, ScreenRect};
pub use engine::{DataSphereEngine, SceneRenderer};
pub use error::SphereError;
pub use input::InputEvent;
pub use options::Options;
pub use scene::{Layout, Scene};
