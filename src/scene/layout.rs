//! Layout arrangements for the card elements.
//!
//! Every element gets one target transform per layout when the scene is
//! populated; switching layouts tweens towards the stored targets.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

use glam::{Quat, Vec3};
use rand::Rng;

use super::Transform;
use crate::error::SphereError;
use crate::options::SceneOptions;
use crate::util::math::look_rotation;

/// Cards per row and rows per slab in the grid layout.
const GRID_SIDE: usize = 5;

/// A named arrangement of the elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Uniform scatter inside a cube.
    Random,
    /// Spiral over a sphere surface, cards facing outward.
    Sphere,
    /// Descending helix, cards facing outward.
    Helix,
    /// Stacked 5×5 slabs.
    Grid,
}

impl Layout {
    /// Every layout, in menu order.
    pub const ALL: [Layout; 4] = [Self::Random, Self::Sphere, Self::Helix, Self::Grid];

    /// Lowercase name as accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sphere => "sphere",
            Self::Helix => "helix",
            Self::Grid => "grid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = SphereError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SphereError::UnknownLayout(s.to_owned()))
    }
}

/// Per-element target transform for each layout.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutTargets {
    /// Random scatter position (identity rotation).
    pub random: Transform,
    /// Sphere spiral position and outward-facing rotation.
    pub sphere: Transform,
    /// Helix position and outward-facing rotation.
    pub helix: Transform,
    /// Grid slab position (identity rotation).
    pub grid: Transform,
}

impl LayoutTargets {
    /// Compute every layout target for the element at `index` out of
    /// `count`.
    pub fn compute<R: Rng + ?Sized>(
        index: usize,
        count: usize,
        options: &SceneOptions,
        rng: &mut R,
    ) -> Self {
        Self {
            random: random_target(options.scatter_extent, rng),
            sphere: sphere_target(index, count, options.sphere_radius),
            helix: helix_target(index, options.helix_radius),
            grid: grid_target(index, options.grid_spacing, options.grid_layer_spacing),
        }
    }

    /// The target for one layout.
    #[must_use]
    pub fn get(&self, layout: Layout) -> Transform {
        match layout {
            Layout::Random => self.random,
            Layout::Sphere => self.sphere,
            Layout::Helix => self.helix,
            Layout::Grid => self.grid,
        }
    }
}

/// Uniform position in `[-extent, extent)³`.
pub fn random_target<R: Rng + ?Sized>(extent: f32, rng: &mut R) -> Transform {
    let mut axis = || rng.random_range(-extent..extent);
    Transform::at(Vec3::new(axis(), axis(), axis()))
}

/// Point `index` of an evenly spread spiral over a sphere of `radius`,
/// rotated so the card's +Z faces away from the centre.
#[must_use]
pub fn sphere_target(index: usize, count: usize, radius: f32) -> Transform {
    let (phi, theta) = if count <= 1 {
        (PI, 0.0)
    } else {
        let last = (count - 1) as f32;
        let phi = (-1.0 + 2.0 * index as f32 / last).clamp(-1.0, 1.0).acos();
        (phi, (last * PI).sqrt() * phi)
    };
    let position = radius
        * Vec3::new(theta.cos() * phi.sin(), theta.sin() * phi.sin(), phi.cos());
    Transform {
        position,
        rotation: facing(position, position * 2.0),
    }
}

/// Point `index` of a helix of `radius` descending 8 units per card,
/// rotated so the card faces away from the helix axis.
#[must_use]
pub fn helix_target(index: usize, radius: f32) -> Transform {
    let phi = (index as f32 + 12.0) * 0.25 + PI;
    let position = Vec3::new(
        radius * phi.sin(),
        -(index as f32 * 8.0) + 500.0,
        radius * phi.cos(),
    );
    let outward = Vec3::new(position.x * 2.0, position.y, position.z * 2.0);
    Transform {
        position,
        rotation: facing(position, outward),
    }
}

/// Cell `index` of stacked 5×5 slabs, filling rows left to right, then
/// top to bottom, then front to back.
#[must_use]
pub fn grid_target(index: usize, spacing: f32, layer_spacing: f32) -> Transform {
    let column = (index % GRID_SIDE) as f32;
    let row = ((index / GRID_SIDE) % GRID_SIDE) as f32;
    let layer = (index / (GRID_SIDE * GRID_SIDE)) as f32;
    let half = (GRID_SIDE / 2) as f32;
    Transform::at(Vec3::new(
        column * spacing - half * spacing,
        -row * spacing + half * spacing,
        layer * layer_spacing - 2.0 * layer_spacing,
    ))
}

fn facing(position: Vec3, target: Vec3) -> Quat {
    look_rotation(target - position, Vec3::Y)
}
