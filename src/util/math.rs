//! Small vector helpers shared by the camera controls and layouts.

use glam::{Mat3, Quat, Vec3};

/// Rescale `v` to length `len`, keeping its direction.
///
/// A zero vector stays zero. A negative `len` flips the direction.
#[inline]
#[must_use]
pub fn set_length(v: Vec3, len: f32) -> Vec3 {
    v.normalize_or_zero() * len
}

/// Linearly map `x` from the range `[a1, a2]` to `[b1, b2]`.
#[inline]
#[must_use]
pub fn map_linear(x: f32, a1: f32, a2: f32, b1: f32, b2: f32) -> f32 {
    b1 + (x - a1) * (b2 - b1) / (a2 - a1)
}

/// Angle in radians between two vectors; zero when either is degenerate.
#[inline]
#[must_use]
pub fn angle_between(a: Vec3, b: Vec3) -> f32 {
    let denom = a.length() * b.length();
    if denom == 0.0 {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Rotation whose local +Z axis points along `z_axis`, with local +Y as
/// close to `up` as possible.
///
/// Cameras pass `eye - target` (they view down −Z); scene elements pass
/// `target - position` so their face points at the target.
#[must_use]
pub fn look_rotation(z_axis: Vec3, up: Vec3) -> Quat {
    let mut z = z_axis.normalize_or_zero();
    if z == Vec3::ZERO {
        z = Vec3::Z;
    }

    let mut x = up.cross(z);
    if x.length_squared() == 0.0 {
        // up and z are parallel: nudge z off-axis
        z.x += 1e-4;
        z = z.normalize();
        x = up.cross(z);
    }
    let x = x.normalize_or_zero();
    let y = z.cross(x);

    Quat::from_mat3(&Mat3::from_cols(x, y, z)).normalize()
}
