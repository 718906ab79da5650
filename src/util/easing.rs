//! Easing curves for layout transitions.
//!
//! Tweens evaluate one of these on their normalized progress every frame,
//! so every variant is branch-light and allocation-free.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for tween curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Half-cosine ease-in-out: `(1 - cos(πt)) / 2`.
    SinusoidalInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default curve for layout transitions.
    pub const DEFAULT: EasingFunction = EasingFunction::SinusoidalInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SinusoidalInOut => {
                0.5 * (1.0 - (std::f32::consts::PI * t).cos())
            }
            EasingFunction::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_sinusoidal_in_out_shape() {
        let sine = EasingFunction::SinusoidalInOut;
        assert_relative_eq!(sine.evaluate(0.0), 0.0);
        assert_relative_eq!(sine.evaluate(0.5), 0.5, epsilon = 1e-6);
        assert_relative_eq!(sine.evaluate(1.0), 1.0, epsilon = 1e-6);
        // Slow start, slow finish.
        assert!(sine.evaluate(0.1) < 0.1);
        assert!(sine.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_sinusoidal_is_symmetric() {
        let sine = EasingFunction::SinusoidalInOut;
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert_relative_eq!(
                sine.evaluate(t) + sine.evaluate(1.0 - t),
                1.0,
                epsilon = 1e-5
            );
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(-0.5), 0.0);
        assert!((hermite.evaluate(1.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_default_is_sinusoidal() {
        assert_eq!(EasingFunction::default(), EasingFunction::SinusoidalInOut);
    }
}
