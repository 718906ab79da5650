//! Tween set for layout transitions.
//!
//! Each tween moves one property of one element from the value it had
//! when the tween started to a target value. The set advances every tween
//! once per frame and writes the eased values into the scene.

use std::time::Duration;

use glam::{Quat, Vec3};
use web_time::Instant;

use crate::scene::{Element, ElementId, Scene, Transform};
use crate::util::easing::EasingFunction;

/// Configuration shared by the tweens of one transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenConfig {
    /// Duration of each tween. Default: 1000ms
    pub duration: Duration,
    /// Easing curve. Default: sinusoidal in-out
    pub easing: EasingFunction,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(1000),
            easing: EasingFunction::DEFAULT,
        }
    }
}

/// The property a tween drives, with its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenProperty {
    /// Element position, interpolated linearly.
    Position {
        /// Value at tween start.
        from: Vec3,
        /// Value at tween end.
        to: Vec3,
    },
    /// Element rotation, interpolated along the shortest arc.
    Rotation {
        /// Value at tween start.
        from: Quat,
        /// Value at tween end.
        to: Quat,
    },
}

impl TweenProperty {
    fn apply(&self, transform: &mut Transform, t: f32) {
        match *self {
            Self::Position { from, to } => transform.position = from.lerp(to, t),
            Self::Rotation { from, to } => transform.rotation = from.slerp(to, t),
        }
    }
}

/// One running tween.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Element being animated.
    pub element: ElementId,
    /// Property and endpoints.
    pub property: TweenProperty,
    /// When the tween started.
    pub start_time: Instant,
    /// Total duration.
    pub duration: Duration,
    /// Easing curve.
    pub easing: EasingFunction,
}

impl Tween {
    /// Progress of this tween (0.0 to 1.0).
    #[inline]
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start_time);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased progress value.
    #[inline]
    #[must_use]
    pub fn eased_progress(&self, now: Instant) -> f32 {
        self.easing.evaluate(self.progress(now))
    }
}

/// All running tweens.
#[derive(Debug, Default)]
pub struct TweenSet {
    tweens: Vec<Tween>,
}

impl TweenSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start position and rotation tweens moving every element of `scene`
    /// to the transform `target` picks for it.
    pub fn start_towards(
        &mut self,
        scene: &Scene,
        now: Instant,
        config: TweenConfig,
        target: impl Fn(&Element) -> Transform,
    ) {
        for element in scene.elements() {
            let to = target(element);
            let from = element.transform;
            for property in [
                TweenProperty::Position {
                    from: from.position,
                    to: to.position,
                },
                TweenProperty::Rotation {
                    from: from.rotation,
                    to: to.rotation,
                },
            ] {
                self.start(Tween {
                    element: element.id,
                    property,
                    start_time: now,
                    duration: config.duration,
                    easing: config.easing,
                });
            }
        }
    }

    /// Add a tween.
    pub fn start(&mut self, tween: Tween) {
        self.tweens.push(tween);
    }

    /// Advance every tween and write the eased values into `scene`.
    ///
    /// Finished tweens are applied at their end value and then dropped.
    /// Returns `true` if any tween was applied this tick.
    pub fn update(&mut self, now: Instant, scene: &mut Scene) -> bool {
        if self.tweens.is_empty() {
            return false;
        }

        for tween in &self.tweens {
            let Some(mut transform) = scene.element(tween.element).map(|e| e.transform)
            else {
                continue;
            };
            tween.property.apply(&mut transform, tween.eased_progress(now));
            let _ = scene.set_transform(tween.element, transform);
        }

        self.tweens.retain(|tween| tween.progress(now) < 1.0);
        true
    }

    /// Cancel every tween without applying end values.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }

    /// Whether any tween is still running.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    /// Number of running tweens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether no tween is running.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}
