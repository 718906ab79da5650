//! Animation system for smooth layout transitions.

/// Element tweens driven once per frame.
pub mod tween;

pub use tween::{Tween, TweenConfig, TweenProperty, TweenSet};
