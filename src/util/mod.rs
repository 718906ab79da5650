//! Shared utilities: easing curves and vector helpers.

pub mod easing;
pub mod math;
