use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize};

use super::is_positive;
use crate::error::SphereError;
use crate::input::gesture::{Frame, GestureExtent, GestureMatcher};

/// Tuning for one hand-tracking channel (rotate, zoom or pan).
///
/// ```toml
/// [gestures.rotate]
/// hands = 1
/// fingers = [3, 5]
/// hand_position = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GestureChannelOptions {
    /// Whether frames are matched against this channel at all.
    pub enabled: bool,
    /// Speed multiplier applied after the linear delta mapping.
    pub speed: f32,
    /// Accepted number of visible hands.
    pub hands: GestureExtent,
    /// Accepted number of visible fingers/tools.
    pub fingers: GestureExtent,
    /// With two hands visible, track the right one (else the left).
    pub right_handed: bool,
    /// Track the palm (else the first fingertip).
    pub hand_position: bool,
    /// Use the SDK's stabilized positions.
    pub stabilized: bool,
    /// Lower bound of the channel's range (radians for rotate, orbit
    /// radius for zoom, unused for pan).
    pub min: f32,
    /// Upper bound of the channel's range.
    pub max: f32,
}

impl GestureChannelOptions {
    fn rotate() -> Self {
        Self {
            enabled: true,
            speed: 1.0,
            hands: GestureExtent::Fixed(1),
            fingers: GestureExtent::Range(3, 5),
            right_handed: true,
            hand_position: true,
            stabilized: false,
            min: 0.0,
            max: PI,
        }
    }

    fn zoom() -> Self {
        Self {
            enabled: false,
            speed: 1.0,
            hands: GestureExtent::Fixed(1),
            fingers: GestureExtent::Range(1, 2),
            right_handed: true,
            hand_position: true,
            stabilized: false,
            min: 100.0,
            max: 6000.0,
        }
    }

    fn pan() -> Self {
        Self {
            enabled: false,
            speed: 1.0,
            hands: GestureExtent::Fixed(2),
            fingers: GestureExtent::Range(6, 10),
            right_handed: true,
            hand_position: true,
            stabilized: false,
            min: 0.0,
            max: 0.0,
        }
    }

    fn zoom_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        ChannelOverrides::deserialize(d).map(|o| o.apply(Self::zoom()))
    }

    fn rotate_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        ChannelOverrides::deserialize(d).map(|o| o.apply(Self::rotate()))
    }

    fn pan_or_default<'de, D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        ChannelOverrides::deserialize(d).map(|o| o.apply(Self::pan()))
    }

    /// Hand/finger count predicate for this channel.
    #[must_use]
    pub fn matcher(&self) -> GestureMatcher {
        GestureMatcher {
            hands: self.hands,
            fingers: self.fingers,
        }
    }

    /// Tracked position for a frame, or `None` when the frame does not
    /// match or lacks the tracked hand/finger.
    #[must_use]
    pub fn sample(&self, frame: &Frame) -> Option<Vec3> {
        if !self.matcher().matches(frame) {
            return None;
        }
        if self.hand_position {
            let hand = frame.select_hand(self.right_handed)?;
            Some(if self.stabilized {
                hand.stabilized_palm_position
            } else {
                hand.palm_position
            })
        } else {
            let tip = frame.pointables.first()?;
            Some(if self.stabilized {
                tip.stabilized_tip_position
            } else {
                tip.tip_position
            })
        }
    }

    fn validate(&self, name: &str, needs_range: bool) -> Result<(), SphereError> {
        self.hands.validate()?;
        self.fingers.validate()?;
        if !self.speed.is_finite() {
            return Err(SphereError::config(format!(
                "gestures.{name}.speed must be finite"
            )));
        }
        if !self.hand_position && self.fingers.min() == 0 {
            return Err(SphereError::config(format!(
                "gestures.{name}: fingertip tracking needs at least one finger"
            )));
        }
        if needs_range && (self.min.is_nan() || self.max.is_nan() || self.min >= self.max) {
            return Err(SphereError::config(format!(
                "gestures.{name}: min ({}) must be below max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// A partial channel table; absent keys keep that channel's own defaults.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ChannelOverrides {
    enabled: Option<bool>,
    speed: Option<f32>,
    hands: Option<GestureExtent>,
    fingers: Option<GestureExtent>,
    right_handed: Option<bool>,
    hand_position: Option<bool>,
    stabilized: Option<bool>,
    min: Option<f32>,
    max: Option<f32>,
}

impl ChannelOverrides {
    fn apply(self, base: GestureChannelOptions) -> GestureChannelOptions {
        GestureChannelOptions {
            enabled: self.enabled.unwrap_or(base.enabled),
            speed: self.speed.unwrap_or(base.speed),
            hands: self.hands.unwrap_or(base.hands),
            fingers: self.fingers.unwrap_or(base.fingers),
            right_handed: self.right_handed.unwrap_or(base.right_handed),
            hand_position: self.hand_position.unwrap_or(base.hand_position),
            stabilized: self.stabilized.unwrap_or(base.stabilized),
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
        }
    }
}

/// Hand-tracking configuration for all three channels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GestureOptions {
    /// Orbit by moving the tracked hand.
    #[serde(deserialize_with = "GestureChannelOptions::rotate_or_default")]
    pub rotate: GestureChannelOptions,
    /// Change orbit radius by moving toward/away from the sensor.
    #[serde(deserialize_with = "GestureChannelOptions::zoom_or_default")]
    pub zoom: GestureChannelOptions,
    /// Translate camera and target together.
    #[serde(deserialize_with = "GestureChannelOptions::pan_or_default")]
    pub pan: GestureChannelOptions,
    /// Extra gain applied when a channel tracks a fingertip instead of a
    /// palm.
    pub finger_factor: f32,
    /// World units of zoom/pan produced by a full ±400 mm sensor sweep.
    pub step: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            rotate: GestureChannelOptions::rotate(),
            zoom: GestureChannelOptions::zoom(),
            pan: GestureChannelOptions::pan(),
            finger_factor: 2.0,
            step: 1000.0,
        }
    }
}

impl GestureOptions {
    /// Reject inconsistent matcher and range settings.
    pub fn validate(&self) -> Result<(), SphereError> {
        self.rotate.validate("rotate", true)?;
        self.zoom.validate("zoom", true)?;
        self.pan.validate("pan", false)?;
        if !is_positive(self.finger_factor) {
            return Err(SphereError::config("gestures.finger_factor must be positive"));
        }
        if !is_positive(self.step) {
            return Err(SphereError::config("gestures.step must be positive"));
        }
        Ok(())
    }

    /// Speed × (1 for palm tracking, `finger_factor` for fingertips).
    #[must_use]
    pub fn transform_factor(&self, channel: &GestureChannelOptions) -> f32 {
        channel.speed
            * if channel.hand_position {
                1.0
            } else {
                self.finger_factor
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::gesture::{Hand, Pointable};

    fn frame(hands: &[Vec3], fingers: usize) -> Frame {
        Frame {
            hands: hands
                .iter()
                .map(|&p| Hand {
                    palm_position: p,
                    stabilized_palm_position: p * 0.5,
                })
                .collect(),
            pointables: (0..fingers)
                .map(|i| Pointable {
                    tip_position: Vec3::splat(i as f32),
                    stabilized_tip_position: Vec3::splat(i as f32 + 0.5),
                })
                .collect(),
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(GestureOptions::default().validate().is_ok());
    }

    #[test]
    fn rotate_samples_palm_of_matching_frame() {
        let opts = GestureOptions::default();
        let f = frame(&[Vec3::new(1.0, 2.0, 3.0)], 4);
        assert_eq!(opts.rotate.sample(&f), Some(Vec3::new(1.0, 2.0, 3.0)));
        let f = frame(&[Vec3::ONE], 8);
        assert_eq!(opts.rotate.sample(&f), None);
    }

    #[test]
    fn stabilized_and_fingertip_sources() {
        let mut channel = GestureOptions::default().rotate;
        let f = frame(&[Vec3::splat(2.0)], 3);
        channel.stabilized = true;
        assert_eq!(channel.sample(&f), Some(Vec3::ONE));
        channel.hand_position = false;
        assert_eq!(channel.sample(&f), Some(Vec3::splat(0.5)));
        channel.stabilized = false;
        assert_eq!(channel.sample(&f), Some(Vec3::ZERO));
    }

    #[test]
    fn two_hands_pick_by_handedness() {
        let mut channel = GestureOptions::default().rotate;
        channel.hands = GestureExtent::Fixed(2);
        let left = Vec3::new(-50.0, 0.0, 0.0);
        let right = Vec3::new(50.0, 0.0, 0.0);
        let f = frame(&[right, left], 4);
        assert_eq!(channel.sample(&f), Some(right));
        channel.right_handed = false;
        assert_eq!(channel.sample(&f), Some(left));
    }

    #[test]
    fn fingertip_tracking_rejects_zero_fingers() {
        let mut opts = GestureOptions::default();
        opts.rotate.hand_position = false;
        opts.rotate.fingers = GestureExtent::Range(0, 2);
        assert!(matches!(
            opts.validate(),
            Err(SphereError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn inverted_rotate_range_is_rejected() {
        let mut opts = GestureOptions::default();
        opts.rotate.min = 2.0;
        opts.rotate.max = 1.0;
        assert!(opts.validate().is_err());
    }

    #[test]
    fn partial_channel_table_keeps_that_channels_defaults() {
        let opts: GestureOptions = toml::from_str(
            "[zoom]\nenabled = true\n\n[pan]\nspeed = 2.0\n",
        )
        .unwrap();
        let mut zoom = GestureChannelOptions::zoom();
        zoom.enabled = true;
        assert_eq!(opts.zoom, zoom);
        assert_eq!(opts.zoom.min, 100.0);
        assert_eq!(opts.zoom.max, 6000.0);
        assert_eq!(opts.pan.hands, GestureExtent::Fixed(2));
        assert_eq!(opts.pan.speed, 2.0);
        assert_eq!(opts.rotate, GestureChannelOptions::rotate());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn unknown_channel_key_is_rejected() {
        assert!(toml::from_str::<GestureOptions>("[zoom]\nenabeld = true\n").is_err());
    }

    #[test]
    fn finger_factor_applies_only_to_fingertips() {
        let mut opts = GestureOptions::default();
        opts.rotate.speed = 0.5;
        assert_eq!(opts.transform_factor(&opts.rotate), 0.5);
        opts.rotate.hand_position = false;
        assert_eq!(opts.transform_factor(&opts.rotate), 1.0);
    }
}
