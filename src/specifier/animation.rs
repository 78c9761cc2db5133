//! Animation parameter bundles.
//!
//! The engine models animation *parameters* only; executing them is the
//! job of the platform's [AnimationRunner](crate::apply::AnimationRunner).

use std::time::Duration;

use serde_json::{Map, Value};

use crate::coerce;

/// An easing curve keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationCurve {
    /// Accelerate in, decelerate out.
    #[default]
    EaseInOut,
    /// Decelerate toward the end.
    EaseOut,
    /// Accelerate from the start.
    EaseIn,
    /// Constant velocity.
    Linear,
}

impl AnimationCurve {
    /// Parse a curve keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "easeinout" => Some(Self::EaseInOut),
            "easeout" => Some(Self::EaseOut),
            "easein" => Some(Self::EaseIn),
            "linear" => Some(Self::Linear),
            _ => None,
        }
    }
}

/// Resolved animation parameters: delay, duration and easing curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationSpecifier {
    /// How long to wait before the animation starts.
    pub delay: Duration,
    /// How long the animation runs.
    pub duration: Duration,
    /// The easing curve to run it with.
    pub curve: AnimationCurve,
}

impl AnimationSpecifier {
    /// Build a specifier from an animation mapping
    /// (`duration`/`delay` in seconds, `curve` keyword).
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            delay: coerce::time_interval(mapping.get("delay")),
            duration: coerce::time_interval(mapping.get("duration")),
            curve: coerce::animation_curve(mapping.get("curve")),
        }
    }
}
