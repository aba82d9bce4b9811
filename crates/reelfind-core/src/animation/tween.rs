//! Tweens and the visual properties they drive.

use super::Easing;
use std::time::Duration;

/// An animatable visual property of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Vertical offset in pixels.
    TranslateY,
    Opacity,
    Scale,
}

/// Current values of every animatable property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub translate_y: f64,
    pub opacity: f64,
    pub scale: f64,
}

impl VisualState {
    /// Natural resting state: in place, opaque, unscaled.
    pub const REST: VisualState = VisualState {
        translate_y: 0.0,
        opacity: 1.0,
        scale: 1.0,
    };

    pub fn get(&self, property: Property) -> f64 {
        match property {
            Property::TranslateY => self.translate_y,
            Property::Opacity => self.opacity,
            Property::Scale => self.scale,
        }
    }

    pub fn set(&mut self, property: Property, value: f64) {
        match property {
            Property::TranslateY => self.translate_y = value,
            Property::Opacity => self.opacity = value,
            Property::Scale => self.scale = value,
        }
    }

    /// Inline CSS for this state.
    ///
    /// Elastic easing overshoots, so opacity is clamped to what CSS accepts.
    pub fn to_css(&self) -> String {
        format!(
            "transform: translateY({:.2}px) scale({:.4}); opacity: {:.3};",
            self.translate_y,
            self.scale,
            self.opacity.clamp(0.0, 1.0)
        )
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::REST
    }
}

/// Timing of a tween relative to the moment it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration: Duration,
    pub easing: Easing,
    pub delay: Duration,
}

impl TweenSpec {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            easing,
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// One property moving toward a target value.
///
/// The start value is captured the first time the tween is sampled at or
/// after its start time, so a delayed tween picks up wherever earlier
/// tweens left the property.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub property: Property,
    pub to: f64,
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
    from: Option<f64>,
}

impl Tween {
    pub fn new(property: Property, to: f64, now: Duration, spec: TweenSpec) -> Self {
        Self {
            property,
            to,
            start: now + spec.delay,
            duration: spec.duration,
            easing: spec.easing,
            from: None,
        }
    }

    pub fn end(&self) -> Duration {
        self.start + self.duration
    }

    pub fn has_started(&self, now: Duration) -> bool {
        now >= self.start
    }

    /// Still has work to do at `now` (waiting for its delay or running).
    pub fn is_pending(&self, now: Duration) -> bool {
        now < self.end()
    }

    /// Applies this tween to `state` for time `now`. Returns true once complete.
    pub fn sample(&mut self, state: &mut VisualState, now: Duration) -> bool {
        if !self.has_started(now) {
            return false;
        }

        let from = *self.from.get_or_insert_with(|| state.get(self.property));
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (now - self.start).as_secs_f64() / self.duration.as_secs_f64()
        };

        if progress >= 1.0 {
            state.set(self.property, self.to);
            return true;
        }

        let eased = self.easing.apply(progress);
        state.set(self.property, from + (self.to - from) * eased);
        false
    }
}
