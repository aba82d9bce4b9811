//! Tween-based animation engine.
//!
//! - [`Easing`]: progress curves
//! - [`Tween`], [`VisualState`]: one property moving toward a value
//! - [`Animator`]: owns element handles and their tweens
//! - [`AnimationConfig`]: every duration, curve and scale the UI uses
//!
//! There are no library-wide defaults; callers hold an [`AnimationConfig`].

mod animator;
mod easing;
mod tween;

pub use animator::{Animator, ElementId};
pub use easing::Easing;
pub use tween::{Property, Tween, TweenSpec, VisualState};

use std::time::Duration;

/// Durations, curves and targets for every animation the page plays.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Used by hover tweens and the second half of the press.
    pub defaults: TweenSpec,
    /// Where cards start before their entrance.
    pub entrance_offset_y: f64,
    pub entrance_opacity: f64,
    pub entrance: TweenSpec,
    /// Extra delay per card position.
    pub entrance_stagger: Duration,
    pub card_hover_scale: f64,
    pub button_hover_scale: f64,
    pub press_scale: f64,
    pub press_duration: Duration,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            defaults: TweenSpec::new(Duration::from_millis(200), Easing::Power2Out),
            entrance_offset_y: -50.0,
            entrance_opacity: 0.0,
            entrance: TweenSpec::new(Duration::from_secs(1), Easing::ElasticOut),
            entrance_stagger: Duration::from_millis(200),
            card_hover_scale: 1.05,
            button_hover_scale: 1.2,
            press_scale: 0.7,
            press_duration: Duration::from_millis(100),
        }
    }
}
