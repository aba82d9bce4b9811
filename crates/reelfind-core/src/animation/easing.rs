//! Easing curves.
//!
//! Curves map normalized progress `t` in `[0, 1]` to eased progress. Both
//! endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.

use std::f64::consts::PI;

/// Elastic amplitude (1.0 = reach exactly the overshoot the period allows).
const ELASTIC_AMPLITUDE: f64 = 1.0;

/// Elastic oscillation period, as a fraction of the tween.
const ELASTIC_PERIOD: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle settle.
    #[default]
    Power2Out,
    /// Overshoots and wobbles before settling on the target.
    ElasticOut,
}

impl Easing {
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match self {
            Easing::Linear => t,
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::ElasticOut => {
                let shift = ELASTIC_PERIOD / (2.0 * PI) * (1.0 / ELASTIC_AMPLITUDE).asin();
                ELASTIC_AMPLITUDE
                    * 2f64.powf(-10.0 * t)
                    * ((t - shift) * (2.0 * PI) / ELASTIC_PERIOD).sin()
                    + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::Power2Out, Easing::ElasticOut];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(-3.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(7.5), 1.0, "{:?}", easing);
        }
    }

    #[test]
    fn test_power2_out_leads_linear() {
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Easing::Power2Out.apply(t) > t);
        }
        assert!((Easing::Power2Out.apply(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_elastic_out_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::ElasticOut.apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "elastic should overshoot, peak was {}", peak);
        assert!((Easing::ElasticOut.apply(0.99) - 1.0).abs() < 0.01);
    }
}
