//! Damped spring step response.
//!
//! A spring animates a unit distance from rest at 0 to rest at 1 with zero
//! initial velocity. The response is sampled into a CSS `linear()` easing so
//! the browser can play it without a JS animation loop.

use super::Spring;
use std::fmt::Write;
use std::time::Duration;

/// Remaining amplitude treated as "at rest".
const REST_THRESHOLD: f64 = 0.001;
const MIN_SETTLE: Duration = Duration::from_millis(100);
const MAX_SETTLE: Duration = Duration::from_millis(2000);

impl Spring {
    /// Undamped angular frequency in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// 1.0 is critical damping; below bounces, above creeps.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Displacement at `t` seconds.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * w0 * t).exp();
            1.0 - envelope * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        }
    }

    /// Exponential decay rate of the slowest mode.
    fn decay_rate(&self) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta <= 1.0 {
            zeta * w0
        } else {
            w0 * (zeta - (zeta * zeta - 1.0).sqrt())
        }
    }

    /// Time until the response stays within the rest threshold.
    pub fn settle_duration(&self) -> Duration {
        let rate = self.decay_rate();
        if !rate.is_finite() || rate <= 0.0 {
            return MAX_SETTLE;
        }
        let secs = (1.0 / REST_THRESHOLD).ln() / rate;
        Duration::from_secs_f64(secs).clamp(MIN_SETTLE, MAX_SETTLE)
    }

    /// CSS `linear()` easing with `samples` evenly spaced points over the settle time.
    pub fn css_easing(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let total = self.settle_duration().as_secs_f64();
        let mut out = String::from("linear(0");

        for i in 1..samples - 1 {
            let t = total * i as f64 / (samples - 1) as f64;
            let _ = write!(out, ", {}", trim_float(self.position(t)));
        }
        out.push_str(", 1)");
        out
    }
}

/// Four decimals without trailing zeros.
pub(crate) fn trim_float(value: f64) -> String {
    let text = format!("{value:.4}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    match text {
        "" | "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Spring = Spring::new(300.0, 30.0, 0.8);
    const SNAPPY: Spring = Spring::new(400.0, 25.0, 1.0);

    #[test]
    fn test_damping_ratio() {
        // 25 / (2 * sqrt(400)) = 0.625
        assert!((SNAPPY.damping_ratio() - 0.625).abs() < 1e-9);
        assert!((SNAPPY.natural_frequency() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_position_starts_at_rest_and_settles() {
        for spring in [CARD, SNAPPY, Spring::new(100.0, 20.0, 1.0)] {
            assert_eq!(spring.position(0.0), 0.0);
            let end = spring.position(spring.settle_duration().as_secs_f64());
            assert!((end - 1.0).abs() < 0.01, "spring {spring:?} ended at {end}");
        }
    }

    #[test]
    fn test_underdamped_overshoots() {
        let peak = (1..200)
            .map(|i| SNAPPY.position(i as f64 * 0.005))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_overdamped_never_overshoots() {
        let slow = Spring::new(100.0, 60.0, 1.0);
        assert!(slow.damping_ratio() > 1.0);
        assert!((1..400).all(|i| slow.position(i as f64 * 0.005) <= 1.0 + 1e-9));
    }

    #[test]
    fn test_settle_duration_is_clamped() {
        let limp = Spring::new(1.0, 0.01, 10.0);
        assert_eq!(limp.settle_duration(), MAX_SETTLE);
        let stiff = Spring::new(100_000.0, 500.0, 1.0);
        assert_eq!(stiff.settle_duration(), MIN_SETTLE);
    }

    #[test]
    fn test_css_easing_shape() {
        let easing = CARD.css_easing(16);
        assert!(easing.starts_with("linear(0, "));
        assert!(easing.ends_with(", 1)"));
        assert_eq!(easing.matches(',').count(), 15);
    }

    #[test]
    fn test_trim_float() {
        assert_eq!(trim_float(1.0), "1");
        assert_eq!(trim_float(0.25), "0.25");
        assert_eq!(trim_float(-0.00001), "0");
        assert_eq!(trim_float(1.04567), "1.0457");
    }
}
