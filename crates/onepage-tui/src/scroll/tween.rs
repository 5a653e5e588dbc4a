//! A single in-flight animation over a row offset.
//!
//! Both shared animation resources (the viewport scroll and the menu
//! indicator) hold at most one `Tween` at a time; replacing it is how
//! stop-before-start is enforced.

use std::time::{Duration, Instant};

use onepage_core::EasingType;

use super::easing::EasingExt;

#[derive(Debug, Clone)]
pub struct Tween {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Tween {
    pub fn new(from: u16, to: u16, duration: Duration, easing: EasingType) -> Self {
        Self {
            started: Instant::now(),
            from,
            to,
            duration,
            easing,
        }
    }

    pub fn target(&self) -> u16 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.started.elapsed() >= self.duration
    }

    /// Current interpolated offset.
    pub fn sample(&self) -> u16 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (self.started.elapsed().as_secs_f64() / self.duration.as_secs_f64())
            .clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        lerp(self.from as f64, self.to as f64, eased).round() as u16
    }

    #[cfg(test)]
    pub(crate) fn backdated(mut self, by: Duration) -> Self {
        if let Some(past) = Instant::now().checked_sub(by) {
            self.started = past;
        }
        self
    }
}

#[inline]
fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_is_already_done() {
        let tween = Tween::new(0, 40, Duration::ZERO, EasingType::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.sample(), 40);
    }

    #[test]
    fn test_fresh_tween_starts_at_origin() {
        let tween = Tween::new(10, 90, Duration::from_secs(60), EasingType::Linear);
        assert!(!tween.is_finished());
        assert_eq!(tween.sample(), 10);
    }

    #[test]
    fn test_elapsed_tween_lands_on_target() {
        let tween = Tween::new(10, 90, Duration::from_millis(100), EasingType::Cubic)
            .backdated(Duration::from_secs(1));
        assert!(tween.is_finished());
        assert_eq!(tween.sample(), 90);
    }

    #[test]
    fn test_midpoint_sample_linear() {
        let tween = Tween::new(0, 100, Duration::from_secs(10), EasingType::Linear)
            .backdated(Duration::from_secs(5));
        let mid = tween.sample();
        // generous window: the clock keeps running under test
        assert!((45..=55).contains(&mid), "midpoint was {mid}");
    }

    #[test]
    fn test_descending_tween() {
        let tween = Tween::new(80, 20, Duration::from_millis(50), EasingType::Linear)
            .backdated(Duration::from_secs(1));
        assert_eq!(tween.sample(), 20);
    }
}
