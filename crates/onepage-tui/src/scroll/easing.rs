//! Pure easing curves mapping progress in [0, 1] to eased output in
//! [0, 1].

pub use onepage_core::EasingType;

/// Extension trait attaching the curve math to the config-level enum.
pub trait EasingExt {
    /// Apply the curve to a progress value; input is clamped to [0, 1].
    fn apply(&self, t: f64) -> f64;
}

impl EasingExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            // hold, then snap to the target at the end
            EasingType::None => {
                if t < 1.0 {
                    0.0
                } else {
                    1.0
                }
            }
            EasingType::Linear => t,
            EasingType::Cubic => ease_out_pow(t, 3),
            EasingType::Quintic => ease_out_pow(t, 5),
            EasingType::EaseOut => exponential_ease_out(t),
        }
    }
}

/// Polynomial ease-out: f(t) = 1 - (1-t)^n
#[inline]
fn ease_out_pow(t: f64, n: u32) -> f64 {
    1.0 - (1.0 - t).powi(n as i32)
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [EasingType; 5] = [
        EasingType::None,
        EasingType::Linear,
        EasingType::Cubic,
        EasingType::Quintic,
        EasingType::EaseOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at t=1");
            if easing != EasingType::None {
                assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at t=0");
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=20 {
                let v = easing.apply(i as f64 / 20.0);
                assert!(v >= prev, "{easing:?} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_input_clamped() {
        for easing in ALL {
            assert!(easing.apply(-1.0) <= 0.001);
            assert!((easing.apply(2.0) - 1.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_ease_out_front_loads_movement() {
        // past the halfway point an ease-out curve is ahead of linear
        for easing in [EasingType::Cubic, EasingType::Quintic, EasingType::EaseOut] {
            assert!(easing.apply(0.5) > 0.5, "{easing:?}");
        }
    }
}
