//! Easing curves for timer-driven animation
//!
//! Penner-style signature: `(t, b, c, d)` = (elapsed, start, delta, duration).

/// Quadratic ease-in/ease-out from `start` to `start + delta` over `duration`.
///
/// Past `duration` the second parabola keeps going and turns back toward
/// `start`. Callers either clamp or live with one frame of overshoot.
#[inline]
pub fn ease_quad_in_out(t: f32, start: f32, delta: f32, duration: f32) -> f32 {
    let t = t / (duration / 2.0);
    if t < 1.0 {
        delta / 2.0 * t * t + start
    } else {
        -delta / 2.0 * ((t - 1.0) * (t - 3.0) - 1.0) + start
    }
}

/// Eased colour channel, clamped into `0..=255`
#[inline]
pub fn ease_channel(t: f32, from: u8, to: u8, duration: f32) -> u8 {
    let v = ease_quad_in_out(t, from as f32, to as f32 - from as f32, duration);
    v.clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        assert_eq!(ease_quad_in_out(0.0, 100.0, 50.0, 1.0), 100.0);
        assert!((ease_quad_in_out(1.0, 100.0, 50.0, 1.0) - 150.0).abs() < 1e-4);
        assert!((ease_quad_in_out(0.5, 100.0, 50.0, 1.0) - 125.0).abs() < 1e-4);
    }

    #[test]
    fn test_slow_start_and_end() {
        // Quarter of the way in, under a quarter of the distance is covered
        let early = ease_quad_in_out(0.25, 0.0, 100.0, 1.0);
        assert!((early - 12.5).abs() < 1e-4);
        let late = ease_quad_in_out(0.75, 0.0, 100.0, 1.0);
        assert!((late - 87.5).abs() < 1e-4);
    }

    #[test]
    fn test_overshoot_turns_back() {
        let end = ease_quad_in_out(1.0, 0.0, 100.0, 1.0);
        let past = ease_quad_in_out(1.1, 0.0, 100.0, 1.0);
        assert!(past < end);
    }

    #[test]
    fn test_channel_clamps() {
        assert_eq!(ease_channel(0.0, 0, 255, 0.15), 0);
        assert_eq!(ease_channel(0.15, 0, 255, 0.15), 255);
        assert_eq!(ease_channel(0.15, 255, 0, 0.15), 0);
        // Far past the end the curve swings back beyond the start
        assert_eq!(ease_channel(0.5, 255, 0, 0.15), 255);
    }

    proptest! {
        #[test]
        fn prop_stays_between_endpoints(
            frac in 0.0f32..=1.0,
            start in -2000.0f32..2000.0,
            delta in -2000.0f32..2000.0,
        ) {
            let v = ease_quad_in_out(frac, start, delta, 1.0);
            let end = start + delta;
            let (lo, hi) = if delta < 0.0 { (end, start) } else { (start, end) };
            prop_assert!(v >= lo - 1e-2 && v <= hi + 1e-2);
        }
    }
}
