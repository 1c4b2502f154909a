use std::f64::consts::{PI, TAU};

/// Wrap an angle in radians into `(-π, π]`.
///
/// Applies `a - 2π·floor((a + π) / 2π)` and folds the `-π` end of that range
/// onto `π`, so the function is idempotent and `π` maps to itself.
/// Non-finite input collapses to `0.0`.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle - TAU * ((angle + PI) / TAU).floor();
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Shortest signed rotation from `from` to `to`, in `(-π, π]`.
pub fn angle_delta(from: f64, to: f64) -> f64 {
    normalize_angle(to - from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn in_range(a: f64) -> bool {
        a > -PI && a <= PI
    }

    #[test]
    fn test_already_normalized_unchanged() {
        for a in [0.0, 0.5, -0.5, FRAC_PI_2, -FRAC_PI_2, 3.0, -3.0] {
            assert!((normalize_angle(a) - a).abs() < EPSILON, "angle {a}");
        }
    }

    #[test]
    fn test_pi_boundaries() {
        assert_eq!(normalize_angle(PI), PI);
        assert_eq!(normalize_angle(-PI), PI);
        // Odd multiples of π land on the boundary up to rounding.
        for a in [3.0 * PI, -3.0 * PI] {
            let n = normalize_angle(a);
            assert!(in_range(n));
            assert!((n.abs() - PI).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wraps_large_angles() {
        assert!((normalize_angle(TAU + 0.25) - 0.25).abs() < 1e-9);
        assert!((normalize_angle(-TAU - 0.25) + 0.25).abs() < 1e-9);
        assert!((normalize_angle(100.0 * TAU + 1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent_and_in_range_over_sweep() {
        let mut a = -50.0;
        while a < 50.0 {
            let once = normalize_angle(a);
            let twice = normalize_angle(once);
            assert!(in_range(once), "normalize_angle({a}) = {once} out of range");
            assert!((once - twice).abs() < 1e-12, "not idempotent at {a}");
            a += 0.0137;
        }
    }

    #[test]
    fn test_non_finite_is_zero() {
        assert_eq!(normalize_angle(f64::NAN), 0.0);
        assert_eq!(normalize_angle(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_angle_delta_takes_short_way() {
        // From just below +π to just above -π is a small positive step.
        let d = angle_delta(PI - 0.1, -PI + 0.1);
        assert!((d - 0.2).abs() < 1e-9);
        let d = angle_delta(-PI + 0.1, PI - 0.1);
        assert!((d + 0.2).abs() < 1e-9);
    }
}
