use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Number of `z <- z² + c` steps, starting from `z₁ = c`, before `|z|²`
/// reaches the escape radius, capped at `cap`.
///
/// Points already outside the radius return 0; points that never escape
/// (the origin, the main cardioid) return `cap`.
///
/// The `z₀ = 0` step is not counted, so an escaping point reports one less
/// than a count that starts from zero, and palette bands sit one index lower.
#[inline]
#[must_use]
pub fn escape_time(c: Complex, cap: u32) -> u32 {
    let mut x = c.real;
    let mut y = c.imag;
    let mut iteration = 0;

    while iteration < cap {
        let x_squared = x * x;
        let y_squared = y * y;

        if x_squared + y_squared >= ESCAPE_RADIUS_SQUARED {
            break;
        }

        y = 2.0 * x * y + c.imag;
        x = x_squared - y_squared + c.real;
        iteration += 1;
    }

    iteration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_outside_escape_radius_return_zero() {
        let outside = [
            Complex::new(2.0, 0.0),
            Complex::new(-2.0, 0.0),
            Complex::new(0.0, 2.0),
            Complex::new(-2.0, -0.5),
            Complex::new(1.5, 1.5),
            Complex::new(-100.0, 42.0),
        ];

        for c in outside {
            assert!(c.magnitude_squared() >= ESCAPE_RADIUS_SQUARED);
            for cap in [1, 2, 20, 256] {
                assert_eq!(escape_time(c, cap), 0, "c = {:?}, cap = {}", c, cap);
            }
        }
    }

    #[test]
    fn test_origin_never_escapes() {
        for cap in [1, 2, 7, 256, 10_000] {
            assert_eq!(escape_time(Complex::new(0.0, 0.0), cap), cap);
        }
    }

    #[test]
    fn test_zero_cap_returns_zero() {
        assert_eq!(escape_time(Complex::new(0.0, 0.0), 0), 0);
    }

    #[test]
    fn test_interior_points_reach_cap() {
        for c in [Complex::new(-1.0, 0.0), Complex::new(-0.5, 0.0), Complex::new(0.25, 0.0)] {
            assert_eq!(escape_time(c, 500), 500, "c = {:?}", c);
        }
    }

    #[test]
    fn test_known_escape_count() {
        // z₁ = 1 stays inside the radius, z₂ = 2 reaches it
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 1);
    }

    #[test]
    fn test_count_skips_the_step_from_zero() {
        fn count_from_zero(c: Complex, cap: u32) -> u32 {
            let mut z = Complex::new(0.0, 0.0);
            let mut n = 0;
            while n < cap && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
                z = Complex::new(z.real * z.real - z.imag * z.imag, 2.0 * z.real * z.imag) + c;
                n += 1;
            }
            n
        }

        for c in [
            Complex::new(1.0, 0.0),
            Complex::new(0.5, 0.0),
            Complex::new(0.0, 1.2),
            Complex::new(-2.1, 0.0),
        ] {
            let ours = escape_time(c, 1000);
            assert!(ours < 1000, "c = {:?}", c);
            assert_eq!(ours + 1, count_from_zero(c, 1000), "c = {:?}", c);
        }
    }

    #[test]
    fn test_monotonic_in_cap() {
        let samples = [
            Complex::new(0.3, 0.5),
            Complex::new(-0.75, 0.1),
            Complex::new(-1.25, 0.02),
            Complex::new(0.26, 0.0),
            Complex::new(-0.1, 0.65),
        ];

        for c in samples {
            let uncapped = escape_time(c, 100_000);
            let mut previous = 0;

            for cap in 0..300 {
                let current = escape_time(c, cap);
                assert!(current >= previous, "c = {:?}, cap = {}", c, cap);
                assert_eq!(current, cap.min(uncapped));
                previous = current;
            }
        }
    }
}
