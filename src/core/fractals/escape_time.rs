use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

const BAILOUT_SQUARED: f64 = 4.0;

/// Steps `z = z² + c` from `z0` and counts how many iterates stay within radius 2.
/// Returns `max_iterations` when the orbit never escapes.
fn escape_count(z0: Complex, c: Complex, max_iterations: u32) -> u32 {
    let iterations = (1..=max_iterations).try_fold(z0, |z, iteration| {
        if z.magnitude_squared() > BAILOUT_SQUARED {
            ControlFlow::Break(iteration - 1)
        } else {
            ControlFlow::Continue(z * z + c)
        }
    });

    match iterations {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => max_iterations,
    }
}

#[must_use]
pub fn mandelbrot_iterations(x: f64, y: f64, max_iterations: u32) -> u32 {
    escape_count(Complex::default(), Complex::new(x, y), max_iterations)
}

#[must_use]
pub fn julia_iterations(x: f64, y: f64, max_iterations: u32, c: Complex) -> u32 {
    escape_count(Complex::new(x, y), c, max_iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [f64; 9] = [-2.1, -1.3, -0.75, -0.4, -0.05, 0.1, 0.33, 0.8, 1.7];

    #[test]
    fn test_origin_never_escapes_mandelbrot() {
        for max_iterations in [1, 2, 5, 256, 1000] {
            assert_eq!(mandelbrot_iterations(0.0, 0.0, max_iterations), max_iterations);
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        assert_eq!(mandelbrot_iterations(3.0, 0.0, 100), 1);
        assert_eq!(julia_iterations(3.0, 0.0, 100, Complex::default()), 0);
    }

    #[test]
    fn test_known_escape_count() {
        // c = 1: 0 -> 1 -> 2 -> 5, |5|² > 4 on the fourth check
        assert_eq!(mandelbrot_iterations(1.0, 0.0, 100), 3);
    }

    #[test]
    fn test_counts_stay_within_budget() {
        for &x in &GRID {
            for &y in &GRID {
                assert!(mandelbrot_iterations(x, y, 50) <= 50);
                assert!(julia_iterations(x, y, 50, Complex::new(-0.8, 0.156)) <= 50);
            }
        }
    }

    #[test]
    fn test_mandelbrot_conjugate_symmetry() {
        for &x in &GRID {
            for &y in &GRID {
                assert_eq!(
                    mandelbrot_iterations(x, y, 200),
                    mandelbrot_iterations(x, -y, 200),
                    "x={x} y={y}"
                );
            }
        }
    }

    #[test]
    fn test_julia_conjugate_symmetry() {
        let c = Complex::new(-0.8, 0.156);

        for &x in &GRID {
            for &y in &GRID {
                assert_eq!(
                    julia_iterations(x, y, 200, c),
                    julia_iterations(x, -y, 200, c.conj()),
                    "x={x} y={y}"
                );
            }
        }
    }
}
