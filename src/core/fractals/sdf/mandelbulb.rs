use crate::core::data::vector3::Vector3;
use crate::core::fractals::sdf::DistanceEstimate;
use crate::core::settings::params::MandelbulbParams;

/// Runs the power-`n` bulb recurrence from `start`, adding `constant` after every
/// step, while tracking the running derivative. Shared by the Mandelbulb (constant is
/// the sample point) and the Juliabulb (constant is fixed).
#[must_use]
pub fn power_bulb_estimate(
    start: Vector3,
    constant: Vector3,
    max_iterations: u32,
    power: f64,
    bailout: f64,
) -> DistanceEstimate {
    let mut z = start;
    let mut dr = 1.0;
    let mut r = 0.0;
    let mut orbit = f64::MAX;

    for _ in 0..max_iterations {
        r = z.length();
        if r > bailout {
            break;
        }
        orbit = orbit.min(r);

        let cos_theta = if r > 0.0 { (z.z / r).clamp(-1.0, 1.0) } else { 1.0 };
        let theta = cos_theta.acos() * power;
        let phi = z.y.atan2(z.x) * power;

        dr = r.powf(power - 1.0) * power * dr + 1.0;
        let zr = r.powf(power);

        z = Vector3::new(
            theta.sin() * phi.cos(),
            phi.sin() * theta.sin(),
            theta.cos(),
        ) * zr
            + constant;
    }

    DistanceEstimate {
        distance: 0.5 * r.ln() * r / dr,
        orbit,
    }
}

#[must_use]
pub fn mandelbulb_estimate(
    p: Vector3,
    max_iterations: u32,
    params: &MandelbulbParams,
) -> DistanceEstimate {
    power_bulb_estimate(p, p, max_iterations, params.power, params.bailout)
}

#[must_use]
pub fn mandelbulb_sdf(p: Vector3, max_iterations: u32, params: &MandelbulbParams) -> f64 {
    mandelbulb_estimate(p, max_iterations, params).distance
}

/// Smallest radius the orbit of `p` reaches before escaping.
#[must_use]
pub fn mandelbulb_orbit(p: Vector3, max_iterations: u32, params: &MandelbulbParams) -> f64 {
    mandelbulb_estimate(p, max_iterations, params).orbit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_outside_bailout_is_far() {
        let params = MandelbulbParams::default();
        let estimate = mandelbulb_estimate(Vector3::new(3.0, 0.0, 0.0), 8, &params);

        // escapes before the first step: r = 3, dr = 1
        assert!((estimate.distance - 0.5 * 3.0_f64.ln() * 3.0).abs() < 1e-12);
        assert_eq!(estimate.orbit, f64::MAX);
    }

    #[test]
    fn test_distance_shrinks_towards_the_bulb() {
        let params = MandelbulbParams::default();
        let far = mandelbulb_sdf(Vector3::new(0.0, -2.0, 0.0), 8, &params);
        let near = mandelbulb_sdf(Vector3::new(0.0, -1.3, 0.0), 8, &params);

        assert!(far > near, "far={far} near={near}");
        assert!(near > 0.0);
    }

    #[test]
    fn test_orbit_is_at_most_starting_radius() {
        let params = MandelbulbParams::default();
        let p = Vector3::new(0.3, -0.6, 0.2);

        assert!(mandelbulb_orbit(p, 8, &params) <= p.length());
    }

    #[test]
    fn test_power_two_matches_squared_radius() {
        // one step at power 2 from the +z axis lands at (0, 0, r²) + constant
        let estimate = power_bulb_estimate(
            Vector3::new(0.0, 0.0, 0.5),
            Vector3::ZERO,
            1,
            2.0,
            2.0,
        );

        assert_eq!(estimate.orbit, 0.5);
        // r is taken before the final step, dr = 2 * 0.5 * 1 + 1
        assert!((estimate.distance - 0.5 * 0.5_f64.ln() * 0.5 / 2.0).abs() < 1e-12);
    }
}
