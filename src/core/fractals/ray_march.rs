use crate::core::config::MarchConfig;
use crate::core::data::ray::Ray;
use crate::core::data::vector3::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    Hit { position: Vector3, t: f64, steps: u32 },
    /// The field reported more than `far_distance` of empty space ahead.
    Escaped { steps: u32 },
    /// The step budget ran out first.
    Exhausted,
}

/// Sphere-traces `ray` through the field `sdf`, starting at `t = 0`. Bounded by
/// `config.max_steps` evaluations regardless of what `sdf` returns.
pub fn march<F>(ray: &Ray, config: &MarchConfig, sdf: F) -> MarchOutcome
where
    F: Fn(Vector3) -> f64,
{
    let mut t = 0.0;

    for step in 1..=config.max_steps {
        let position = ray.at(t);
        let distance = sdf(position);

        if distance < config.hit_tolerance * t {
            return MarchOutcome::Hit {
                position,
                t,
                steps: step,
            };
        }
        if distance > config.far_distance {
            return MarchOutcome::Escaped { steps: step };
        }

        t += distance;
    }

    MarchOutcome::Exhausted
}

/// Central-difference gradient of `sdf` at `position`, normalised.
pub fn estimate_normal<F>(position: Vector3, epsilon: f64, sdf: F) -> Vector3
where
    F: Fn(Vector3) -> f64,
{
    let axis = |offset: Vector3| sdf(position + offset) - sdf(position - offset);

    let gradient = Vector3::new(
        axis(Vector3::new(epsilon, 0.0, 0.0)),
        axis(Vector3::new(0.0, epsilon, 0.0)),
        axis(Vector3::new(0.0, 0.0, epsilon)),
    );

    (gradient / epsilon).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::sdf::menger_sponge::menger_sponge_sdf;
    use std::cell::Cell;

    const EPSILON: f64 = 1e-5;

    fn sphere(radius: f64) -> impl Fn(Vector3) -> f64 {
        move |p: Vector3| p.length() - radius
    }

    fn assert_vec_approx_eq(actual: Vector3, expected: Vector3) {
        assert!(
            (actual - expected).length() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    fn camera_ray() -> Ray {
        Ray {
            origin: Vector3::new(0.0, -2.0, 0.0),
            direction: Vector3::UNIT_Y,
        }
    }

    #[test]
    fn test_hits_unit_sphere_in_front() {
        let outcome = march(&camera_ray(), &MarchConfig::default(), sphere(1.0));

        match outcome {
            MarchOutcome::Hit { position, t, .. } => {
                assert!((t - 1.0).abs() < 1e-2, "t={t}");
                assert!((position.length() - 1.0).abs() < 1e-2);
            }
            other => panic!("expected a hit, got {:?}", other),
        }
    }

    #[test]
    fn test_sphere_off_to_the_side_escapes() {
        let ray = Ray {
            origin: Vector3::new(0.0, -2.0, 0.0),
            direction: Vector3::UNIT_X,
        };

        // closest approach is 2 - 0.5 = 1.5 from the surface, then it only grows
        let outcome = march(&ray, &MarchConfig::default(), sphere(0.5));

        assert!(matches!(outcome, MarchOutcome::Escaped { .. }), "{outcome:?}");
    }

    #[test]
    fn test_far_field_is_an_immediate_miss() {
        let outcome = march(&camera_ray(), &MarchConfig::default(), |_| 100.0);

        assert_eq!(outcome, MarchOutcome::Escaped { steps: 1 });
    }

    #[test]
    fn test_budget_bounds_degenerate_fields() {
        for field in [f64::NAN, 1e-9] {
            let evaluations = Cell::new(0u32);
            let config = MarchConfig::default();

            let outcome = march(&camera_ray(), &config, |_| {
                evaluations.set(evaluations.get() + 1);
                field
            });

            assert_eq!(outcome, MarchOutcome::Exhausted);
            assert_eq!(evaluations.get(), config.max_steps);
        }
    }

    #[test]
    fn test_sphere_normal_is_radial() {
        let point = Vector3::new(0.0, 0.6, 0.8);

        let normal = estimate_normal(point, 1e-3, sphere(1.0));

        assert_vec_approx_eq(normal, point);
    }

    #[test]
    fn test_sponge_face_normal() {
        let point = Vector3::new(1.0, 0.7, 0.7);

        let normal = estimate_normal(point, 1e-3, |p| menger_sponge_sdf(p, 1));

        assert_vec_approx_eq(normal, Vector3::UNIT_X);
    }
}
