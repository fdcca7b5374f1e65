use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::config::RenderConfig;
use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::vector3::Vector3;
use crate::core::fractals::projection::make_ray;
use crate::core::fractals::ray_march::{MarchOutcome, estimate_normal, march};
use crate::core::fractals::sdf::signed_distance;
use crate::core::fractals::shading::{fractal_colour, lighting};
use crate::core::settings::render_settings::RenderSettings;

#[derive(Debug)]
pub struct RayMarchAlgorithm {
    width: u32,
    height: u32,
    settings: RenderSettings,
    config: RenderConfig,
}

impl RayMarchAlgorithm {
    #[must_use]
    pub fn new(width: u32, height: u32, settings: &RenderSettings, config: &RenderConfig) -> Self {
        Self {
            width,
            height,
            settings: *settings,
            config: *config,
        }
    }

    fn distance(&self, position: Vector3) -> f64 {
        signed_distance(position, &self.settings.fractal)
    }

    fn shade_hit(&self, position: Vector3) -> Colour {
        let normal = estimate_normal(position, self.config.march.normal_epsilon, |p| {
            self.distance(p)
        });
        let base = fractal_colour(position, normal, &self.settings.fractal);

        if self.config.shading.lighting {
            lighting(base, position, normal, &self.settings.camera)
        } else {
            base
        }
    }
}

impl FractalAlgorithm for RayMarchAlgorithm {
    fn compute(&self, pixel: Point) -> Colour {
        let ray = make_ray(pixel, self.width, self.height, &self.settings.camera);

        match march(&ray, &self.config.march, |p| self.distance(p)) {
            MarchOutcome::Hit { position, .. } => self.shade_hit(position),
            MarchOutcome::Escaped { .. } | MarchOutcome::Exhausted => {
                self.config.shading.miss_colour
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ShadingConfig;
    use crate::core::settings::camera_settings::CameraSettings;
    use crate::core::settings::fractal_kind::FractalKind;
    use crate::core::settings::fractal_settings::FractalSettings;

    fn settings_for(kind: FractalKind) -> RenderSettings {
        RenderSettings {
            camera: CameraSettings::for_kind(kind),
            fractal: FractalSettings::for_kind(kind),
        }
    }

    fn unlit() -> RenderConfig {
        RenderConfig {
            shading: ShadingConfig {
                lighting: false,
                ..ShadingConfig::default()
            },
            ..RenderConfig::default()
        }
    }

    fn sponge_face_settings() -> RenderSettings {
        let mut settings = settings_for(FractalKind::MengerSponge);
        // x = z = 0.5 stays clear of every hole that opens onto the y = -1 face
        settings.camera.position = Vector3::new(0.5, -2.0, 0.5);
        settings
    }

    #[test]
    fn test_centre_ray_hits_sponge_face() {
        let algorithm = RayMarchAlgorithm::new(5, 5, &sponge_face_settings(), &unlit());

        // normal (0, -1, 0) coloured by its absolute components
        assert_eq!(
            algorithm.compute(Point { x: 2, y: 2 }),
            Colour::opaque(0, 255, 0)
        );
    }

    #[test]
    fn test_ray_through_the_central_hole_is_a_miss() {
        let settings = settings_for(FractalKind::MengerSponge);
        let algorithm = RayMarchAlgorithm::new(5, 5, &settings, &unlit());

        assert_eq!(
            algorithm.compute(Point { x: 2, y: 2 }),
            unlit().shading.miss_colour
        );
    }

    #[test]
    fn test_ray_past_the_sponge_is_a_miss() {
        let mut settings = settings_for(FractalKind::MengerSponge);
        settings.camera.position = Vector3::new(5.0, -2.0, 0.0);
        let algorithm = RayMarchAlgorithm::new(5, 5, &settings, &unlit());

        assert_eq!(
            algorithm.compute(Point { x: 2, y: 2 }),
            unlit().shading.miss_colour
        );
    }

    #[test]
    fn test_escape_time_kind_renders_as_miss() {
        let settings = settings_for(FractalKind::Mandelbrot);
        let algorithm = RayMarchAlgorithm::new(3, 3, &settings, &RenderConfig::default());

        assert_eq!(
            algorithm.compute(Point { x: 1, y: 1 }),
            ShadingConfig::default().miss_colour
        );
    }

    #[test]
    fn test_lighting_applies_to_hits() {
        let algorithm =
            RayMarchAlgorithm::new(5, 5, &sponge_face_settings(), &RenderConfig::default());

        // (0, 1.1, 0) + 0.4 specular, clamped, then gamma: 0.4 ^ (1 / 2.2) ≈ 0.659
        assert_eq!(
            algorithm.compute(Point { x: 2, y: 2 }),
            Colour::opaque(168, 255, 168)
        );
    }
}
