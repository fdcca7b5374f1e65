use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::config::RenderConfig;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::algorithms::escape_time_algorithm::{
    EscapeTimeAlgorithm, EscapeTimeFormula,
};
use crate::core::fractals::algorithms::ray_march_algorithm::RayMarchAlgorithm;
use crate::core::settings::render_settings::RenderSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parallelism {
    Serial,
    Rayon,
}

/// Renders one frame of `settings` into `buffer`, picking the escape-time path for
/// 2D kinds and the ray marcher for everything else.
pub fn render_frame(
    buffer: &mut PixelBuffer,
    settings: &RenderSettings,
    config: &RenderConfig,
    parallelism: Parallelism,
) {
    let (width, height) = (buffer.width(), buffer.height());

    match EscapeTimeFormula::for_settings(&settings.fractal) {
        Some(formula) => {
            let algorithm =
                EscapeTimeAlgorithm::new(width, height, settings, formula, &config.shading);
            fill(buffer, &algorithm, parallelism);
        }
        None => {
            let algorithm = RayMarchAlgorithm::new(width, height, settings, config);
            fill(buffer, &algorithm, parallelism);
        }
    }
}

fn fill<Alg: FractalAlgorithm + Sync>(
    buffer: &mut PixelBuffer,
    algorithm: &Alg,
    parallelism: Parallelism,
) {
    match parallelism {
        Parallelism::Serial => generate_fractal(buffer, algorithm),
        Parallelism::Rayon => generate_fractal_rayon(buffer, algorithm),
    }
}
