use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::config::ShadingConfig;
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::fractals::escape_time::{julia_iterations, mandelbrot_iterations};
use crate::core::fractals::projection::pixel_to_position;
use crate::core::fractals::shading::colour_from_iter;
use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::fractal_settings::FractalSettings;
use crate::core::settings::render_settings::RenderSettings;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EscapeTimeFormula {
    Mandelbrot,
    Julia(Complex),
}

impl EscapeTimeFormula {
    /// `None` for kinds that are ray marched instead.
    #[must_use]
    pub fn for_settings(fractal: &FractalSettings) -> Option<Self> {
        match fractal.kind {
            FractalKind::Mandelbrot => Some(Self::Mandelbrot),
            FractalKind::Julia => Some(Self::Julia(fractal.julia.c)),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct EscapeTimeAlgorithm {
    width: u32,
    height: u32,
    camera: CameraSettings,
    formula: EscapeTimeFormula,
    max_iterations: u32,
    target: Colour,
    background: Colour,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(
        width: u32,
        height: u32,
        settings: &RenderSettings,
        formula: EscapeTimeFormula,
        shading: &ShadingConfig,
    ) -> Self {
        Self {
            width,
            height,
            camera: settings.camera,
            formula,
            max_iterations: settings.fractal.max_iterations,
            target: shading.gradient_target,
            background: shading.gradient_background,
        }
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    fn compute(&self, pixel: Point) -> Colour {
        let position = pixel_to_position(pixel, self.width, self.height, &self.camera);

        let iterations = match self.formula {
            EscapeTimeFormula::Mandelbrot => {
                mandelbrot_iterations(position.real, position.imag, self.max_iterations)
            }
            EscapeTimeFormula::Julia(c) => {
                julia_iterations(position.real, position.imag, self.max_iterations, c)
            }
        };

        colour_from_iter(iterations, self.max_iterations, self.target, self.background)
    }
}
