//! Distance estimators for the ray-marched kinds. Each returns an unsigned
//! approximation of the distance to the surface, good enough for sphere tracing.

pub mod juliabulb;
pub mod mandelbox;
pub mod mandelbulb;
pub mod menger_sponge;

use crate::core::data::vector3::Vector3;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::fractal_settings::FractalSettings;

/// Reported for escape-time kinds, which have no surface in 3D.
pub const NO_SURFACE_DISTANCE: f64 = 100.0;

/// Distance estimate plus the smallest orbit radius seen while iterating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimate {
    pub distance: f64,
    pub orbit: f64,
}

#[must_use]
pub fn signed_distance(position: Vector3, fractal: &FractalSettings) -> f64 {
    match fractal.kind {
        FractalKind::MengerSponge => {
            menger_sponge::menger_sponge_sdf(position, fractal.max_iterations)
        }
        FractalKind::Mandelbulb => {
            mandelbulb::mandelbulb_sdf(position, fractal.max_iterations, &fractal.mandelbulb)
        }
        FractalKind::Mandelbox => {
            mandelbox::mandelbox_sdf(position, fractal.max_iterations, &fractal.mandelbox)
        }
        FractalKind::Juliabulb => {
            juliabulb::juliabulb_sdf(position, fractal.max_iterations, &fractal.juliabulb)
        }
        FractalKind::Mandelbrot | FractalKind::Julia => NO_SURFACE_DISTANCE,
    }
}
