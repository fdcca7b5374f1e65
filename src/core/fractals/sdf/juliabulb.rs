use crate::core::data::vector3::Vector3;
use crate::core::fractals::sdf::DistanceEstimate;
use crate::core::fractals::sdf::mandelbulb::power_bulb_estimate;
use crate::core::settings::params::{JULIABULB_BAILOUT, JuliabulbParams};

#[must_use]
pub fn juliabulb_estimate(
    p: Vector3,
    max_iterations: u32,
    params: &JuliabulbParams,
) -> DistanceEstimate {
    power_bulb_estimate(p, params.c, max_iterations, params.power, JULIABULB_BAILOUT)
}

#[must_use]
pub fn juliabulb_sdf(p: Vector3, max_iterations: u32, params: &JuliabulbParams) -> f64 {
    juliabulb_estimate(p, max_iterations, params).distance
}

#[must_use]
pub fn juliabulb_orbit(p: Vector3, max_iterations: u32, params: &JuliabulbParams) -> f64 {
    juliabulb_estimate(p, max_iterations, params).orbit
}
