use crate::core::data::complex::Complex;
use crate::core::data::vector3::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaParams {
    pub c: Complex,
}

impl Default for JuliaParams {
    fn default() -> Self {
        Self {
            c: Complex::new(-0.8, 0.156),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbulbParams {
    pub power: f64,
    pub bailout: f64,
}

impl Default for MandelbulbParams {
    fn default() -> Self {
        Self {
            power: 8.0,
            bailout: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelboxParams {
    pub min_radius: f64,
    pub fixed_radius: f64,
    pub scale: f64,
}

impl Default for MandelboxParams {
    fn default() -> Self {
        Self {
            min_radius: 0.5,
            fixed_radius: 1.0,
            scale: 2.0,
        }
    }
}

/// The escape radius is not tunable; see [`JULIABULB_BAILOUT`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliabulbParams {
    pub power: f64,
    pub c: Vector3,
}

pub const JULIABULB_BAILOUT: f64 = 2.0;

impl Default for JuliabulbParams {
    fn default() -> Self {
        Self {
            power: 8.0,
            c: Vector3::new(0.1, 1.0, 0.0),
        }
    }
}
