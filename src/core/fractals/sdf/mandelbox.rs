use crate::core::data::vector3::Vector3;
use crate::core::settings::params::MandelboxParams;

const ESCAPE_RADIUS: f64 = 100.0;

#[must_use]
pub fn mandelbox_sdf(p: Vector3, max_iterations: u32, params: &MandelboxParams) -> f64 {
    let min_radius2 = params.min_radius * params.min_radius;
    let fixed_radius2 = params.fixed_radius * params.fixed_radius;

    let mut z = p;
    let mut dr = 1.0;

    for _ in 0..max_iterations {
        z = z.map(|v| 2.0 * v.clamp(-1.0, 1.0) - v);

        let r2 = z.length_squared();
        if r2 < min_radius2 {
            let k = fixed_radius2 / min_radius2;
            z = z * k;
            dr *= k;
        } else if r2 < fixed_radius2 {
            let k = fixed_radius2 / r2;
            z = z * k;
            dr *= k;
        }

        z = z * params.scale + p;
        dr = dr * params.scale.abs() + 1.0;

        if z.length() > ESCAPE_RADIUS {
            break;
        }
    }

    z.length() / dr.abs()
}
