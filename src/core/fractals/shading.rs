use crate::core::data::colour::Colour;
use crate::core::data::vector3::Vector3;
use crate::core::fractals::sdf::juliabulb::juliabulb_orbit;
use crate::core::fractals::sdf::mandelbulb::mandelbulb_orbit;
use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::fractal_settings::FractalSettings;

const TAU_APPROX: f64 = 6.2831;
const AMBIENT: f64 = 0.1;
const SPECULAR_POWER: i32 = 128;
const SPECULAR_WEIGHT: f64 = 0.4;
const GAMMA: f64 = 2.2;

/// Opaque black for points that never escaped, otherwise a linear blend from
/// `background` (fast escape) to `target` (slow escape).
#[must_use]
pub fn colour_from_iter(
    iteration: u32,
    max_iterations: u32,
    target: Colour,
    background: Colour,
) -> Colour {
    if iteration == max_iterations {
        return Colour::BLACK;
    }

    let t = f64::from(iteration) / f64::from(max_iterations);
    let blend = |to: u8, from: u8| (t * f64::from(to) + (1.0 - t) * f64::from(from)) as u8;

    Colour::opaque(
        blend(target.r, background.r),
        blend(target.g, background.g),
        blend(target.b, background.b),
    )
}

/// Cosine rainbow keyed on the log of the trapped orbit radius.
#[must_use]
pub fn orbit_trap_colour(orbit: f64) -> Colour {
    let orbit = orbit.max(1e-6) * 0.5;
    let v = -orbit.ln();
    let wave = |phase: f64| 0.5 + 0.5 * (TAU_APPROX * (v + phase)).cos();

    Colour::from_unit_rgb(wave(0.0), wave(0.33), wave(0.67))
}

#[must_use]
pub fn mandelbox_colour(position: Vector3) -> Colour {
    let t = 1.0 - 1.0 / (1.0 + 0.5 * position.length());
    let t0 = (t * 2.0).min(1.0);
    let t1 = ((t - 0.5) * 2.0).clamp(0.0, 1.0);

    // red -> green, then green -> blue
    let (r, g) = (1.0 - t0, t0);
    Colour::from_unit_rgb(r * (1.0 - t1), g * (1.0 - t1), t1)
}

#[must_use]
pub fn menger_sponge_colour(normal: Vector3) -> Colour {
    let n = normal.abs();

    Colour::from_unit_rgb(n.x, n.y, n.z)
}

/// Unlit surface colour of the active kind at a hit.
#[must_use]
pub fn fractal_colour(position: Vector3, normal: Vector3, fractal: &FractalSettings) -> Colour {
    match fractal.kind {
        FractalKind::Mandelbulb => orbit_trap_colour(mandelbulb_orbit(
            position,
            fractal.max_iterations,
            &fractal.mandelbulb,
        )),
        FractalKind::Juliabulb => orbit_trap_colour(juliabulb_orbit(
            position,
            fractal.max_iterations,
            &fractal.juliabulb,
        )),
        FractalKind::Mandelbox => mandelbox_colour(position),
        FractalKind::MengerSponge => menger_sponge_colour(normal),
        FractalKind::Mandelbrot | FractalKind::Julia => Colour::WHITE,
    }
}

/// Blinn-Phong with the light at the camera, then gamma correction.
#[must_use]
pub fn lighting(base: Colour, position: Vector3, normal: Vector3, camera: &CameraSettings) -> Colour {
    let [r, g, b] = base.to_unit_rgb();
    let base = Vector3::new(r, g, b);

    let light_dir = (camera.position - position).normalize();
    let diffuse = normal.dot(light_dir).max(0.0);

    let view_dir = (-camera.direction).normalize();
    let half_dir = (light_dir + view_dir).normalize();
    let specular = normal.dot(half_dir).max(0.0).powi(SPECULAR_POWER) * SPECULAR_WEIGHT;

    let linear = base * (AMBIENT + diffuse) + Vector3::ONE * specular;
    let corrected = linear.map(|channel| channel.clamp(0.0, 1.0).powf(1.0 / GAMMA));

    Colour::from_unit_rgb(corrected.x, corrected.y, corrected.z)
}
