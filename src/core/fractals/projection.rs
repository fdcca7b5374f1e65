use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::ray::Ray;
use crate::core::settings::camera_settings::{CameraSettings, WORLD_UP};

/// Normalised device coordinates of the pixel centre, `u` already stretched by aspect.
fn pixel_ndc(pixel: Point, width: u32, height: u32, aspect: f64) -> (f64, f64) {
    let u = (f64::from(pixel.x) + 0.5) / f64::from(width) * 2.0 - 1.0;
    let v = (f64::from(pixel.y) + 0.5) / f64::from(height) * 2.0 - 1.0;

    (u * aspect, v)
}

/// Maps a pixel onto the complex plane spanned by the camera's x/y position,
/// `scale` world units above and below the centre.
#[must_use]
pub fn pixel_to_position(pixel: Point, width: u32, height: u32, camera: &CameraSettings) -> Complex {
    let (u, v) = pixel_ndc(pixel, width, height, camera.aspect);

    Complex::new(
        camera.position.x + u * camera.scale,
        camera.position.y + v * camera.scale,
    )
}

/// Primary ray through the pixel centre. Row 0 maps to `v = +1`.
#[must_use]
pub fn make_ray(pixel: Point, width: u32, height: u32, camera: &CameraSettings) -> Ray {
    let (u, v) = pixel_ndc(pixel, width, height, camera.aspect);
    let v = -v;

    let forward = camera.direction.normalize();
    let right = camera.direction.cross(WORLD_UP).normalize();
    let up = camera.direction.cross(right).normalize();

    Ray {
        origin: camera.position,
        direction: (right * u + up * v + forward).normalize(),
    }
}
