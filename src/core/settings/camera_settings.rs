use crate::core::data::vector3::Vector3;
use crate::core::settings::fractal_kind::FractalKind;

pub const WORLD_UP: Vector3 = Vector3::UNIT_Z;

/// Largest vertical component a camera direction may keep after a rotation.
pub const MAX_VERTICAL_COMPONENT: f64 = 0.9999;

const MIN_HORIZONTAL_LENGTH: f64 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub position: Vector3,
    /// Unit length.
    pub direction: Vector3,
    /// Half the visible height in world units; always positive.
    pub scale: f64,
    /// Width over height; always positive.
    pub aspect: f64,
}

impl CameraSettings {
    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        let position = match kind {
            FractalKind::Mandelbrot => Vector3::new(-0.75, 0.0, 0.0),
            FractalKind::Julia => Vector3::ZERO,
            _ => Vector3::new(0.0, -2.0, 0.0),
        };

        Self {
            position,
            direction: Vector3::UNIT_Y,
            scale: 1.0,
            aspect: 1.0,
        }
    }

    /// `normalize(cross(direction, WORLD_UP))`, or `None` when looking straight up or down.
    #[must_use]
    pub fn right(&self) -> Option<Vector3> {
        self.direction.cross(WORLD_UP).try_normalize()
    }

    /// Divides `scale` by `factor`. Returns `false` and leaves the camera untouched
    /// when `factor` is not a positive finite number.
    pub fn zoom(&mut self, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }

        let scale = self.scale / factor;
        if !(scale.is_finite() && scale > 0.0) {
            return false;
        }

        self.scale = scale;
        true
    }

    /// Moves by `dz` along world up, then by `dy` along the view direction and `dx`
    /// along the camera right vector. All offsets are multiplied by `scale`.
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> bool {
        if !(dx.is_finite() && dy.is_finite() && dz.is_finite()) {
            return false;
        }

        let Some(right) = self.right() else {
            return false;
        };

        self.position.z += dz * self.scale;
        self.position += self.direction * (dy * self.scale) + right * (dx * self.scale);
        true
    }

    /// Yaws around world up, then pitches around the right vector taken from the
    /// direction before the yaw. The vertical component is clamped to
    /// [`MAX_VERTICAL_COMPONENT`] and the result renormalised.
    pub fn rotate(&mut self, yaw: f64, pitch: f64) -> bool {
        if !(yaw.is_finite() && pitch.is_finite()) {
            return false;
        }

        let Some(right) = self.right() else {
            return false;
        };

        let yawed = self.direction.rotate_around(WORLD_UP, yaw);
        let mut direction = yawed.rotate_around(right, pitch);

        if direction.z.abs() > MAX_VERTICAL_COMPONENT {
            direction.z = MAX_VERTICAL_COMPONENT.copysign(direction.z);

            // A pitch landing exactly on the pole has no heading left; borrow the yawed one.
            let heading = if horizontal_length(direction) > MIN_HORIZONTAL_LENGTH {
                direction
            } else {
                yawed
            };

            let horizontal = horizontal_length(heading);
            if horizontal > MIN_HORIZONTAL_LENGTH {
                let rescale = (1.0 - direction.z * direction.z).sqrt() / horizontal;
                direction.x = heading.x * rescale;
                direction.y = heading.y * rescale;
            }
        }

        match direction.try_normalize() {
            Some(direction) => {
                self.direction = direction;
                true
            }
            None => false,
        }
    }
}

fn horizontal_length(v: Vector3) -> f64 {
    (v.x * v.x + v.y * v.y).sqrt()
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-9;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    fn camera_3d() -> CameraSettings {
        CameraSettings::for_kind(FractalKind::Mandelbulb)
    }

    #[test]
    fn test_default_views() {
        assert_eq!(
            CameraSettings::for_kind(FractalKind::Mandelbrot).position,
            Vector3::new(-0.75, 0.0, 0.0)
        );
        assert_eq!(camera_3d().position, Vector3::new(0.0, -2.0, 0.0));
        assert_eq!(camera_3d().direction, Vector3::UNIT_Y);
    }

    #[test]
    fn test_zoom_divides_scale() {
        let mut camera = camera_3d();

        assert!(camera.zoom(4.0));
        assert_approx_eq(camera.scale, 0.25);
    }

    #[test]
    fn test_zoom_rejects_non_positive_and_non_finite() {
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut camera = camera_3d();

            assert!(!camera.zoom(factor));
            assert_eq!(camera, camera_3d());
        }
    }

    #[test]
    fn test_translate_uses_camera_axes_and_scale() {
        let mut camera = camera_3d();
        camera.scale = 0.5;

        assert!(camera.translate(2.0, 1.0, -4.0));

        // right of +y with +z up is +x
        assert_eq!(camera.position, Vector3::new(1.0, -1.5, -2.0));
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let mut camera = camera_3d();

        assert!(camera.rotate(FRAC_PI_2, 0.0));

        assert_approx_eq(camera.direction.x, -1.0);
        assert_approx_eq(camera.direction.y, 0.0);
    }

    #[test]
    fn test_pitch_is_clamped_below_vertical() {
        let mut camera = camera_3d();

        assert!(camera.rotate(0.0, -FRAC_PI_2));

        assert!(camera.direction.z.abs() <= MAX_VERTICAL_COMPONENT + EPSILON);
        assert_approx_eq(camera.direction.length(), 1.0);
        assert!(camera.right().is_some());
    }

    #[test]
    fn test_rotation_keeps_unit_length_over_grid() {
        let angles = [-3.0, -1.2, -0.3, 0.0, 0.05, 0.7, 1.6, 2.9, 10.0];

        for yaw in angles {
            for pitch in angles {
                let mut camera = camera_3d();
                camera.rotate(yaw, pitch);
                camera.rotate(pitch, yaw);

                assert_approx_eq(camera.direction.length(), 1.0);
                assert!(camera.direction.z.abs() <= MAX_VERTICAL_COMPONENT + EPSILON);
            }
        }
    }

    #[test]
    fn test_rotate_rejects_non_finite_angles() {
        let mut camera = camera_3d();

        assert!(!camera.rotate(f64::NAN, 0.0));
        assert_eq!(camera, camera_3d());
    }

    #[test]
    fn test_rotate_rejects_vertical_direction() {
        let mut camera = camera_3d();
        camera.direction = Vector3::UNIT_Z;

        assert!(!camera.rotate(0.1, 0.1));
        assert_eq!(camera.direction, Vector3::UNIT_Z);
    }
}
