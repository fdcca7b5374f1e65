use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::view_settings::ViewSettings;
use std::fmt::Debug;

/// Where the renderer looks from. Every mutator returns `false` when it rejected
/// its input and left `self` unchanged.
pub trait Viewpoint: Debug + Clone + PartialEq + Send + Sync + 'static {
    fn default_for(kind: FractalKind) -> Self;

    /// Whether this representation can frame `kind` at all.
    fn supports(_kind: FractalKind) -> bool {
        true
    }

    fn zoom(&mut self, factor: f64) -> bool;

    fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> bool;

    fn rotate(&mut self, yaw: f64, pitch: f64) -> bool;

    fn aspect(&self) -> f64;

    fn set_aspect(&mut self, aspect: f64) -> bool;

    fn to_camera(&self) -> CameraSettings;
}

impl Viewpoint for CameraSettings {
    fn default_for(kind: FractalKind) -> Self {
        Self::for_kind(kind)
    }

    fn zoom(&mut self, factor: f64) -> bool {
        CameraSettings::zoom(self, factor)
    }

    fn translate(&mut self, dx: f64, dy: f64, dz: f64) -> bool {
        CameraSettings::translate(self, dx, dy, dz)
    }

    fn rotate(&mut self, yaw: f64, pitch: f64) -> bool {
        CameraSettings::rotate(self, yaw, pitch)
    }

    fn aspect(&self) -> f64 {
        self.aspect
    }

    fn set_aspect(&mut self, aspect: f64) -> bool {
        if !(aspect.is_finite() && aspect > 0.0) {
            return false;
        }

        self.aspect = aspect;
        true
    }

    fn to_camera(&self) -> CameraSettings {
        *self
    }
}

impl Viewpoint for ViewSettings {
    fn default_for(kind: FractalKind) -> Self {
        Self::for_kind(kind)
    }

    // a plane window has no 3D camera pose
    fn supports(kind: FractalKind) -> bool {
        kind.is_2d()
    }

    fn zoom(&mut self, factor: f64) -> bool {
        ViewSettings::zoom(self, factor)
    }

    // a window onto the plane has no depth
    fn translate(&mut self, dx: f64, dy: f64, _dz: f64) -> bool {
        self.pan(dx, dy)
    }

    fn rotate(&mut self, _yaw: f64, _pitch: f64) -> bool {
        false
    }

    fn aspect(&self) -> f64 {
        self.width() / self.height()
    }

    fn set_aspect(&mut self, aspect: f64) -> bool {
        self.fit_aspect(aspect)
    }

    fn to_camera(&self) -> CameraSettings {
        ViewSettings::to_camera(self)
    }
}
