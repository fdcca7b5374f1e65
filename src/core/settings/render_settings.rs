use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::fractal_settings::FractalSettings;
use crate::core::settings::viewpoint::Viewpoint;

/// The snapshot a renderer consumes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderSettings {
    pub camera: CameraSettings,
    pub fractal: FractalSettings,
}

/// One staging slot: a viewpoint in either representation plus the fractal settings.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedSettings<V: Viewpoint> {
    pub view: V,
    pub fractal: FractalSettings,
}

impl<V: Viewpoint> StagedSettings<V> {
    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        Self {
            view: V::default_for(kind),
            fractal: FractalSettings::for_kind(kind),
        }
    }

    #[must_use]
    pub fn to_render_settings(&self) -> RenderSettings {
        RenderSettings {
            camera: self.view.to_camera(),
            fractal: self.fractal,
        }
    }
}

impl<V: Viewpoint> Default for StagedSettings<V> {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}
