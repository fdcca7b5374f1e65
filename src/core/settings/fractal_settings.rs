use crate::core::settings::fractal_kind::FractalKind;
use crate::core::settings::params::{
    JuliaParams, JuliabulbParams, MandelboxParams, MandelbulbParams,
};

/// Flat aggregate: every variant's parameter block is held at once so the
/// inactive ones survive a type switch when the store is configured to keep them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSettings {
    pub kind: FractalKind,
    pub max_iterations: u32,
    pub julia: JuliaParams,
    pub mandelbulb: MandelbulbParams,
    pub mandelbox: MandelboxParams,
    pub juliabulb: JuliabulbParams,
}

impl FractalSettings {
    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        Self {
            kind,
            max_iterations: kind.default_max_iterations(),
            julia: JuliaParams::default(),
            mandelbulb: MandelbulbParams::default(),
            mandelbox: MandelboxParams::default(),
            juliabulb: JuliabulbParams::default(),
        }
    }

    /// Switches to `kind` with its default iteration count, keeping every variant
    /// block from `self` so that returning to an earlier kind restores its tuning.
    #[must_use]
    pub fn switched_preserving_tuning(&self, kind: FractalKind) -> Self {
        Self {
            kind,
            max_iterations: kind.default_max_iterations(),
            ..*self
        }
    }
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}
