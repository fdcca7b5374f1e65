use crate::core::data::colour::Colour;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchConfig {
    pub max_steps: u32,
    /// A hit is `distance < hit_tolerance * t`.
    pub hit_tolerance: f64,
    pub far_distance: f64,
    pub normal_epsilon: f64,
}

impl Default for MarchConfig {
    fn default() -> Self {
        Self {
            max_steps: 100,
            hit_tolerance: 0.001,
            far_distance: 2.0,
            normal_epsilon: 1e-3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingConfig {
    pub gradient_target: Colour,
    pub gradient_background: Colour,
    pub miss_colour: Colour,
    pub lighting: bool,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            gradient_target: Colour::WHITE,
            gradient_background: Colour::BLACK,
            miss_colour: Colour::opaque(100, 100, 100),
            lighting: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderConfig {
    pub march: MarchConfig,
    pub shading: ShadingConfig,
}

/// What happens to the per-variant parameter blocks on a fractal type switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeSwitchPolicy {
    #[default]
    ResetAll,
    PreserveTuning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub type_switch: TypeSwitchPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCadence {
    pub tick_hz: u32,
}

impl FrameCadence {
    #[must_use]
    pub fn dt(&self) -> f64 {
        if self.tick_hz == 0 {
            0.0
        } else {
            1.0 / f64::from(self.tick_hz)
        }
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(self.dt())
    }
}

impl Default for FrameCadence {
    fn default() -> Self {
        Self { tick_hz: 60 }
    }
}
