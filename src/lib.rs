mod controllers;
mod core;
mod presenters;

pub use controllers::interactive::frame_driver::{FrameDriver, TickOutcome};
pub use controllers::ports::frame_presenter::FramePresenter;
pub use controllers::ports::renderer::{Renderer, TargetId};
pub use controllers::ports::settings_source::SettingsSource;
pub use controllers::render::backend::{BackendKind, create_renderer};
pub use controllers::render::cpu_renderer::CpuRenderer;
pub use controllers::settings::observers::{Observer, ObserverRegistry};
pub use controllers::settings::settings_manager::SettingsManager;

pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_fractal::render_frame::{Parallelism, render_frame};
pub use crate::core::config::{
    FrameCadence, MarchConfig, RenderConfig, ShadingConfig, StoreConfig, TypeSwitchPolicy,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::ray::Ray;
pub use crate::core::data::vector3::Vector3;
pub use crate::core::fractals::algorithms::escape_time_algorithm::{
    EscapeTimeAlgorithm, EscapeTimeFormula,
};
pub use crate::core::fractals::algorithms::ray_march_algorithm::RayMarchAlgorithm;
pub use crate::core::fractals::escape_time::{julia_iterations, mandelbrot_iterations};
pub use crate::core::fractals::projection::{make_ray, pixel_to_position};
pub use crate::core::fractals::ray_march::{MarchOutcome, estimate_normal, march};
pub use crate::core::fractals::sdf::{DistanceEstimate, NO_SURFACE_DISTANCE, signed_distance};
pub use crate::core::fractals::shading::{colour_from_iter, fractal_colour, lighting};
pub use crate::core::settings::camera_settings::{CameraSettings, MAX_VERTICAL_COMPONENT, WORLD_UP};
pub use crate::core::settings::fractal_kind::{FractalKind, UnknownFractalKind};
pub use crate::core::settings::fractal_settings::FractalSettings;
pub use crate::core::settings::params::{
    JULIABULB_BAILOUT, JuliaParams, JuliabulbParams, MandelboxParams, MandelbulbParams,
};
pub use crate::core::settings::render_settings::{RenderSettings, StagedSettings};
pub use crate::core::settings::view_settings::{ViewSettings, ViewSettingsError};
pub use crate::core::settings::viewpoint::Viewpoint;

pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
pub use presenters::memory::latest_frame::LatestFramePresenter;
