pub mod camera_settings;
pub mod fractal_kind;
pub mod fractal_settings;
pub mod params;
pub mod render_settings;
pub mod view_settings;
pub mod viewpoint;
