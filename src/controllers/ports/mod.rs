pub mod frame_presenter;
pub mod renderer;
pub mod settings_source;
