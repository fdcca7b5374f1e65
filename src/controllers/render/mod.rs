pub mod backend;
pub mod cpu_renderer;
