pub mod interactive;
pub mod ports;
pub mod render;
pub mod settings;
