pub mod generate_fractal;
pub mod generate_fractal_rayon;
pub mod ports;
pub mod render_frame;
