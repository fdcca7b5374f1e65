pub mod algorithms;
pub mod escape_time;
pub mod projection;
pub mod ray_march;
pub mod sdf;
pub mod shading;
