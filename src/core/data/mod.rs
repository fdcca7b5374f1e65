pub mod colour;
pub mod complex;
pub mod pixel_buffer;
pub mod point;
pub mod ray;
pub mod vector3;
