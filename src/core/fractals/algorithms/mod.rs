pub mod escape_time_algorithm;
pub mod ray_march_algorithm;
