use crate::core::data::colour::Colour;
use crate::core::data::point::Point;

/// Per-pixel colour for one frame. Implementations capture everything they need
/// (image size, settings) at construction.
pub trait FractalAlgorithm {
    fn compute(&self, pixel: Point) -> Colour;
}
