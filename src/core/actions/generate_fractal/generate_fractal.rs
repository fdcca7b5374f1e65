use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

pub(super) fn fill_row<Alg: FractalAlgorithm + ?Sized>(y: u32, row: &mut [Colour], algorithm: &Alg) {
    for (x, pixel) in (0..).zip(row.iter_mut()) {
        *pixel = algorithm.compute(Point { x, y });
    }
}

/// Fills `buffer` row-major on the calling thread.
pub fn generate_fractal<Alg: FractalAlgorithm + ?Sized>(buffer: &mut PixelBuffer, algorithm: &Alg) {
    if buffer.is_empty() {
        return;
    }

    let width = buffer.width() as usize;

    for (y, row) in (0..).zip(buffer.pixels_mut().chunks_mut(width)) {
        fill_row(y, row, algorithm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CoordinateAlgorithm {}

    impl FractalAlgorithm for CoordinateAlgorithm {
        fn compute(&self, pixel: Point) -> Colour {
            Colour::opaque(pixel.x as u8, pixel.y as u8, 0)
        }
    }

    #[test]
    fn test_fills_row_major() {
        let mut buffer = PixelBuffer::new(3, 2);

        generate_fractal(&mut buffer, &CoordinateAlgorithm {});

        assert_eq!(buffer.pixels()[1], Colour::opaque(1, 0, 0));
        assert_eq!(buffer.pixels()[3], Colour::opaque(0, 1, 0));
        assert_eq!(buffer.pixels()[5], Colour::opaque(2, 1, 0));
    }

    #[test]
    fn test_empty_buffer_is_left_alone() {
        let mut buffer = PixelBuffer::new(0, 4);

        generate_fractal(&mut buffer, &CoordinateAlgorithm {});

        assert!(buffer.is_empty());
    }
}
