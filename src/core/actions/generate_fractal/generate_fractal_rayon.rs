use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::fill_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Fills `buffer` with one rayon task per row.
///
/// Each pixel is computed independently, so the result matches the serial path bit for bit.
pub fn generate_fractal_rayon<Alg>(buffer: &mut PixelBuffer, algorithm: &Alg)
where
    Alg: FractalAlgorithm + Sync + ?Sized,
{
    if buffer.is_empty() {
        return;
    }

    let width = buffer.width() as usize;

    buffer
        .pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| fill_row(y as u32, row, algorithm));
}
