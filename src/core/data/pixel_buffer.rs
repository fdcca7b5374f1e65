use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

fn dimensions_to_len(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_len: usize,
        actual_len: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "pixel count {} does not match buffer dimensions ({} expected)",
                    actual_len, expected_len
                )
            }
            Self::PixelOutsideBounds {
                pixel,
                width,
                height,
            } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} buffer",
                    pixel.x, pixel.y, width, height
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

/// Row-major RGBA frame of `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Colour>,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Colour::default(); dimensions_to_len(width, height)],
        }
    }

    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Colour>,
    ) -> Result<Self, PixelBufferError> {
        let expected_len = dimensions_to_len(width, height);

        if expected_len != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected_len,
                actual_len: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[must_use]
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    /// Reallocates to the new dimensions. Previous content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize(dimensions_to_len(width, height), Colour::default());
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        self.index_of(pixel).map(|index| self.pixels[index])
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self
            .index_of(pixel)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                width: self.width,
                height: self.height,
            })?;

        self.pixels[index] = colour;

        Ok(())
    }

    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b, colour.a])
            .collect()
    }

    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|colour| [colour.r, colour.g, colour.b])
            .collect()
    }

    fn index_of(&self, pixel: Point) -> Option<usize> {
        if pixel.x >= self.width || pixel.y >= self.height {
            return None;
        }

        Some(pixel.y as usize * self.width as usize + pixel.x as usize)
    }
}
