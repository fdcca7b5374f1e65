use crate::core::data::vector3::Vector3;
use crate::core::settings::camera_settings::CameraSettings;
use crate::core::settings::fractal_kind::FractalKind;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewSettingsError {
    InvalidExtent {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },
}

impl fmt::Display for ViewSettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidExtent {
                min_x,
                max_x,
                min_y,
                max_y,
            } => {
                write!(
                    f,
                    "view window [{}, {}] x [{}, {}] must have finite bounds with max > min",
                    min_x, max_x, min_y, max_y
                )
            }
        }
    }
}

impl Error for ViewSettingsError {}

/// Axis-aligned window onto the complex plane. Always `max_x > min_x` and `max_y > min_y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl ViewSettings {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ViewSettingsError> {
        if !is_valid_window(min_x, max_x, min_y, max_y) {
            return Err(ViewSettingsError::InvalidExtent {
                min_x,
                max_x,
                min_y,
                max_y,
            });
        }

        Ok(Self {
            min_x,
            max_x,
            min_y,
            max_y,
        })
    }

    #[must_use]
    pub fn for_kind(kind: FractalKind) -> Self {
        match kind {
            FractalKind::Julia => Self {
                min_x: -1.75,
                max_x: 1.75,
                min_y: -1.0,
                max_y: 1.0,
            },
            _ => Self {
                min_x: -2.5,
                max_x: 1.0,
                min_y: -1.0,
                max_y: 1.0,
            },
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    #[must_use]
    pub fn half_extents(&self) -> (f64, f64) {
        (self.width() / 2.0, self.height() / 2.0)
    }

    /// Shrinks both half-extents by `1 / factor` around the centre.
    pub fn zoom(&mut self, factor: f64) -> bool {
        if !(factor.is_finite() && factor > 0.0) {
            return false;
        }

        let (half_w, half_h) = self.half_extents();
        self.replace_around_center(half_w / factor, half_h / factor)
    }

    /// Pans by fractions of the current width and height.
    pub fn pan(&mut self, dx: f64, dy: f64) -> bool {
        let offset_x = dx * self.width();
        let offset_y = dy * self.height();

        self.replace_with(
            self.min_x + offset_x,
            self.max_x + offset_x,
            self.min_y + offset_y,
            self.max_y + offset_y,
        )
    }

    /// Keeps the vertical extent and recomputes the horizontal one from `aspect`.
    pub fn fit_aspect(&mut self, aspect: f64) -> bool {
        if !(aspect.is_finite() && aspect > 0.0) {
            return false;
        }

        let (_, half_h) = self.half_extents();
        self.replace_around_center(half_h * aspect, half_h)
    }

    /// Equivalent camera for the vector-based 2D mapping.
    #[must_use]
    pub fn to_camera(&self) -> CameraSettings {
        let (center_x, center_y) = self.center();
        let (half_w, half_h) = self.half_extents();

        CameraSettings {
            position: Vector3::new(center_x, center_y, 0.0),
            direction: Vector3::UNIT_Y,
            scale: half_h,
            aspect: half_w / half_h,
        }
    }

    fn replace_around_center(&mut self, half_w: f64, half_h: f64) -> bool {
        let (center_x, center_y) = self.center();

        self.replace_with(
            center_x - half_w,
            center_x + half_w,
            center_y - half_h,
            center_y + half_h,
        )
    }

    // all-or-nothing so a degenerate result never replaces a valid window
    fn replace_with(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> bool {
        if !is_valid_window(min_x, max_x, min_y, max_y) {
            return false;
        }

        *self = Self {
            min_x,
            max_x,
            min_y,
            max_y,
        };
        true
    }
}

fn is_valid_window(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> bool {
    [min_x, max_x, min_y, max_y].iter().all(|v| v.is_finite()) && max_x > min_x && max_y > min_y
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::for_kind(FractalKind::default())
    }
}
