use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    MengerSponge,
    Mandelbulb,
    Mandelbox,
    Juliabulb,
}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::MengerSponge,
        Self::Mandelbulb,
        Self::Mandelbox,
        Self::Juliabulb,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::MengerSponge => "Menger Sponge",
            Self::Mandelbulb => "Mandelbulb",
            Self::Mandelbox => "Mandelbox",
            Self::Juliabulb => "Juliabulb",
        }
    }

    /// Escape-time kinds are evaluated on the complex plane, the rest by ray marching.
    #[must_use]
    pub const fn is_2d(self) -> bool {
        matches!(self, Self::Mandelbrot | Self::Julia)
    }

    #[must_use]
    pub const fn default_max_iterations(self) -> u32 {
        match self {
            Self::Mandelbrot | Self::Julia => 256,
            Self::MengerSponge => 5,
            Self::Mandelbulb | Self::Juliabulb => 8,
            Self::Mandelbox => 12,
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFractalKind(pub u8);

impl fmt::Display for UnknownFractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown fractal kind tag {}", self.0)
    }
}

impl Error for UnknownFractalKind {}

impl TryFrom<u8> for FractalKind {
    type Error = UnknownFractalKind;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(UnknownFractalKind(tag))
    }
}
