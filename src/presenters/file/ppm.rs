use crate::controllers::ports::frame_presenter::FramePresenter;
use crate::controllers::ports::renderer::TargetId;
use crate::core::data::pixel_buffer::PixelBuffer;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes every presented frame to one PPM file, replacing the previous one.
pub struct PpmFilePresenter {
    path: PathBuf,
}

impl PpmFilePresenter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FramePresenter for PpmFilePresenter {
    fn present(&self, target: TargetId, frame: &PixelBuffer) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(&self.path)?);
        write_ppm(&mut file, frame)?;
        file.flush()?;

        debug!(
            "wrote {}x{} frame for target {:?} to {}",
            frame.width(),
            frame.height(),
            target,
            self.path.display()
        );

        Ok(())
    }
}

pub fn write_ppm(writer: &mut impl Write, frame: &PixelBuffer) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame.width(), frame.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use std::fs;

    fn frame() -> PixelBuffer {
        PixelBuffer::from_pixels(
            2,
            1,
            vec![Colour::opaque(255, 0, 0), Colour { r: 1, g: 2, b: 3, a: 0 }],
        )
        .unwrap()
    }

    #[test]
    fn test_write_ppm_drops_alpha() {
        let mut bytes = Vec::new();

        write_ppm(&mut bytes, &frame()).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[255, 0, 0, 1, 2, 3]);
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let path =
            std::env::temp_dir().join(format!("fractal_engine_{}.ppm", std::process::id()));
        let presenter = PpmFilePresenter::new(&path);

        presenter.present(TargetId(1), &frame()).unwrap();
        let written = fs::read(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert!(written.starts_with(b"P6\n2 1\n255\n"));
        assert_eq!(written.len(), 11 + 6);
    }

    #[test]
    fn test_present_reports_io_errors() {
        let presenter = PpmFilePresenter::new("/nonexistent-dir/frame.ppm");

        assert!(presenter.present(TargetId(1), &frame()).is_err());
    }
}
