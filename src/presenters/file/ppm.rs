use crate::adapters::pixel_format::rgba_to_rgb;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;
        let mut writer = BufWriter::new(file);

        write_ppm(&mut writer, buffer)?;
        writer.flush()
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}

fn write_ppm<W: Write>(writer: &mut W, buffer: &PixelBuffer) -> std::io::Result<()> {
    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", buffer.width(), buffer.height())?;
    writeln!(writer, "255")?;
    writer.write_all(&rgba_to_rgb(buffer.data()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;
    use crate::core::data::rgba::Rgba;

    #[test]
    fn test_write_ppm_header_and_rgb_payload() {
        let mut buffer = PixelBuffer::filled(2, 1, Rgba::BLACK).unwrap();
        buffer.set_pixel(Point::new(1, 0), Rgba::opaque(1, 2, 3)).unwrap();

        let mut out = Vec::new();
        write_ppm(&mut out, &buffer).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[0, 0, 0, 1, 2, 3]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_writes_file() {
        let buffer = PixelBuffer::filled(3, 2, Rgba::opaque(9, 9, 9)).unwrap();
        let path = std::env::temp_dir().join(format!("fractal_mosaic_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(written.starts_with(b"P6\n3 2\n255\n"));
        assert_eq!(written.len(), b"P6\n3 2\n255\n".len() + 3 * 2 * 3);
    }
}
