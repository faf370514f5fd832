use crate::core::actions::render_tile::ports::colour_map::ColourMap;
use crate::core::data::rgba::Rgba;

/// Channel multipliers applied to the iteration count before truncating to
/// a byte. The wraparound every 256 (or 128, 32) iterations produces the
/// banded look and is part of the output format.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct WrappingPalette {
    pub red_scale: u32,
    pub green_scale: u32,
    pub blue_scale: u32,
}

impl Default for WrappingPalette {
    fn default() -> Self {
        Self {
            red_scale: 1,
            green_scale: 2,
            blue_scale: 8,
        }
    }
}

impl ColourMap for WrappingPalette {
    #[inline]
    fn map(&self, iterations: u32) -> Rgba {
        Rgba::opaque(
            iterations.wrapping_mul(self.red_scale) as u8,
            iterations.wrapping_mul(self.green_scale) as u8,
            iterations.wrapping_mul(self.blue_scale) as u8,
        )
    }

    fn display_name(&self) -> &str {
        "Wrapping bands"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_is_opaque_black() {
        assert_eq!(WrappingPalette::default().map(0), Rgba::BLACK);
    }

    #[test]
    fn test_channels_scale_by_one_two_and_eight() {
        assert_eq!(WrappingPalette::default().map(10), Rgba::opaque(10, 20, 80));
    }

    #[test]
    fn test_channels_wrap_at_byte_boundary() {
        let palette = WrappingPalette::default();

        assert_eq!(palette.map(32), Rgba::opaque(32, 64, 0));
        assert_eq!(palette.map(128), Rgba::opaque(128, 0, 0));
        assert_eq!(palette.map(256), Rgba::opaque(0, 0, 0));
        assert_eq!(palette.map(300), Rgba::opaque(44, 88, 96));
    }

    #[test]
    fn test_large_counts_do_not_overflow() {
        let colour = WrappingPalette::default().map(u32::MAX);

        assert_eq!(colour, Rgba::opaque(255, 254, 248));
    }
}
