// ABOUTME: ASCII-art preview renderer converting raster images to text grids
// ABOUTME: Downsamples tiles of pixels into characters from a luminance palette

use image::{DynamicImage, GrayImage};

use crate::constants::preview;
use crate::error::CmaError;

/// Options controlling the ASCII preview output.
#[derive(Debug, Clone)]
pub struct PreviewOptions {
    /// Target output width in characters
    pub cols: u32,
    /// Vertical compression factor compensating for character cell aspect ratio
    pub scale: f64,
    /// Use the 70-level palette instead of the 10-level one
    pub more_levels: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            cols: preview::DEFAULT_COLS,
            scale: preview::DEFAULT_SCALE,
            more_levels: false,
        }
    }
}

impl PreviewOptions {
    pub fn palette(&self) -> &'static str {
        if self.more_levels {
            preview::PALETTE_LONG
        } else {
            preview::PALETTE_SHORT
        }
    }
}

/// Renders raster images into monospace ASCII approximations.
///
/// Pure transformation of its inputs; rendering the same image with the same
/// options always yields identical output.
pub struct AsciiRenderer {
    options: PreviewOptions,
}

impl AsciiRenderer {
    pub fn new(options: PreviewOptions) -> Result<Self, CmaError> {
        if options.cols == 0 {
            return Err(CmaError::InvalidParameter(
                "cols must be greater than 0".to_string(),
            ));
        }
        if !(options.scale.is_finite() && options.scale > 0.0) {
            return Err(CmaError::InvalidParameter(format!(
                "scale must be a positive number, got {}",
                options.scale
            )));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Decode `data` and render it as an ASCII grid.
    pub fn render(&self, data: &[u8]) -> Result<String, CmaError> {
        let image = image::load_from_memory(data)?;
        self.render_image(&image)
    }

    /// Render an already-decoded image as an ASCII grid.
    pub fn render_image(&self, image: &DynamicImage) -> Result<String, CmaError> {
        let gray = image.to_luma8();
        let (width, height) = gray.dimensions();
        let cols = self.options.cols;

        if cols > width {
            return Err(CmaError::InvalidParameter(format!(
                "cols ({cols}) exceeds image width ({width})"
            )));
        }

        // Fractional tile walk: the last row and column are truncated at the
        // image edge, and every tile covers at least one pixel.
        let tile_w = f64::from(width) / f64::from(cols);
        let tile_h = tile_w / self.options.scale;
        let rows = ((f64::from(height) / tile_h).round() as u32).max(1);

        let palette = self.options.palette().as_bytes();
        let levels = palette.len();

        let mut out = String::with_capacity((cols as usize + 1) * rows as usize);
        for row in 0..rows {
            if row > 0 {
                out.push('\n');
            }
            let y0 = (f64::from(row) * tile_h) as u32;
            let y_end = if row + 1 == rows {
                height
            } else {
                ((f64::from(row) + 1.0) * tile_h) as u32
            };
            let y1 = y_end.clamp(y0 + 1, height);

            for col in 0..cols {
                let x0 = (f64::from(col) * tile_w) as u32;
                let x_end = if col + 1 == cols {
                    width
                } else {
                    ((f64::from(col) + 1.0) * tile_w) as u32
                };
                let x1 = x_end.clamp(x0 + 1, width);

                let mean = mean_luminance(&gray, x0, x1, y0, y1);
                let index = ((mean / 256.0 * levels as f64) as usize).min(levels - 1);
                out.push(palette[index] as char);
            }
        }

        Ok(out)
    }
}

fn mean_luminance(gray: &GrayImage, x0: u32, x1: u32, y0: u32, y1: u32) -> f64 {
    let mut sum: u64 = 0;
    for y in y0..y1 {
        for x in x0..x1 {
            sum += u64::from(gray.get_pixel(x, y).0[0]);
        }
    }
    let count = u64::from(x1 - x0) * u64::from(y1 - y0);
    sum as f64 / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn uniform_gray(width: u32, height: u32, luminance: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([luminance])))
    }

    fn render(image: &DynamicImage, cols: u32, scale: f64, more_levels: bool) -> String {
        AsciiRenderer::new(PreviewOptions {
            cols,
            scale,
            more_levels,
        })
        .unwrap()
        .render_image(image)
        .unwrap()
    }

    #[test]
    fn test_solid_black_renders_darkest_glyph() {
        let output = render(&uniform_gray(100, 100, 0), 10, 1.0, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 10);
        for line in lines {
            assert_eq!(line, "@@@@@@@@@@");
        }
    }

    #[test]
    fn test_solid_white_renders_lightest_glyph() {
        let output = render(&uniform_gray(100, 100, 255), 10, 1.0, false);
        for line in output.lines() {
            assert_eq!(line, "          ");
        }
    }

    #[test]
    fn test_row_and_column_counts() {
        // 64x64 at cols=16: tile_w = 4, tile_h = 8 with scale 0.5, so 8 rows.
        let output = render(&uniform_gray(64, 64, 128), 16, 0.5, false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 8);
        for line in lines {
            assert_eq!(line.len(), 16);
        }
    }

    #[test]
    fn test_uneven_dimensions_truncate_at_edges() {
        // 97x53 does not divide evenly; every row must still be full width.
        let output = render(&uniform_gray(97, 53, 128), 13, 0.7, false);
        let lines: Vec<&str> = output.lines().collect();
        assert!(!lines.is_empty());
        for line in &lines {
            assert_eq!(line.len(), 13);
        }
    }

    #[test]
    fn test_short_image_clamps_to_one_row() {
        // tile_h of 100 pixels against a 3-pixel-tall image.
        let output = render(&uniform_gray(100, 3, 128), 10, 0.1, false);
        assert_eq!(output.lines().count(), 1);
        assert_eq!(output.len(), 10);
    }

    #[test]
    fn test_every_character_from_selected_palette() {
        let mut img = RgbImage::new(60, 40);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 4) as u8, (y * 6) as u8, ((x + y) * 2) as u8]);
        }
        let image = DynamicImage::ImageRgb8(img);

        for more_levels in [false, true] {
            let output = render(&image, 12, 0.43, more_levels);
            let palette = if more_levels {
                preview::PALETTE_LONG
            } else {
                preview::PALETTE_SHORT
            };
            for ch in output.chars().filter(|c| *c != '\n') {
                assert!(palette.contains(ch), "{ch:?} not in palette");
            }
        }
    }

    #[test]
    fn test_monotonicity_over_uniform_luminance() {
        let palette = preview::PALETTE_SHORT;
        let mut previous = 0;
        for luminance in [0u8, 30, 60, 100, 150, 200, 255] {
            let output = render(&uniform_gray(40, 40, luminance), 4, 1.0, false);
            let glyph = output.chars().next().unwrap();
            let index = palette.find(glyph).unwrap();
            assert!(
                index >= previous,
                "index regressed at luminance {luminance}"
            );
            previous = index;
        }
        assert_eq!(previous, palette.len() - 1);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let image = uniform_gray(50, 30, 77);
        let renderer = AsciiRenderer::new(PreviewOptions {
            cols: 10,
            scale: 0.43,
            more_levels: true,
        })
        .unwrap();
        assert_eq!(
            renderer.render_image(&image).unwrap(),
            renderer.render_image(&image).unwrap()
        );
    }

    #[test]
    fn test_render_from_encoded_bytes() {
        let mut bytes = Vec::new();
        uniform_gray(20, 20, 0)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image::ImageFormat::Png,
            )
            .unwrap();

        let renderer = AsciiRenderer::new(PreviewOptions {
            cols: 5,
            scale: 1.0,
            more_levels: false,
        })
        .unwrap();
        let output = renderer.render(&bytes).unwrap();
        assert_eq!(output.lines().count(), 5);
        assert!(output.chars().filter(|c| *c != '\n').all(|c| c == '@'));
    }

    #[test]
    fn test_undecodable_bytes_fail_with_image_decode() {
        let renderer = AsciiRenderer::new(PreviewOptions::default()).unwrap();
        let result = renderer.render(b"this is not an image");
        assert!(matches!(result, Err(CmaError::ImageDecode(_))));
    }

    #[test]
    fn test_invalid_options_are_rejected() {
        let zero_cols = AsciiRenderer::new(PreviewOptions {
            cols: 0,
            scale: 0.43,
            more_levels: false,
        });
        assert!(matches!(zero_cols, Err(CmaError::InvalidParameter(_))));

        for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = AsciiRenderer::new(PreviewOptions {
                cols: 80,
                scale,
                more_levels: false,
            });
            assert!(matches!(result, Err(CmaError::InvalidParameter(_))));
        }
    }

    #[test]
    fn test_cols_wider_than_image_is_rejected() {
        let renderer = AsciiRenderer::new(PreviewOptions {
            cols: 200,
            scale: 1.0,
            more_levels: false,
        })
        .unwrap();
        let result = renderer.render_image(&uniform_gray(100, 100, 0));
        assert!(matches!(result, Err(CmaError::InvalidParameter(_))));
    }

    #[test]
    fn test_default_options() {
        let options = PreviewOptions::default();
        assert_eq!(options.cols, 80);
        assert_eq!(options.scale, 0.43);
        assert!(!options.more_levels);
        assert_eq!(options.palette().len(), 10);
    }
}
