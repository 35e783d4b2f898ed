use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::CodecError;

/// Pixel colour of a surface, channels in R, G, B order
pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([255, 255, 255]);
pub const BLACK: Color = Rgb([0, 0, 0]);

/// An owned, fixed-size grid of RGB pixels.
///
/// Every clone is a deep copy, so snapshots held by the history never alias
/// the buffer being edited.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    pixels: RgbImage,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Create a surface filled with `color`. Zero dimensions are raised to 1.
    pub fn new(width: u32, height: u32, color: Color) -> Self {
        Self {
            pixels: RgbImage::from_pixel(width.max(1), height.max(1), color),
        }
    }

    /// Wrap an existing RGB buffer
    pub fn from_image(pixels: RgbImage) -> Result<Self, CodecError> {
        let (width, height) = pixels.dimensions();
        if width == 0 || height == 0 {
            return Err(CodecError::ZeroDimensions { width, height });
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Write one pixel; coordinates outside the surface are ignored.
    /// Returns whether the pixel was inside.
    #[inline]
    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        match self.pixels.get_pixel_mut_checked(x as u32, y as u32) {
            Some(pixel) => {
                *pixel = color;
                true
            }
            None => false,
        }
    }

    /// Copy out the region at (`x`, `y`) of size `width` x `height`, clipped to the surface.
    /// Returns `None` when nothing of the region lies inside.
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Option<Surface> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let width = width.min(self.width() - x);
        let height = height.min(self.height() - y);
        if width == 0 || height == 0 {
            return None;
        }
        let pixels = imageops::crop_imm(&self.pixels, x, y, width, height).to_image();
        Some(Self { pixels })
    }

    /// Paste `source` with its top-left corner at (`x`, `y`), clipped to the surface
    pub fn set_region(&mut self, x: i64, y: i64, source: &Surface) {
        imageops::replace(&mut self.pixels, &source.pixels, x, y);
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.pixels_mut() {
            *pixel = color;
        }
    }

    /// True if every pixel equals `color`
    pub fn is_uniform(&self, color: Color) -> bool {
        self.pixels.pixels().all(|p| *p == color)
    }

    /// A resampled copy, used when an opened image should fit a fixed canvas size
    pub fn resized(&self, width: u32, height: u32) -> Surface {
        Self {
            pixels: imageops::resize(&self.pixels, width.max(1), height.max(1), FilterType::Triangle),
        }
    }

    /// Raw RGB bytes, row-major
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    /// Encode as PNG, which round-trips pixel-exact
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        let mut bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Decode any raster format the codec understands
    pub fn decode(bytes: &[u8]) -> Result<Surface, CodecError> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_image(decoded.to_rgb8())
    }

    /// Convert for upload as an egui texture
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgb(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }
}
