//! In-memory pixel grid the rasterizer paints into.

use image::{Rgba, RgbaImage};

/// A single RGBA colour value, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(p: Pixel) -> Self {
        Rgba(p.to_bytes())
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(p: Rgba<u8>) -> Self {
        Pixel::rgba(p[0], p[1], p[2], p[3])
    }
}

/// Square grid of pixels stored row-major, row 0 at the top.
///
/// Every cell always holds a valid [`Pixel`]; a fresh canvas is fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    pixels: Vec<Pixel>,
}

impl Canvas {
    pub fn new(size: u32) -> Self {
        let len = size as usize * size as usize;
        Self {
            size,
            pixels: vec![Pixel::TRANSPARENT; len],
        }
    }

    /// Edge length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size
    }

    pub fn height(&self) -> u32 {
        self.size
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let n = self.size as i64;
        let (x, y) = (x as i64, y as i64);
        if x < 0 || y < 0 || x >= n || y >= n {
            return None;
        }
        Some((y * n + x) as usize)
    }

    /// Returns the pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrites the pixel at `(x, y)`. Coordinates outside the canvas are skipped.
    pub fn set(&mut self, x: i32, y: i32, pixel: Pixel) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = pixel;
        }
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact(0) panics, and a zero-sized canvas has no rows anyway
        self.pixels.chunks_exact(self.size.max(1) as usize)
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Copies a decoded image into a canvas. Returns `None` unless the image is square.
    pub fn from_rgba_image(img: &RgbaImage) -> Option<Self> {
        let (width, height) = img.dimensions();
        if width != height {
            return None;
        }
        Some(Self {
            size: width,
            pixels: img.pixels().map(|&p| p.into()).collect(),
        })
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.size, self.size, |x, y| {
            self.pixels[y as usize * self.size as usize + x as usize].into()
        })
    }
}
