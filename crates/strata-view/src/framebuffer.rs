//! CPU framebuffer renderer.
//!
//! Rasterizes terrain frames into an RGBA buffer and exports them as PNG.
//! Screen rectangles are snapped to whole pixels by rounding both edges, so
//! neighbouring chunks tile without gaps or double coverage.

use std::path::Path;

use bytemuck::{Pod, Zeroable};
use image::{ImageFormat, RgbaImage};
use strata_common::{Rgb, ScreenRect, StrataError, StrataResult};
use tracing::{debug, info};

use crate::render::Renderer;

/// RGBA pixel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Pixel {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
    /// Alpha channel (0-255)
    pub a: u8,
}

impl Pixel {
    /// Creates a fully opaque pixel.
    #[must_use]
    pub const fn opaque(colour: Rgb) -> Self {
        Self {
            r: colour.r,
            g: colour.g,
            b: colour.b,
            a: 255,
        }
    }
}

/// Software render target.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major)
    pixels: Vec<Pixel>,
    /// Last overlay label drawn this frame
    label: Option<String>,
}

impl Framebuffer {
    /// Creates a transparent framebuffer.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Pixel::default(); width as usize * height as usize],
            label: None,
        }
    }

    /// Returns the width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Gets a pixel at (x, y).
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Returns the overlay label drawn since the last clear.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns the raw pixel data as RGBA bytes.
    #[must_use]
    pub fn as_rgba_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Converts the frame into an `image` buffer.
    #[must_use]
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.as_rgba_bytes().to_vec())
    }

    /// Writes the frame to `path` as PNG.
    pub fn save_png(&self, path: &Path) -> StrataResult<()> {
        let export_error = |reason: String| StrataError::Export {
            path: path.to_path_buf(),
            reason,
        };

        let image = self
            .to_image()
            .ok_or_else(|| export_error("pixel buffer size mismatch".into()))?;
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| export_error(e.to_string()))?;

        info!("Saved {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }

    /// Clips a pixel edge pair to `0..limit`.
    fn span(start: f64, length: f64, limit: u32) -> (u32, u32) {
        let limit = f64::from(limit);
        let from = start.round().clamp(0.0, limit);
        let to = (start + length).round().clamp(0.0, limit);
        (from as u32, to as u32)
    }
}

impl Renderer for Framebuffer {
    fn clear(&mut self, colour: Rgb) {
        self.pixels.fill(Pixel::opaque(colour));
        self.label = None;
    }

    fn fill_rect(&mut self, rect: ScreenRect, colour: Rgb) {
        let (x0, x1) = Self::span(rect.x, rect.width, self.width);
        let (y0, y1) = Self::span(rect.y, rect.height, self.height);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let pixel = Pixel::opaque(colour);
        let stride = self.width as usize;
        for y in y0 as usize..y1 as usize {
            self.pixels[y * stride + x0 as usize..y * stride + x1 as usize].fill(pixel);
        }
    }

    fn draw_label(&mut self, text: &str) {
        debug!("Overlay: {text}");
        self.label = Some(text.to_owned());
    }
}
