//! White output canvas with the few drawing primitives the mosaics need
//!
//! Ellipses are rasterized by testing each pixel center against the ellipse
//! inscribed in a box. Outline pixels are those inside the ellipse but outside the
//! same ellipse shrunk by one pixel, giving a one pixel wide ring.

use crate::color::Color;
use crate::geometry::{BoundingBox, PixelRect};
use image::{Rgb, RgbImage};

/// Output raster for a single renderer run
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

#[derive(Debug, Clone, Copy)]
struct Ellipse {
    center_x: f64,
    center_y: f64,
    semi_x: f64,
    semi_y: f64,
}

impl Ellipse {
    fn inscribed(boundary: &BoundingBox) -> Self {
        let center = boundary.center();
        Self {
            center_x: center.x,
            center_y: center.y,
            semi_x: boundary.width() / 2.0,
            semi_y: boundary.height() / 2.0,
        }
    }

    fn contains(&self, x: f64, y: f64, inset: f64) -> bool {
        let semi_x = self.semi_x - inset;
        let semi_y = self.semi_y - inset;
        if semi_x <= 0.0 || semi_y <= 0.0 {
            return false;
        }
        let dx = (x - self.center_x) / semi_x;
        let dy = (y - self.center_y) / semi_y;
        dx.mul_add(dx, dy * dy) <= 1.0
    }

    // Pixel centers sit half a pixel into the pixel
    fn classify(&self, x: u32, y: u32) -> Coverage {
        let px = f64::from(x) + 0.5;
        let py = f64::from(y) + 0.5;
        if !self.contains(px, py, 0.0) {
            Coverage::Outside
        } else if self.contains(px, py, 1.0) {
            Coverage::Interior
        } else {
            Coverage::Ring
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Coverage {
    Outside,
    Ring,
    Interior,
}

impl Canvas {
    /// Create a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb::from(background)),
        }
    }

    /// Create a white canvas
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::WHITE)
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at (`x`, `y`), if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|&p| Color::from(p))
    }

    /// Set a single pixel; coordinates off the canvas are ignored
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
            *pixel = Rgb::from(color);
        }
    }

    /// Fill every pixel of `rect` that lies on the canvas
    pub fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        for (x, y) in rect.pixels() {
            self.put_pixel(x, y, color);
        }
    }

    /// Draw the ellipse inscribed in `boundary`, filled and outlined
    pub fn draw_ellipse(&mut self, boundary: &BoundingBox, fill: Color, outline: Color) {
        self.draw_inscribed(boundary, Some(fill), outline);
    }

    /// Draw only the outline of the ellipse inscribed in `boundary`
    pub fn draw_outline(&mut self, boundary: &BoundingBox, outline: Color) {
        self.draw_inscribed(boundary, None, outline);
    }

    fn draw_inscribed(&mut self, boundary: &BoundingBox, fill: Option<Color>, outline: Color) {
        let Some(rect) = boundary.clamp_to(self.width(), self.height()) else {
            return;
        };
        let ellipse = Ellipse::inscribed(boundary);

        for (x, y) in rect.pixels() {
            let color = match ellipse.classify(x, y) {
                Coverage::Outside => None,
                Coverage::Ring => Some(outline),
                Coverage::Interior => fill,
            };
            if let Some(color) = color {
                self.put_pixel(x, y, color);
            }
        }
    }

    /// Borrow the underlying raster
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }
}
