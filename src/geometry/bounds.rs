//! Points, axis-aligned boxes and their integer pixel spans

/// Real-valued position in pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate, growing rightwards
    pub x: f64,
    /// Vertical coordinate, growing downwards
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Raster indices of the pixel containing this point
    ///
    /// Coordinates are floored; points left of or above the origin have no pixel.
    pub fn pixel(self) -> Option<(u32, u32)> {
        let x = self.x.floor();
        let y = self.y.floor();
        (x >= 0.0 && y >= 0.0 && x <= f64::from(u32::MAX) && y <= f64::from(u32::MAX))
            .then_some((x as u32, y as u32))
    }
}

/// Axis-aligned rectangle as (left, top, right, bottom)
///
/// Boxes are never clipped against a canvas; use [`BoundingBox::clamp_to`] to get
/// the pixels actually covered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Left edge
    pub left: f64,
    /// Top edge
    pub top: f64,
    /// Right edge
    pub right: f64,
    /// Bottom edge
    pub bottom: f64,
}

impl BoundingBox {
    /// Create a box from its edges
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square box enclosing the circle of `radius` around `center`
    pub fn around(center: Point, radius: f64) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            center.x + radius,
            center.y + radius,
        )
    }

    /// Box of the grid cell at (`col`, `row`) for square cells of `size` pixels
    pub fn grid_cell(col: u32, row: u32, size: u32) -> Self {
        let size = f64::from(size);
        let left = f64::from(col) * size;
        let top = f64::from(row) * size;
        Self::new(left, top, left + size, top + size)
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Center of the box
    pub const fn center(&self) -> Point {
        Point::new(
            f64::midpoint(self.left, self.right),
            f64::midpoint(self.top, self.bottom),
        )
    }

    /// Pixels of a `width` x `height` raster touched by this box
    ///
    /// Start edges are floored and end edges ceiled, then both are clamped to the
    /// raster. Returns `None` when nothing of the box lies on the raster.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<PixelRect> {
        let (x0, x1) = clamp_span(self.left, self.right, width)?;
        let (y0, y1) = clamp_span(self.top, self.bottom, height)?;

        Some(PixelRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        })
    }
}

fn clamp_span(start: f64, end: f64, limit: u32) -> Option<(u32, u32)> {
    let limit_f = f64::from(limit);
    let lo = start.floor().clamp(0.0, limit_f);
    let hi = end.ceil().clamp(0.0, limit_f);

    (hi > lo).then_some((lo as u32, hi as u32))
}

/// Integer pixel region, `x..x + width` by `y..y + height`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// First column
    pub x: u32,
    /// First row
    pub y: u32,
    /// Number of columns
    pub width: u32,
    /// Number of rows
    pub height: u32,
}

impl PixelRect {
    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Every (x, y) inside the region in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32)> + use<> {
        let (x, y, width, height) = (self.x, self.y, self.width, self.height);
        (y..y + height).flat_map(move |row| (x..x + width).map(move |col| (col, row)))
    }
}
