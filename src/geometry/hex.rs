//! Hexagonal circle packing over a rectangular canvas
//!
//! Rows are `radius * sqrt(3)` apart and circles within a row `2 * radius` apart.
//! Even rows are left justified starting at `x = radius`; odd rows are inset by one
//! extra radius and hold one circle fewer, which staggers the rows into a hexagonal
//! pattern where every inner circle touches six neighbours.

use crate::geometry::bounds::{BoundingBox, Point};
use crate::io::error::{Result, invalid_parameter};

/// Rule deciding when row generation stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowCutoff {
    /// Keep row `r` while `radius + r + r * radius * sqrt(3) < height`
    ///
    /// The extra `r` pixels make rows near the bottom edge drop out earlier than
    /// their center position alone would require. This reproduces the reference
    /// renderings exactly.
    #[default]
    Legacy,
    /// Keep row `r` while its center lies above the bottom edge
    CenterInside,
}

impl RowCutoff {
    fn keeps_row(self, row: usize, radius: f64, row_spacing: f64, height: f64) -> bool {
        let row_f = row as f64;
        let center_y = row_f.mul_add(row_spacing, radius);
        match self {
            Self::Legacy => center_y + row_f < height,
            Self::CenterInside => center_y < height,
        }
    }
}

/// Circle centers of a hexagonal packing, row by row
#[derive(Debug, Clone, PartialEq)]
pub struct CircleGrid {
    rows: Vec<Vec<Point>>,
    radius: f64,
}

impl CircleGrid {
    /// Rows of centers, top to bottom, each left to right
    pub fn rows(&self) -> &[Vec<Point>] {
        &self.rows
    }

    /// Radius the grid was packed with
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Every center in row-major order
    pub fn centers(&self) -> impl Iterator<Item = Point> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Total number of circles
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether the packing holds no circle at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounding box of every circle in row-major order
    pub fn boundaries(&self) -> impl Iterator<Item = (Point, BoundingBox)> + '_ {
        self.centers()
            .map(|center| (center, BoundingBox::around(center, self.radius)))
    }
}

/// Smallest loop radius accepted, in pixels
pub const MIN_LOOP_RADIUS: f64 = 0.5;

/// Check that `radius` can be packed into a finite grid
///
/// # Errors
///
/// Returns an error if `radius` is not finite or is below [`MIN_LOOP_RADIUS`]
pub fn validate_radius(radius: f64) -> Result<f64> {
    if !radius.is_finite() || radius < MIN_LOOP_RADIUS {
        return Err(invalid_parameter(
            "radius",
            &radius,
            &format!("loop radius must be a finite number of at least {MIN_LOOP_RADIUS} pixels"),
        ));
    }
    Ok(radius)
}

/// Pack circles of `radius` over a `width` x `height` canvas
///
/// # Errors
///
/// Returns an error if `radius` is not finite or is below [`MIN_LOOP_RADIUS`]
pub fn circle_centers(
    width: u32,
    height: u32,
    radius: f64,
    cutoff: RowCutoff,
) -> Result<CircleGrid> {
    let radius = validate_radius(radius)?;

    let diameter = 2.0 * radius;
    let row_spacing = radius * 3.0_f64.sqrt();
    let height_f = f64::from(height);
    let even_count = (f64::from(width) / diameter).floor() as usize;
    let odd_count = even_count.saturating_sub(1);

    let mut rows = Vec::new();
    let mut row = 0;
    while cutoff.keeps_row(row, radius, row_spacing, height_f) {
        let (start_x, count) = if row % 2 == 0 {
            (radius, even_count)
        } else {
            (diameter, odd_count)
        };
        let y = (row as f64).mul_add(row_spacing, radius);

        rows.push(
            (0..count)
                .map(|col| Point::new((col as f64).mul_add(diameter, start_x), y))
                .collect(),
        );
        row += 1;
    }

    Ok(CircleGrid { rows, radius })
}
