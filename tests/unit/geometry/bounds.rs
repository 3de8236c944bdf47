//! Tests for points, bounding boxes and raster clamping

#[cfg(test)]
mod tests {
    use floopify::geometry::{BoundingBox, PixelRect, Point};

    // Tests the circle box spans one radius on every side without clipping
    // Verified by using the diameter as the half extent
    #[test]
    fn test_boundary_around() {
        let boundary = BoundingBox::around(Point::new(10.0, 20.0), 43.5);
        assert_eq!(boundary, BoundingBox::new(-33.5, -23.5, 53.5, 63.5));
        assert!(boundary.left < boundary.right);
        assert!(boundary.top < boundary.bottom);
        assert!((boundary.width() - 87.0).abs() < f64::EPSILON);
        assert_eq!(boundary.center(), Point::new(10.0, 20.0));
    }

    // Tests box centers can be computed in constants
    // Verified by swapping the axes in center
    #[test]
    fn test_center_in_const() {
        const CELL_CENTER: Point = BoundingBox::new(0.0, 0.0, 20.0, 10.0).center();
        assert_eq!(CELL_CENTER, Point::new(10.0, 5.0));
    }

    // Tests grid cell boxes are laid out left to right, top to bottom
    // Verified by swapping row and column in grid_cell
    #[test]
    fn test_grid_cell() {
        let cell = BoundingBox::grid_cell(2, 1, 87);
        assert_eq!(cell, BoundingBox::new(174.0, 87.0, 261.0, 174.0));
        assert!((cell.height() - 87.0).abs() < f64::EPSILON);
    }

    // Tests boxes fully inside the raster keep their extent
    // Verified by subtracting one from the clamped end
    #[test]
    fn test_clamp_inside() {
        let rect = BoundingBox::new(2.0, 3.0, 6.0, 5.0).clamp_to(10, 10);
        assert_eq!(
            rect,
            Some(PixelRect {
                x: 2,
                y: 3,
                width: 4,
                height: 2
            })
        );
    }

    // Tests boxes crossing each edge are clamped to existing pixels
    // Verified by removing the lower clamp at zero
    #[test]
    fn test_clamp_edges() {
        let rect = BoundingBox::new(-5.5, -1.0, 3.5, 2.0).clamp_to(10, 10);
        assert_eq!(
            rect,
            Some(PixelRect {
                x: 0,
                y: 0,
                width: 4,
                height: 2
            })
        );

        let rect = BoundingBox::new(7.2, 8.0, 14.0, 30.0).clamp_to(10, 10);
        assert_eq!(
            rect,
            Some(PixelRect {
                x: 7,
                y: 8,
                width: 3,
                height: 2
            })
        );
    }

    // Tests boxes off the raster have no pixels
    // Verified by returning an empty rect instead of None
    #[test]
    fn test_clamp_disjoint() {
        assert_eq!(
            BoundingBox::new(10.0, 0.0, 20.0, 5.0).clamp_to(10, 10),
            None
        );
        assert_eq!(
            BoundingBox::new(-8.0, -8.0, -1.0, -1.0).clamp_to(10, 10),
            None
        );
        assert_eq!(BoundingBox::new(0.0, 0.0, 5.0, 5.0).clamp_to(0, 0), None);
    }

    // Tests pixel iteration order and area
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_pixel_rect_iteration() {
        let rect = PixelRect {
            x: 1,
            y: 2,
            width: 2,
            height: 2,
        };
        assert_eq!(rect.area(), 4);
        assert_eq!(
            rect.pixels().collect::<Vec<_>>(),
            vec![(1, 2), (2, 2), (1, 3), (2, 3)]
        );
    }

    // Tests points floor onto raster indices and reject negatives
    // Verified by rounding instead of flooring
    #[test]
    fn test_point_pixel() {
        assert_eq!(Point::new(43.5, 43.5).pixel(), Some((43, 43)));
        assert_eq!(Point::new(0.99, 7.0).pixel(), Some((0, 7)));
        assert_eq!(Point::new(-0.5, 2.0).pixel(), None);
    }
}
