//! Tests for loading rasters and exporting canvases

#[cfg(test)]
mod tests {
    use floopify::MosaicError;
    use floopify::color::Color;
    use floopify::geometry::Point;
    use floopify::io::image::{export_canvas, load_silhouette, load_source};
    use floopify::render::Canvas;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};
    use tempfile::TempDir;

    // Tests canvases are written and read back unchanged
    // Verified by disabling file save operation
    #[test]
    fn test_export_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.png");

        let mut canvas = Canvas::blank(4, 3);
        canvas.put_pixel(2, 1, Color::new(1, 2, 3));
        export_canvas(&canvas, &path).unwrap();

        assert!(path.exists(), "PNG file should be created");
        let loaded = load_source(&path).unwrap();
        assert_eq!(loaded.dimensions(), (4, 3));
        assert_eq!(loaded.get_pixel(2, 1), &Rgb([1, 2, 3]));
        assert_eq!(loaded.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    // Tests missing inputs fail with the offending path
    // Verified by returning a blank raster for missing files
    #[test]
    fn test_missing_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.jpeg");

        match load_source(&path) {
            Err(MosaicError::ImageLoad { path: failed, .. }) => assert_eq!(failed, path),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
        assert!(load_silhouette(&path).is_err());
    }

    // Tests silhouettes keep their alpha and are named after the file
    // Verified by loading silhouettes as RGB
    #[test]
    fn test_load_silhouette() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("toucan.png");
        let mask = RgbaImage::from_fn(4, 4, |x, _| {
            if x < 2 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([0, 0, 0, 0])
            }
        });
        mask.save(&path).unwrap();

        let silhouette = load_silhouette(&path).unwrap();
        assert_eq!(silhouette.name(), "toucan");
        assert_eq!(silhouette.dimensions(), (4, 4));
        assert!(silhouette.covers(Point::new(1.0, 1.0)));
        assert!(!silhouette.covers(Point::new(3.0, 1.0)));
    }

    // Tests opaque images used as silhouettes cover everything
    // Verified by defaulting missing alpha to zero
    #[test]
    fn test_rgb_silhouette_is_opaque() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flat.png");
        RgbImage::from_pixel(3, 3, Rgb([9, 9, 9])).save(&path).unwrap();

        let silhouette = load_silhouette(&path).unwrap();
        assert!(silhouette.covers(Point::new(2.0, 2.0)));
    }

    // Tests export failures surface as errors
    // Verified by ignoring the save result
    #[test]
    fn test_export_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let result = export_canvas(&Canvas::blank(2, 2), &blocker.join("out.png"));
        assert!(result.is_err());
    }
}
