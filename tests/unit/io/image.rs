//! Tests for the raster canvas and PNG export

#[cfg(test)]
mod tests {
    use endlessgrid::io::configuration::{
        BACKGROUND_COLOR, CELL_COLOR, GRID_LINE_COLOR, MAX_IMAGE_DIMENSION,
    };
    use endlessgrid::io::image::{Canvas, export_grid_as_png, render_grid_image};
    use endlessgrid::io::render::Renderer;
    use endlessgrid::{GridError, SparseGrid};
    use image::Rgba;
    use std::fs;
    use tempfile::TempDir;

    fn diagonal() -> SparseGrid<char> {
        let mut grid = SparseGrid::new();
        grid.set(0, 0, 'a');
        grid.set(1, 1, 'b');
        grid
    }

    // Tests lines include both end points
    // Verified by stopping one pixel short
    #[test]
    fn test_canvas_line_to() {
        let mut canvas = Canvas::new(5, 5);
        canvas.move_to(0, 0);
        canvas.line_to(4, 4);

        for i in 0..5 {
            assert_eq!(*canvas.image().get_pixel(i, i), Rgba(GRID_LINE_COLOR));
        }
        assert_eq!(*canvas.image().get_pixel(1, 0), Rgba(BACKGROUND_COLOR));
    }

    // Tests rectangles are scaled and clipped to the image
    #[test]
    fn test_canvas_fill_rect_scaled_and_clipped() {
        let mut canvas = Canvas::new(6, 6);
        canvas.set_fill([1, 2, 3, 255]);
        canvas.set_scale(4);
        canvas.fill_rect(1, 1, 1, 1);
        canvas.fill_rect(-1, -1, 1, 1);

        let image = canvas.into_image();
        assert_eq!(*image.get_pixel(4, 4), Rgba([1, 2, 3, 255]));
        assert_eq!(*image.get_pixel(5, 5), Rgba([1, 2, 3, 255]));
        assert_eq!(*image.get_pixel(3, 3), Rgba(BACKGROUND_COLOR));
    }

    #[test]
    fn test_canvas_clear() {
        let mut canvas = Canvas::new(3, 3);
        canvas.set_stroke([9, 9, 9, 255]);
        canvas.move_to(0, 1);
        canvas.line_to(2, 1);
        canvas.clear();
        assert!(canvas.image().pixels().all(|p| *p == Rgba(BACKGROUND_COLOR)));
    }

    // Tests lines leaving the canvas are clipped instead of panicking
    #[test]
    fn test_canvas_clips_lines() {
        let mut canvas = Canvas::new(2, 2);
        canvas.move_to(-5, 1);
        canvas.line_to(10, 1);
        assert_eq!(*canvas.image().get_pixel(0, 1), Rgba(GRID_LINE_COLOR));
        assert_eq!(*canvas.image().get_pixel(1, 1), Rgba(GRID_LINE_COLOR));
    }

    // Tests extreme coordinates and scales are exact and clipped, not overflowing
    // Verified by scaling in i32
    #[test]
    fn test_canvas_extreme_coordinates() {
        let mut canvas = Canvas::new(3, 3);
        canvas.move_to(-5, 1);
        canvas.line_to(i32::MAX, 1);
        assert_eq!(*canvas.image().get_pixel(2, 1), Rgba(GRID_LINE_COLOR));

        canvas.move_to(i32::MIN, i32::MIN);
        canvas.line_to(i32::MAX, i32::MIN);

        canvas.set_scale(i32::MAX);
        canvas.move_to(i32::MIN, i32::MAX);
        canvas.line_to(i32::MAX, i32::MIN);
        canvas.fill_rect(i32::MAX, i32::MAX, i32::MAX, i32::MAX);
        canvas.fill_rect(i32::MIN, 0, i32::MAX, 1);
        canvas.set_scale(i32::MIN);
        canvas.fill_rect(i32::MIN, i32::MIN, i32::MIN, i32::MIN);
        canvas.move_to(i32::MIN, 5);
        canvas.line_to(0, 5);
        assert_eq!(*canvas.image().get_pixel(0, 0), Rgba(BACKGROUND_COLOR));

        canvas.set_scale(2);
        canvas.fill_rect(0, 0, i32::MAX, 1);
        assert_eq!(*canvas.image().get_pixel(2, 1), Rgba(CELL_COLOR));
        assert_eq!(*canvas.image().get_pixel(2, 2), Rgba(BACKGROUND_COLOR));
    }

    // Tests cells fill their squares and grid lines sit on the pitch
    // Verified by drawing grid lines before cells
    #[test]
    fn test_render_grid_image_layout() {
        let image = render_grid_image(&diagonal(), 4).unwrap();

        assert_eq!(image.dimensions(), (9, 9));
        assert_eq!(*image.get_pixel(2, 2), Rgba(CELL_COLOR));
        assert_eq!(*image.get_pixel(6, 6), Rgba(CELL_COLOR));
        assert_eq!(*image.get_pixel(6, 2), Rgba(BACKGROUND_COLOR));
        assert_eq!(*image.get_pixel(0, 2), Rgba(GRID_LINE_COLOR));
        assert_eq!(*image.get_pixel(4, 4), Rgba(GRID_LINE_COLOR));
        assert_eq!(*image.get_pixel(8, 8), Rgba(GRID_LINE_COLOR));
    }

    #[test]
    fn test_render_grid_image_rejects_empty_grid() {
        let grid: SparseGrid<char> = SparseGrid::new();
        assert!(matches!(
            render_grid_image(&grid, 4),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    // Tests invalid and oversized images are refused before allocation
    #[test]
    fn test_render_grid_image_rejects_bad_sizes() {
        assert!(matches!(
            render_grid_image(&diagonal(), 0),
            Err(GridError::InvalidParameter { .. })
        ));

        let mut wide = SparseGrid::new();
        wide.set(0, 0, 'a');
        wide.set(MAX_IMAGE_DIMENSION as i32, 0, 'b');
        assert!(matches!(
            render_grid_image(&wide, 1),
            Err(GridError::InvalidParameter { .. })
        ));
    }

    // Tests PNG file creation including missing parent directories
    // Verified by disabling file save operation
    #[test]
    fn test_export_grid_as_png_creates_file() {
        let dir = TempDir::new().unwrap();
        let output_path = dir.path().join("nested").join("out.png");

        export_grid_as_png(&diagonal(), 3, &output_path).unwrap();

        assert!(output_path.exists());
        let image = image::open(&output_path).unwrap().to_rgba8();
        assert_eq!(image.dimensions(), (7, 7));
        assert_eq!(*image.get_pixel(1, 1), Rgba(CELL_COLOR));
    }

    // Tests a parent path occupied by a file surfaces as a file system error
    #[test]
    fn test_export_grid_as_png_blocked_directory() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let result = export_grid_as_png(&diagonal(), 3, &blocker.join("out.png"));
        assert!(matches!(result, Err(GridError::FileSystem { .. })));
    }
}
