//! Raster canvas renderer and PNG export

use std::path::Path;

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::io::configuration::{
    BACKGROUND_COLOR, CELL_COLOR, GRID_LINE_COLOR, MAX_IMAGE_DIMENSION,
};
use crate::io::error::{GridError, Result, invalid_parameter};
use crate::io::render::Renderer;
use crate::spatial::grid::SparseGrid;

/// A [`Renderer`] drawing into an in-memory RGBA image
///
/// Coordinates are multiplied by `scale` before drawing, like a 2-D context
/// transform. Device coordinates are kept as `i64`, so any `i32` input times
/// any scale is exact. Anything outside the image is clipped.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
    background: Rgba<u8>,
    stroke: Rgba<u8>,
    fill: Rgba<u8>,
    scale: i32,
    pen: (i64, i64),
}

impl Canvas {
    /// Blank canvas of `width` x `height` pixels filled with the background colour
    pub fn new(width: u32, height: u32) -> Self {
        let background = Rgba(BACKGROUND_COLOR);
        Self {
            image: RgbaImage::from_pixel(width, height, background),
            background,
            stroke: Rgba(GRID_LINE_COLOR),
            fill: Rgba(CELL_COLOR),
            scale: 1,
            pen: (0, 0),
        }
    }

    /// Set the uniform coordinate scale
    pub const fn set_scale(&mut self, scale: i32) {
        self.scale = scale;
    }

    /// Set the colour used by `line_to`
    pub const fn set_stroke(&mut self, color: [u8; 4]) {
        self.stroke = Rgba(color);
    }

    /// Set the colour used by `fill_rect`
    pub const fn set_fill(&mut self, color: [u8; 4]) {
        self.fill = Rgba(color);
    }

    /// The rendered image
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, returning its image
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn scaled(&self, x: i32, y: i32) -> (i64, i64) {
        let scale = i64::from(self.scale);
        (i64::from(x) * scale, i64::from(y) * scale)
    }

    fn plot(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(px), Ok(py)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if let Some(pixel) = self.image.get_pixel_mut_checked(px, py) {
            *pixel = color;
        }
    }

    // Liang-Barsky: the part of the segment inside the image, endpoints rounded
    fn clip(&self, from: (i64, i64), to: (i64, i64)) -> Option<((i64, i64), (i64, i64))> {
        let max_x = f64::from(self.image.width()) - 1.0;
        let max_y = f64::from(self.image.height()) - 1.0;
        let (x0, y0) = (from.0 as f64, from.1 as f64);
        let (dx, dy) = (to.0 as f64 - x0, to.1 as f64 - y0);
        let (vertical, horizontal) = (from.0 == to.0, from.1 == to.1);

        let mut enter = 0.0_f64;
        let mut exit = 1.0_f64;
        for (p, q, parallel) in [
            (-dx, x0, vertical),
            (dx, max_x - x0, vertical),
            (-dy, y0, horizontal),
            (dy, max_y - y0, horizontal),
        ] {
            if parallel {
                if q < 0.0 {
                    return None;
                }
            } else if p < 0.0 {
                enter = enter.max(q / p);
            } else {
                exit = exit.min(q / p);
            }
        }
        if enter > exit {
            return None;
        }

        let at = |t: f64| (t.mul_add(dx, x0).round() as i64, t.mul_add(dy, y0).round() as i64);
        Some((at(enter), at(exit)))
    }
}

impl Renderer for Canvas {
    fn begin_path(&mut self) {
        self.pen = (0, 0);
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.pen = self.scaled(x, y);
    }

    // Bresenham over the clipped segment; the end point is drawn too
    fn line_to(&mut self, x: i32, y: i32) {
        let target = self.scaled(x, y);
        let segment = self.clip(self.pen, target);
        self.pen = target;
        let Some(((mut x0, mut y0), (x1, y1))) = segment else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, self.stroke);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let (left, top) = self.scaled(x, y);
        let (w, h) = self.scaled(width, height);
        let (right, bottom) = (left.saturating_add(w), top.saturating_add(h));
        let (image_width, image_height) = (
            i64::from(self.image.width()),
            i64::from(self.image.height()),
        );
        let columns = left.min(right).max(0)..left.max(right).min(image_width);
        let rows = top.min(bottom).max(0)..top.max(bottom).min(image_height);
        for py in rows {
            for px in columns.clone() {
                self.plot(px, py, self.fill);
            }
        }
    }

    fn clear(&mut self) {
        let background = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = background;
        }
    }

    fn flush(&mut self) {}
}

/// Rasterize a grid: grid lines at `cell_size` pitch, then populated cells
///
/// # Errors
///
/// Returns an error if:
/// - The grid has never stored a cell
/// - `cell_size` is zero or the image would exceed `MAX_IMAGE_DIMENSION`
pub fn render_grid_image<T>(grid: &SparseGrid<T>, cell_size: u32) -> Result<RgbaImage> {
    if grid.bounds().is_none() {
        return Err(GridError::EmptyGrid {
            operation: "rasterize",
        });
    }
    if cell_size == 0 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"must be at least one pixel",
        ));
    }

    let side = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|cells| cells.checked_mul(cell_size))
            .and_then(|px| px.checked_add(1))
            .filter(|&px| px <= MAX_IMAGE_DIMENSION)
    };
    let (Some(width), Some(height)) = (side(grid.width()), side(grid.height())) else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!(
                "a {}x{} grid exceeds the {MAX_IMAGE_DIMENSION}px image limit",
                grid.width(),
                grid.height()
            ),
        ));
    };

    let mut canvas = Canvas::new(width, height);
    canvas.set_scale(cell_size as i32);
    grid.render_cells(&mut canvas);
    canvas.set_scale(1);
    grid.render_grid(&mut canvas, cell_size as i32);
    Ok(canvas.into_image())
}

/// Export a grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The grid cannot be rasterized (see [`render_grid_image`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<T>(
    grid: &SparseGrid<T>,
    cell_size: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_grid_image(grid, cell_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GridError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GridError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    debug!(
        path = %output_path.display(),
        width = img.width(),
        height = img.height(),
        "exported grid image"
    );
    Ok(())
}
