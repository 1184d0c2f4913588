//! Text serialization of grids for printing and debugging

use std::fmt;

use crate::io::configuration::DEFAULT_EMPTY_CELL;
use crate::spatial::bounds::Position;
use crate::spatial::grid::SparseGrid;

/// Options controlling text rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextOptions {
    /// Text written for absent cells
    pub default_value: String,
    /// Print the lowest row first instead of the highest
    pub upside_down: bool,
    /// Print columns from the highest x down to the lowest
    pub reversed: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            default_value: DEFAULT_EMPTY_CELL.to_string(),
            upside_down: false,
            reversed: false,
        }
    }
}

impl<T> SparseGrid<T> {
    /// Render the bounding box with a custom stringifier
    ///
    /// `cell_to_string` receives every bounding-box coordinate, `None` for
    /// absent cells; `default_value` is not consulted. Every row, including
    /// the last, ends with `\n`. The grid is not mutated by the flips.
    pub fn render_text_with<F>(&self, opts: &TextOptions, mut cell_to_string: F) -> String
    where
        F: FnMut(Option<&T>, Position) -> String,
    {
        let Some(bounds) = self.bounds() else {
            return String::new();
        };
        let (min_x, max_x) = bounds.column_range();
        let (min_y, max_y) = bounds.row_range();

        let mut body = String::with_capacity((bounds.width() + 1) * bounds.height());
        for y in (min_y..=max_y).rev() {
            let row_y = if opts.upside_down {
                max_y - (y - min_y)
            } else {
                y
            };
            for x in min_x..=max_x {
                let col_x = if opts.reversed {
                    max_x - (x - min_x)
                } else {
                    x
                };
                body.push_str(&cell_to_string(self.get(col_x, row_y), [col_x, row_y]));
            }
            body.push('\n');
        }
        body
    }
}

impl<T: fmt::Display> SparseGrid<T> {
    /// Render the bounding box, one cell per character position
    pub fn render_text(&self, opts: &TextOptions) -> String {
        self.render_text_with(opts, |cell, _| {
            cell.map_or_else(|| opts.default_value.clone(), ToString::to_string)
        })
    }
}

impl<T: fmt::Display> fmt::Display for SparseGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_text(&TextOptions::default()))
    }
}
