//! Conversion between sparse grids and dense `ndarray` matrices
//!
//! Dense matrices cover the bounding box. Matrix row 0 is the highest grid
//! row and matrix column 0 the lowest grid column, so matrix order equals
//! scan order.

use ndarray::Array2;

use crate::spatial::bounds::Position;
use crate::spatial::grid::{RowAxis, SparseGrid};

/// Dense copy of a grid's bounding box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid<T> {
    /// Cells indexed by `[row, col]`, `None` where the grid is unpopulated
    pub cells: Array2<Option<T>>,
    /// Grid position of matrix element `[0, 0]` (`[min_x, max_y]`)
    pub origin: Position,
}

impl<T> DenseGrid<T> {
    /// Grid position of matrix element `[row, col]`
    pub const fn position(&self, row: usize, col: usize) -> Position {
        [self.origin[0] + col as i32, self.origin[1] - row as i32]
    }
}

impl<T: Clone> SparseGrid<T> {
    /// Dense copy of the bounding box, `None` before the first store
    pub fn to_dense(&self) -> Option<DenseGrid<T>> {
        let bounds = self.bounds()?;
        let origin = [bounds.min[0], bounds.max[1]];
        let mut cells = Array2::from_elem((bounds.height(), bounds.width()), None);

        for (pos, value) in self.iter() {
            let row = origin[1].abs_diff(pos[1]) as usize;
            let col = pos[0].abs_diff(origin[0]) as usize;
            if let Some(dst) = cells.get_mut([row, col]) {
                *dst = Some(value.clone());
            }
        }

        Some(DenseGrid { cells, origin })
    }

    /// Dense copy of the bounding box with absent cells set to `default`
    ///
    /// An empty grid yields a `0 x 0` matrix.
    pub fn to_dense_or(&self, default: &T) -> Array2<T> {
        let Some(bounds) = self.bounds() else {
            return Array2::from_elem((0, 0), default.clone());
        };
        let mut cells = Array2::from_elem((bounds.height(), bounds.width()), default.clone());

        for (index, pos) in bounds.scan().enumerate() {
            if let (Some(value), Some(dst)) = (
                self.get_at(pos),
                cells.get_mut([index / bounds.width(), index % bounds.width()]),
            ) {
                *dst = value.clone();
            }
        }

        cells
    }

    /// Build a grid from a dense matrix
    ///
    /// Matrix column `c` becomes `x = c`; matrix row `r` is mapped through `axis`.
    pub fn from_array(array: &Array2<T>, axis: RowAxis) -> Self {
        Self::from_table(array.rows().into_iter().map(|row| row.to_vec()), axis)
    }
}
