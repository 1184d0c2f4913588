//! Sparse grid over an unbounded integer plane
//!
//! Only populated cells consume memory. Storage is row-major: a map from the
//! row coordinate to a map from the column coordinate to the cell value. The
//! bounding box grows with every store and never shrinks, so whole-grid scans
//! keep stable bounds even after cells on the edge are removed.
//!
//! All whole-grid operations visit cells in *scan order*: rows from the highest
//! y down to the lowest, and within a row columns from the lowest x up to the
//! highest. Text loaded top-down with [`RowAxis::Descending`] therefore scans
//! in reading order.

use std::collections::BTreeMap;

use crate::io::error::{GridError, Result};
use crate::spatial::bounds::{BoundingBox, Position};

/// How input row indices map onto the y axis during bulk construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowAxis {
    /// Row `i` lands on `y = -i`; the first input row is the highest row
    #[default]
    Descending,
    /// Row `i` lands on `y = i`; the first input row is the lowest row
    Ascending,
}

impl RowAxis {
    /// The y coordinate of input row `index`
    pub const fn coordinate(self, index: usize) -> i32 {
        match self {
            Self::Descending => -(index as i32),
            Self::Ascending => index as i32,
        }
    }
}

/// Unbounded two-dimensional container holding populated cells only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid<T> {
    cells: BTreeMap<i32, BTreeMap<i32, T>>,
    bounds: Option<BoundingBox>,
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseGrid<T> {
    /// Create an empty grid
    pub const fn new() -> Self {
        Self {
            cells: BTreeMap::new(),
            bounds: None,
        }
    }

    /// Build a grid from a rectangular table of rows
    ///
    /// Column index `i` becomes `x = i`; the row index is mapped through `axis`.
    pub fn from_table<R, I>(rows: I, axis: RowAxis) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut grid = Self::new();
        for (row_index, row) in rows.into_iter().enumerate() {
            let y = axis.coordinate(row_index);
            for (column_index, cell) in row.into_iter().enumerate() {
                grid.set(column_index as i32, y, cell);
            }
        }
        grid
    }

    /// Store `value` at `(x, y)`, widening the bounding box
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        self.cells.entry(y).or_default().insert(x, value);
        self.bounds = Some(match self.bounds {
            Some(mut bounds) => {
                bounds.include([x, y]);
                bounds
            }
            None => BoundingBox::around([x, y]),
        });
    }

    /// Delete the cell at `(x, y)`, returning its value
    ///
    /// The bounding box is left as is.
    pub fn remove(&mut self, x: i32, y: i32) -> Option<T> {
        let row = self.cells.get_mut(&y)?;
        let removed = row.remove(&x);
        if row.is_empty() {
            self.cells.remove(&y);
        }
        removed
    }

    /// Store on `Some`, delete on `None`
    pub fn assign(&mut self, x: i32, y: i32, value: Option<T>) {
        match value {
            Some(value) => self.set(x, y, value),
            None => {
                self.remove(x, y);
            }
        }
    }

    /// Value at `(x, y)`, if populated
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        self.cells.get(&y).and_then(|row| row.get(&x))
    }

    /// Value at `(x, y)`, or `default` when absent
    pub fn get_or<'a>(&'a self, x: i32, y: i32, default: &'a T) -> &'a T {
        self.get(x, y).unwrap_or(default)
    }

    /// [`get`](Self::get) by position
    pub fn get_at(&self, pos: Position) -> Option<&T> {
        self.get(pos[0], pos[1])
    }

    /// [`get_or`](Self::get_or) by position
    pub fn get_at_or<'a>(&'a self, pos: Position, default: &'a T) -> &'a T {
        self.get_or(pos[0], pos[1], default)
    }

    /// Mutable access to a populated cell
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.cells.get_mut(&y).and_then(|row| row.get_mut(&x))
    }

    /// Whether `(x, y)` holds a value
    pub fn has(&self, x: i32, y: i32) -> bool {
        self.cells.get(&y).is_some_and(|row| row.contains_key(&x))
    }

    /// Replace the value at `(x, y)` with `f(value)`
    ///
    /// The cell is overwritten in place; if `f` panics the old value stays.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::UndefinedCell`] when the cell is absent
    pub fn update<F>(&mut self, x: i32, y: i32, f: F) -> Result<()>
    where
        F: FnOnce(&T) -> T,
    {
        let cell = self
            .get_mut(x, y)
            .ok_or(GridError::UndefinedCell { x, y })?;
        *cell = f(cell);
        Ok(())
    }

    /// Replace the value at `(x, y)` with `f(value)`, starting from `default` when absent
    pub fn update_or<F>(&mut self, x: i32, y: i32, default: T, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        match self.get_mut(x, y) {
            Some(cell) => *cell = f(cell),
            None => self.set(x, y, f(&default)),
        }
    }

    /// Bounding box of every coordinate ever stored
    pub const fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    /// Columns spanned by the bounding box, `0` before the first store
    pub fn width(&self) -> usize {
        self.bounds.as_ref().map_or(0, BoundingBox::width)
    }

    /// Rows spanned by the bounding box, `0` before the first store
    pub fn height(&self) -> usize {
        self.bounds.as_ref().map_or(0, BoundingBox::height)
    }

    /// Inclusive `(min, max)` y range
    pub fn row_range(&self) -> Option<(i32, i32)> {
        self.bounds.as_ref().map(BoundingBox::row_range)
    }

    /// Inclusive `(min, max)` x range
    pub fn column_range(&self) -> Option<(i32, i32)> {
        self.bounds.as_ref().map(BoundingBox::column_range)
    }

    /// Number of populated cells
    pub fn count(&self) -> usize {
        self.cells.values().map(BTreeMap::len).sum()
    }

    /// Whether no cell is populated
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Populated values of row `y`, ascending by x
    pub fn get_row(&self, y: i32) -> Vec<&T> {
        self.cells
            .get(&y)
            .map(|row| row.values().collect())
            .unwrap_or_default()
    }

    /// Populated values of column `x`
    ///
    /// Ordered by descending y, matching scan order. `upside_down` flips it
    /// to ascending y. Note the asymmetry with [`get_row`](Self::get_row),
    /// which ascends.
    pub fn get_column(&self, x: i32, upside_down: bool) -> Vec<&T> {
        let mut column: Vec<&T> = self
            .cells
            .values()
            .rev()
            .filter_map(|row| row.get(&x))
            .collect();
        if upside_down {
            column.reverse();
        }
        column
    }

    /// Populated cells in scan order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.cells
            .iter()
            .rev()
            .flat_map(|(&y, row)| row.iter().map(move |(&x, value)| ([x, y], value)))
    }

    /// Every bounding-box coordinate in scan order, absent cells yielding `default`
    pub fn iter_or<'a>(&'a self, default: &'a T) -> impl Iterator<Item = (Position, &'a T)> {
        self.bounds
            .iter()
            .flat_map(BoundingBox::scan)
            .map(move |pos| (pos, self.get_at_or(pos, default)))
    }

    fn candidates<'a>(
        &'a self,
        default: Option<&'a T>,
    ) -> Box<dyn Iterator<Item = (Position, &'a T)> + 'a> {
        match default {
            Some(default) => Box::new(self.iter_or(default)),
            None => Box::new(self.iter()),
        }
    }

    /// Visit every populated cell in scan order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, Position),
    {
        for (pos, value) in self.iter() {
            f(value, pos);
        }
    }

    /// Visit every bounding-box coordinate in scan order, substituting `default`
    pub fn for_each_or<F>(&self, default: &T, mut f: F)
    where
        F: FnMut(&T, Position),
    {
        for (pos, value) in self.iter_or(default) {
            f(value, pos);
        }
    }

    /// Fold populated cells in scan order
    pub fn reduce<U, F>(&self, initial: U, mut f: F) -> U
    where
        F: FnMut(U, &T, Position) -> U,
    {
        self.iter()
            .fold(initial, |acc, (pos, value)| f(acc, value, pos))
    }

    /// New grid with `f` applied to every populated cell
    ///
    /// The result's bounding box covers the populated cells only, so it can
    /// be tighter than the source's after removals.
    pub fn map<U, F>(&self, mut f: F) -> SparseGrid<U>
    where
        F: FnMut(&T, Position) -> U,
    {
        let mut mapped = SparseGrid::new();
        for (pos, value) in self.iter() {
            mapped.set(pos[0], pos[1], f(value, pos));
        }
        mapped
    }

    /// Copy transformed by `f`; [`Clone::clone`] is the identity case
    pub fn clone_with<F>(&self, f: F) -> Self
    where
        F: FnMut(&T, Position) -> T,
    {
        self.map(f)
    }

    /// One result per bounding-box row, highest row first
    ///
    /// `f` receives the full row (ascending x, `None` for absent cells) and
    /// the row's y coordinate.
    pub fn map_rows<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&[Option<&T>], i32) -> U,
    {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let (min_x, max_x) = bounds.column_range();
        let (min_y, max_y) = bounds.row_range();
        (min_y..=max_y)
            .rev()
            .map(|y| {
                let row: Vec<Option<&T>> = (min_x..=max_x).map(|x| self.get(x, y)).collect();
                f(&row, y)
            })
            .collect()
    }

    /// One result per bounding-box column, lowest column first
    ///
    /// `f` receives the full column (descending y, `None` for absent cells)
    /// and the column's x coordinate.
    pub fn map_columns<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&[Option<&T>], i32) -> U,
    {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let (min_x, max_x) = bounds.column_range();
        let (min_y, max_y) = bounds.row_range();
        (min_x..=max_x)
            .map(|x| {
                let column: Vec<Option<&T>> =
                    (min_y..=max_y).rev().map(|y| self.get(x, y)).collect();
                f(&column, x)
            })
            .collect()
    }

    /// Values matching `predicate` in scan order
    ///
    /// Without a default only populated cells are candidates; with one, every
    /// bounding-box coordinate is.
    pub fn filter<'a, P>(&'a self, mut predicate: P, default: Option<&'a T>) -> Vec<&'a T>
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .filter(|&(pos, value)| predicate(value, pos))
            .map(|(_, value)| value)
            .collect()
    }

    /// Values of row `y` matching `predicate`, ascending by x
    ///
    /// A row without any populated cell yields nothing, default or not.
    pub fn filter_row<'a, P>(
        &'a self,
        y: i32,
        mut predicate: P,
        default: Option<&'a T>,
    ) -> Vec<&'a T>
    where
        P: FnMut(&T, Position) -> bool,
    {
        let (Some(row), Some(bounds)) = (self.cells.get(&y), self.bounds) else {
            return Vec::new();
        };
        match default {
            Some(default) => {
                let (min_x, max_x) = bounds.column_range();
                (min_x..=max_x)
                    .map(|x| (x, row.get(&x).unwrap_or(default)))
                    .filter(|&(x, value)| predicate(value, [x, y]))
                    .map(|(_, value)| value)
                    .collect()
            }
            None => row
                .iter()
                .filter(|&(&x, value)| predicate(value, [x, y]))
                .map(|(_, value)| value)
                .collect(),
        }
    }

    /// Values of column `x` matching `predicate`, descending by y
    pub fn filter_column<'a, P>(
        &'a self,
        x: i32,
        mut predicate: P,
        default: Option<&'a T>,
    ) -> Vec<&'a T>
    where
        P: FnMut(&T, Position) -> bool,
    {
        let Some((min_y, max_y)) = self.row_range() else {
            return Vec::new();
        };
        (min_y..=max_y)
            .rev()
            .filter_map(|y| match default {
                Some(default) => Some((y, self.get_or(x, y, default))),
                None => self.get(x, y).map(|value| (y, value)),
            })
            .filter(|&(y, value)| predicate(value, [x, y]))
            .map(|(_, value)| value)
            .collect()
    }

    /// Positions whose value matches `predicate`, in scan order
    pub fn filter_index<P>(&self, mut predicate: P, default: Option<&T>) -> Vec<Position>
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .filter(|&(pos, value)| predicate(value, pos))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Matching positions together with their values, in scan order
    pub fn filter_cell_and_index<'a, P>(
        &'a self,
        mut predicate: P,
        default: Option<&'a T>,
    ) -> Vec<(Position, &'a T)>
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .filter(|&(pos, value)| predicate(value, pos))
            .collect()
    }

    /// First matching position in scan order
    pub fn find_index<P>(&self, mut predicate: P, default: Option<&T>) -> Option<Position>
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .find(|&(pos, value)| predicate(value, pos))
            .map(|(pos, _)| pos)
    }

    /// First matching value in scan order
    pub fn find<'a, P>(&'a self, mut predicate: P, default: Option<&'a T>) -> Option<&'a T>
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .find(|&(pos, value)| predicate(value, pos))
            .map(|(_, value)| value)
    }

    /// Number of candidates matching `predicate`
    pub fn count_by<P>(&self, mut predicate: P, default: Option<&T>) -> usize
    where
        P: FnMut(&T, Position) -> bool,
    {
        self.candidates(default)
            .filter(|&(pos, value)| predicate(value, pos))
            .count()
    }
}

impl<T: Clone> SparseGrid<T> {
    /// Independent copy of the half-open rectangle spanned by two corners
    ///
    /// Corners may be given in any order; the rectangle covers
    /// `min(x1, x2)..max(x1, x2)` by `min(y1, y2)..max(y1, y2)`.
    pub fn slice(&self, x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let mut slice = Self::new();
        let (min_x, max_x) = (x1.min(x2), x1.max(x2));
        let (min_y, max_y) = (y1.min(y2), y1.max(y2));
        for (&y, row) in self.cells.range(min_y..max_y) {
            for (&x, value) in row.range(min_x..max_x) {
                slice.set(x, y, value.clone());
            }
        }
        slice
    }
}

impl<T> FromIterator<(Position, T)> for SparseGrid<T> {
    fn from_iter<I: IntoIterator<Item = (Position, T)>>(iter: I) -> Self {
        let mut grid = Self::new();
        grid.extend(iter);
        grid
    }
}

impl<T> Extend<(Position, T)> for SparseGrid<T> {
    fn extend<I: IntoIterator<Item = (Position, T)>>(&mut self, iter: I) {
        for (pos, value) in iter {
            self.set(pos[0], pos[1], value);
        }
    }
}
