//! Monotone axis-aligned bounding box

/// A grid coordinate as `[x, y]`
pub type Position = [i32; 2];

/// Axis-aligned bounding box covering every coordinate ever stored
///
/// The box only grows. Removing the last cell on an edge row or column
/// leaves the box untouched, so iteration bounds stay stable across deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Position,
    /// Maximum coordinates (inclusive)
    pub max: Position,
}

impl BoundingBox {
    /// A box covering a single position
    pub const fn around(pos: Position) -> Self {
        Self { min: pos, max: pos }
    }

    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: Position) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Widen the box so it covers `pos`
    pub fn include(&mut self, pos: Position) {
        self.min = [self.min[0].min(pos[0]), self.min[1].min(pos[1])];
        self.max = [self.max[0].max(pos[0]), self.max[1].max(pos[1])];
    }

    /// Number of columns spanned
    pub const fn width(&self) -> usize {
        self.max[0].abs_diff(self.min[0]) as usize + 1
    }

    /// Number of rows spanned
    pub const fn height(&self) -> usize {
        self.max[1].abs_diff(self.min[1]) as usize + 1
    }

    /// Inclusive `(min, max)` of the x axis
    pub const fn column_range(&self) -> (i32, i32) {
        (self.min[0], self.max[0])
    }

    /// Inclusive `(min, max)` of the y axis
    pub const fn row_range(&self) -> (i32, i32) {
        (self.min[1], self.max[1])
    }

    /// Every position of the box in scan order
    ///
    /// Rows run from `max` y down to `min` y, columns from `min` x up to `max` x.
    pub fn scan(&self) -> impl Iterator<Item = Position> + use<> {
        let (min_x, max_x) = self.column_range();
        let (min_y, max_y) = self.row_range();
        (min_y..=max_y)
            .rev()
            .flat_map(move |y| (min_x..=max_x).map(move |x| [x, y]))
    }
}
