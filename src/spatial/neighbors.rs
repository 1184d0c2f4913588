//! Neighbour discovery with a fixed, stable ordering
//!
//! Movement rules that prioritise directions depend on the order below, so it
//! must never change. Orthogonal neighbours start at `y - 1` and turn towards
//! `x + 1`; the eight-neighbour order walks the same way, visiting each
//! diagonal between its two orthogonal neighbours.

use crate::spatial::bounds::Position;
use crate::spatial::grid::SparseGrid;

/// Offsets of the four orthogonal neighbours
pub const ORTHOGONAL_OFFSETS: [Position; 4] = [[0, -1], [1, 0], [0, 1], [-1, 0]];

/// Offsets of all eight neighbours
pub const ALL_OFFSETS: [Position; 8] = [
    [0, -1],
    [1, -1],
    [1, 0],
    [1, 1],
    [0, 1],
    [-1, 1],
    [-1, 0],
    [-1, -1],
];

/// Neighbour query options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborOptions {
    /// Include the four diagonal neighbours
    pub include_diagonals: bool,
    /// Keep populated coordinates only
    pub only_defined: bool,
}

impl NeighborOptions {
    /// Orthogonal neighbours, absent ones included
    pub const ORTHOGONAL: Self = Self {
        include_diagonals: false,
        only_defined: false,
    };

    /// All eight neighbours, absent ones included
    pub const ALL: Self = Self {
        include_diagonals: true,
        only_defined: false,
    };

    /// Same options, restricted to populated coordinates
    pub const fn defined(self) -> Self {
        Self {
            only_defined: true,
            ..self
        }
    }

    const fn offsets(self) -> &'static [Position] {
        if self.include_diagonals {
            &ALL_OFFSETS
        } else {
            &ORTHOGONAL_OFFSETS
        }
    }
}

impl<T> SparseGrid<T> {
    /// Coordinates around `(x, y)` in the fixed neighbour order
    ///
    /// Neighbours beyond the edge of the `i32` plane do not exist and are
    /// left out.
    pub fn neighbor_indexes(&self, x: i32, y: i32, opts: NeighborOptions) -> Vec<Position> {
        opts.offsets()
            .iter()
            .filter_map(|offset| Some([x.checked_add(offset[0])?, y.checked_add(offset[1])?]))
            .filter(|pos| !opts.only_defined || self.has(pos[0], pos[1]))
            .collect()
    }

    /// Values around `(x, y)`, `None` for absent neighbours
    pub fn neighbors(&self, x: i32, y: i32, opts: NeighborOptions) -> Vec<Option<&T>> {
        self.neighbor_indexes(x, y, opts)
            .into_iter()
            .map(|pos| self.get_at(pos))
            .collect()
    }

    /// Values around `(x, y)`, absent neighbours replaced by `default`
    pub fn neighbors_or<'a>(
        &'a self,
        x: i32,
        y: i32,
        default: &'a T,
        opts: NeighborOptions,
    ) -> Vec<&'a T> {
        self.neighbor_indexes(x, y, opts)
            .into_iter()
            .map(|pos| self.get_at_or(pos, default))
            .collect()
    }
}
