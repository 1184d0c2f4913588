//! Sparse, unbounded two-dimensional grid for grid-based puzzle solving
//!
//! A [`SparseGrid`] stores only populated cells over the whole `i32` plane,
//! tracks a bounding box that never shrinks, and offers row/column extraction,
//! neighbour queries, scan-order traversal, text rendering and an optional
//! drawing side channel.

#![forbid(unsafe_code)]

/// Input parsing, rendering, export and error handling
pub mod io;
/// Sparse grid, bounding box, neighbour queries and dense conversion
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{BoundingBox, NeighborOptions, Position, RowAxis, SparseGrid};
