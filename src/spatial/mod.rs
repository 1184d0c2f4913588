//! Spatial data structures
//!
//! This module contains the grid itself and its geometric helpers:
//! - The sparse grid container and its traversal primitives
//! - The monotone bounding box
//! - Neighbour ordering
//! - Dense matrix conversion

/// Monotone bounding box and position type
pub mod bounds;
/// Conversion to and from dense `ndarray` matrices
pub mod dense;
/// The sparse grid container
pub mod grid;
/// Neighbour offsets and queries
pub mod neighbors;

pub use bounds::{BoundingBox, Position};
pub use grid::{RowAxis, SparseGrid};
pub use neighbors::NeighborOptions;
