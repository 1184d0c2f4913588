//! Tests for dense matrix conversion

#[cfg(test)]
mod tests {
    use endlessgrid::{RowAxis, SparseGrid};
    use ndarray::array;

    // Matrix order equals scan order and gaps become None
    #[test]
    fn test_to_dense_layout() {
        let mut grid = SparseGrid::new();
        grid.set(-1, 2, 'a');
        grid.set(0, 1, 'b');

        let dense = grid.to_dense().unwrap();
        assert_eq!(dense.origin, [-1, 2]);
        assert_eq!(dense.cells, array![[Some('a'), None], [None, Some('b')]]);
        assert_eq!(dense.position(1, 1), [0, 1]);
    }

    #[test]
    fn test_to_dense_empty_grid() {
        let grid: SparseGrid<u8> = SparseGrid::new();
        assert!(grid.to_dense().is_none());
        assert_eq!(grid.to_dense_or(&0).dim(), (0, 0));
    }

    #[test]
    fn test_to_dense_or_fills_default() {
        let mut grid = SparseGrid::new();
        grid.set(0, 0, 1);
        grid.set(2, 0, 3);
        assert_eq!(grid.to_dense_or(&0), array![[1, 0, 3]]);
    }

    // Loading a matrix top-down reproduces it when densified
    #[test]
    fn test_from_array_round_trip() {
        let matrix = array![[1, 2, 3], [4, 5, 6]];
        let grid = SparseGrid::from_array(&matrix, RowAxis::Descending);

        assert_eq!(grid.get(0, 0), Some(&1));
        assert_eq!(grid.get(2, -1), Some(&6));
        assert_eq!(grid.to_dense_or(&0), matrix);

        let flipped = SparseGrid::from_array(&matrix, RowAxis::Ascending);
        assert_eq!(flipped.to_dense_or(&0), array![[4, 5, 6], [1, 2, 3]]);
    }
}
