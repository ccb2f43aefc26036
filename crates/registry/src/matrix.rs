//! Fixed-shape 2-D array decoded from configuration.
//!
//! Responsibilities:
//! - Hold a row-major backing buffer plus declared row/column counts.
//! - Provide checked and panicking element access.
//!
//! Does NOT handle:
//! - Decoding trees into matrices (see `extract.rs`).
//!
//! Invariants:
//! - The declared shape is NOT guaranteed to match the buffer: the
//!   extractor takes the column count from the first row only and
//!   appends later rows unvalidated, so ragged input yields a buffer
//!   whose length differs from `rows * cols`. `get` accounts for this;
//!   `Index` assumes rectangular data.

use std::ops::Index;

/// A 2-D array stored row-major with declared `(rows, cols)` counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Assemble a matrix from its parts. The shape is taken as declared
    /// and not checked against `data.len()`.
    pub fn from_parts(data: Vec<T>, rows: usize, cols: usize) -> Self {
        Self { data, rows, cols }
    }

    /// Declared row count.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Declared column count (taken from the first row at extraction).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements actually stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True iff the buffer length matches the declared shape.
    pub fn is_rectangular(&self) -> bool {
        self.data.len() == self.rows * self.cols
    }

    /// The row-major backing buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Element at `(row, col)`, if the declared shape and the buffer
    /// both cover it.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(row * self.cols + col)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Panics on out-of-shape access or when ragged input left the
    /// buffer short of the declared shape.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        self.get(row, col)
            .unwrap_or_else(|| panic!("matrix index ({row}, {col}) out of bounds"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_rectangular() {
        let m = Matrix::from_parts(vec![1, 2, 3, 4, 5, 6], 2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert!(m.is_rectangular());
        assert_eq!(m.get(0, 0), Some(&1));
        assert_eq!(m.get(1, 2), Some(&6));
        assert_eq!(m[(1, 0)], 4);
    }

    #[test]
    fn test_get_out_of_shape() {
        let m = Matrix::from_parts(vec![1, 2, 3, 4], 2, 2);
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_ragged_buffer_is_observable() {
        // declared 2x3 but the second row only contributed one element
        let m = Matrix::from_parts(vec![1, 2, 3, 4], 2, 3);
        assert!(!m.is_rectangular());
        assert_eq!(m.len(), 4);
        assert_eq!(m.get(1, 0), Some(&4));
        assert_eq!(m.get(1, 1), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_panics_out_of_shape() {
        let m = Matrix::from_parts(vec![1, 2, 3, 4], 2, 2);
        let _ = m[(0, 5)];
    }
}
