//! Sequence and matrix extraction from subtrees.
//!
//! Responsibilities:
//! - Decode a subtree of coercible children into a `Vec<T>`.
//! - Decode a subtree of row-subtrees into a [`Matrix<T>`].
//! - Define `ExtractError`, the internal failure type shared by every
//!   typed-retrieval path.
//!
//! Does NOT handle:
//! - Key lookup (callers pass an already-resolved subtree).
//! - Translation into the public error (see `registry.rs`).
//!
//! Invariants:
//! - Extraction is all-or-nothing: the first coercion failure aborts
//!   and no partial result escapes.
//! - The matrix column count comes from the first row only; later rows
//!   are appended without length validation, so ragged input succeeds
//!   and yields a non-rectangular buffer.

use canopy_store::scalar::CoerceError;
use canopy_store::tree::{self, TreeNode};
use canopy_store::{Scalar, StoreError};
use thiserror::Error;

use crate::matrix::Matrix;

/// Internal failure of a typed retrieval path.
///
/// Converted into [`InvalidOption`](crate::InvalidOption) at the `get`
/// boundary; never surfaced to registry callers.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("element {index}: {source}")]
    Element {
        index: usize,
        #[source]
        source: CoerceError,
    },

    #[error("row {row}, column {col}: {source}")]
    Cell {
        row: usize,
        col: usize,
        #[source]
        source: CoerceError,
    },

    /// A user-type constructor failed with a description.
    #[error("{0}")]
    Custom(String),

    /// A user-type constructor failed without one. Rendered by the
    /// registry as the generic "error parsing option" message.
    #[error("constructor failed")]
    Opaque,
}

impl ExtractError {
    /// Wrap a user-type constructor failure, keeping its description.
    pub fn custom(cause: impl std::fmt::Display) -> Self {
        Self::Custom(cause.to_string())
    }

    /// A constructor failure with nothing to say about itself.
    pub fn opaque() -> Self {
        Self::Opaque
    }
}

/// Decode an ordered-list subtree into a sequence of `T`.
///
/// One element per direct child, in document order.
pub fn extract_sequence<T: Scalar>(node: &TreeNode) -> Result<Vec<T>, ExtractError> {
    let mut out = Vec::with_capacity(tree::child_count(node));
    for (index, child) in tree::children(node).enumerate() {
        let value = T::coerce(child).map_err(|source| ExtractError::Element { index, source })?;
        out.push(value);
    }
    Ok(out)
}

/// Decode a list-of-lists subtree into a row-major [`Matrix<T>`].
///
/// The column count is fixed from the first row; subsequent rows are
/// flattened in order whatever their length.
pub fn extract_matrix<T: Scalar>(node: &TreeNode) -> Result<Matrix<T>, ExtractError> {
    let rows = tree::child_count(node);
    let mut cols = 0;
    let mut data = Vec::new();
    for (row, row_node) in tree::children(node).enumerate() {
        if row == 0 {
            cols = tree::child_count(row_node);
            data.reserve(rows * cols);
        }
        for (col, cell) in tree::children(row_node).enumerate() {
            let value =
                T::coerce(cell).map_err(|source| ExtractError::Cell { row, col, source })?;
            data.push(value);
        }
    }
    Ok(Matrix::from_parts(data, rows, cols))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_preserves_order() {
        let seq: Vec<i32> = extract_sequence(&json!([3, 1, 2])).unwrap();
        assert_eq!(seq, vec![3, 1, 2]);
    }

    #[test]
    fn test_sequence_from_named_children() {
        // INI-style stores represent lists as objects; document order wins
        let seq: Vec<String> = extract_sequence(&json!({"first": "a", "second": "b"})).unwrap();
        assert_eq!(seq, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_sequence() {
        let seq: Vec<f64> = extract_sequence(&json!([])).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn test_sequence_failure_names_element() {
        let err = extract_sequence::<i32>(&json!([1, "two", 3])).unwrap_err();
        assert!(err.to_string().starts_with("element 1:"), "{err}");
    }

    #[test]
    fn test_matrix_rectangular() {
        let m: Matrix<i32> = extract_matrix(&json!([[1, 2], [3, 4]])).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 2));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_matrix_ragged_rows_accepted() {
        let m: Matrix<i32> = extract_matrix(&json!([[1, 2, 3], [4]])).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4]);
        assert!(!m.is_rectangular());
    }

    #[test]
    fn test_matrix_empty() {
        let m: Matrix<f64> = extract_matrix(&json!([])).unwrap();
        assert_eq!((m.rows(), m.cols()), (0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_matrix_failure_names_cell() {
        let err = extract_matrix::<i32>(&json!([[1, 2], [3, "x"]])).unwrap_err();
        assert!(err.to_string().starts_with("row 1, column 1:"), "{err}");
    }
}
