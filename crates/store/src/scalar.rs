//! Scalar coercion rules for leaf values.
//!
//! Responsibilities:
//! - Define the closed set of scalar kinds retrievable from a store
//!   (`i32`, `i64`, `f32`, `f64`, `bool`, `String`).
//! - Coerce a leaf tree node into each kind, accepting both natively
//!   typed values and their textual spellings (values that arrived via
//!   command lines or INI-style files are stored as text).
//!
//! Does NOT handle:
//! - Sequence or matrix decoding (see `canopy-registry`).
//! - Key lookup or error tagging with key names (see `store.rs`).
//!
//! Invariants:
//! - The `Scalar` trait is sealed: the set of kinds is fixed at compile
//!   time and cannot be extended downstream.
//! - Coercion never partially succeeds; it yields the value or a
//!   `CoerceError` describing both sides.

use thiserror::Error;

use crate::tree::TreeNode;

/// A leaf value could not be interpreted as the requested scalar kind.
#[derive(Debug, Error)]
#[error("cannot interpret {found} as {expected}")]
pub struct CoerceError {
    expected: &'static str,
    found: String,
}

impl CoerceError {
    pub(crate) fn new(expected: &'static str, node: &TreeNode) -> Self {
        Self {
            expected,
            found: describe(node),
        }
    }
}

/// Short human-readable rendering of a node for error messages.
fn describe(node: &TreeNode) -> String {
    match node {
        TreeNode::Null => "null".to_string(),
        TreeNode::Bool(b) => b.to_string(),
        TreeNode::Number(n) => n.to_string(),
        TreeNode::String(s) => format!("{s:?}"),
        TreeNode::Array(_) => "an array".to_string(),
        TreeNode::Object(_) => "an object".to_string(),
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// A scalar kind directly retrievable from the store.
///
/// The set is closed; requesting any other type from the store is a
/// compile error rather than a runtime one.
pub trait Scalar: Sized + sealed::Sealed {
    /// Kind name used in error messages.
    const KIND: &'static str;

    /// Coerce a leaf node into this kind.
    fn coerce(node: &TreeNode) -> Result<Self, CoerceError>;
}

impl Scalar for i32 {
    const KIND: &'static str = "a 32-bit integer";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        match node {
            TreeNode::Number(n) => n
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| CoerceError::new(Self::KIND, node)),
            TreeNode::String(s) => s
                .trim()
                .parse()
                .map_err(|_| CoerceError::new(Self::KIND, node)),
            _ => Err(CoerceError::new(Self::KIND, node)),
        }
    }
}

impl Scalar for i64 {
    const KIND: &'static str = "a 64-bit integer";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        match node {
            TreeNode::Number(n) => n
                .as_i64()
                .ok_or_else(|| CoerceError::new(Self::KIND, node)),
            TreeNode::String(s) => s
                .trim()
                .parse()
                .map_err(|_| CoerceError::new(Self::KIND, node)),
            _ => Err(CoerceError::new(Self::KIND, node)),
        }
    }
}

impl Scalar for f32 {
    const KIND: &'static str = "a single-precision float";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        f64::coerce(node)
            .map(|v| v as f32)
            .map_err(|_| CoerceError::new(Self::KIND, node))
    }
}

impl Scalar for f64 {
    const KIND: &'static str = "a double-precision float";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        match node {
            TreeNode::Number(n) => n
                .as_f64()
                .ok_or_else(|| CoerceError::new(Self::KIND, node)),
            TreeNode::String(s) => s
                .trim()
                .parse()
                .map_err(|_| CoerceError::new(Self::KIND, node)),
            _ => Err(CoerceError::new(Self::KIND, node)),
        }
    }
}

impl Scalar for bool {
    const KIND: &'static str = "a boolean";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        match node {
            TreeNode::Bool(b) => Ok(*b),
            TreeNode::String(s) => match s.trim() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                _ => Err(CoerceError::new(Self::KIND, node)),
            },
            _ => Err(CoerceError::new(Self::KIND, node)),
        }
    }
}

impl Scalar for String {
    const KIND: &'static str = "text";

    fn coerce(node: &TreeNode) -> Result<Self, CoerceError> {
        match node {
            TreeNode::String(s) => Ok(s.clone()),
            TreeNode::Number(n) => Ok(n.to_string()),
            TreeNode::Bool(b) => Ok(b.to_string()),
            _ => Err(CoerceError::new(Self::KIND, node)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_i32_from_number_and_text() {
        assert_eq!(i32::coerce(&json!(42)).unwrap(), 42);
        assert_eq!(i32::coerce(&json!(-7)).unwrap(), -7);
        assert_eq!(i32::coerce(&json!("42")).unwrap(), 42);
        assert_eq!(i32::coerce(&json!(" 42 ")).unwrap(), 42);
    }

    #[test]
    fn test_i32_rejects_overflow_and_fractions() {
        assert!(i32::coerce(&json!(i64::from(i32::MAX) + 1)).is_err());
        assert!(i32::coerce(&json!(1.5)).is_err());
        assert!(i32::coerce(&json!("1.5")).is_err());
    }

    #[test]
    fn test_i64_from_number_and_text() {
        assert_eq!(i64::coerce(&json!(1_000_000_000_000i64)).unwrap(), 1_000_000_000_000);
        assert_eq!(i64::coerce(&json!("-9")).unwrap(), -9);
    }

    #[test]
    fn test_floats_from_number_and_text() {
        assert_eq!(f64::coerce(&json!(2.5)).unwrap(), 2.5);
        assert_eq!(f64::coerce(&json!(3)).unwrap(), 3.0);
        assert_eq!(f64::coerce(&json!("0.25")).unwrap(), 0.25);
        assert_eq!(f32::coerce(&json!(1.5)).unwrap(), 1.5f32);
    }

    #[test]
    fn test_bool_spellings() {
        assert!(bool::coerce(&json!(true)).unwrap());
        assert!(bool::coerce(&json!("true")).unwrap());
        assert!(bool::coerce(&json!("1")).unwrap());
        assert!(!bool::coerce(&json!("false")).unwrap());
        assert!(!bool::coerce(&json!("0")).unwrap());
        assert!(bool::coerce(&json!("yes")).is_err());
        assert!(bool::coerce(&json!(1)).is_err());
    }

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(String::coerce(&json!("abc")).unwrap(), "abc");
        assert_eq!(String::coerce(&json!(7)).unwrap(), "7");
        assert_eq!(String::coerce(&json!(true)).unwrap(), "true");
        assert!(String::coerce(&json!([1])).is_err());
        assert!(String::coerce(&TreeNode::Null).is_err());
    }

    #[test]
    fn test_coerce_error_message_names_both_sides() {
        let err = i32::coerce(&json!("abc")).unwrap_err();
        assert_eq!(err.to_string(), "cannot interpret \"abc\" as a 32-bit integer");
        let err = bool::coerce(&json!({"a": 1})).unwrap_err();
        assert_eq!(err.to_string(), "cannot interpret an object as a boolean");
    }
}
