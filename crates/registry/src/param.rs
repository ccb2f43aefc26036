//! Compile-time dispatch from requested type to retrieval strategy.
//!
//! Responsibilities:
//! - Define `ConfigParam`, the trait the typed getter is generic over.
//! - Implement it for the closed scalar set, `String`, `Vec<T>`,
//!   `Matrix<T>`, and the raw `TreeNode`.
//! - Define `FromTree` plus the `tree_constructible!` macro, the
//!   extension point for user types built from a subtree.
//!
//! Does NOT handle:
//! - Error translation to the public type (see `registry.rs`).
//!
//! Invariants:
//! - A type with no `ConfigParam` impl cannot be requested at all; the
//!   call fails to compile instead of failing at run time.

use canopy_store::{ConfigStore, Scalar, TreeNode};

use crate::extract::{self, ExtractError};
use crate::matrix::Matrix;

/// A type retrievable through [`ConfigRegistry::get`].
///
/// Implementations pick the retrieval strategy for their type: scalars
/// delegate to the store's coercion, containers go through the
/// sequence/matrix extractors, and subtree-constructible user types opt
/// in via [`FromTree`] and [`tree_constructible!`](crate::tree_constructible).
///
/// [`ConfigRegistry::get`]: crate::ConfigRegistry::get
pub trait ConfigParam: Sized {
    fn extract(store: &ConfigStore, key: &str) -> Result<Self, ExtractError>;
}

macro_rules! scalar_param {
    ($($ty:ty),+ $(,)?) => {$(
        impl ConfigParam for $ty {
            fn extract(store: &ConfigStore, key: &str) -> Result<Self, ExtractError> {
                Ok(store.get_scalar(key)?)
            }
        }
    )+};
}

scalar_param!(i32, i64, f32, f64, bool, String);

impl<T: Scalar> ConfigParam for Vec<T> {
    fn extract(store: &ConfigStore, key: &str) -> Result<Self, ExtractError> {
        extract::extract_sequence(store.subtree(key)?)
    }
}

impl<T: Scalar> ConfigParam for Matrix<T> {
    fn extract(store: &ConfigStore, key: &str) -> Result<Self, ExtractError> {
        extract::extract_matrix(store.subtree(key)?)
    }
}

impl ConfigParam for TreeNode {
    fn extract(store: &ConfigStore, key: &str) -> Result<Self, ExtractError> {
        Ok(store.subtree(key)?.clone())
    }
}

/// A user type constructible from a configuration subtree.
///
/// Pair with [`tree_constructible!`](crate::tree_constructible) to make
/// the type requestable through the registry.
pub trait FromTree: Sized {
    type Error: std::fmt::Display;

    fn from_tree(node: &TreeNode) -> Result<Self, Self::Error>;
}

/// Generate [`ConfigParam`] impls for types that implement
/// [`FromTree`], routing retrieval through the key's subtree.
///
/// ```ignore
/// struct Cuts { low: f64, high: f64 }
///
/// impl FromTree for Cuts { /* ... */ }
///
/// tree_constructible!(Cuts);
///
/// let cuts: Cuts = registry.get("cuts")?;
/// ```
#[macro_export]
macro_rules! tree_constructible {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::ConfigParam for $ty {
            fn extract(
                store: &$crate::ConfigStore,
                key: &str,
            ) -> ::std::result::Result<Self, $crate::ExtractError> {
                let node = store.subtree(key)?;
                <$ty as $crate::FromTree>::from_tree(node)
                    .map_err(|e| $crate::ExtractError::custom(e))
            }
        }
    )+};
}
