//! Typed read-only access to hierarchical configuration.
//!
//! This crate is the dispatch layer of the Canopy configuration system:
//! given a key and a statically requested type, [`ConfigRegistry::get`]
//! decides at compile time how to decode the stored representation —
//! scalar coercion through the store, sequence or matrix extraction
//! from a subtree, the raw subtree itself, or a user type's own
//! [`FromTree`] constructor — and folds every failure into the single
//! [`InvalidOption`] error.
//!
//! The store it reads from lives in `canopy-store` and is re-exported
//! here so downstream users need one dependency.

pub mod error;
pub mod extract;
pub mod matrix;
pub mod param;
pub mod registry;

pub use canopy_store::{CoerceError, ConfigStore, Scalar, StoreError, TreeNode};
pub use error::InvalidOption;
pub use extract::ExtractError;
pub use matrix::Matrix;
pub use param::{ConfigParam, FromTree};
pub use registry::ConfigRegistry;
