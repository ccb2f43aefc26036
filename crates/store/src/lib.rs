//! Resolved configuration storage for Canopy.
//!
//! This crate holds the already-resolved key/value side of the
//! configuration system: a hierarchical tree of entries, per-key
//! provenance tags, and the scalar coercion rules used to read leaf
//! values as typed data. The typed dispatch layer lives in
//! `canopy-registry` and consumes this crate through `ConfigStore`.

pub mod scalar;
pub mod store;
pub mod tree;

pub use scalar::{CoerceError, Scalar};
pub use store::{ConfigStore, StoreError};
pub use tree::TreeNode;
