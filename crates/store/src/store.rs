//! The resolved configuration store.
//!
//! Responsibilities:
//! - Hold the resolved entry tree plus one provenance tag per key.
//! - Answer existence and provenance queries.
//! - Retrieve leaf values as typed scalars, borrowed text, or subtrees,
//!   tagging every failure with the key that caused it.
//!
//! Does NOT handle:
//! - Populating the tree or merging sources (whatever builds the store
//!   does that before construction).
//! - Typed dispatch over container and user types (see
//!   `canopy-registry`).
//!
//! Invariants:
//! - The store is immutable after construction; every accessor takes
//!   `&self`. Concurrent reads are therefore safe.
//! - A key has at most one provenance tag. Keys present in the tree but
//!   missing from the provenance map are treated as explicitly
//!   supplied, never as `"default"`.

use std::collections::HashMap;

use thiserror::Error;

use crate::scalar::{CoerceError, Scalar};
use crate::tree::{self, TreeNode};

/// A store lookup or coercion failure, tagged with the offending key.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no entry for key: {key}")]
    Missing { key: String },

    #[error("bad value for key {key}: {source}")]
    Coerce {
        key: String,
        #[source]
        source: CoerceError,
    },
}

/// Resolved key/value entries plus per-key provenance.
///
/// Constructed once, after whatever populates it has finished, and
/// read-only from then on.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    root: TreeNode,
    provenance: HashMap<String, String>,
}

impl ConfigStore {
    /// Store over `root` with no recorded provenance.
    pub fn new(root: TreeNode) -> Self {
        Self::with_provenance(root, HashMap::new())
    }

    /// Store over `root` with one provenance tag per key. Keys are the
    /// same dotted paths used for retrieval.
    pub fn with_provenance(root: TreeNode, provenance: HashMap<String, String>) -> Self {
        Self { root, provenance }
    }

    /// True iff `key` resolves to an entry.
    pub fn contains(&self, key: &str) -> bool {
        tree::lookup(&self.root, key).is_some()
    }

    /// Provenance tag recorded for `key`, if any. Only meaningful for
    /// keys where [`contains`](Self::contains) holds.
    pub fn provenance(&self, key: &str) -> Option<&str> {
        self.provenance.get(key).map(String::as_str)
    }

    /// The whole entry tree.
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    fn node(&self, key: &str) -> Result<&TreeNode, StoreError> {
        tree::lookup(&self.root, key).ok_or_else(|| StoreError::Missing {
            key: key.to_string(),
        })
    }

    /// Retrieve the leaf at `key` coerced to scalar kind `K`.
    pub fn get_scalar<K: Scalar>(&self, key: &str) -> Result<K, StoreError> {
        let node = self.node(key)?;
        K::coerce(node).map_err(|source| StoreError::Coerce {
            key: key.to_string(),
            source,
        })
    }

    /// Borrow the text stored at `key`.
    ///
    /// Unlike `get_scalar::<String>` this never renders a value to
    /// text; the entry must already be stored as a string. The borrow
    /// is valid for as long as the store is, since entries are never
    /// mutated after construction.
    pub fn get_str(&self, key: &str) -> Result<&str, StoreError> {
        let node = self.node(key)?;
        node.as_str().ok_or_else(|| StoreError::Coerce {
            key: key.to_string(),
            source: CoerceError::new("borrowed text", node),
        })
    }

    /// Borrow the subtree rooted at `key`.
    pub fn subtree(&self, key: &str) -> Result<&TreeNode, StoreError> {
        self.node(key)
    }
}
