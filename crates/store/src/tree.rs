//! Hierarchical tree representation of resolved configuration.
//!
//! Responsibilities:
//! - Define the opaque tree node type shared across the workspace.
//! - Resolve dotted key paths (`"a.b.c"`) against a tree.
//! - Iterate the direct children of a node in document order.
//!
//! Does NOT handle:
//! - Parsing configuration text into trees (done by whatever populates
//!   the store).
//! - Scalar coercion (see `scalar.rs`).
//!
//! Invariants:
//! - Object children iterate in insertion order (the `preserve_order`
//!   feature of `serde_json` is required for this).
//! - Scalar leaves have zero children.

use serde_json::map::Values;

/// The opaque nested-tree value type.
///
/// Built as `serde_json::Value` with insertion-ordered objects; the
/// rest of the workspace treats it as an ordered tree of named or
/// positional children and never relies on JSON semantics beyond that.
pub type TreeNode = serde_json::Value;

/// Resolve a dotted key path against `root`.
///
/// Each segment descends through an object field; a path into anything
/// other than an object, or a missing field, resolves to `None`.
pub fn lookup<'a>(root: &'a TreeNode, key: &str) -> Option<&'a TreeNode> {
    let mut node = root;
    for segment in key.split('.') {
        node = node.as_object()?.get(segment)?;
    }
    Some(node)
}

/// Number of direct children of `node`. Scalar leaves have none.
pub fn child_count(node: &TreeNode) -> usize {
    match node {
        TreeNode::Array(items) => items.len(),
        TreeNode::Object(fields) => fields.len(),
        _ => 0,
    }
}

/// Iterate the direct children of `node` in document order.
///
/// Arrays yield their elements, objects yield their field values in
/// insertion order, and scalar leaves yield nothing.
pub fn children(node: &TreeNode) -> Children<'_> {
    match node {
        TreeNode::Array(items) => Children::Array(items.iter()),
        TreeNode::Object(fields) => Children::Object(fields.values()),
        _ => Children::Leaf,
    }
}

/// Iterator over a node's direct children. See [`children`].
pub enum Children<'a> {
    Array(std::slice::Iter<'a, TreeNode>),
    Object(Values<'a>),
    Leaf,
}

impl<'a> Iterator for Children<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Array(iter) => iter.next(),
            Children::Object(iter) => iter.next(),
            Children::Leaf => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Children::Array(iter) => iter.size_hint(),
            Children::Object(iter) => iter.size_hint(),
            Children::Leaf => (0, Some(0)),
        }
    }
}
