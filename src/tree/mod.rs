//! Owned binary tree and its navigation surface.
//!
//! The tree owns every node it holds; construction goes through the compact
//! breadth-first literal form and teardown runs in O(1) auxiliary space via
//! right rotations, so deep trees cannot overflow the call stack.
//!
//! All walking operations take `&mut self` even when logically read-only:
//! the stepping engine temporarily repurposes null `right` pointers as
//! threads and removes them before returning. The mutable receiver is what
//! turns the single-walker discipline into a compile-time property instead
//! of a documentation footnote.
//!
//! Navigation helpers ([`Tree::find_first`], [`Tree::get`], [`Tree::left_of`],
//! [`Tree::right_of`], [`Tree::contains`]) take `&self` and use an explicit
//! heap stack; only the walking operations carry the O(1)-space guarantee.

mod build;
mod fingerprint;
mod node;

pub use fingerprint::Fingerprint;
pub use node::{NodeId, Value};

pub(crate) use node::{Link, Node};

use std::fmt;
use std::ptr::NonNull;

/// An owned binary tree of scalar values.
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub(crate) fn assemble(root: Link, len: usize) -> Self {
        Self { root, len }
    }

    pub(crate) fn root(&self) -> Link {
        self.root
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Handle of the root node.
    pub fn root_id(&self) -> Option<NodeId> {
        self.root.map(NodeId)
    }

    /// Handle of the first node holding `value` in preorder, if any.
    pub fn find_first(&self, value: Value) -> Option<NodeId> {
        let mut stack = vec![self.root];
        while let Some(link) = stack.pop() {
            let Some(ptr) = link else { continue };
            // SAFETY: `ptr` came off this tree's own links and no walk is
            // live while `&self` is held.
            unsafe {
                if (*ptr.as_ptr()).value == value {
                    return Some(NodeId(ptr));
                }
                stack.push((*ptr.as_ptr()).right);
                stack.push((*ptr.as_ptr()).left);
            }
        }
        None
    }

    /// Whether `id` refers to a node owned by this tree. O(n).
    pub fn contains(&self, id: NodeId) -> bool {
        self.owns(id.0)
    }

    /// Value stored at `id`, if the handle belongs to this tree. O(n).
    pub fn get(&self, id: NodeId) -> Option<Value> {
        // SAFETY: dereferenced only after the membership scan proves the
        // handle points at a node this tree owns.
        self.owns(id.0)
            .then(|| unsafe { (*id.0.as_ptr()).value })
    }

    /// Handle of the left child of `id`, if the handle belongs to this tree
    /// and the child exists. O(n).
    pub fn left_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.owns(id.0) {
            return None;
        }
        // SAFETY: membership proven above.
        unsafe { (*id.0.as_ptr()).left.map(NodeId) }
    }

    /// Handle of the right child of `id`, if the handle belongs to this tree
    /// and the child exists. O(n).
    pub fn right_of(&self, id: NodeId) -> Option<NodeId> {
        if !self.owns(id.0) {
            return None;
        }
        // SAFETY: membership proven above.
        unsafe { (*id.0.as_ptr()).right.map(NodeId) }
    }

    fn owns(&self, target: NonNull<Node>) -> bool {
        let mut stack = vec![self.root];
        while let Some(link) = stack.pop() {
            let Some(ptr) = link else { continue };
            if ptr == target {
                return true;
            }
            // SAFETY: `ptr` came off this tree's own links.
            unsafe {
                stack.push((*ptr.as_ptr()).right);
                stack.push((*ptr.as_ptr()).left);
            }
        }
        false
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("level_order", &self.to_level_order())
            .finish()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        // Right-rotation teardown: O(n) time, O(1) auxiliary space. Rotating
        // each left child above its parent straightens the tree into a right
        // spine that can be freed link by link.
        let mut cur = self.root.take();
        while let Some(node) = cur {
            // SAFETY: every node below was allocated by `Node::new_detached`
            // and is reachable exactly once; rotations preserve the node set
            // and `Box::from_raw` consumes each node a single time.
            unsafe {
                match (*node.as_ptr()).left {
                    Some(left) => {
                        (*node.as_ptr()).left = (*left.as_ptr()).right;
                        (*left.as_ptr()).right = Some(node);
                        cur = Some(left);
                    }
                    None => {
                        cur = (*node.as_ptr()).right;
                        drop(Box::from_raw(node.as_ptr()));
                    }
                }
            }
        }
    }
}
