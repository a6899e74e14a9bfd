//! # Constant-space binary tree traversal
//!
//! Binary-tree algorithms that visit, validate, repair, or aggregate over an
//! owned tree in O(1) auxiliary space. Instead of a call stack or an explicit
//! stack of pointers, a walk temporarily repurposes a leaf-ward null `right`
//! pointer as a back-reference (a *thread*) to an ancestor, follows it to
//! return out of a finished subtree, and removes it again, leaving the tree
//! pointer-identical to its input.
//!
//! ## Core protocol
//!
//! 1. **Two-visit stepping**: a node with a left child is visited twice, once
//!    when its thread is installed and once when the thread is walked and
//!    removed; a node without a left child is visited exactly once.
//! 2. **Dual-stop predecessor search**: the rightmost-node search below a
//!    left child stops at null *or* at the visited node itself, which is what
//!    keeps an already-installed thread from turning the search into a cycle.
//! 3. **Exact restoration**: each thread is removed in the step that consumes
//!    it, so every complete walk (and every legal early exit) leaves the
//!    structure untouched.
//!
//! Every algorithm in the crate (the three traversals, BST validation and
//! repair, the aggregate and depth queries, the lowest-common-ancestor
//! search, and the suspendable iterator) is a thin emission policy over that
//! one stepping engine.
//!
//! ## Usage example
//!
//! ```
//! use threadwalk::Tree;
//!
//! let mut tree = Tree::from_level_order(&[
//!     Some(4), Some(2), Some(6), Some(1), Some(3), Some(5), Some(7),
//! ]);
//! assert_eq!(tree.inorder(), vec![1, 2, 3, 4, 5, 6, 7]);
//! assert!(tree.is_valid_bst());
//! assert_eq!(tree.min_depth(), 3);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements a component of the traversal family
pub mod tree; // Owned tree data model and construction
pub mod iter; // Suspendable inorder iterator
pub mod metrics; // Walk cost accounting

mod ancestor; // Lowest common ancestor
mod bst; // BST aggregate adapters
mod depth; // Minimum depth query
mod traverse; // Preorder / inorder / postorder
mod walk; // Threaded stepping engines (internal)

// Re-exports for convenience
pub use iter::InorderIter;
pub use metrics::WalkCost;
pub use tree::{Fingerprint, NodeId, Tree, Value};

use thiserror::Error;

/// Errors reported by tree operations.
///
/// Every error is reported once at the call boundary; an operation that
/// returns an error leaves the tree exactly as it found it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    /// The operation needs more nodes than the tree holds.
    #[error("operation requires at least {required} nodes, tree has {actual}")]
    TooFewNodes {
        /// Minimum node count the operation needs.
        required: usize,
        /// Node count the tree actually has.
        actual: usize,
    },

    /// A node handle passed in does not belong to this tree.
    #[error("node handle does not belong to this tree")]
    ForeignNode,
}
