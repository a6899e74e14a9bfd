//! Right-boundary chain helpers.
//!
//! A node's right boundary is the chain reached by repeatedly following
//! `.right`. Postorder cannot be produced by emitting at `First` or `Second`
//! directly; instead each finished left subtree's boundary is reversed in
//! place, read front to back, and reversed again, which preserves the
//! restoration invariant. The lowest-common-ancestor query reuses the same
//! chains for identity membership scans.

use std::ptr::NonNull;

use crate::tree::{Link, Node, Value};

/// Reverse the `.right`-linked chain starting at `head` in place and return
/// the new head (the old tail). Applying it twice restores the chain exactly.
///
/// # Safety
///
/// Every node on the chain must be exclusively reachable by the caller, and
/// the chain must be thread-free (terminate at a genuine null).
pub(crate) unsafe fn reverse_right_chain(head: NonNull<Node>) -> NonNull<Node> {
    let mut prev = head;
    let mut cur = (*head.as_ptr()).right;
    (*head.as_ptr()).right = None;
    while let Some(node) = cur {
        cur = (*node.as_ptr()).right;
        (*node.as_ptr()).right = Some(prev);
        prev = node;
    }
    prev
}

/// Push the chain starting at `head` onto `out` in reverse order, leaving
/// the chain as it was found.
///
/// # Safety
///
/// Same obligations as [`reverse_right_chain`].
pub(crate) unsafe fn emit_reversed(head: NonNull<Node>, out: &mut Vec<Value>) {
    let tail = reverse_right_chain(head);
    let mut cur = Some(tail);
    while let Some(node) = cur {
        out.push((*node.as_ptr()).value);
        cur = (*node.as_ptr()).right;
    }
    reverse_right_chain(tail);
}

/// Whether `target` lies on the chain starting at `head`, by identity.
///
/// # Safety
///
/// The chain must be thread-free and owned by the tree the caller is
/// walking.
pub(crate) unsafe fn chain_contains(head: Link, target: NonNull<Node>) -> bool {
    let mut cur = head;
    while let Some(node) = cur {
        if node == target {
            return true;
        }
        cur = (*node.as_ptr()).right;
    }
    false
}
