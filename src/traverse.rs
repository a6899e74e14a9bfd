//! Traversal emission policies.
//!
//! Preorder emits at `Sole`/`First` and inorder at `Sole`/`Second`; both are
//! one-line policies over the stepping engine. Postorder order (left, right,
//! node) cannot be produced at either arrival directly, so it reads the
//! reversed right boundary of each finished left subtree and, once the walk
//! is done, of the root itself.

use crate::tree::{Tree, Value};
use crate::walk::{emit_reversed, Phase, ThreadedWalker};

impl Tree {
    /// Values in preorder (node, left, right).
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[
    ///     Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7),
    /// ]);
    /// assert_eq!(tree.preorder(), vec![1, 2, 4, 5, 3, 6, 7]);
    /// ```
    pub fn preorder(&mut self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        let mut walker = ThreadedWalker::new(self.root());
        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::First) {
                // SAFETY: `visit.node` is owned by this tree and the walker
                // holds the only live access to it.
                out.push(unsafe { (*visit.node.as_ptr()).value });
            }
        }
        out
    }

    /// Values in inorder (left, node, right); sorted for a search tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[
    ///     Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7),
    /// ]);
    /// assert_eq!(tree.inorder(), vec![4, 2, 5, 1, 6, 3, 7]);
    /// ```
    pub fn inorder(&mut self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        let mut walker = ThreadedWalker::new(self.root());
        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: as in `preorder`.
                out.push(unsafe { (*visit.node.as_ptr()).value });
            }
        }
        out
    }

    /// Values in postorder (left, right, node).
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[
    ///     Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7),
    /// ]);
    /// assert_eq!(tree.postorder(), vec![4, 5, 2, 6, 7, 3, 1]);
    /// ```
    pub fn postorder(&mut self) -> Vec<Value> {
        let mut out = Vec::with_capacity(self.len());
        let mut walker = ThreadedWalker::new(self.root());
        while let Some(visit) = walker.advance() {
            if visit.phase == Phase::Second {
                // The thread is already gone, so the boundary below the left
                // child terminates at the old predecessor.
                // SAFETY: a `Second` arrival implies a left child; the chain
                // below it is thread-free and exclusively ours.
                unsafe {
                    if let Some(left) = (*visit.node.as_ptr()).left {
                        emit_reversed(left, &mut out);
                    }
                }
            }
        }
        if let Some(root) = self.root() {
            // SAFETY: the walk is complete, so the whole tree is restored.
            unsafe { emit_reversed(root, &mut out) };
        }
        out
    }
}
