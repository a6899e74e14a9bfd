//! Search-tree validation.

use crate::tree::{Tree, Value};
use crate::walk::{Phase, ThreadedWalker};

impl Tree {
    /// Whether the inorder value sequence is strictly increasing.
    ///
    /// Empty and single-node trees are valid; equal adjacent values are not.
    /// On the first violation the walk is abandoned at the earliest point
    /// where no thread remains installed, so the tree is intact afterwards
    /// either way.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut valid = Tree::from_level_order(&[Some(2), Some(1), Some(3)]);
    /// assert!(valid.is_valid_bst());
    ///
    /// let mut invalid = Tree::from_level_order(&[Some(5), Some(1), Some(4), None, None, Some(3), Some(6)]);
    /// assert!(!invalid.is_valid_bst());
    /// ```
    pub fn is_valid_bst(&mut self) -> bool {
        let mut walker = ThreadedWalker::new(self.root());
        let mut previous: Option<Value> = None;
        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: `visit.node` is owned by this tree and the walker
                // holds the only live access to it.
                let current = unsafe { (*visit.node.as_ptr()).value };
                if previous.is_some_and(|p| p >= current) {
                    walker.abandon();
                    return false;
                }
                previous = Some(current);
            }
        }
        true
    }
}
