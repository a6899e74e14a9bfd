//! Minimum absolute difference between values of a search tree.

use crate::tree::{Tree, Value};
use crate::walk::{Phase, ThreadedWalker};
use crate::TreeError;

impl Tree {
    /// Smallest absolute difference between any two values of a valid BST.
    ///
    /// In sorted order the minimum is realized by an adjacent pair, so one
    /// inorder walk suffices. The tree must hold at least two nodes; the
    /// precondition is checked before anything is walked.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(3), Some(1), Some(6), None, Some(2), Some(4)]);
    /// assert_eq!(tree.min_absolute_difference(), Ok(1));
    /// ```
    pub fn min_absolute_difference(&mut self) -> Result<Value, TreeError> {
        if self.len() < 2 {
            return Err(TreeError::TooFewNodes {
                required: 2,
                actual: self.len(),
            });
        }

        let mut walker = ThreadedWalker::new(self.root());
        let mut previous: Option<Value> = None;
        let mut best = Value::MAX;
        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: `visit.node` is owned by this tree and the walker
                // holds the only live access to it.
                let current = unsafe { (*visit.node.as_ptr()).value };
                if let Some(p) = previous {
                    best = best.min(current - p);
                }
                previous = Some(current);
            }
        }
        Ok(best)
    }
}
