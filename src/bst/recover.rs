//! Repair of a search tree with two swapped values.

use tracing::debug;

use crate::tree::{Link, Tree};
use crate::walk::{Phase, ThreadedWalker};

impl Tree {
    /// Repair a search tree in which exactly two node values were swapped.
    ///
    /// The inorder sequence of such a tree contains one inversion (adjacent
    /// swap) or two (non-adjacent). The first inversion's earlier node and
    /// the last inversion's later node are the swapped pair in both cases,
    /// so tracking them over one walk is enough. The walk always runs to
    /// completion before any value is written; a tree with no inversion is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// // A valid BST over {1, 2, 3} with the values 3 and 1 swapped.
    /// let mut tree = Tree::from_level_order(&[Some(1), Some(3), None, None, Some(2)]);
    /// tree.recover_bst();
    /// assert_eq!(tree.inorder(), vec![1, 2, 3]);
    /// ```
    pub fn recover_bst(&mut self) {
        let mut walker = ThreadedWalker::new(self.root());
        let mut previous: Link = None;
        let mut first: Link = None;
        let mut second: Link = None;

        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: both nodes are owned by this tree and the walker
                // holds the only live access to them.
                unsafe {
                    if let Some(prev) = previous {
                        if (*prev.as_ptr()).value > (*visit.node.as_ptr()).value {
                            if first.is_none() {
                                first = Some(prev);
                            }
                            second = Some(visit.node);
                        }
                    }
                }
                previous = Some(visit.node);
            }
        }

        if let (Some(a), Some(b)) = (first, second) {
            // SAFETY: `a` and `b` are distinct nodes of this tree (an
            // inversion pairs two different inorder positions).
            unsafe {
                debug!(
                    first = (*a.as_ptr()).value,
                    second = (*b.as_ptr()).value,
                    "swapping offending values"
                );
                let tmp = (*a.as_ptr()).value;
                (*a.as_ptr()).value = (*b.as_ptr()).value;
                (*b.as_ptr()).value = tmp;
            }
        }
    }
}
