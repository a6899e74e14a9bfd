//! Minimum-depth query.
//!
//! Unlike the pure emission policies, minimum depth needs the live recursion
//! depth at every arrival, and that depth must come back down correctly when
//! a thread is removed. The predecessor step count reported with each visit
//! is exactly the amount to subtract: the predecessor sits that many right
//! hops below the node whose thread it carried.

use crate::tree::Tree;
use crate::walk::{Phase, ThreadedWalker};

impl Tree {
    /// Number of nodes on the shortest root-to-leaf path; 0 for the empty
    /// tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(1), Some(2), Some(3), Some(4)]);
    /// assert_eq!(tree.min_depth(), 2);
    /// ```
    pub fn min_depth(&mut self) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };

        let mut depth = 0usize;
        let mut best = usize::MAX;
        let mut walker = ThreadedWalker::new(Some(root));
        while let Some(visit) = walker.advance() {
            match visit.phase {
                Phase::First => depth += 1,
                Phase::Sole => {
                    depth += 1;
                    // A thread may sit in `right` here; a genuine leaf has
                    // neither child nor thread, and a thread-carrying leaf is
                    // recorded at the matching `Second` below instead.
                    // SAFETY: `visit.node` is owned by this tree and the
                    // walker holds the only live access to it.
                    if unsafe { (*visit.node.as_ptr()).right.is_none() } {
                        best = best.min(depth);
                    }
                }
                Phase::Second => {
                    if let Some(pred) = visit.pred {
                        // SAFETY: as above; the predecessor's real right link
                        // is null again, so a null left makes it a leaf.
                        if unsafe { (*pred.as_ptr()).left.is_none() } {
                            best = best.min(depth);
                        }
                    }
                    depth -= visit.pred_steps;
                }
            }
        }

        // The rightmost chain is in nobody's left subtree, so it never hosts
        // a thread; its end gets one direct check on the restored tree.
        let mut node = root;
        let mut chain_depth = 1;
        // SAFETY: the walk is complete and `&mut self` is still held.
        unsafe {
            while let Some(right) = (*node.as_ptr()).right {
                node = right;
                chain_depth += 1;
            }
            if (*node.as_ptr()).left.is_none() {
                best = best.min(chain_depth);
            }
        }

        debug_assert_ne!(best, usize::MAX);
        best
    }
}
