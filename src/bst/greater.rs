//! Greater-sum tree conversion.

use crate::tree::{Tree, Value};
use crate::walk::{MirroredWalker, Phase};

impl Tree {
    /// Replace every value with the sum of all original values greater than
    /// or equal to it.
    ///
    /// Drives the mirrored walker so values arrive in descending order; the
    /// running sum is the only accumulator, written into each node as it is
    /// emitted. This is the one adapter that mutates every node, and the one
    /// user of the mirrored engine.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(2), Some(1), Some(3)]);
    /// tree.convert_to_greater_tree();
    /// assert_eq!(tree.to_level_order(), vec![Some(5), Some(6), Some(3)]);
    /// ```
    pub fn convert_to_greater_tree(&mut self) {
        let mut walker = MirroredWalker::new(self.root());
        let mut sum: Value = 0;
        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: `visit.node` is owned by this tree and the walker
                // holds the only live access to it. Only the value is
                // written; the links a mirrored thread may occupy are not
                // touched.
                unsafe {
                    sum += (*visit.node.as_ptr()).value;
                    (*visit.node.as_ptr()).value = sum;
                }
            }
        }
        debug_assert_eq!(walker.live_threads(), 0);
    }
}
