//! Mode finding over a search tree with duplicates.

use crate::tree::{Tree, Value};
use crate::walk::{Phase, ThreadedWalker};

impl Tree {
    /// All most-frequent values, ascending.
    ///
    /// A search tree emits equal values contiguously in inorder, so run
    /// lengths over one walk are enough; no counting table is kept. The
    /// result vector is the only allocation and is duplicate-free because a
    /// run contributes at most one entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(1), None, Some(2), Some(2)]);
    /// assert_eq!(tree.find_modes(), vec![2]);
    /// ```
    pub fn find_modes(&mut self) -> Vec<Value> {
        let mut walker = ThreadedWalker::new(self.root());
        let mut modes = Vec::new();
        let mut previous: Option<Value> = None;
        let mut run = 0usize;
        let mut max_run = 0usize;

        while let Some(visit) = walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: `visit.node` is owned by this tree and the walker
                // holds the only live access to it.
                let current = unsafe { (*visit.node.as_ptr()).value };
                run = if previous == Some(current) { run + 1 } else { 1 };
                if run == max_run {
                    modes.push(current);
                } else if run > max_run {
                    modes.clear();
                    modes.push(current);
                    max_run = run;
                }
                previous = Some(current);
            }
        }
        modes
    }
}
