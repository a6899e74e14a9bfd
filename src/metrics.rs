//! Walk cost accounting.
//!
//! The headline claim of the threaded engine is linear pointer work in
//! constant auxiliary space. `WalkCost` makes the work half of that claim
//! observable: the engine counts its own visits, thread installs/removals,
//! and predecessor hops, and [`Tree::inorder_cost`] exposes one walk's
//! totals so tests can pin the bounds instead of trusting them.

use crate::tree::Tree;
use crate::walk::ThreadedWalker;

/// Pointer-level work performed by one walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkCost {
    /// Visit events reported (`Sole` + `First` + `Second`). Equals the node
    /// count plus the number of nodes with a left child.
    pub visits: usize,
    /// Threads installed over the walk: one per node with a left child.
    pub thread_installs: usize,
    /// Threads removed; equals `thread_installs` after any complete walk.
    pub thread_removals: usize,
    /// Pointer hops spent in predecessor searches; at most twice the node
    /// count, since each right link is crossed once per search direction.
    pub pred_hops: usize,
}

impl Tree {
    /// Run one complete inorder walk and report its pointer-level cost.
    pub fn inorder_cost(&mut self) -> WalkCost {
        let mut walker = ThreadedWalker::new(self.root());
        while walker.advance().is_some() {}
        walker.cost()
    }
}
