//! The threaded stepping engine.
//!
//! One `advance` call performs one step of the two-visit protocol and
//! reports one arrival. The whole walk state is a single node pointer plus a
//! live-thread count, which is the O(1)-auxiliary-space claim made concrete:
//! suspending the walk (the inorder iterator does) means storing this struct,
//! not a call stack.

use std::ptr::NonNull;

use tracing::trace;

use crate::metrics::WalkCost;
use crate::tree::{Link, Node};

/// Arrival kind reported with every visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    /// Only visit of a node without a left child.
    Sole,
    /// First arrival at a node with a left child; a thread back to it was
    /// just installed in its inorder predecessor.
    First,
    /// Second arrival, via the thread; the thread was removed before this
    /// visit was reported, so the visitor observes restored structure.
    Second,
}

/// One arrival event.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Visit {
    pub(crate) node: NonNull<Node>,
    pub(crate) phase: Phase,
    /// Inorder predecessor that carries (`First`) or carried (`Second`) the
    /// thread. `None` for `Sole` visits.
    pub(crate) pred: Link,
    /// Nodes on the right boundary from `node.left` to the predecessor,
    /// inclusive. The predecessor's depth is the visited node's depth plus
    /// this count.
    pub(crate) pred_steps: usize,
}

/// Resumable stepping state for one walk.
///
/// Preconditions: the links reachable from the starting node form a
/// well-formed tree (acyclic, no shared subtrees) and no other walker or
/// mutator touches it while this one is live. Adapter methods take `&mut
/// Tree`, which discharges both obligations at compile time. A cyclic input
/// breaks the predecessor search's termination argument; that is a
/// programming bug upstream, not a recoverable state.
#[derive(Debug)]
pub(crate) struct ThreadedWalker {
    cur: Link,
    live_threads: usize,
    cost: WalkCost,
}

impl ThreadedWalker {
    pub(crate) fn new(root: Link) -> Self {
        Self {
            cur: root,
            live_threads: 0,
            cost: WalkCost::default(),
        }
    }

    /// Whether the walk has run out of nodes.
    pub(crate) fn finished(&self) -> bool {
        self.cur.is_none()
    }

    /// Threads currently installed.
    pub(crate) fn live_threads(&self) -> usize {
        self.live_threads
    }

    /// Pointer-level work performed so far.
    pub(crate) fn cost(&self) -> WalkCost {
        self.cost
    }

    /// Perform one protocol step and report the arrival, or `None` once the
    /// walk is complete.
    pub(crate) fn advance(&mut self) -> Option<Visit> {
        let cur = self.cur?;
        self.cost.visits += 1;

        // SAFETY: every dereference below touches nodes owned by the tree
        // this walker was created from; the `&mut Tree` receiver of the
        // driving operation guarantees no other reference is live.
        unsafe {
            let cur_ptr = cur.as_ptr();
            let Some(left) = (*cur_ptr).left else {
                self.cur = (*cur_ptr).right;
                return Some(Visit {
                    node: cur,
                    phase: Phase::Sole,
                    pred: None,
                    pred_steps: 0,
                });
            };

            // Predecessor search: rightmost node below the left child. The
            // dual stop condition (null right, or right pointing back at the
            // node being visited) is what keeps an installed thread from
            // turning this search into a cycle.
            let mut pred = left;
            let mut steps = 1;
            while let Some(next) = (*pred.as_ptr()).right {
                if next == cur {
                    break;
                }
                pred = next;
                steps += 1;
            }
            self.cost.pred_hops += steps;

            if (*pred.as_ptr()).right.is_none() {
                // First arrival: install the thread and descend left.
                (*pred.as_ptr()).right = Some(cur);
                self.live_threads += 1;
                self.cost.thread_installs += 1;
                trace!(node = ?cur_ptr, pred = ?pred.as_ptr(), "thread installed");
                self.cur = Some(left);
                Some(Visit {
                    node: cur,
                    phase: Phase::First,
                    pred: Some(pred),
                    pred_steps: steps,
                })
            } else {
                // Second arrival: the thread brought us back. Remove it
                // before reporting so the visitor observes restored
                // structure, then leave through the real right link.
                (*pred.as_ptr()).right = None;
                self.live_threads -= 1;
                self.cost.thread_removals += 1;
                trace!(node = ?cur_ptr, pred = ?pred.as_ptr(), "thread removed");
                self.cur = (*cur_ptr).right;
                Some(Visit {
                    node: cur,
                    phase: Phase::Second,
                    pred: Some(pred),
                    pred_steps: steps,
                })
            }
        }
    }

    /// Abandon the walk at the earliest legal point: keep stepping without
    /// reporting visits until no thread remains installed, then halt. This is
    /// the only permitted early exit; stopping with a thread still installed
    /// would leave the tree corrupted.
    pub(crate) fn abandon(&mut self) {
        while self.live_threads > 0 && self.advance().is_some() {}
        self.cur = None;
    }
}
