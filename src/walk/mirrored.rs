//! Left/right-mirrored stepping engine.
//!
//! The same two-visit protocol as the threaded walker with the roles of the
//! child links exchanged: the predecessor search runs down `.left` chains and
//! threads are installed in null `.left` pointers. Emitting at `Sole` and
//! `Second` therefore yields right-node-left order, which is descending for
//! a search tree. Kept as an explicit twin of the threaded walker rather
//! than a parameterized abstraction; the two must be readable side by side.

use tracing::trace;

use crate::tree::Link;
use crate::walk::threaded::{Phase, Visit};

/// Resumable mirrored stepping state. Same preconditions as the threaded
/// walker.
#[derive(Debug)]
pub(crate) struct MirroredWalker {
    cur: Link,
    live_threads: usize,
}

impl MirroredWalker {
    pub(crate) fn new(root: Link) -> Self {
        Self {
            cur: root,
            live_threads: 0,
        }
    }

    /// Threads currently installed.
    pub(crate) fn live_threads(&self) -> usize {
        self.live_threads
    }

    /// Perform one mirrored protocol step.
    pub(crate) fn advance(&mut self) -> Option<Visit> {
        let cur = self.cur?;

        // SAFETY: as for the threaded walker; the driving operation holds
        // `&mut Tree`.
        unsafe {
            let cur_ptr = cur.as_ptr();
            let Some(right) = (*cur_ptr).right else {
                self.cur = (*cur_ptr).left;
                return Some(Visit {
                    node: cur,
                    phase: Phase::Sole,
                    pred: None,
                    pred_steps: 0,
                });
            };

            // Mirrored predecessor search: leftmost node below the right
            // child, with the same dual stop condition.
            let mut pred = right;
            let mut steps = 1;
            while let Some(next) = (*pred.as_ptr()).left {
                if next == cur {
                    break;
                }
                pred = next;
                steps += 1;
            }

            if (*pred.as_ptr()).left.is_none() {
                (*pred.as_ptr()).left = Some(cur);
                self.live_threads += 1;
                trace!(node = ?cur_ptr, pred = ?pred.as_ptr(), "mirrored thread installed");
                self.cur = Some(right);
                Some(Visit {
                    node: cur,
                    phase: Phase::First,
                    pred: Some(pred),
                    pred_steps: steps,
                })
            } else {
                (*pred.as_ptr()).left = None;
                self.live_threads -= 1;
                trace!(node = ?cur_ptr, pred = ?pred.as_ptr(), "mirrored thread removed");
                self.cur = (*cur_ptr).left;
                Some(Visit {
                    node: cur,
                    phase: Phase::Second,
                    pred: Some(pred),
                    pred_steps: steps,
                })
            }
        }
    }
}
