//! Suspendable inorder iteration.
//!
//! An explicit state machine over the stepping engine: the suspend point is
//! one stored node reference plus a live-thread count, not a captured call
//! stack. The iterator holds the tree's mutable borrow for its whole
//! lifetime, which is exactly the single-walker discipline a threaded walk
//! requires: while it exists, nothing else can touch the tree.

use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::tree::{Tree, Value};
use crate::walk::{Phase, ThreadedWalker};

/// Inorder value iterator that can pause between `next` calls.
///
/// Each `next` resumes the walk, runs it until exactly one inorder value is
/// ready, and suspends again: amortized O(1) per call, O(n) over the whole
/// sequence, O(1) space, the same bounds as one bulk traversal interleaved
/// with the caller.
///
/// Dropping the iterator mid-walk steps the engine forward until every
/// installed thread has been removed, so the borrow is never released over a
/// structurally altered tree.
///
/// # Examples
///
/// ```
/// use threadwalk::Tree;
///
/// let mut tree = Tree::from_level_order(&[Some(2), Some(1), Some(3)]);
/// let mut values = tree.iter_inorder();
/// assert!(values.has_next());
/// assert_eq!(values.next(), Some(1));
/// assert_eq!(values.collect::<Vec<_>>(), vec![2, 3]);
/// ```
#[derive(Debug)]
pub struct InorderIter<'t> {
    walker: ThreadedWalker,
    _tree: PhantomData<&'t mut Tree>,
}

impl Tree {
    /// Iterate inorder values with caller-driven resumption.
    pub fn iter_inorder(&mut self) -> InorderIter<'_> {
        InorderIter {
            walker: ThreadedWalker::new(self.root()),
            _tree: PhantomData,
        }
    }
}

impl InorderIter<'_> {
    /// Whether another value remains.
    ///
    /// True exactly when the next [`Iterator::next`] call will return a
    /// value: every pending walk position has at least one `Sole` or
    /// `Second` arrival left before it runs out.
    pub fn has_next(&self) -> bool {
        !self.walker.finished()
    }
}

impl Iterator for InorderIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        while let Some(visit) = self.walker.advance() {
            if matches!(visit.phase, Phase::Sole | Phase::Second) {
                // SAFETY: the node belongs to the mutably borrowed tree and
                // this iterator is the only live walker over it.
                return Some(unsafe { (*visit.node.as_ptr()).value });
            }
        }
        None
    }
}

impl FusedIterator for InorderIter<'_> {}

impl Drop for InorderIter<'_> {
    fn drop(&mut self) {
        self.walker.abandon();
    }
}
