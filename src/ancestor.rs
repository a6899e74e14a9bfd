//! Lowest common ancestor by node identity.
//!
//! Two phases. The first is a preorder pass that proves both targets are in
//! the tree, settles the one-is-ancestor-of-the-other cases, and fixes the
//! preorder-first target as the initial candidate. The second is the main
//! walk: at each `Second` arrival the candidate climbs to the arriving node
//! whenever it lies on the finished left subtree's right boundary, and is
//! confirmed as the answer the moment the other target shows up under its
//! right child. Nested searches are legal because the subtree below a
//! `Second` arrival's left child is thread-free at that instant.

use std::ptr::NonNull;

use tracing::debug;

use crate::tree::{Link, Node, NodeId, Tree};
use crate::walk::{chain_contains, Phase, ThreadedWalker};
use crate::TreeError;

impl Tree {
    /// Lowest common ancestor of the nodes `a` and `b`, by identity.
    ///
    /// Values play no role, so duplicate values are fine. Both handles must
    /// refer to nodes of this tree; otherwise [`TreeError::ForeignNode`] is
    /// returned and the tree is left exactly as it was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(3), Some(5), Some(1), Some(6), Some(2)]);
    /// let five = tree.find_first(5).unwrap();
    /// let one = tree.find_first(1).unwrap();
    /// let lca = tree.lowest_common_ancestor(five, one).unwrap();
    /// assert_eq!(tree.get(lca), Some(3));
    /// ```
    pub fn lowest_common_ancestor(&mut self, a: NodeId, b: NodeId) -> Result<NodeId, TreeError> {
        let (a, b) = (a.0, b.0);

        // Phase 1: one preorder pass proves membership of both targets and
        // fixes which of them the walk meets first.
        let mut seen_a = false;
        let mut seen_b = false;
        let mut first_seen: Option<NonNull<Node>> = None;
        {
            let mut walker = ThreadedWalker::new(self.root());
            while let Some(visit) = walker.advance() {
                if matches!(visit.phase, Phase::Sole | Phase::First)
                    && (visit.node == a || visit.node == b)
                {
                    if visit.node == a {
                        seen_a = true;
                    }
                    if visit.node == b {
                        seen_b = true;
                    }
                    if first_seen.is_none() {
                        first_seen = Some(visit.node);
                    }
                }
            }
        }
        if !(seen_a && seen_b) {
            return Err(TreeError::ForeignNode);
        }
        if a == b {
            return Ok(NodeId(a));
        }

        // One target inside the other's subtree means the outer one is the
        // answer itself.
        if subtree_contains(Some(a), b) {
            return Ok(NodeId(a));
        }
        if subtree_contains(Some(b), a) {
            return Ok(NodeId(b));
        }

        let mut candidate = match first_seen {
            Some(node) => node,
            None => return Err(TreeError::ForeignNode),
        };
        let other = if candidate == a { b } else { a };

        // Phase 2: climb the candidate along finished left boundaries until
        // the other target turns up under its right child.
        let mut confirmed: Option<NonNull<Node>> = None;
        let mut walker = ThreadedWalker::new(self.root());
        while let Some(visit) = walker.advance() {
            if visit.phase != Phase::Second || confirmed.is_some() {
                continue;
            }
            // SAFETY: at a `Second` arrival the subtree below the left child
            // has been fully walked and is thread-free, so the chain scan and
            // the nested search observe real structure only.
            unsafe {
                let left = (*visit.node.as_ptr()).left;
                if chain_contains(left, candidate) {
                    if subtree_contains((*candidate.as_ptr()).right, other) {
                        debug!(candidate = ?candidate.as_ptr(), "lowest common ancestor confirmed");
                        confirmed = Some(candidate);
                    } else {
                        candidate = visit.node;
                    }
                }
            }
        }

        Ok(NodeId(confirmed.unwrap_or(candidate)))
    }
}

/// Preorder search of the subtree rooted at `root` for `target`, by
/// identity. Runs its own threaded walk over that subtree alone; once the
/// target is found the walk is abandoned at the earliest legal point.
fn subtree_contains(root: Link, target: NonNull<Node>) -> bool {
    let mut walker = ThreadedWalker::new(root);
    while let Some(visit) = walker.advance() {
        if matches!(visit.phase, Phase::Sole | Phase::First) && visit.node == target {
            walker.abandon();
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The classic shape: 3 over (5 over (6, 2 over (7, 4)), 1 over (0, 8)).
    fn sample() -> Tree {
        Tree::from_level_order(&[
            Some(3),
            Some(5),
            Some(1),
            Some(6),
            Some(2),
            Some(0),
            Some(8),
            None,
            None,
            Some(7),
            Some(4),
        ])
    }

    fn id_of(tree: &Tree, value: i64) -> NodeId {
        tree.find_first(value).unwrap()
    }

    #[test]
    fn targets_in_separate_subtrees_meet_at_the_root() {
        let mut tree = sample();
        let (five, one) = (id_of(&tree, 5), id_of(&tree, 1));
        let lca = tree.lowest_common_ancestor(five, one).unwrap();
        assert_eq!(tree.get(lca), Some(3));
    }

    #[test]
    fn an_ancestor_target_is_its_own_answer() {
        let mut tree = sample();
        let (five, four) = (id_of(&tree, 5), id_of(&tree, 4));
        let lca = tree.lowest_common_ancestor(five, four).unwrap();
        assert_eq!(lca, five);
        // Symmetric order gives the same node.
        let lca = tree.lowest_common_ancestor(four, five).unwrap();
        assert_eq!(lca, five);
    }

    #[test]
    fn cousins_meet_below_the_root() {
        let mut tree = sample();
        let (seven, four) = (id_of(&tree, 7), id_of(&tree, 4));
        let lca = tree.lowest_common_ancestor(seven, four).unwrap();
        assert_eq!(tree.get(lca), Some(2));

        let (six, four) = (id_of(&tree, 6), id_of(&tree, 4));
        let lca = tree.lowest_common_ancestor(six, four).unwrap();
        assert_eq!(tree.get(lca), Some(5));
    }

    #[test]
    fn a_node_is_its_own_lowest_ancestor() {
        let mut tree = sample();
        let six = id_of(&tree, 6);
        assert_eq!(tree.lowest_common_ancestor(six, six).unwrap(), six);
    }

    #[test]
    fn duplicate_values_resolve_by_identity() {
        // Both leaves hold 1; only identity tells them apart.
        let tree = Tree::from_level_order(&[Some(1), Some(1), Some(1)]);
        let root = tree.root_id().unwrap();
        let left = tree.left_of(root).unwrap();
        let right = tree.right_of(root).unwrap();
        let mut tree = tree;
        let lca = tree.lowest_common_ancestor(left, right).unwrap();
        assert_eq!(lca, root);
    }

    #[test]
    fn foreign_target_is_rejected_up_front() {
        let mut tree = sample();
        let other = Tree::from_level_order(&[Some(3)]);
        let foreign = other.root_id().unwrap();
        let five = id_of(&tree, 5);
        let before = tree.fingerprint();
        assert_eq!(
            tree.lowest_common_ancestor(five, foreign),
            Err(TreeError::ForeignNode)
        );
        assert_eq!(tree.fingerprint(), before);
    }

    #[test]
    fn query_leaves_the_tree_intact() {
        let mut tree = sample();
        let before = tree.fingerprint();
        let (seven, four) = (id_of(&tree, 7), id_of(&tree, 4));
        tree.lowest_common_ancestor(seven, four).unwrap();
        assert_eq!(tree.fingerprint(), before);
    }

    #[test]
    fn right_spine_targets_fall_back_to_the_final_candidate() {
        // 1 -> 3 -> (6, 7): the answer 3 sits on the root's right spine, so
        // no later arrival can confirm it and the walk's final candidate is
        // the result.
        let mut tree = Tree::from_level_order(&[Some(1), None, Some(3), Some(6), Some(7)]);
        let (six, seven) = (id_of(&tree, 6), id_of(&tree, 7));
        let lca = tree.lowest_common_ancestor(six, seven).unwrap();
        assert_eq!(tree.get(lca), Some(3));
    }
}
