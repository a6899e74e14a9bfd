//! The linear-work guarantee, pinned by the engine's own counters.

use proptest::prelude::*;
use threadwalk::Tree;

mod test_helpers;
use test_helpers::*;

proptest! {
    #[test]
    fn walk_cost_is_linear_in_the_node_count(reference in arb_tree()) {
        let mut tree = to_tree(&reference);
        let n = tree.len();
        let cost = tree.inorder_cost();

        // One thread per node with a left child, always taken down again.
        prop_assert_eq!(cost.thread_installs, reference.left_parents());
        prop_assert_eq!(cost.thread_removals, cost.thread_installs);

        // Each threaded node is arrived at twice, the rest once.
        prop_assert_eq!(cost.visits, n + cost.thread_installs);

        // Predecessor searches cross each right link at most twice.
        prop_assert!(cost.pred_hops <= 2 * n);
    }
}

#[test]
fn chains_cost_nothing_in_threads() {
    let mut levels = Vec::new();
    for i in 0..5_000 {
        levels.push(Some(i));
        levels.push(None);
    }
    let mut tree = Tree::from_level_order(&levels);
    let cost = tree.inorder_cost();
    assert_eq!(cost.thread_installs, 0);
    assert_eq!(cost.pred_hops, 0);
    assert_eq!(cost.visits, 5_000);
}
