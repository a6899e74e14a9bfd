//! Structural restoration: every operation must hand the tree back
//! pointer-identical, with the two value-mutating adapters checked against
//! the shape digest that ignores values.

use proptest::prelude::*;

mod test_helpers;
use test_helpers::*;

proptest! {
    #[test]
    fn read_only_operations_restore_the_tree(reference in arb_tree()) {
        let mut tree = to_tree(&reference);
        let before = tree.fingerprint();

        tree.preorder();
        prop_assert_eq!(tree.fingerprint(), before);
        tree.inorder();
        prop_assert_eq!(tree.fingerprint(), before);
        tree.postorder();
        prop_assert_eq!(tree.fingerprint(), before);
        tree.is_valid_bst();
        prop_assert_eq!(tree.fingerprint(), before);
        tree.find_modes();
        prop_assert_eq!(tree.fingerprint(), before);
        tree.min_depth();
        prop_assert_eq!(tree.fingerprint(), before);
        let _ = tree.min_absolute_difference();
        prop_assert_eq!(tree.fingerprint(), before);
    }

    #[test]
    fn mutating_operations_preserve_the_shape(values in arb_bst_values()) {
        let mut tree = to_tree(&balanced_bst(&values));
        let shape = tree.shape_fingerprint();

        tree.convert_to_greater_tree();
        prop_assert_eq!(tree.shape_fingerprint(), shape);

        tree.recover_bst();
        prop_assert_eq!(tree.shape_fingerprint(), shape);
    }

    #[test]
    fn a_partially_consumed_iterator_restores_on_drop(
        reference in arb_tree(),
        taken in 0usize..8,
    ) {
        let mut tree = to_tree(&reference);
        let before = tree.fingerprint();
        {
            let mut iter = tree.iter_inorder();
            for _ in 0..taken {
                if iter.next().is_none() {
                    break;
                }
            }
        }
        prop_assert_eq!(tree.fingerprint(), before);
    }

    #[test]
    fn lca_restores_the_tree(values in arb_bst_values()) {
        let mut tree = to_tree(&balanced_bst(&values));
        let before = tree.fingerprint();
        let a = tree.find_first(values[0]).unwrap();
        let b = tree.find_first(values[values.len() - 1]).unwrap();
        tree.lowest_common_ancestor(a, b).unwrap();
        prop_assert_eq!(tree.fingerprint(), before);
    }
}
