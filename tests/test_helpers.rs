//! Test helpers: the recursive reference tree used as an oracle, literal
//! builders, and proptest generators.

#![allow(dead_code)]

use proptest::prelude::*;
use threadwalk::{Tree, Value};

/// Plain recursive binary tree. The threaded engine is tested against the
/// textbook recursive traversals of this type.
#[derive(Debug, Clone)]
pub enum RefTree {
    /// Absent subtree.
    Nil,
    /// Value with two subtrees.
    Node(Value, Box<RefTree>, Box<RefTree>),
}

impl RefTree {
    pub fn leaf(value: Value) -> Self {
        RefTree::Node(value, Box::new(RefTree::Nil), Box::new(RefTree::Nil))
    }

    pub fn size(&self) -> usize {
        match self {
            RefTree::Nil => 0,
            RefTree::Node(_, l, r) => 1 + l.size() + r.size(),
        }
    }

    /// Nodes that own a left child; each costs one thread in the engine.
    pub fn left_parents(&self) -> usize {
        match self {
            RefTree::Nil => 0,
            RefTree::Node(_, l, r) => {
                let own = usize::from(!matches!(**l, RefTree::Nil));
                own + l.left_parents() + r.left_parents()
            }
        }
    }

    pub fn preorder(&self, out: &mut Vec<Value>) {
        if let RefTree::Node(v, l, r) = self {
            out.push(*v);
            l.preorder(out);
            r.preorder(out);
        }
    }

    pub fn inorder(&self, out: &mut Vec<Value>) {
        if let RefTree::Node(v, l, r) = self {
            l.inorder(out);
            out.push(*v);
            r.inorder(out);
        }
    }

    pub fn postorder(&self, out: &mut Vec<Value>) {
        if let RefTree::Node(v, l, r) = self {
            l.postorder(out);
            r.postorder(out);
            out.push(*v);
        }
    }

    /// Compact breadth-first literal consumed by `Tree::from_level_order`.
    pub fn to_level_order(&self) -> Vec<Option<Value>> {
        let RefTree::Node(root, _, _) = self else {
            return Vec::new();
        };
        let mut out = vec![Some(*root)];
        let mut queue = std::collections::VecDeque::new();
        queue.push_back(self);
        while let Some(RefTree::Node(_, l, r)) = queue.pop_front() {
            for child in [l.as_ref(), r.as_ref()] {
                match child {
                    RefTree::Node(v, _, _) => {
                        out.push(Some(*v));
                        queue.push_back(child);
                    }
                    RefTree::Nil => out.push(None),
                }
            }
        }
        while out.last() == Some(&None) {
            out.pop();
        }
        out
    }
}

/// Materialize the reference tree as an owned `Tree`.
pub fn to_tree(reference: &RefTree) -> Tree {
    Tree::from_level_order(&reference.to_level_order())
}

/// Balanced search tree over the given sorted values.
pub fn balanced_bst(sorted: &[Value]) -> RefTree {
    if sorted.is_empty() {
        return RefTree::Nil;
    }
    let mid = sorted.len() / 2;
    RefTree::Node(
        sorted[mid],
        Box::new(balanced_bst(&sorted[..mid])),
        Box::new(balanced_bst(&sorted[mid + 1..])),
    )
}

/// Arbitrary trees of modest depth with possibly repeated values.
pub fn arb_tree() -> impl Strategy<Value = RefTree> {
    let leaf = prop_oneof![
        1 => Just(RefTree::Nil),
        3 => (-50i64..50).prop_map(RefTree::leaf),
    ];
    leaf.prop_recursive(6, 96, 3, |inner| {
        ((-50i64..50), inner.clone(), inner)
            .prop_map(|(v, l, r)| RefTree::Node(v, Box::new(l), Box::new(r)))
    })
}

/// Arbitrary non-empty search trees with distinct values, as sorted vectors
/// alongside the balanced literal.
pub fn arb_bst_values() -> impl Strategy<Value = Vec<Value>> {
    proptest::collection::btree_set(-1_000i64..1_000, 1..64)
        .prop_map(|set| set.into_iter().collect())
}

/// Same shape with values relabeled 0..n in preorder, so every value is
/// unique and can stand in for node identity.
pub fn relabel_distinct(reference: &RefTree) -> RefTree {
    fn go(t: &RefTree, next: &mut Value) -> RefTree {
        match t {
            RefTree::Nil => RefTree::Nil,
            RefTree::Node(_, l, r) => {
                let v = *next;
                *next += 1;
                let left = go(l, next);
                let right = go(r, next);
                RefTree::Node(v, Box::new(left), Box::new(right))
            }
        }
    }
    let mut next = 0;
    go(reference, &mut next)
}

/// Install a subscriber honoring `RUST_LOG`, for ad-hoc test debugging.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
