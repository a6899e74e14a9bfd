//! Construction from (and rendering to) the compact breadth-first literal.
//!
//! The literal lists the root, then the two children of each present node in
//! breadth-first order; `None` marks an absent child and children of absent
//! nodes are not listed. Trailing `None`s may be omitted. A right chain of
//! depth d therefore costs O(d) entries, not O(2^d).

use std::collections::VecDeque;

use super::{Node, Tree, Value};

impl Tree {
    /// Build a tree from the compact breadth-first literal form.
    ///
    /// Entries beyond the last present parent are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use threadwalk::Tree;
    ///
    /// let mut tree = Tree::from_level_order(&[Some(1), None, Some(2), Some(3)]);
    /// assert_eq!(tree.inorder(), vec![1, 3, 2]);
    /// ```
    pub fn from_level_order(values: &[Option<Value>]) -> Self {
        let mut entries = values.iter().copied();
        let Some(Some(root_value)) = entries.next() else {
            return Self::new();
        };

        let root = Node::new_detached(root_value);
        let mut len = 1;
        let mut parents = VecDeque::new();
        parents.push_back(root);

        'fill: while let Some(parent) = parents.pop_front() {
            for is_left in [true, false] {
                match entries.next() {
                    Some(Some(value)) => {
                        let child = Node::new_detached(value);
                        len += 1;
                        parents.push_back(child);
                        // SAFETY: `parent` and `child` are distinct nodes
                        // owned by the tree under construction; nothing else
                        // references them yet.
                        unsafe {
                            if is_left {
                                (*parent.as_ptr()).left = Some(child);
                            } else {
                                (*parent.as_ptr()).right = Some(child);
                            }
                        }
                    }
                    Some(None) => {}
                    None => break 'fill,
                }
            }
        }

        Self::assemble(Some(root), len)
    }

    /// Render the tree back into the compact breadth-first literal form.
    ///
    /// Round-trips with [`Tree::from_level_order`] up to omitted trailing
    /// `None`s, which this method trims.
    pub fn to_level_order(&self) -> Vec<Option<Value>> {
        let Some(root) = self.root() else {
            return Vec::new();
        };

        // SAFETY: all pointers below come off this tree's own links and no
        // walk is live while `&self` is held.
        let mut out = vec![Some(unsafe { (*root.as_ptr()).value })];
        let mut parents = VecDeque::new();
        parents.push_back(root);
        while let Some(parent) = parents.pop_front() {
            for child in unsafe { [(*parent.as_ptr()).left, (*parent.as_ptr()).right] } {
                match child {
                    Some(node) => {
                        out.push(Some(unsafe { (*node.as_ptr()).value }));
                        parents.push_back(node);
                    }
                    None => out.push(None),
                }
            }
        }
        while out.last() == Some(&None) {
            out.pop();
        }
        out
    }
}
