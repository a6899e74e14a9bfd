//! Structural fingerprints for restoration checking.
//!
//! A walk must leave the tree pointer-identical to its input. These digests
//! make that checkable from the outside: both fold node addresses and link
//! structure, and the shape variant ignores values so the two value-mutating
//! operations can be checked against it too.

use blake3::Hasher;

use super::Tree;

/// 256-bit digest of a tree's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fingerprint([u8; 32]);

/// Marker mixed in for every absent link, so shape is unambiguous.
const NIL_MARKER: [u8; 1] = [0xff];

impl Tree {
    /// Digest of link structure, node addresses, and values.
    pub fn fingerprint(&self) -> Fingerprint {
        self.digest(true)
    }

    /// Digest of link structure and node addresses only.
    ///
    /// Unchanged by [`Tree::recover_bst`] and
    /// [`Tree::convert_to_greater_tree`], which rewrite values but never
    /// links.
    pub fn shape_fingerprint(&self) -> Fingerprint {
        self.digest(false)
    }

    fn digest(&self, include_values: bool) -> Fingerprint {
        let mut hasher = Hasher::new();
        let mut stack = vec![self.root()];
        while let Some(link) = stack.pop() {
            match link {
                Some(node) => {
                    let address = node.as_ptr() as usize as u64;
                    hasher.update(&address.to_le_bytes());
                    // SAFETY: `node` came off this tree's own links and no
                    // walk is live while `&self` is held.
                    unsafe {
                        if include_values {
                            hasher.update(&(*node.as_ptr()).value.to_le_bytes());
                        }
                        stack.push((*node.as_ptr()).right);
                        stack.push((*node.as_ptr()).left);
                    }
                }
                None => {
                    hasher.update(&NIL_MARKER);
                }
            }
        }
        Fingerprint(*hasher.finalize().as_bytes())
    }
}
