//! Threaded stepping engines and boundary helpers.
//!
//! Everything here is crate-internal; the public surface is the adapter
//! methods on [`Tree`](crate::tree::Tree). The engines operate on raw node
//! pointers and rely on the `&mut Tree` receiver of every driving operation
//! for exclusivity.

mod boundary;
mod mirrored;
mod threaded;

pub(crate) use boundary::{chain_contains, emit_reversed};
pub(crate) use mirrored::MirroredWalker;
pub(crate) use threaded::{Phase, ThreadedWalker};
