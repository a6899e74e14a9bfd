//! Aggregate adapters over monotonic emission order.
//!
//! Each adapter consumes the inorder (or, for the greater-sum conversion,
//! reverse-inorder) emission of the stepping engine with adapter-local
//! accumulator state; there is no shared or module-level state anywhere.

mod diff;
mod greater;
mod mode;
mod recover;
mod validate;
