//! Dependency trees.
//!
//! A [`Tree`] is built from a flat token sequence whose tokens point at their
//! head by index. The result is a single-rooted, acyclic tree over the
//! tokens' positions; token data itself stays in a shared `Arc<[Token]>`
//! and the tree only stores topology.
//!
//! Ordering contracts:
//!
//! - [`Tree::walk`] is a pre-order walk; siblings come in the order they
//!   were attached during construction (scan order of the input).
//! - [`Tree::search`] scans nodes in insertion order.
//! - [`Tree::dependents`] yields children in ascending identity order.
//! - [`Tree::edges`] iterates heads in ascending identity order and each
//!   head's dependents in descending identity order.

mod builder;
mod traverse;
mod tree;

pub use builder::TreeBuilder;
pub use traverse::{Edges, Walk};
pub use tree::{NodeId, Tree};
