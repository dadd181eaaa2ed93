//! Lazy traversal iterators over a [`Tree`].

use super::tree::{NodeId, Tree};
use crate::token::Token;
use std::iter::{FusedIterator, Rev};
use std::slice;

/// Pre-order walk from the root.
///
/// Siblings are visited in attachment order. Dropping the iterator ends the
/// walk.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Walk<'a> {
    pub(super) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            stack: tree.root_node().into_iter().collect(),
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        self.stack
            .extend(self.tree.children_of(node).iter().rev().copied());
        Some(node)
    }
}

impl FusedIterator for Walk<'_> {}

/// Head/dependent pairs of a tree.
///
/// Heads in ascending identity order; each head's dependents in descending
/// identity order.
#[derive(Debug, Clone)]
pub struct Edges<'a> {
    tree: &'a Tree,
    heads: slice::Iter<'a, NodeId>,
    current: Option<(NodeId, Rev<slice::Iter<'a, NodeId>>)>,
}

impl<'a> Edges<'a> {
    pub(super) fn new(tree: &'a Tree) -> Self {
        Self {
            tree,
            heads: tree.by_identity.iter(),
            current: None,
        }
    }
}

impl<'a> Iterator for Edges<'a> {
    type Item = (&'a Token, &'a Token);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((head, dependents)) = &mut self.current
                && let Some(&dependent) = dependents.next()
            {
                return Some((self.tree.at(*head), self.tree.at(dependent)));
            }
            let &head = self.heads.next()?;
            self.current = Some((head, self.tree.dependents_of(head).iter().rev()));
        }
    }
}

impl FusedIterator for Edges<'_> {}
