//! Dependency tree representation and lookups.

use super::traverse::{Edges, Walk};
use crate::token::Token;
use std::collections::HashMap;
use std::fmt;
use std::ops::Range;
use std::sync::Arc;

/// Index of a node, local to the tree's token span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Returns the node's position within the tree's token span.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A head-to-dependent dependency tree.
///
/// Built by [`super::TreeBuilder`] or [`Tree::parse`]. Immutable once built;
/// cloning is cheap apart from the topology vectors since tokens are shared.
///
/// # Examples
///
/// ```
/// use entitydeps::dependency::Tree;
/// use entitydeps::token::{DependencyEdge, DependencyEdgeLabel, Token};
///
/// let tokens = vec![
///     Token::new("Book", 0).with_edge(DependencyEdge::new(0, DependencyEdgeLabel::Root)),
///     Token::new("flights", 5).with_edge(DependencyEdge::new(0, DependencyEdgeLabel::Dobj)),
/// ];
/// let tree = Tree::parse(0, &tokens).unwrap();
///
/// assert_eq!(tree.root().map(|t| t.content()), Some("Book"));
/// assert_eq!(tree.head(&tokens[1]).map(|t| t.content()), Some("Book"));
/// assert!(tree.head(&tokens[0]).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Tree {
    pub(super) tokens: Arc<[Token]>,
    pub(super) span: Range<usize>,
    pub(super) root: Option<NodeId>,
    /// Nodes in insertion order.
    pub(super) nodes: Vec<NodeId>,
    /// Nodes in ascending identity order.
    pub(super) by_identity: Vec<NodeId>,
    pub(super) heads: Vec<Option<NodeId>>,
    /// Children in attachment order.
    pub(super) children: Vec<Vec<NodeId>>,
    /// Children in ascending identity order.
    pub(super) sorted_children: Vec<Vec<NodeId>>,
    pub(super) identities: HashMap<i32, NodeId>,
}

impl Tree {
    /// Creates a rootless tree over the given span.
    pub(super) fn empty(tokens: Arc<[Token]>, span: Range<usize>) -> Self {
        let len = span.len();
        Self {
            tokens,
            span,
            root: None,
            nodes: Vec::new(),
            by_identity: Vec::new(),
            heads: vec![None; len],
            children: vec![Vec::new(); len],
            sorted_children: Vec::new(),
            identities: HashMap::new(),
        }
    }

    /// Parses tokens into a tree.
    ///
    /// `offset` is added to every local position before it is compared with
    /// a head token index, for sequences cut out of a longer document.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::TreeError`] on cyclic head references,
    /// duplicate identities, or when `offset + tokens.len()` leaves the
    /// 32-bit identity space.
    pub fn parse(offset: i32, tokens: &[Token]) -> Result<Self, crate::error::TreeError> {
        super::TreeBuilder::new(Arc::<[Token]>::from(tokens))
            .offset(offset)
            .build()
    }

    /// Returns the root token, if the input had one.
    #[must_use]
    pub fn root(&self) -> Option<&Token> {
        self.root.map(|node| self.at(node))
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root_node(&self) -> Option<NodeId> {
        self.root
    }

    /// Number of tokens in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no root and thus no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The tokens this tree was built from, including detached ones.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens[self.span.clone()]
    }

    /// Range of the tree's tokens within the shared token array.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Looks up the node of a token by identity.
    ///
    /// Only the begin offset is compared; tokens of other sequences with a
    /// colliding offset resolve to this tree's node.
    #[must_use]
    pub fn node(&self, token: &Token) -> Option<NodeId> {
        self.identities.get(&token.id()).copied()
    }

    /// Returns the token of a node attached to this tree.
    #[must_use]
    pub fn token(&self, node: NodeId) -> Option<&Token> {
        self.contains(node).then(|| self.at(node))
    }

    /// Position of a node within the shared token array.
    #[must_use]
    pub const fn position(&self, node: NodeId) -> usize {
        self.span.start + node.0
    }

    /// Returns `true` if the node is attached to this tree.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        self.root == Some(node) || self.heads.get(node.0).is_some_and(Option::is_some)
    }

    /// Walks the tree in pre-order, starting at the root.
    ///
    /// Stop consuming the iterator to cancel the walk.
    pub fn walk(&self) -> impl Iterator<Item = &Token> + '_ {
        self.walk_nodes().map(|node| self.at(node))
    }

    /// Walks the tree's nodes in pre-order.
    #[must_use]
    pub fn walk_nodes(&self) -> Walk<'_> {
        Walk::new(self)
    }

    /// Returns the first token, in insertion order, matching the predicate.
    pub fn search<P>(&self, mut predicate: P) -> Option<&Token>
    where
        P: FnMut(&Token) -> bool,
    {
        self.nodes
            .iter()
            .map(|&node| self.at(node))
            .find(|token| predicate(token))
    }

    /// Returns the token governing `dependent`.
    ///
    /// `None` if `dependent` is the root or not part of the tree.
    #[must_use]
    pub fn head(&self, dependent: &Token) -> Option<&Token> {
        let node = self.node(dependent)?;
        self.head_of(node).map(|head| self.at(head))
    }

    /// Returns the head node of `node`.
    #[must_use]
    pub fn head_of(&self, node: NodeId) -> Option<NodeId> {
        self.heads.get(node.0).copied().flatten()
    }

    /// Direct dependents of `head` in ascending identity order.
    ///
    /// Empty if `head` has no dependents or is not part of the tree.
    pub fn dependents<'a>(&'a self, head: &Token) -> impl Iterator<Item = &'a Token> + use<'a> {
        self.node(head)
            .map(|node| self.dependents_of(node))
            .unwrap_or_default()
            .iter()
            .map(|&node| self.at(node))
    }

    /// Direct dependent nodes of `node` in ascending identity order.
    #[must_use]
    pub fn dependents_of(&self, node: NodeId) -> &[NodeId] {
        self.sorted_children
            .get(node.0)
            .map_or(&[], Vec::as_slice)
    }

    /// Returns `true` if `head` has at least one dependent.
    #[must_use]
    pub fn has_dependents(&self, head: &Token) -> bool {
        self.node(head)
            .is_some_and(|node| !self.dependents_of(node).is_empty())
    }

    /// Every head/dependent pair of the tree.
    ///
    /// Heads come in ascending identity order, each head's dependents in
    /// descending identity order.
    #[must_use]
    pub fn edges(&self) -> Edges<'_> {
        Edges::new(self)
    }

    /// Children of `node` in attachment order.
    pub(super) fn children_of(&self, node: NodeId) -> &[NodeId] {
        self.children.get(node.0).map_or(&[], Vec::as_slice)
    }

    /// Token of a node known to belong to this tree.
    pub(crate) fn at(&self, node: NodeId) -> &Token {
        &self.tokens[self.span.start + node.0]
    }
}

/// Renders the tree as a Graphviz DOT digraph.
///
/// Nodes are keyed by identity and labeled by text content; edges point
/// from head to dependent.
impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph {{")?;
        if !self.is_empty() {
            writeln!(f, "\t// Node definitions.")?;
            for &node in &self.nodes {
                let token = self.at(node);
                writeln!(
                    f,
                    "\t\"{}\" [label=\"{}\"];",
                    token.id(),
                    escape_label(token.content())
                )?;
            }
            writeln!(f)?;
            writeln!(f, "\t// Edge definitions.")?;
            for (head, dependent) in self.edges() {
                writeln!(f, "\t\"{}\" -> \"{}\";", head.id(), dependent.id())?;
            }
        }
        writeln!(f, "}}")
    }
}

fn escape_label(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
