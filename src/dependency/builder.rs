//! Tree construction from head-indexed token sequences.

use super::tree::{NodeId, Tree};
use crate::error::TreeError;
use crate::token::Token;
use std::collections::HashMap;
use std::ops::Range;
use std::sync::Arc;
use tracing::trace;

/// Builds a [`Tree`] over a span of a shared token array.
///
/// # Examples
///
/// ```
/// use entitydeps::dependency::TreeBuilder;
/// use entitydeps::token::{DependencyEdge, DependencyEdgeLabel, Token};
/// use std::sync::Arc;
///
/// let tokens: Arc<[Token]> = Arc::from(vec![
///     Token::new("Stop", 0).with_edge(DependencyEdge::new(0, DependencyEdgeLabel::Root)),
///     Token::new(".", 4).with_edge(DependencyEdge::new(0, DependencyEdgeLabel::P)),
///     Token::new("Go", 6).with_edge(DependencyEdge::new(2, DependencyEdgeLabel::Root)),
///     Token::new(".", 8).with_edge(DependencyEdge::new(2, DependencyEdgeLabel::P)),
/// ]);
///
/// // Second sentence: head indices count from the start of the document.
/// let tree = TreeBuilder::new(tokens).span(2..4).offset(2).build().unwrap();
/// assert_eq!(tree.root().map(|t| t.content()), Some("Go"));
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TreeBuilder {
    tokens: Arc<[Token]>,
    span: Range<usize>,
    offset: i32,
}

impl TreeBuilder {
    /// Creates a builder over every token of `tokens`, with offset 0.
    #[must_use]
    pub fn new(tokens: impl Into<Arc<[Token]>>) -> Self {
        let tokens = tokens.into();
        let span = 0..tokens.len();
        Self {
            tokens,
            span,
            offset: 0,
        }
    }

    /// Restricts the tree to a sub-range of the token array.
    ///
    /// The range is clamped to the array bounds.
    #[must_use]
    pub fn span(mut self, span: Range<usize>) -> Self {
        let end = span.end.min(self.tokens.len());
        let start = span.start.min(end);
        self.span = start..end;
        self
    }

    /// Sets the value added to local positions before matching head indices.
    #[must_use]
    pub const fn offset(mut self, offset: i32) -> Self {
        self.offset = offset;
        self
    }

    /// Builds the tree.
    ///
    /// The root is the first token labeled `ROOT`; later `ROOT` tokens are
    /// ignored. Input without a root yields an empty tree. Starting from the
    /// root, every token whose head index equals a node's position plus the
    /// offset is attached to that node, depth first, in scan order. Tokens
    /// not reachable from the root stay detached, as long as their head
    /// chains end.
    ///
    /// # Errors
    ///
    /// - [`TreeError::TooManyTokens`] if offset plus length exceeds `i32::MAX`
    /// - [`TreeError::CyclicDependency`] if a token is reached twice, or a
    ///   head chain among detached tokens loops back on itself
    /// - [`TreeError::DuplicateIdentity`] if two attached tokens share a
    ///   begin offset
    pub fn build(self) -> Result<Tree, TreeError> {
        let Self {
            tokens,
            span,
            offset,
        } = self;
        let slice = &tokens[span.clone()];

        let count = i64::try_from(slice.len()).unwrap_or(i64::MAX);
        if i64::from(offset).saturating_add(count) > i64::from(i32::MAX) {
            return Err(TreeError::TooManyTokens {
                offset,
                count: slice.len(),
            });
        }

        let mut roots = slice.iter().enumerate().filter(|(_, t)| t.is_root());
        let Some((root, _)) = roots.next() else {
            trace!(start = span.start, "no root token, empty tree");
            check_detached(slice, offset, &vec![false; slice.len()])?;
            return Ok(Tree::empty(tokens.clone(), span));
        };
        for (ignored, token) in roots {
            trace!(position = ignored, offset = token.id(), "ignoring extra root");
        }

        let mut by_head: HashMap<i64, Vec<usize>> = HashMap::new();
        for (position, token) in slice.iter().enumerate() {
            if let Some(head) = token.head_index() {
                by_head.entry(i64::from(head)).or_default().push(position);
            }
        }

        let mut tree = Tree::empty(tokens.clone(), span);
        let mut attached = vec![false; slice.len()];
        insert(&mut tree, &mut attached, slice, root)?;

        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(top) = stack.last_mut() {
            let (head, cursor) = *top;
            // `slice.len()` fits in i32 here, so this key cannot overflow.
            let key = i64::try_from(head).unwrap_or(i64::MAX) + i64::from(offset);
            let next = by_head
                .get(&key)
                .and_then(|children| children.get(cursor))
                .copied();

            let Some(child) = next else {
                stack.pop();
                continue;
            };
            top.1 += 1;
            if child == head {
                continue;
            }

            insert(&mut tree, &mut attached, slice, child)?;
            tree.heads[child] = Some(NodeId(head));
            tree.children[head].push(NodeId(child));
            stack.push((child, 0));
        }
        check_detached(slice, offset, &attached)?;

        tree.by_identity.clone_from(&tree.nodes);
        tree.by_identity.sort_by_key(|node| slice[node.0].id());
        tree.sorted_children = tree
            .children
            .iter()
            .map(|children| {
                let mut sorted = children.clone();
                sorted.sort_by_key(|node| slice[node.0].id());
                sorted
            })
            .collect();

        trace!(
            root = slice[root].content(),
            nodes = tree.nodes.len(),
            detached = slice.len() - tree.nodes.len(),
            "built dependency tree"
        );
        Ok(tree)
    }
}

fn insert(
    tree: &mut Tree,
    attached: &mut [bool],
    slice: &[Token],
    position: usize,
) -> Result<(), TreeError> {
    let token = &slice[position];
    if attached[position] {
        return Err(TreeError::CyclicDependency { offset: token.id() });
    }
    if tree.identities.contains_key(&token.id()) {
        return Err(TreeError::DuplicateIdentity { offset: token.id() });
    }

    attached[position] = true;
    let node = NodeId(position);
    tree.identities.insert(token.id(), node);
    tree.nodes.push(node);
    if tree.root.is_none() {
        tree.root = Some(node);
    }
    Ok(())
}

/// Fails if the head chain of a detached token loops.
///
/// A token heading itself ends its chain, as extra roots do.
fn check_detached(slice: &[Token], offset: i32, attached: &[bool]) -> Result<(), TreeError> {
    #[derive(Clone, Copy, PartialEq, Eq)]
    enum Mark {
        Unseen,
        OnPath,
        Done,
    }

    let mut marks: Vec<Mark> = attached
        .iter()
        .map(|&a| if a { Mark::Done } else { Mark::Unseen })
        .collect();
    let mut path = Vec::new();
    for start in 0..slice.len() {
        let mut position = start;
        while marks[position] == Mark::Unseen {
            marks[position] = Mark::OnPath;
            path.push(position);
            let Some(head) = local_head(&slice[position], offset, slice.len()) else {
                break;
            };
            if head == position {
                break;
            }
            if marks[head] == Mark::OnPath {
                return Err(TreeError::CyclicDependency {
                    offset: slice[head].id(),
                });
            }
            position = head;
        }
        for visited in path.drain(..) {
            marks[visited] = Mark::Done;
        }
    }
    Ok(())
}

/// Position of `token`'s head within the span, if it lies inside.
fn local_head(token: &Token, offset: i32, len: usize) -> Option<usize> {
    let head = i64::from(token.head_index()?) - i64::from(offset);
    usize::try_from(head).ok().filter(|&head| head < len)
}
