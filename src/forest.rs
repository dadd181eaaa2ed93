//! Entity resolution over the dependency trees of many frames.
//!
//! The forest holds one tree per sentence that contains at least one entity
//! token, plus the pooled entity tokens of every frame. Entity membership is
//! decided by position ([`TokenId`]), never by text content, so equal words in
//! other frames or sentences are not mistaken for entities.

use crate::dependency::{NodeId, Tree, TreeBuilder, Walk};
use crate::error::TreeError;
use crate::frame::Frame;
use crate::token::{DependencyEdgeLabel, Token};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashSet;
use std::iter::FusedIterator;
use std::ops::Range;
use std::slice;
use std::sync::Arc;
use tracing::debug;

/// Number of qualifying sentences from which trees are built in parallel.
pub const MIN_PARALLEL_TREES: usize = 64;

/// Position of a token: frame index and token index within the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TokenId {
    /// Index of the frame.
    pub frame: usize,
    /// Index of the token within its frame.
    pub position: usize,
}

impl TokenId {
    /// Creates a token id.
    #[must_use]
    pub const fn new(frame: usize, position: usize) -> Self {
        Self { frame, position }
    }
}

/// A tree together with the frame it was built from.
#[derive(Debug, Clone)]
struct Planted {
    frame: usize,
    tree: Tree,
}

impl Planted {
    const fn id(&self, node: NodeId) -> TokenId {
        TokenId::new(self.frame, self.tree.position(node))
    }
}

/// A head/dependent pair with the dependent's relation label.
#[derive(Debug, Clone, Copy)]
pub struct Dependency<'a> {
    /// Governing token.
    pub head: &'a Token,
    /// Governed token.
    pub dependent: &'a Token,
    /// Relation of the dependent to its head.
    pub label: DependencyEdgeLabel,
    /// Tree the pair belongs to.
    pub tree: &'a Tree,
    /// Position of `tree` in forest order.
    pub index: usize,
}

/// A token reached by [`Forest::walk`].
#[derive(Debug, Clone, Copy)]
pub struct Visit<'a> {
    /// The token.
    pub token: &'a Token,
    /// Tree the token belongs to.
    pub tree: &'a Tree,
    /// Position of `tree` in forest order.
    pub index: usize,
}

/// Dependency trees of sentences containing entity tokens.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    trees: Vec<Planted>,
    entities: Vec<TokenId>,
    members: HashSet<TokenId>,
    tokens: Vec<Arc<[Token]>>,
}

impl Forest {
    /// Builds the forest of `frames`.
    ///
    /// Entity tokens are pooled in frame order. Every sentence group holding
    /// at least one entity token becomes a tree whose head-index offset is
    /// the group's position within its frame. Groups without a root token
    /// build an empty tree, which is left out, so every tree has a root.
    ///
    /// # Errors
    ///
    /// Returns the first [`TreeError`] of any qualifying sentence.
    pub fn build(frames: &[Frame]) -> Result<Self, TreeError> {
        let entities: Vec<TokenId> = frames
            .iter()
            .enumerate()
            .flat_map(|(index, frame)| {
                frame
                    .entities()
                    .flatten()
                    .map(move |position| TokenId::new(index, position))
            })
            .collect();
        let members: HashSet<TokenId> = entities.iter().copied().collect();

        let mut groups: Vec<(usize, Arc<[Token]>, Range<usize>)> = Vec::new();
        let mut skipped = 0usize;
        for (index, frame) in frames.iter().enumerate() {
            for (position, tokens) in frame.sentences() {
                let span = position..position + tokens.len();
                if span
                    .clone()
                    .any(|p| members.contains(&TokenId::new(index, p)))
                {
                    groups.push((index, frame.shared_tokens(), span));
                } else {
                    skipped += 1;
                }
            }
        }

        let mut trees = if groups.len() >= MIN_PARALLEL_TREES {
            groups.par_iter().map(plant).collect::<Result<Vec<_>, _>>()?
        } else {
            groups.iter().map(plant).collect::<Result<Vec<_>, _>>()?
        };
        let planted = trees.len();
        trees.retain(|planted| !planted.tree.is_empty());
        let rootless = planted - trees.len();

        debug!(
            frames = frames.len(),
            trees = trees.len(),
            skipped,
            rootless,
            entities = entities.len(),
            "built forest"
        );

        Ok(Self {
            trees,
            entities,
            members,
            tokens: frames.iter().map(Frame::shared_tokens).collect(),
        })
    }

    /// Trees in forest order.
    pub fn trees(&self) -> impl Iterator<Item = &Tree> + '_ {
        self.trees.iter().map(|planted| &planted.tree)
    }

    /// Root of every tree, in forest order.
    pub fn roots(&self) -> impl Iterator<Item = &Token> + '_ {
        self.trees().filter_map(Tree::root)
    }

    /// Pooled entity tokens, in frame order.
    pub fn entities(&self) -> impl Iterator<Item = &Token> + '_ {
        self.entities.iter().filter_map(|&id| self.token(id))
    }

    /// Returns the token at `id`.
    #[must_use]
    pub fn token(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id.frame)?.get(id.position)
    }

    /// Returns `true` if `id` is part of an entity span.
    #[must_use]
    pub fn is_entity(&self, id: TokenId) -> bool {
        self.members.contains(&id)
    }

    /// Distinct external heads of the entity tokens.
    ///
    /// Entities are visited in pre-order, tree by tree. A head that is itself
    /// an entity token is climbed past, so a multi-token entity resolves to
    /// its single external governor. Entities without a head contribute
    /// nothing.
    #[must_use]
    pub fn heads(&self) -> Heads<'_> {
        Heads {
            entities: EntityNodes::new(self),
            seen: HashSet::new(),
        }
    }

    /// Direct non-entity dependents of the entity tokens.
    ///
    /// An entity's dependents are scanned in ascending identity order up to
    /// the first dependent that is itself an entity token; that token's own
    /// dependents are scanned when the walk reaches it.
    #[must_use]
    pub fn dependents(&self) -> Dependents<'_> {
        Dependents {
            entities: EntityNodes::new(self),
            current: None,
        }
    }

    /// Heads followed by dependents.
    pub fn relationships(&self) -> impl Iterator<Item = &Token> + '_ {
        self.heads().chain(self.dependents())
    }

    /// Every edge of every tree, in forest order.
    pub fn dependencies(&self) -> impl Iterator<Item = Dependency<'_>> + '_ {
        self.trees().enumerate().flat_map(|(index, tree)| {
            tree.edges().map(move |(head, dependent)| Dependency {
                head,
                dependent,
                label: dependent.label().unwrap_or_default(),
                tree,
                index,
            })
        })
    }

    /// Pre-order walk of every tree, paired with the owning tree.
    pub fn walk(&self) -> impl Iterator<Item = Visit<'_>> + '_ {
        self.trees().enumerate().flat_map(|(index, tree)| {
            tree.walk().map(move |token| Visit { token, tree, index })
        })
    }
}

/// Builds the tree of one sentence group.
fn plant((frame, tokens, span): &(usize, Arc<[Token]>, Range<usize>)) -> Result<Planted, TreeError> {
    let offset = i32::try_from(span.start).map_err(|_| TreeError::TooManyTokens {
        offset: i32::MAX,
        count: span.len(),
    })?;
    let tree = TreeBuilder::new(Arc::clone(tokens))
        .span(span.clone())
        .offset(offset)
        .build()?;
    Ok(Planted {
        frame: *frame,
        tree,
    })
}

/// Entity nodes of a forest in pre-order, tree by tree.
#[derive(Debug, Clone)]
struct EntityNodes<'a> {
    forest: &'a Forest,
    trees: slice::Iter<'a, Planted>,
    current: Option<(&'a Planted, Walk<'a>)>,
}

impl<'a> EntityNodes<'a> {
    fn new(forest: &'a Forest) -> Self {
        Self {
            forest,
            trees: forest.trees.iter(),
            current: None,
        }
    }
}

impl<'a> Iterator for EntityNodes<'a> {
    type Item = (&'a Planted, NodeId);

    fn next(&mut self) -> Option<Self::Item> {
        let forest = self.forest;
        loop {
            if let Some((planted, walk)) = &mut self.current {
                let planted: &'a Planted = *planted;
                if let Some(node) = walk.find(|&node| forest.is_entity(planted.id(node))) {
                    return Some((planted, node));
                }
            }
            let planted = self.trees.next()?;
            self.current = Some((planted, planted.tree.walk_nodes()));
        }
    }
}

/// Iterator returned by [`Forest::heads`].
#[derive(Debug, Clone)]
pub struct Heads<'a> {
    entities: EntityNodes<'a>,
    seen: HashSet<TokenId>,
}

impl<'a> Iterator for Heads<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        let forest = self.entities.forest;
        loop {
            let (planted, mut dependent) = self.entities.next()?;
            while let Some(head) = planted.tree.head_of(dependent) {
                let id = planted.id(head);
                if self.seen.contains(&id) {
                    break;
                }
                if !forest.is_entity(id) {
                    self.seen.insert(id);
                    return Some(planted.tree.at(head));
                }
                dependent = head;
            }
        }
    }
}

impl FusedIterator for Heads<'_> {}

/// Iterator returned by [`Forest::dependents`].
#[derive(Debug, Clone)]
pub struct Dependents<'a> {
    entities: EntityNodes<'a>,
    current: Option<(&'a Planted, slice::Iter<'a, NodeId>)>,
}

impl<'a> Iterator for Dependents<'a> {
    type Item = &'a Token;

    fn next(&mut self) -> Option<&'a Token> {
        let forest = self.entities.forest;
        loop {
            if let Some((planted, children)) = &mut self.current {
                let planted: &'a Planted = *planted;
                if let Some(&child) = children.next() {
                    if !forest.is_entity(planted.id(child)) {
                        return Some(planted.tree.at(child));
                    }
                }
            }
            // Exhausted, or reached an entity continuation.
            let (planted, entity) = self.entities.next()?;
            self.current = Some((planted, planted.tree.dependents_of(entity).iter()));
        }
    }
}

impl FusedIterator for Dependents<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{
        edge, example_document, example_sentences, example_tokens_1, example_tokens_2,
    };
    use crate::token::Sentence;
    use test_case::test_case;

    fn frame(tokens: Vec<Token>, entities: &[Range<usize>]) -> Frame {
        let mut frame = Frame::new(Vec::new(), tokens);
        for span in entities {
            frame.mark_entity(span.clone()).unwrap();
        }
        frame
    }

    fn contents<'a>(tokens: impl Iterator<Item = &'a Token>) -> Vec<&'a str> {
        tokens.map(Token::content).collect()
    }

    #[test]
    fn test_single_entity() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[4..5])]).unwrap();

        assert_eq!(contents(forest.heads()), ["prefer"]);
        assert_eq!(contents(forest.dependents()), ["the", "morning", "through"]);
        assert_eq!(
            contents(forest.walk().map(|visit| visit.token)),
            ["prefer", "I", "flight", "the", "morning", "through", "Denver", "."]
        );
        assert_eq!(contents(forest.roots()), ["prefer"]);
        assert_eq!(contents(forest.entities()), ["flight"]);
    }

    #[test]
    fn test_multi_token_entity_collapses_to_external_head() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[5..7])]).unwrap();

        assert_eq!(contents(forest.heads()), ["flight"]);
        assert_eq!(forest.dependents().count(), 0);
        assert_eq!(contents(forest.entities()), ["through", "Denver"]);
    }

    #[test]
    fn test_sibling_entity_tokens_share_head() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[2..4])]).unwrap();
        assert_eq!(contents(forest.heads()), ["flight"]);
        assert_eq!(forest.dependents().count(), 0);
    }

    #[test]
    fn test_root_entity_has_no_head() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[1..2])]).unwrap();
        assert_eq!(forest.heads().count(), 0);
        assert_eq!(contents(forest.dependents()), ["I", "flight", "."]);
    }

    #[test]
    fn test_dependents_stop_at_entity_continuation() {
        // "flight through Denver": the scan of flight's dependents ends at
        // "through"; "through" itself only leads to "Denver".
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[4..7])]).unwrap();
        assert_eq!(contents(forest.heads()), ["prefer"]);
        assert_eq!(contents(forest.dependents()), ["the", "morning"]);
    }

    #[test_case(6..7, &["through"] ; "Denver")]
    #[test_case(0..1, &["prefer"] ; "I")]
    #[test_case(7..8, &["prefer"] ; "full stop")]
    #[test_case(3..4, &["flight"] ; "morning")]
    fn test_relationships(entity: Range<usize>, expected: &[&str]) {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[entity])]).unwrap();
        assert_eq!(contents(forest.relationships()), expected);
    }

    #[test]
    fn test_relationships_chain_heads_then_dependents() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[5..6])]).unwrap();
        assert_eq!(contents(forest.relationships()), ["flight", "Denver"]);
    }

    #[test]
    fn test_heads_deduplicated_across_entities() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[2..3, 3..4])]).unwrap();
        assert_eq!(contents(forest.heads()), ["flight"]);
    }

    #[test]
    fn test_second_sentence_uses_offset() {
        let mut frame = Frame::new(example_sentences(), example_document());
        frame.mark_entity(13..14).unwrap(); // Houston
        let forest = Forest::build(&[frame]).unwrap();

        assert_eq!(forest.trees().count(), 1);
        assert_eq!(contents(forest.roots()), ["Book"]);
        assert_eq!(contents(forest.heads()), ["through"]);

        let tree = forest.trees().next().unwrap();
        let tokens = example_tokens_2(44, 8);
        assert_eq!(tree.head(&tokens[1]).map(Token::content), Some("Book"));
        assert_eq!(tree.head(&tokens[5]).map(Token::content), Some("through"));
    }

    #[test]
    fn test_trees_of_both_sentences_do_not_collide() {
        let mut frame = Frame::new(example_sentences(), example_document());
        frame.mark_entity(4..5).unwrap(); // flight, first sentence
        frame.mark_entity(11..12).unwrap(); // flight, second sentence
        let forest = Forest::build(&[frame]).unwrap();

        assert_eq!(contents(forest.roots()), ["prefer", "Book"]);
        assert_eq!(contents(forest.heads()), ["prefer", "Book"]);
        assert_eq!(
            contents(forest.dependents()),
            ["the", "morning", "through", "the", "through"]
        );
    }

    #[test]
    fn test_entity_identity_is_positional() {
        // Same words at the same offsets in a second frame, but not marked.
        let frames = [
            frame(example_tokens_1(0, 0), &[4..5]),
            frame(example_tokens_1(0, 0), &[]),
        ];
        let forest = Forest::build(&frames).unwrap();

        assert_eq!(forest.trees().count(), 1);
        assert_eq!(forest.entities().count(), 1);
        assert!(forest.is_entity(TokenId::new(0, 4)));
        assert!(!forest.is_entity(TokenId::new(1, 4)));
    }

    #[test]
    fn test_frames_in_order() {
        let frames = [
            frame(example_tokens_2(0, 0), &[5..6]),
            frame(example_tokens_1(0, 0), &[6..7]),
        ];
        let forest = Forest::build(&frames).unwrap();

        assert_eq!(contents(forest.roots()), ["Book", "prefer"]);
        assert_eq!(contents(forest.entities()), ["Houston", "Denver"]);
        assert_eq!(contents(forest.heads()), ["through", "through"]);
    }

    #[test]
    fn test_dependencies_carry_labels() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[4..5])]).unwrap();
        let deps: Vec<(&str, DependencyEdgeLabel, &str)> = forest
            .dependencies()
            .map(|d| (d.head.content(), d.label, d.dependent.content()))
            .collect();

        assert_eq!(deps.len(), 7);
        assert_eq!(deps[0], ("prefer", DependencyEdgeLabel::P, "."));
        assert_eq!(deps[1], ("prefer", DependencyEdgeLabel::Dobj, "flight"));
        assert_eq!(deps[6], ("through", DependencyEdgeLabel::Pobj, "Denver"));
    }

    #[test]
    fn test_walk_and_dependencies_number_trees() {
        let mut frame = Frame::new(example_sentences(), example_document());
        frame.mark_entity(4..5).unwrap();
        frame.mark_entity(11..12).unwrap();
        let forest = Forest::build(&[frame]).unwrap();

        let indices: Vec<usize> = forest.walk().map(|visit| visit.index).collect();
        let expected: Vec<usize> = std::iter::repeat_n(0, 8)
            .chain(std::iter::repeat_n(1, 7))
            .collect();
        assert_eq!(indices, expected);
        let last = forest.dependencies().last().unwrap();
        assert_eq!(last.index, 1);
        assert_eq!(last.tree.root().map(Token::content), Some("Book"));
    }

    #[test]
    fn test_early_exit_by_take() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[1..2])]).unwrap();
        assert_eq!(contents(forest.dependents().take(1)), ["I"]);
        assert_eq!(forest.walk().take(3).count(), 3);
    }

    #[test]
    fn test_no_entities_no_trees() {
        let forest = Forest::build(&[frame(example_tokens_1(0, 0), &[])]).unwrap();
        assert_eq!(forest.trees().count(), 0);
        assert_eq!(forest.heads().count(), 0);
        assert_eq!(forest.dependents().count(), 0);
    }

    #[test]
    fn test_rootless_sentence_is_not_planted() {
        let tokens = vec![
            edge("a", 0, 1, DependencyEdgeLabel::Dep),
            edge("b", 2, 1, DependencyEdgeLabel::Dep),
        ];
        let forest = Forest::build(&[frame(tokens, &[0..1])]).unwrap();
        assert_eq!(forest.trees().count(), 0);
        assert_eq!(forest.roots().count(), 0);
        assert_eq!(forest.heads().count(), 0);
    }

    #[test]
    fn test_roots_line_up_with_trees() {
        let mut tokens = vec![
            edge("a", 0, 1, DependencyEdgeLabel::Dep),
            edge("b", 2, 1, DependencyEdgeLabel::Dep),
        ];
        tokens.extend(example_tokens_2(44, 2));
        let sentences = vec![Sentence::new("a b", 0), Sentence::new("Book", 44)];
        let mut frame = Frame::new(sentences, tokens);
        frame.mark_entity(0..1).unwrap();
        frame.mark_entity(5..6).unwrap();

        let forest = Forest::build(&[frame]).unwrap();
        let roots = contents(forest.roots());
        let tree_roots: Vec<&str> = forest
            .trees()
            .map(|tree| tree.root().map_or("", Token::content))
            .collect();
        assert_eq!(roots, ["Book"]);
        assert_eq!(roots, tree_roots);
    }

    #[test]
    fn test_cycle_fails_build() {
        let tokens = vec![
            edge("a", 0, 1, DependencyEdgeLabel::Root),
            edge("b", 2, 0, DependencyEdgeLabel::Dobj),
        ];
        let err = Forest::build(&[frame(tokens, &[1..2])]).unwrap_err();
        assert_eq!(err, TreeError::CyclicDependency { offset: 0 });
    }

    #[test]
    fn test_parallel_build_keeps_order() {
        let frames: Vec<Frame> = (0..MIN_PARALLEL_TREES + 6)
            .map(|i| {
                if i % 2 == 0 {
                    frame(example_tokens_1(0, 0), &[4..5])
                } else {
                    frame(example_tokens_2(0, 0), &[3..4])
                }
            })
            .collect();
        let forest = Forest::build(&frames).unwrap();

        let roots = contents(forest.roots());
        assert_eq!(roots.len(), frames.len());
        for (i, root) in roots.iter().enumerate() {
            let expected = if i % 2 == 0 { "prefer" } else { "Book" };
            assert_eq!(*root, expected);
        }
    }
}
