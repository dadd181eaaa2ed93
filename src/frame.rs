//! Analyzed texts and their entity spans.
//!
//! A [`Frame`] is one analyzed text: sentences, tokens, sentiment and the
//! positions of entity spans. [`Frames`] collects the frames of a source
//! together with the tokenized entity aliases, and lazily builds the
//! [`Forest`] used for entity queries.

use crate::error::{Error, FrameError, Result, TreeError};
use crate::forest::Forest;
use crate::token::{Sentence, Sentiment, Token};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::iter::FusedIterator;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

/// One analyzed text.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    sentences: Vec<Sentence>,
    tokens: Arc<[Token]>,
    sentiment: Option<Sentiment>,
    /// Entity spans keyed by start position.
    entities: BTreeMap<usize, Range<usize>>,
}

impl Frame {
    /// Creates a frame without entities.
    #[must_use]
    pub fn new(sentences: Vec<Sentence>, tokens: impl Into<Arc<[Token]>>) -> Self {
        Self {
            sentences,
            tokens: tokens.into(),
            sentiment: None,
            entities: BTreeMap::new(),
        }
    }

    /// Sets the document sentiment.
    #[must_use]
    pub const fn with_sentiment(mut self, sentiment: Option<Sentiment>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Marks a run of consecutive token positions as one entity.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::EntityOutOfBounds`] if the span reaches past the
    /// tokens, and [`FrameError::InvalidEntitySpan`] if it is empty or
    /// overlaps a marked span.
    pub fn mark_entity(&mut self, span: Range<usize>) -> std::result::Result<(), FrameError> {
        let Range { start, end } = span;
        if start >= end {
            return Err(FrameError::InvalidEntitySpan { start, end });
        }
        if end > self.tokens.len() {
            return Err(FrameError::EntityOutOfBounds {
                start,
                end,
                len: self.tokens.len(),
            });
        }

        let before = self.entities.range(..end).next_back();
        if before.is_some_and(|(_, marked)| marked.end > start) {
            return Err(FrameError::InvalidEntitySpan { start, end });
        }

        self.entities.insert(start, span);
        Ok(())
    }

    /// Sentence spans reported by the analyzer.
    #[must_use]
    pub fn sentence_spans(&self) -> &[Sentence] {
        &self.sentences
    }

    /// All tokens in text order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Document sentiment, if analyzed.
    #[must_use]
    pub const fn sentiment(&self) -> Option<Sentiment> {
        self.sentiment
    }

    /// Entity spans in ascending start order.
    pub fn entities(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.entities.values().cloned()
    }

    /// Tokens of every entity span, in ascending start order.
    pub fn entity_tokens(&self) -> impl Iterator<Item = &[Token]> + '_ {
        self.entities.values().map(|span| &self.tokens[span.clone()])
    }

    /// Returns `true` if the token at `position` belongs to an entity span.
    #[must_use]
    pub fn is_entity(&self, position: usize) -> bool {
        self.entities
            .range(..=position)
            .next_back()
            .is_some_and(|(_, span)| span.contains(&position))
    }

    /// Token groups per sentence, with the position of each group's first
    /// token.
    #[must_use]
    pub fn sentences(&self) -> Sentences<'_> {
        Sentences {
            frame: self,
            index: 0,
            position: 0,
        }
    }

    pub(crate) fn shared_tokens(&self) -> Arc<[Token]> {
        Arc::clone(&self.tokens)
    }
}

/// Iterator over the sentence-sized token groups of a frame.
///
/// A token belongs to a sentence until the first token whose begin offset
/// reaches the next sentence's begin offset; trailing tokens belong to the
/// last sentence. A frame without sentence spans yields all of its tokens
/// as one group.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    frame: &'a Frame,
    index: usize,
    position: usize,
}

impl Sentences<'_> {
    fn next_span(&mut self) -> Option<Range<usize>> {
        let tokens = &self.frame.tokens;
        let sentences = &self.frame.sentences;

        if sentences.is_empty() {
            if self.index > 0 || tokens.is_empty() {
                return None;
            }
            self.index = 1;
            self.position = tokens.len();
            return Some(0..tokens.len());
        }
        if self.index >= sentences.len() {
            return None;
        }

        let start = self.position;
        let end = sentences.get(self.index + 1).map_or(tokens.len(), |next| {
            let boundary = next.begin_offset();
            start
                + tokens[start..]
                    .iter()
                    .take_while(|token| token.id() < boundary)
                    .count()
        });

        self.index += 1;
        self.position = end;
        Some(start..end)
    }
}

impl<'a> Iterator for Sentences<'a> {
    type Item = (usize, &'a [Token]);

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.next_span()?;
        Some((span.start, &self.frame.tokens[span]))
    }
}

impl FusedIterator for Sentences<'_> {}

/// Frames of a source plus the tokenized entity aliases.
///
/// The forest is built on first access and cached, error included.
#[derive(Debug, Default)]
pub struct Frames {
    frames: Vec<Frame>,
    entities: BTreeMap<String, Vec<Token>>,
    forest: OnceLock<std::result::Result<Forest, TreeError>>,
    builds: AtomicUsize,
}

impl Frames {
    /// Creates a collection from frames.
    #[must_use]
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            ..Default::default()
        }
    }

    /// Sets the tokenized entity aliases.
    #[must_use]
    pub fn with_entities(mut self, entities: BTreeMap<String, Vec<Token>>) -> Self {
        self.entities = entities;
        self
    }

    /// Iterates the frames in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there are no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Tokenized entity aliases, keyed by alias.
    #[must_use]
    pub const fn entities(&self) -> &BTreeMap<String, Vec<Token>> {
        &self.entities
    }

    /// Every sentence group of every frame as `(frame, position, tokens)`.
    ///
    /// `position` is the index of the group's first token within its frame;
    /// zero marks the start of a new frame.
    pub fn all(&self) -> impl Iterator<Item = (usize, usize, &[Token])> + '_ {
        self.frames.iter().enumerate().flat_map(|(index, frame)| {
            frame
                .sentences()
                .map(move |(position, tokens)| (index, position, tokens))
        })
    }

    /// Returns the forest of trees containing entity tokens.
    ///
    /// The first call builds the forest; later calls return the cached
    /// result without rebuilding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tree`] if a sentence containing an entity token has
    /// malformed dependency edges.
    pub fn forest(&self) -> Result<&Forest> {
        self.forest
            .get_or_init(|| {
                self.builds.fetch_add(1, Ordering::Relaxed);
                Forest::build(&self.frames)
            })
            .as_ref()
            .map_err(|err| Error::Tree(err.clone()))
    }

    /// Number of times the forest was built.
    #[must_use]
    pub fn forest_builds(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

impl<'a> IntoIterator for &'a Frames {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    sentences: &'a [Sentence],
    tokens: &'a [Token],
    sentiment: Option<&'a Sentiment>,
}

#[derive(Serialize)]
struct FramesRecord<'a> {
    frames: Vec<FrameRecord<'a>>,
    entities: &'a BTreeMap<String, Vec<Token>>,
}

impl Serialize for Frames {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        FramesRecord {
            frames: self
                .frames
                .iter()
                .map(|frame| FrameRecord {
                    sentences: &frame.sentences,
                    tokens: &frame.tokens,
                    sentiment: frame.sentiment.as_ref(),
                })
                .collect(),
            entities: &self.entities,
        }
        .serialize(serializer)
    }
}
