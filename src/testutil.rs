//! Shared fixtures for unit tests.

use crate::token::{DependencyEdge, DependencyEdgeLabel, Sentence, Token};

/// Builds a token with a head edge.
pub fn edge(content: &str, offset: i32, head: i32, label: DependencyEdgeLabel) -> Token {
    Token::new(content, offset).with_edge(DependencyEdge::new(head, label))
}

/// "I prefer the morning flight through Denver."
pub fn example_tokens_1(char_offset: i32, dep_offset: i32) -> Vec<Token> {
    use DependencyEdgeLabel::{Det, Dobj, Nn, Nsubj, Pobj, Prep, Root, P};
    [
        ("I", 0, 1, Nsubj),
        ("prefer", 2, 1, Root),
        ("the", 9, 4, Det),
        ("morning", 13, 4, Nn),
        ("flight", 21, 1, Dobj),
        ("through", 28, 4, Prep),
        ("Denver", 36, 5, Pobj),
        (".", 42, 1, P),
    ]
    .into_iter()
    .map(|(content, offset, head, label)| {
        edge(content, char_offset + offset, dep_offset + head, label)
    })
    .collect()
}

/// "Book me the flight through Houston."
pub fn example_tokens_2(char_offset: i32, dep_offset: i32) -> Vec<Token> {
    use DependencyEdgeLabel::{Det, Dobj, Iobj, Pobj, Prep, Root, P};
    [
        ("Book", 0, 0, Root),
        ("me", 5, 0, Iobj),
        ("the", 8, 3, Det),
        ("flight", 12, 0, Dobj),
        ("through", 19, 3, Prep),
        ("Houston", 27, 4, Pobj),
        (".", 34, 0, P),
    ]
    .into_iter()
    .map(|(content, offset, head, label)| {
        edge(content, char_offset + offset, dep_offset + head, label)
    })
    .collect()
}

/// Sentence spans matching [`example_tokens_1`] followed by
/// [`example_tokens_2`] at character offset 44.
pub fn example_sentences() -> Vec<Sentence> {
    vec![
        Sentence::new("I prefer the morning flight through Denver.", 0),
        Sentence::new("Book me the flight through Houston.", 44),
    ]
}

/// Both example sentences as one document.
pub fn example_document() -> Vec<Token> {
    let mut tokens = example_tokens_1(0, 0);
    tokens.extend(example_tokens_2(44, 8));
    tokens
}
