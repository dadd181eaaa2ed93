//! # entitydeps
//!
//! Syntactic heads and dependents of named entities.
//!
//! entitydeps turns the flat token stream of an external dependency parser
//! (each token pointing at its head by index) into queryable dependency
//! trees, and answers which words govern an entity and which words it
//! governs, across many texts and with multi-token entities collapsed into
//! one logical node.
//!
//! ## Features
//!
//! - **Dependency trees**: acyclic single-rooted trees with deterministic
//!   walk, search and edge order
//! - **Entity resolution**: heads, dependents and relationships of entity
//!   spans over a lazily built, cached forest
//! - **Pluggable analyzers**: any [`tokenize::Tokenizer`]; stored analyses
//!   and offline Unicode segmentation ship with the crate
//!
//! ## Example
//!
//! ```
//! use entitydeps::frame::{Frame, Frames};
//! use entitydeps::token::{DependencyEdge, DependencyEdgeLabel, Token};
//!
//! let edge = |head, label| DependencyEdge::new(head, label);
//! let tokens = vec![
//!     Token::new("Book", 0).with_edge(edge(0, DependencyEdgeLabel::Root)),
//!     Token::new("the", 5).with_edge(edge(2, DependencyEdgeLabel::Det)),
//!     Token::new("flight", 9).with_edge(edge(0, DependencyEdgeLabel::Dobj)),
//! ];
//!
//! let mut frame = Frame::new(Vec::new(), tokens);
//! frame.mark_entity(2..3)?;
//!
//! let frames = Frames::new(vec![frame]);
//! let forest = frames.forest()?;
//! let heads: Vec<&str> = forest.heads().map(|t| t.content()).collect();
//! let dependents: Vec<&str> = forest.dependents().map(|t| t.content()).collect();
//! assert_eq!(heads, ["Book"]);
//! assert_eq!(dependents, ["the"]);
//! # Ok::<(), entitydeps::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod dependency;
pub mod error;
pub mod forest;
pub mod frame;
pub mod io;
pub mod normalize;
pub mod source;
pub mod token;
pub mod tokenize;

#[cfg(test)]
mod testutil;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export tree types
pub use dependency::{NodeId, Tree, TreeBuilder};

// Re-export entity resolution types
pub use forest::{Dependency, Forest, MIN_PARALLEL_TREES, TokenId, Visit};
pub use frame::{Frame, Frames};
pub use source::{Source, SourceOptions};

// Re-export token and analyzer types
pub use normalize::Normalizer;
pub use token::{Analysis, DependencyEdge, DependencyEdgeLabel, Features, Token};
pub use tokenize::{PrecomputedTokenizer, SegmentTokenizer, Tokenizer};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
