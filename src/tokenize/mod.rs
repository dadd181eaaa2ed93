//! Text analysis backends.
//!
//! The dependency edges this crate works on are produced by an external
//! analyzer. [`Tokenizer`] is the seam to it: given text and the requested
//! [`Features`], return an [`Analysis`] or fail. Failures are passed through
//! untouched.
//!
//! Two implementations ship with the crate:
//!
//! - [`PrecomputedTokenizer`]: replays analyses stored as JSON
//! - [`SegmentTokenizer`]: offline Unicode segmentation without dependency
//!   edges, for entity aliases and tests

mod precomputed;
mod segment;

pub use precomputed::{PrecomputedTokenizer, Record};
pub use segment::SegmentTokenizer;

use crate::error::TokenizeError;
use crate::token::{Analysis, Features};

/// An analyzer producing sentences, tokens and sentiment for a text.
///
/// Implementations must be thread-safe (`Send + Sync`).
///
/// # Examples
///
/// ```
/// use entitydeps::token::Features;
/// use entitydeps::tokenize::{SegmentTokenizer, Tokenizer};
///
/// let analysis = SegmentTokenizer::new()
///     .tokenize("Book a flight. Now.", Features::SYNTAX)
///     .unwrap();
/// assert_eq!(analysis.sentences.len(), 2);
/// assert_eq!(analysis.tokens.len(), 6);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Analyzes `text`.
    ///
    /// # Errors
    ///
    /// Returns the analyzer's own error, unmodified.
    fn tokenize(&self, text: &str, features: Features) -> Result<Analysis, TokenizeError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for Box<T> {
    fn tokenize(&self, text: &str, features: Features) -> Result<Analysis, TokenizeError> {
        (**self).tokenize(text, features)
    }
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str, features: Features) -> Result<Analysis, TokenizeError> {
        (**self).tokenize(text, features)
    }
}
