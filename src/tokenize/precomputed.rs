//! Tokenizer replaying stored analyses.

use crate::error::{IoError, Result, TokenizeError};
use crate::token::{Analysis, Features};
use crate::tokenize::Tokenizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One stored analysis, as found in an analyses file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The analyzed text.
    pub text: String,
    /// The analyzer's result for `text`.
    pub analysis: Analysis,
}

/// Serves analyses produced earlier by an external analyzer.
///
/// Texts are looked up verbatim after trimming surrounding white space.
/// Texts without a stored analysis go to the fallback tokenizer, if one is
/// set, and fail otherwise.
///
/// # Examples
///
/// ```
/// use entitydeps::token::Features;
/// use entitydeps::tokenize::{PrecomputedTokenizer, SegmentTokenizer, Tokenizer};
///
/// let json = r#"[{"text": "Go.", "analysis": {"tokens": [
///     {"text": {"content": "Go", "begin_offset": 0},
///      "dependency_edge": {"head_token_index": 0, "label": "ROOT"}},
///     {"text": {"content": ".", "begin_offset": 2},
///      "dependency_edge": {"head_token_index": 0, "label": "P"}}
/// ]}}]"#;
///
/// let tokenizer = PrecomputedTokenizer::from_json(json)
///     .unwrap()
///     .with_fallback(SegmentTokenizer::new());
///
/// let stored = tokenizer.tokenize("Go.", Features::SYNTAX).unwrap();
/// assert!(stored.tokens[0].is_root());
///
/// let segmented = tokenizer.tokenize("Stop.", Features::SYNTAX).unwrap();
/// assert!(segmented.tokens[0].dependency_edge.is_none());
/// ```
#[derive(Default)]
pub struct PrecomputedTokenizer {
    records: Vec<Record>,
    index: HashMap<String, usize>,
    fallback: Option<Box<dyn Tokenizer>>,
}

impl PrecomputedTokenizer {
    /// Creates a tokenizer from records. Later duplicates of a text are
    /// ignored.
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        let mut tokenizer = Self::default();
        for record in records {
            tokenizer.insert(record);
        }
        tokenizer
    }

    /// Parses records from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Json`] if the input is not an array of records.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(json).map_err(IoError::from)?;
        Ok(Self::new(records))
    }

    /// Sets the tokenizer used for unknown texts.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Tokenizer + 'static) -> Self {
        self.fallback = Some(Box::new(fallback));
        self
    }

    /// Stores an analysis. Returns `false` if the text was already known.
    pub fn insert(&mut self, record: Record) -> bool {
        let key = record.text.trim().to_string();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.records.len());
        self.records.push(record);
        true
    }

    /// Stored texts in insertion order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| record.text.as_str())
    }

    /// Number of stored analyses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no analysis is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl fmt::Debug for PrecomputedTokenizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrecomputedTokenizer")
            .field("records", &self.records.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Tokenizer for PrecomputedTokenizer {
    fn tokenize(
        &self,
        text: &str,
        features: Features,
    ) -> std::result::Result<Analysis, TokenizeError> {
        let Some(&index) = self.index.get(text.trim()) else {
            return match &self.fallback {
                Some(fallback) => fallback.tokenize(text, features),
                None => Err(format!("no stored analysis for {text:?}").into()),
            };
        };

        let mut analysis = self.records[index].analysis.clone();
        if !features.contains(Features::SYNTAX) {
            analysis.tokens.clear();
        }
        if !features.contains(Features::SENTIMENT) {
            analysis.sentiment = None;
            for sentence in &mut analysis.sentences {
                sentence.sentiment = None;
            }
        }
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::example_tokens_1;
    use crate::token::{Sentence, Sentiment};
    use crate::tokenize::SegmentTokenizer;

    fn record() -> Record {
        Record {
            text: "I prefer the morning flight through Denver.".to_string(),
            analysis: Analysis {
                sentences: vec![Sentence::new(
                    "I prefer the morning flight through Denver.",
                    0,
                )],
                tokens: example_tokens_1(0, 0),
                sentiment: Some(Sentiment {
                    magnitude: 0.3,
                    score: 0.3,
                }),
            },
        }
    }

    #[test]
    fn test_lookup_trims() {
        let tokenizer = PrecomputedTokenizer::new(vec![record()]);
        let analysis = tokenizer
            .tokenize("  I prefer the morning flight through Denver. ", Features::ALL)
            .unwrap();
        assert_eq!(analysis.tokens.len(), 8);
        assert!(analysis.sentiment.is_some());
    }

    #[test]
    fn test_features_filter_output() {
        let tokenizer = PrecomputedTokenizer::new(vec![record()]);
        let text = "I prefer the morning flight through Denver.";

        let syntax = tokenizer.tokenize(text, Features::SYNTAX).unwrap();
        assert!(syntax.sentiment.is_none());
        assert_eq!(syntax.tokens.len(), 8);

        let sentiment = tokenizer.tokenize(text, Features::SENTIMENT).unwrap();
        assert!(sentiment.tokens.is_empty());
        assert!(sentiment.sentiment.is_some());
    }

    #[test]
    fn test_unknown_text_without_fallback() {
        let tokenizer = PrecomputedTokenizer::new(vec![record()]);
        let err = tokenizer.tokenize("Denver", Features::SYNTAX).unwrap_err();
        assert!(err.to_string().contains("Denver"));
    }

    #[test]
    fn test_unknown_text_with_fallback() {
        let tokenizer =
            PrecomputedTokenizer::new(vec![record()]).with_fallback(SegmentTokenizer::new());
        let analysis = tokenizer.tokenize("New York", Features::SYNTAX).unwrap();
        assert_eq!(analysis.tokens.len(), 2);
    }

    #[test]
    fn test_duplicates_ignored() {
        let mut tokenizer = PrecomputedTokenizer::new(vec![record()]);
        assert!(!tokenizer.insert(record()));
        assert_eq!(tokenizer.len(), 1);
        assert_eq!(tokenizer.texts().count(), 1);
    }

    #[test]
    fn test_from_json_errors() {
        let err = PrecomputedTokenizer::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::Error::Io(IoError::Json(_))));

        let tokenizer = PrecomputedTokenizer::from_json("[]").unwrap();
        assert!(tokenizer.is_empty());
    }
}
