//! Analyzer results: sentences, tokens and sentiment of one text.

use super::Token;
use super::TextSpan;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Analysis features requested from a tokenizer.
    ///
    /// # Example
    ///
    /// ```
    /// use entitydeps::token::Features;
    ///
    /// let features = Features::SYNTAX | Features::SENTIMENT;
    /// assert_eq!(features, Features::ALL);
    /// assert!(features.contains(Features::SYNTAX));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Features: u8 {
        /// Sentences, tokens, part of speech and dependency edges.
        const SYNTAX = 1 << 0;
        /// Document and sentence sentiment.
        const SENTIMENT = 1 << 1;
        /// Every feature.
        const ALL = Self::SYNTAX.bits() | Self::SENTIMENT.bits();
    }
}

impl Default for Features {
    fn default() -> Self {
        Self::SYNTAX
    }
}

/// Sentiment of a sentence or document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Strength of emotion, regardless of polarity.
    pub magnitude: f32,
    /// Polarity in `-1.0..=1.0`.
    pub score: f32,
}

/// A sentence of analyzed text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// Text span of the sentence.
    pub text: TextSpan,

    /// Sentence sentiment, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl Sentence {
    /// Creates a sentence without sentiment.
    #[must_use]
    pub fn new(content: impl Into<String>, begin_offset: i32) -> Self {
        Self {
            text: TextSpan::new(content, begin_offset),
            sentiment: None,
        }
    }

    /// Returns the sentence's begin offset.
    #[must_use]
    pub const fn begin_offset(&self) -> i32 {
        self.text.begin_offset
    }
}

/// Result of analyzing one text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Sentences in text order.
    #[serde(default)]
    pub sentences: Vec<Sentence>,

    /// All tokens of the document in text order.
    #[serde(default)]
    pub tokens: Vec<Token>,

    /// Document sentiment, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sentence) in self.sentences.iter().enumerate() {
            writeln!(f, "index:{i}")?;
            writeln!(
                f,
                "text: content:{} begin_offset:{}",
                sentence.text.content, sentence.text.begin_offset
            )?;
            if let Some(sentiment) = sentence.sentiment {
                writeln!(
                    f,
                    "sentiment: magnitude:{:.6} score:{:.6}",
                    sentiment.magnitude, sentiment.score
                )?;
            }
            writeln!(f)?;
        }

        for (i, token) in self.tokens.iter().enumerate() {
            writeln!(f, "index:{i}")?;
            writeln!(
                f,
                "text: content:{} begin_offset:{}",
                token.text.content, token.text.begin_offset
            )?;
            if let Some(pos) = token.part_of_speech {
                writeln!(
                    f,
                    "part_of_speech: tag:{} aspect:{} case:{} form:{} gender:{} mood:{} \
                     number:{} person:{} proper:{} reciprocity:{} tense:{} voice:{}",
                    pos.tag,
                    pos.aspect,
                    pos.case,
                    pos.form,
                    pos.gender,
                    pos.mood,
                    pos.number,
                    pos.person,
                    pos.proper,
                    pos.reciprocity,
                    pos.tense,
                    pos.voice,
                )?;
            }
            if let Some(edge) = token.dependency_edge {
                writeln!(
                    f,
                    "dependency_edge: head_token_index:{} label:{}",
                    edge.head_token_index, edge.label
                )?;
            }
            writeln!(f, "lemma:{}", token.lemma)?;
            writeln!(f)?;
        }

        if let Some(sentiment) = self.sentiment {
            writeln!(
                f,
                "sentiment: magnitude:{:.6} score:{:.6}",
                sentiment.magnitude, sentiment.score
            )?;
        }

        Ok(())
    }
}
