//! Offline tokenizer based on Unicode text segmentation.
//!
//! Splits text into sentences and words following UAX #29. No syntax is
//! inferred: tokens carry a coarse tag but no dependency edge, so trees
//! built from them are empty. Useful for tokenizing entity aliases, whose
//! token contents are all that matters.

use crate::error::TokenizeError;
use crate::token::part_of_speech::Tag;
use crate::token::{Analysis, Features, PartOfSpeech, Sentence, Token};
use crate::tokenize::Tokenizer;
use unicode_segmentation::UnicodeSegmentation;

/// Unicode segmentation tokenizer.
///
/// Begin offsets are byte offsets into the analyzed text. Sentiment is
/// never produced.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentTokenizer;

impl SegmentTokenizer {
    /// Creates a new segmentation tokenizer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Tokenizer for SegmentTokenizer {
    fn tokenize(&self, text: &str, features: Features) -> Result<Analysis, TokenizeError> {
        let mut analysis = Analysis::default();

        for (offset, sentence) in text.split_sentence_bound_indices() {
            let trimmed = sentence.trim_end();
            if trimmed.trim_start().is_empty() {
                continue;
            }
            let leading = trimmed.len() - trimmed.trim_start().len();
            let begin = offset_of(offset + leading)?;
            analysis
                .sentences
                .push(Sentence::new(trimmed.trim_start(), begin));
        }

        if features.contains(Features::SYNTAX) {
            for (offset, word) in text.split_word_bound_indices() {
                if word.trim().is_empty() {
                    continue;
                }
                analysis.tokens.push(
                    Token::new(word, offset_of(offset)?)
                        .with_part_of_speech(PartOfSpeech::tagged(coarse_tag(word))),
                );
            }
        }

        Ok(analysis)
    }
}

fn offset_of(offset: usize) -> Result<i32, TokenizeError> {
    i32::try_from(offset)
        .map_err(|_| format!("text offset {offset} exceeds the 32-bit limit").into())
}

fn coarse_tag(word: &str) -> Tag {
    if word.chars().all(|c| !c.is_alphanumeric()) {
        Tag::Punct
    } else if word.chars().all(char::is_numeric) {
        Tag::Num
    } else {
        Tag::Unknown
    }
}
