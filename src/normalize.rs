//! Token normalizers applied during frame assembly.
//!
//! Normalizers rewrite the text content of non-entity tokens to reduce
//! spelling variation across texts. Entity tokens are never normalized, so
//! they keep matching their aliases.

use crate::token::Token;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A token content rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalizer {
    /// Unicode normalization form KC ("ﬀ" becomes "ff").
    Nfkc,
    /// Unicode lowercasing.
    Lowercase,
    /// Replaces the content with the lemma, when the token has one.
    Lemma,
}

impl Normalizer {
    /// Rewrites the token's content in place.
    pub fn apply(self, token: &mut Token) {
        let content = &mut token.text.content;
        match self {
            Self::Nfkc => *content = content.nfkc().collect(),
            Self::Lowercase => *content = content.to_lowercase(),
            Self::Lemma => {
                if !token.lemma.is_empty() {
                    content.clone_from(&token.lemma);
                }
            }
        }
    }

    /// Applies `normalizers` in order.
    pub fn apply_all(normalizers: &[Self], token: &mut Token) {
        for normalizer in normalizers {
            normalizer.apply(token);
        }
    }
}
