//! Entity aliases and texts, assembled into [`Frames`].

use crate::error::{Error, Result};
use crate::frame::{Frame, Frames};
use crate::normalize::Normalizer;
use crate::token::{Features, Token};
use crate::tokenize::Tokenizer;
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::{debug, trace};

/// Options for frame assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// Features requested for the texts. Aliases always use syntax only.
    pub features: Features,
    /// Normalizers applied, in order, to every non-entity token.
    pub normalizers: Vec<Normalizer>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            features: Features::SYNTAX,
            normalizers: Vec::new(),
        }
    }
}

impl SourceOptions {
    /// Creates options requesting syntax only, without normalizers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the requested features.
    #[must_use]
    pub const fn with_features(mut self, features: Features) -> Self {
        self.features = features;
        self
    }

    /// Appends a normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizers.push(normalizer);
        self
    }
}

/// An entity, its aliases and the texts to search for it.
///
/// By convention the first alias is the best-known name.
///
/// # Examples
///
/// ```
/// use entitydeps::source::{Source, SourceOptions};
/// use entitydeps::tokenize::SegmentTokenizer;
///
/// let source = Source::new([" Denver ", "Denver", "Mile High City"], ["Fly to Denver."]);
/// assert_eq!(source.aliases(), ["Denver", "Mile High City"]);
///
/// let frames = source.frames(&SegmentTokenizer::new(), &SourceOptions::new()).unwrap();
/// let frame = frames.iter().next().unwrap();
/// assert_eq!(frame.entities().collect::<Vec<_>>(), [2..3]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source {
    aliases: Vec<String>,
    texts: Vec<String>,
}

impl Source {
    /// Creates a source.
    ///
    /// Surrounding white space is trimmed from aliases and texts; empty and
    /// duplicate aliases are dropped, keeping the first occurrence.
    pub fn new<A, T>(aliases: A, texts: T) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for alias in aliases {
            let alias = alias.as_ref().trim();
            if !alias.is_empty() && !deduped.iter().any(|known| known == alias) {
                deduped.push(alias.to_string());
            }
        }

        Self {
            aliases: deduped,
            texts: texts
                .into_iter()
                .map(|text| text.as_ref().trim().to_string())
                .collect(),
        }
    }

    /// Entity aliases, best-known first.
    #[must_use]
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Texts to analyze.
    #[must_use]
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Analyzes aliases and texts and marks entity occurrences.
    ///
    /// Each text's tokens are scanned left to right. Where the following
    /// tokens spell out an alias (same contents, same count), they are
    /// marked as one entity span; aliases are tried in order. All other
    /// tokens are run through the normalizers.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Tokenizer`] with the tokenizer's error, unmodified.
    pub fn frames(&self, tokenizer: &dyn Tokenizer, options: &SourceOptions) -> Result<Frames> {
        let mut aliases: Vec<(&str, Vec<Token>)> = Vec::with_capacity(self.aliases.len());
        for alias in &self.aliases {
            let analysis = tokenizer
                .tokenize(alias, Features::SYNTAX)
                .map_err(Error::Tokenizer)?;
            if analysis.tokens.is_empty() {
                debug!(alias = alias.as_str(), "alias has no tokens, ignored");
            }
            aliases.push((alias.as_str(), analysis.tokens));
        }

        let mut frames = Vec::with_capacity(self.texts.len());
        for text in &self.texts {
            frames.push(frame(tokenizer, text, &aliases, options)?);
        }

        let entities: BTreeMap<String, Vec<Token>> = aliases
            .into_iter()
            .map(|(alias, tokens)| (alias.to_string(), tokens))
            .collect();

        debug!(
            aliases = entities.len(),
            texts = frames.len(),
            "assembled frames"
        );
        Ok(Frames::new(frames).with_entities(entities))
    }
}

fn frame(
    tokenizer: &dyn Tokenizer,
    text: &str,
    aliases: &[(&str, Vec<Token>)],
    options: &SourceOptions,
) -> Result<Frame> {
    let analysis = tokenizer
        .tokenize(text, options.features)
        .map_err(Error::Tokenizer)?;
    let mut tokens = analysis.tokens;

    let mut spans: Vec<Range<usize>> = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        if let Some(len) = match_alias(&tokens[i..], aliases) {
            spans.push(i..i + len);
            i += len;
        } else {
            Normalizer::apply_all(&options.normalizers, &mut tokens[i]);
            i += 1;
        }
    }

    trace!(tokens = tokens.len(), entities = spans.len(), "assembled frame");
    let mut frame = Frame::new(analysis.sentences, tokens).with_sentiment(analysis.sentiment);
    for span in spans {
        frame.mark_entity(span)?;
    }
    Ok(frame)
}

/// Length of the first alias the tokens start with.
fn match_alias(tokens: &[Token], aliases: &[(&str, Vec<Token>)]) -> Option<usize> {
    aliases.iter().find_map(|(_, alias)| {
        let matches = !alias.is_empty()
            && tokens.len() >= alias.len()
            && tokens
                .iter()
                .zip(alias)
                .all(|(token, part)| token.content() == part.content());
        matches.then_some(alias.len())
    })
}
