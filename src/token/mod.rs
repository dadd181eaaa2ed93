//! Token model produced by the external analyzer.
//!
//! Tokens are plain data. Their identity is the character begin offset,
//! which must be unique within whatever scope tokens are compared in (one
//! tree, one frame). Nothing in this crate mutates a token after analysis
//! except the opt-in [`crate::normalize::Normalizer`]s during frame assembly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a closed, integer-backed analyzer enumeration.
///
/// Each variant carries its wire value and its serialized name.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $ty:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal => $name:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            serde::Serialize, serde::Deserialize,
        )]
        #[repr(i32)]
        $vis enum $ty {
            $( $(#[$vmeta])* #[serde(rename = $name)] $variant = $value, )+
        }

        impl $ty {
            /// Returns the analyzer's name for this value.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Maps an analyzer wire value back to the enumeration.
            #[must_use]
            pub const fn from_i32(value: i32) -> Option<Self> {
                match value {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod analysis;
pub mod label;
pub mod part_of_speech;

pub use analysis::{Analysis, Features, Sentence, Sentiment};
pub use label::DependencyEdgeLabel;
pub use part_of_speech::PartOfSpeech;

/// A span of source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    /// The text content.
    pub content: String,

    /// Character offset of the span in the analyzed text.
    pub begin_offset: i32,
}

impl TextSpan {
    /// Creates a new text span.
    #[must_use]
    pub fn new(content: impl Into<String>, begin_offset: i32) -> Self {
        Self {
            content: content.into(),
            begin_offset,
        }
    }
}

/// The head edge of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Index of the governing token within the analyzed document.
    pub head_token_index: i32,

    /// Relation between the head and this token.
    pub label: DependencyEdgeLabel,
}

impl DependencyEdge {
    /// Creates a new dependency edge.
    #[must_use]
    pub const fn new(head_token_index: i32, label: DependencyEdgeLabel) -> Self {
        Self {
            head_token_index,
            label,
        }
    }

    /// Returns `true` if this edge marks a tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.label == DependencyEdgeLabel::Root
    }
}

/// A lexical unit of analyzed text.
///
/// # Examples
///
/// ```
/// use entitydeps::token::{DependencyEdge, DependencyEdgeLabel, Token};
///
/// let token = Token::new("flight", 21)
///     .with_edge(DependencyEdge::new(1, DependencyEdgeLabel::Dobj))
///     .with_lemma("flight");
/// assert_eq!(token.id(), 21);
/// assert_eq!(token.to_string(), "flight");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Text span of the token.
    pub text: TextSpan,

    /// Part-of-speech features, if syntax analysis ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,

    /// Head edge, if syntax analysis ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency_edge: Option<DependencyEdge>,

    /// Lemma of the token.
    #[serde(default)]
    pub lemma: String,
}

impl Token {
    /// Creates a token with text only.
    #[must_use]
    pub fn new(content: impl Into<String>, begin_offset: i32) -> Self {
        Self {
            text: TextSpan::new(content, begin_offset),
            ..Default::default()
        }
    }

    /// Sets the dependency edge.
    #[must_use]
    pub const fn with_edge(mut self, edge: DependencyEdge) -> Self {
        self.dependency_edge = Some(edge);
        self
    }

    /// Sets the part-of-speech bundle.
    #[must_use]
    pub const fn with_part_of_speech(mut self, part_of_speech: PartOfSpeech) -> Self {
        self.part_of_speech = Some(part_of_speech);
        self
    }

    /// Sets the lemma.
    #[must_use]
    pub fn with_lemma(mut self, lemma: impl Into<String>) -> Self {
        self.lemma = lemma.into();
        self
    }

    /// Returns the token identity (its begin offset).
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.text.begin_offset
    }

    /// Returns the text content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.text.content
    }

    /// Returns the relation label, if the token has a head edge.
    #[must_use]
    pub fn label(&self) -> Option<DependencyEdgeLabel> {
        self.dependency_edge.map(|edge| edge.label)
    }

    /// Returns the head token index, if the token has a head edge.
    #[must_use]
    pub fn head_index(&self) -> Option<i32> {
        self.dependency_edge.map(|edge| edge.head_token_index)
    }

    /// Returns `true` if the token is labeled as a tree root.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.dependency_edge.is_some_and(|edge| edge.is_root())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text.content)
    }
}
