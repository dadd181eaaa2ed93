//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::error::Error;
use crate::token::{Analysis, DependencyEdgeLabel, Token};
use serde::Serialize;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// A token as listed in command output.
#[derive(Debug, Clone, Serialize)]
pub struct TokenRow {
    /// Text content.
    pub content: String,
    /// Begin offset within its text.
    pub begin_offset: i32,
    /// Relation to its own head, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<DependencyEdgeLabel>,
}

impl From<&Token> for TokenRow {
    fn from(token: &Token) -> Self {
        Self {
            content: token.content().to_string(),
            begin_offset: token.id(),
            label: token.label(),
        }
    }
}

/// A head/dependent pair as listed in command output.
#[derive(Debug, Clone, Serialize)]
pub struct DependencyRow {
    /// Index of the tree within the forest.
    pub tree: usize,
    /// Governing token.
    pub head: String,
    /// Relation of the dependent to the head.
    pub label: DependencyEdgeLabel,
    /// Governed token.
    pub dependent: String,
}

/// A walked token with its tree index.
#[derive(Debug, Clone, Serialize)]
pub struct WalkRow {
    /// Index of the tree within the forest.
    pub tree: usize,
    /// The token.
    #[serde(flatten)]
    pub token: TokenRow,
}

/// Formats a titled token list (heads, dependents, relationships).
#[must_use]
pub fn format_tokens(title: &str, tokens: &[TokenRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_tokens_text(title, tokens),
        OutputFormat::Json => format_json(&tokens),
    }
}

fn format_tokens_text(title: &str, tokens: &[TokenRow]) -> String {
    if tokens.is_empty() {
        return format!("No {} found.\n", title.to_lowercase());
    }

    let mut output = String::new();
    let _ = writeln!(output, "{title} ({}):", tokens.len());
    for token in tokens {
        let label = token.label.map_or("-", DependencyEdgeLabel::as_str);
        let _ = writeln!(
            output,
            "  {:>6}  {:<10} {}",
            token.begin_offset, label, token.content
        );
    }
    output
}

/// Formats head/label/dependent rows.
#[must_use]
pub fn format_dependencies(rows: &[DependencyRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if rows.is_empty() {
                return "No dependencies found.\n".to_string();
            }
            let mut output = String::new();
            let _ = writeln!(
                output,
                "{:<5} {:<20} {:<10} Dependent",
                "Tree", "Head", "Label"
            );
            output.push_str(&"-".repeat(50));
            output.push('\n');
            for row in rows {
                let _ = writeln!(
                    output,
                    "{:<5} {:<20} {:<10} {}",
                    row.tree,
                    truncate(&row.head, 20),
                    row.label.as_str(),
                    row.dependent
                );
            }
            output
        }
        OutputFormat::Json => format_json(&rows),
    }
}

/// Formats a pre-order walk, one line per token, a blank line between trees.
#[must_use]
pub fn format_walk(rows: &[WalkRow], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if rows.is_empty() {
                return "No trees found.\n".to_string();
            }
            let mut output = String::new();
            let mut tree = None;
            for row in rows {
                if tree != Some(row.tree) {
                    if tree.is_some() {
                        output.push('\n');
                    }
                    let _ = writeln!(output, "Tree {}:", row.tree);
                    tree = Some(row.tree);
                }
                let _ = writeln!(
                    output,
                    "  {:>6}  {}",
                    row.token.begin_offset, row.token.content
                );
            }
            output
        }
        OutputFormat::Json => format_json(&rows),
    }
}

/// Formats DOT renderings of trees.
#[must_use]
pub fn format_dot(graphs: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => graphs.join("\n"),
        OutputFormat::Json => format_json(&graphs),
    }
}

/// Formats the analyses of texts.
#[must_use]
pub fn format_analyses(analyses: &[(String, Analysis)], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            for (text, analysis) in analyses {
                let _ = writeln!(output, "=== {} ===", truncate(text, 60));
                let _ = write!(output, "{analysis}");
                output.push('\n');
            }
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Entry<'a> {
                text: &'a str,
                analysis: &'a Analysis,
            }
            let entries: Vec<Entry<'_>> = analyses
                .iter()
                .map(|(text, analysis)| Entry { text, analysis })
                .collect();
            format_json(&entries)
        }
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(error: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => error.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput<'a> {
                error: &'a str,
                message: String,
            }
            let kind = match error {
                Error::Tree(_) | Error::Frame(_) => "malformed_input",
                Error::Io(_) => "io",
                Error::Command(_) => "command",
                Error::Tokenizer(_) => "tokenizer",
            };
            format_json(&ErrorOutput {
                error: kind,
                message: error.to_string(),
            })
        }
    }
}

/// Formats a value as JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

/// Truncates a string to max characters with ellipsis.
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
