//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::normalize::Normalizer;
use crate::token::Features;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// entitydeps: syntactic heads and dependents of named entities.
///
/// Reads stored dependency analyses, marks occurrences of an entity and
/// reports which words govern it and which words it governs.
#[derive(Parser, Debug)]
#[command(name = "entitydeps")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (debug logging to stderr).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Where texts come from and how they are assembled into frames.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Analyses file: a JSON array of `{"text", "analysis"}` records.
    ///
    /// Every stored text is used as an input text.
    #[arg(short, long, env = "ENTITYDEPS_INPUT")]
    pub input: Option<PathBuf>,

    /// Entity alias; repeat for more aliases, best-known name first.
    #[arg(short, long = "entity", value_name = "ALIAS")]
    pub entities: Vec<String>,

    /// Additional text, segmented offline (no dependency edges).
    #[arg(short, long = "text", value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Normalizer for non-entity tokens; repeat to chain.
    #[arg(short, long = "normalize", value_enum, value_name = "NORMALIZER")]
    pub normalizers: Vec<Normalizer>,

    /// Also request sentiment.
    #[arg(long)]
    pub sentiment: bool,
}

impl SourceArgs {
    /// Features to request for input texts.
    #[must_use]
    pub fn features(&self) -> Features {
        if self.sentiment {
            Features::ALL
        } else {
            Features::SYNTAX
        }
    }
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the analysis of every text.
    Tokenize {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the distinct external heads of the entity.
    Heads {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List the direct dependents of the entity.
    Dependents {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List heads followed by dependents.
    #[command(alias = "rel")]
    Relationships {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// List every head, label and dependent of sentences mentioning the entity.
    #[command(alias = "deps")]
    Dependencies {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Walk sentences mentioning the entity in pre-order.
    Walk {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Render sentences mentioning the entity as Graphviz digraphs.
    Dot {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Export the assembled frames as JSON.
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (prints to stdout if omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Commands {
    /// Source arguments of the command.
    #[must_use]
    pub const fn source(&self) -> &SourceArgs {
        match self {
            Self::Tokenize { source }
            | Self::Heads { source }
            | Self::Dependents { source }
            | Self::Relationships { source }
            | Self::Dependencies { source }
            | Self::Walk { source }
            | Self::Dot { source }
            | Self::Export { source, .. } => source,
        }
    }
}
