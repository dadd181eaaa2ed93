//! CLI layer for entitydeps.
//!
//! Provides the command-line interface using clap, with commands for
//! tokenizing texts and querying entity heads and dependents.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, SourceArgs};
