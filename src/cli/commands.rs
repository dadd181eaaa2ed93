//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{
    DependencyRow, OutputFormat, TokenRow, WalkRow, format_analyses, format_dependencies,
    format_dot, format_json, format_tokens, format_walk,
};
use crate::cli::parser::{Cli, Commands, SourceArgs};
use crate::error::{CommandError, Error, Result};
use crate::frame::Frames;
use crate::io::{read_json, write_file};
use crate::source::{Source, SourceOptions};
use crate::tokenize::{PrecomputedTokenizer, SegmentTokenizer, Tokenizer};
use std::path::Path;
use tracing::debug;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Tokenize { source } => cmd_tokenize(source, format),
        Commands::Heads { source } => cmd_heads(source, format),
        Commands::Dependents { source } => cmd_dependents(source, format),
        Commands::Relationships { source } => cmd_relationships(source, format),
        Commands::Dependencies { source } => cmd_dependencies(source, format),
        Commands::Walk { source } => cmd_walk(source, format),
        Commands::Dot { source } => cmd_dot(source, format),
        Commands::Export { source, output } => cmd_export(source, output.as_deref(), format),
    }
}

/// Texts and the tokenizer that analyzes them.
struct Input {
    tokenizer: PrecomputedTokenizer,
    texts: Vec<String>,
}

/// Loads stored analyses and inline texts.
fn load_input(args: &SourceArgs) -> Result<Input> {
    let mut tokenizer = match &args.input {
        Some(path) => PrecomputedTokenizer::new(read_json(path)?),
        None => PrecomputedTokenizer::default(),
    };
    let mut texts: Vec<String> = tokenizer.texts().map(str::to_string).collect();
    texts.extend(args.texts.iter().cloned());

    if texts.is_empty() {
        return Err(CommandError::MissingArgument("--input or --text".to_string()).into());
    }

    debug!(
        stored = tokenizer.len(),
        inline = args.texts.len(),
        "loaded input"
    );
    tokenizer = tokenizer.with_fallback(SegmentTokenizer::new());
    Ok(Input { tokenizer, texts })
}

/// Assembles frames for entity queries.
fn load_frames(args: &SourceArgs) -> Result<Frames> {
    if args.entities.is_empty() {
        return Err(CommandError::MissingArgument("--entity".to_string()).into());
    }
    assemble(args)
}

fn assemble(args: &SourceArgs) -> Result<Frames> {
    let input = load_input(args)?;
    let source = Source::new(&args.entities, &input.texts);
    let options = SourceOptions {
        features: args.features(),
        normalizers: args.normalizers.clone(),
    };
    source.frames(&input.tokenizer, &options)
}

fn cmd_tokenize(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let input = load_input(args)?;
    let features = args.features();

    let analyses = input
        .texts
        .iter()
        .map(|text| {
            let analysis = input
                .tokenizer
                .tokenize(text, features)
                .map_err(Error::Tokenizer)?;
            Ok((text.clone(), analysis))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(format_analyses(&analyses, format))
}

fn cmd_heads(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let rows: Vec<TokenRow> = frames.forest()?.heads().map(TokenRow::from).collect();
    Ok(format_tokens("Heads", &rows, format))
}

fn cmd_dependents(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let rows: Vec<TokenRow> = frames
        .forest()?
        .dependents()
        .map(TokenRow::from)
        .collect();
    Ok(format_tokens("Dependents", &rows, format))
}

fn cmd_relationships(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let rows: Vec<TokenRow> = frames
        .forest()?
        .relationships()
        .map(TokenRow::from)
        .collect();
    Ok(format_tokens("Relationships", &rows, format))
}

fn cmd_dependencies(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let rows: Vec<DependencyRow> = frames
        .forest()?
        .dependencies()
        .map(|dependency| DependencyRow {
            tree: dependency.index,
            head: dependency.head.content().to_string(),
            label: dependency.label,
            dependent: dependency.dependent.content().to_string(),
        })
        .collect();
    Ok(format_dependencies(&rows, format))
}

fn cmd_walk(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let rows: Vec<WalkRow> = frames
        .forest()?
        .walk()
        .map(|visit| WalkRow {
            tree: visit.index,
            token: TokenRow::from(visit.token),
        })
        .collect();
    Ok(format_walk(&rows, format))
}

fn cmd_dot(args: &SourceArgs, format: OutputFormat) -> Result<String> {
    let frames = load_frames(args)?;
    let graphs: Vec<String> = frames.forest()?.trees().map(ToString::to_string).collect();
    Ok(format_dot(&graphs, format))
}

fn cmd_export(args: &SourceArgs, output: Option<&Path>, format: OutputFormat) -> Result<String> {
    let frames = assemble(args)?;
    let json = format_json(&frames);

    let Some(path) = output else {
        return Ok(json + "\n");
    };
    write_file(path, &json)?;

    let message = format!(
        "Exported {} frames to {}",
        frames.len(),
        path.to_string_lossy()
    );
    match format {
        OutputFormat::Text => Ok(message + "\n"),
        OutputFormat::Json => Ok(format_json(&serde_json::json!({
            "frames": frames.len(),
            "path": path.to_string_lossy(),
        }))),
    }
}
