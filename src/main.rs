//! propdoc — extract documented props from `PropTypes` interfaces.
//!
//! `propdoc --pattern '["packages/*/src/**/*.tsx"]' --root /path/to/project`

use anyhow::Result;
use clap::Parser;
use propdoc::config::Options;
use propdoc::source::{SourceError, SourceFile, SourceParser};
use propdoc::{analyze, matcher, render};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "propdoc",
    version,
    about = "Extract documented component props from PropTypes interfaces"
)]
struct Cli {
    /// File patterns as a JSON array, e.g. '["packages/*/src/**/*.tsx"]'
    #[arg(short = 'p', long)]
    pattern: Option<String>,

    /// Working directory the patterns are resolved against (default: cwd)
    #[arg(short = 'r', long)]
    root: Option<String>,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = Options::from_args(cli.pattern.as_deref(), cli.root.as_deref())?;
    let renderer = render::create_renderer(&cli.format)?;

    let files = matcher::match_files(&options.patterns, &options.root)?;
    tracing::info!(count = files.len(), root = %options.root.display(), "matched files");
    print!("{}", renderer.render_files(&files));

    let sources = load_sources(&options.root, &files)?;
    let analysis = analyze(&sources);
    print!("{}", renderer.render(&analysis));
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parse every matched file. Unsupported file types are skipped with a
/// warning; read and parser failures abort the run.
fn load_sources(root: &Path, files: &[String]) -> Result<Vec<SourceFile>> {
    let mut parser = SourceParser::new();
    let mut sources = Vec::with_capacity(files.len());
    for path in files {
        match parser.parse_path(root, path) {
            Ok(source) => sources.push(source),
            Err(SourceError::Unsupported(_)) => {
                tracing::warn!(%path, "skipping unsupported file type");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(sources)
}
