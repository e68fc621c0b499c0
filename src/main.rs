use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ukkonen::{bwt, SuffixTree};

#[derive(Parser, Debug)]
#[command(name = "ukkonen", about = "Suffix-tree based Burrows-Wheeler transform toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the Burrows-Wheeler transform of a sentinel-terminated text.
    Transform {
        /// Input file containing a single line of text ending in '$'.
        input: PathBuf,
        /// Write the transform here instead of standard output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the suffix array of a sentinel-terminated text, one offset per line.
    SuffixArray {
        /// Input file containing a single line of text ending in '$'.
        input: PathBuf,
    },
    /// Reconstruct the original text from a Burrows-Wheeler transform.
    Invert {
        /// Input file containing a single-line transform.
        input: PathBuf,
        /// Write the reconstructed text here instead of standard output.
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transform { input, output } => run_transform(input, output)?,
        Commands::SuffixArray { input } => run_suffix_array(input)?,
        Commands::Invert { input, output } => run_invert(input, output)?,
    }

    Ok(())
}

fn run_transform(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let text = read_line_file(&input)?;
    let transform = bwt::generate(text)
        .with_context(|| format!("failed to transform {}", input.display()))?;
    emit(&transform, output)
}

fn run_suffix_array(input: PathBuf) -> Result<()> {
    let text = read_line_file(&input)?;
    let tree = SuffixTree::build(text)
        .with_context(|| format!("failed to build suffix tree for {}", input.display()))?;

    for offset in tree.suffix_array() {
        println!("{offset}");
    }

    Ok(())
}

fn run_invert(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let transform = read_line_file(&input)?;
    let text = bwt::invert(&transform)
        .with_context(|| format!("failed to invert {}", input.display()))?;
    emit(&text, output)
}

/// Read the first line of `path` as bytes, without the trailing newline.
fn read_line_file(path: &PathBuf) -> Result<Vec<u8>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let line = contents.lines().next().unwrap_or("");
    Ok(line.as_bytes().to_vec())
}

fn emit(data: &[u8], output: Option<PathBuf>) -> Result<()> {
    let rendered = String::from_utf8(data.to_vec()).context("output is not valid UTF-8")?;
    match output {
        Some(path) => fs::write(&path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
