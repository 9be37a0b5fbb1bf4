//! tweetnorm CLI: normalize text from stdin, inspect stopwords and
//! language-resource names.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use tweetnorm::{
    resource::{self, ModelSize},
    stopwords::{self, NltkLexicon},
    PreprocessorConfig, Stage, TextPreprocessor,
};

/// Deterministic normalization for noisy user-generated text
#[derive(Parser, Debug)]
#[command(name = "tweetnorm")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize stdin, one text per line
    Clean {
        /// JSON pipeline configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stage to run, repeatable; replaces the configured stage list
        #[arg(short, long = "stage")]
        stages: Vec<Stage>,

        /// Print one JSON object per line with per-stage match counts
        #[arg(long)]
        counts: bool,
    },

    /// Print the stopwords of one or more languages
    Stopwords {
        /// Language names (english, french, ...)
        #[arg(required = true)]
        languages: Vec<String>,
    },

    /// Resolve the pipeline package for a language and size
    Resource {
        /// Language name or code (English, de, Multi-language, ...)
        language: String,

        /// small, medium, large or transformer
        #[arg(default_value = "small")]
        size: ModelSize,

        /// Fetch the package from the hub if it is not cached
        #[arg(long)]
        fetch: bool,
    },
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match cli.command {
        Commands::Clean { config, stages, counts } => clean(config, stages, counts),
        Commands::Stopwords { languages } => print_stopwords(languages),
        Commands::Resource { language, size, fetch } => print_resource(&language, size, fetch),
    }
}

fn clean(config: Option<PathBuf>, stages: Vec<Stage>, counts: bool) -> Result<()> {
    let mut config = match &config {
        Some(path) => PreprocessorConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => PreprocessorConfig::default(),
    };
    if !stages.is_empty() {
        config.stages = stages;
    }
    let pipeline = TextPreprocessor::with_config(config).context("Invalid pipeline configuration")?;
    info!(stages = ?pipeline.stage_names(), "pipeline ready");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        if counts {
            let traced = pipeline.process_traced(Some(&line));
            serde_json::to_writer(&mut out, &traced)?;
            writeln!(out)?;
        } else {
            // A rejected line stays a line so output rows match input rows.
            writeln!(out, "{}", pipeline.process(Some(&line)).unwrap_or_default())?;
        }
    }
    out.flush()?;
    Ok(())
}

fn print_stopwords(languages: Vec<String>) -> Result<()> {
    let requested = languages.join(", ");
    let set = stopwords::stopwords_nltk(&NltkLexicon, Some(languages.into()))?
        .with_context(|| format!("No supported stopword language in: {}", requested))?;
    info!(languages = ?set.languages(), words = set.len(), "stopword set");

    let mut words: Vec<&str> = set.iter().collect();
    words.sort_unstable();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in words {
        writeln!(out, "{}", word)?;
    }
    Ok(())
}

fn print_resource(language: &str, size: ModelSize, fetch: bool) -> Result<()> {
    let name = resource::resource_name(language, size)
        .with_context(|| format!("No {} pipeline for '{}'", size, language))?;
    println!("{}", name);

    if fetch {
        fetch_resource(language, size)?;
    }
    Ok(())
}

#[cfg(not(any(target_os = "ios", target_os = "android")))]
fn fetch_resource(language: &str, size: ModelSize) -> Result<()> {
    if let Some(package) = tweetnorm::download::load_from_hub(language, &size.to_string())? {
        println!("{} {} {}", package.name, package.meta.version, package.path.display());
    }
    Ok(())
}

#[cfg(any(target_os = "ios", target_os = "android"))]
fn fetch_resource(_language: &str, _size: ModelSize) -> Result<()> {
    anyhow::bail!("Fetching pipeline packages is not supported on this platform")
}
