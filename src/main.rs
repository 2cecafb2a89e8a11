//! wordtrie CLI - build and query compressed word indexes
//!
//! Output goes to stdout as JSON; logs go to stderr (`RUST_LOG` or `-v`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wordtrie::{store, wordlist, Config, Fingerprint, InsertMode};

#[derive(Parser)]
#[command(name = "wordtrie")]
#[command(about = "Build and query compressed word-membership indexes")]
#[command(version)]
struct Cli {
    /// Path to the index file (defaults to the configured index_path)
    #[arg(short, long)]
    index: Option<PathBuf>,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an index from a word list (one word per line)
    Build {
        /// The word list to read
        wordlist: PathBuf,
        /// Insert every substring of each line instead of the line itself
        #[arg(long)]
        substrings: bool,
        /// zstd compression level
        #[arg(short, long)]
        level: Option<i32>,
    },

    /// Check whether words are in the index
    Check {
        /// Words to look up
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Show index statistics
    Stats {
        /// Fail unless the index has this fingerprint (hex)
        #[arg(long)]
        expect: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let index = cli.index.clone().unwrap_or_else(|| config.index_path.clone());

    match cli.command {
        Commands::Build {
            wordlist: list,
            substrings,
            level,
        } => {
            let mode = if substrings {
                InsertMode::Substrings
            } else {
                InsertMode::Word
            };
            let level = level.unwrap_or(config.compression_level);

            let trie = wordlist::load_with(&list, mode)?;
            store::save(&trie, &index, level)?;

            output(
                cli.format,
                &serde_json::json!({
                    "status": "ok",
                    "index": index.display().to_string(),
                    "nodes": trie.size(),
                    "size_bytes": trie.size_bytes(),
                    "fingerprint": trie.fingerprint()?.to_hex()
                }),
            )?;
        }

        Commands::Check { words } => {
            let trie = store::load(&index)?;
            let mut all_found = true;
            let mut items = Vec::with_capacity(words.len());
            for word in &words {
                let found = trie.contains(word)?;
                all_found &= found;
                items.push(serde_json::json!({
                    "word": word,
                    "found": found
                }));
            }
            output(
                cli.format,
                &serde_json::json!({
                    "count": items.len(),
                    "results": items
                }),
            )?;
            if !all_found {
                std::process::exit(1);
            }
        }

        Commands::Stats { expect } => {
            let expected = expect
                .as_deref()
                .map(Fingerprint::from_hex)
                .transpose()
                .map_err(|e| anyhow::anyhow!("Invalid fingerprint: {}", e))?;

            let trie = store::load(&index)?;
            let compressed = std::fs::metadata(&index)?.len();
            let fingerprint = trie.fingerprint()?;
            output(
                cli.format,
                &serde_json::json!({
                    "index": index.display().to_string(),
                    "nodes": trie.size(),
                    "size_bytes": trie.size_bytes(),
                    "file_bytes": compressed,
                    "fingerprint": fingerprint.to_hex()
                }),
            )?;

            if let Some(expected) = expected {
                if expected != fingerprint {
                    anyhow::bail!(
                        "Fingerprint mismatch: expected {}, found {}",
                        expected.short(),
                        fingerprint.short()
                    );
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "wordtrie=debug" } else { "wordtrie=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output(format: OutputFormat, value: &serde_json::Value) -> anyhow::Result<()> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Text => serde_json::to_string_pretty(value)?,
    };
    println!("{}", text);
    Ok(())
}
