//! Command-line front end over the clipboard history core.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tw_app::usecases::{GetSettings, SearchClipHistory};
use tw_app::SharedClipHistory;
use tw_core::clipboard::{ClipHistory, SearchKeyBuilder};
use tw_core::config::AppConfig;
use tw_core::ports::PLACEHOLDER;
use tw_infra::{load_initials_table, FileSettingsRepository};

#[derive(Debug, Parser)]
#[command(name = "ibus-tweaker")]
#[command(about = "Clipboard history search with pinyin initials", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to config.toml in the config directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Initials table (charmap, or TSV when the extension is .tsv)
    #[arg(short, long, global = true)]
    pub table: Option<PathBuf>,

    /// Debug logging for the workspace crates
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the search key of TEXT
    Key {
        text: String,
    },
    /// Record lines as clipboard history, then list entries matching QUERY
    Search {
        /// Read lines from FILE instead of stdin, oldest first
        #[arg(short, long)]
        from: Option<PathBuf>,
        /// Fuzzy query (empty lists the whole history)
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the effective settings as JSON
    Settings {
        /// Settings file (defaults to the configured settings path)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },
}

pub async fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Key { text } => {
            let keys = key_builder(cli.table, config).await?;
            write_key(&keys, &text, &mut out)?;
        }
        Commands::Search { from, query } => {
            let keys = key_builder(cli.table, config).await?;
            let capacity = GetSettings::new(Arc::new(FileSettingsRepository::new(
                &config.settings_path,
            )))
            .execute()
            .await?
            .clip_history
            .capacity;
            let history = SharedClipHistory::new(ClipHistory::with_capacity(capacity, keys));

            let recorded = match from {
                Some(path) => {
                    let file = std::fs::File::open(&path)
                        .with_context(|| format!("open {} failed", path.display()))?;
                    record_lines(&history, std::io::BufReader::new(file))?
                }
                None => record_lines(&history, std::io::stdin().lock())?,
            };
            info!(recorded, len = history.len(), "Recorded input lines");

            write_matches(&history, &query, &mut out)?;
        }
        Commands::Settings { path } => {
            let path = path.unwrap_or_else(|| config.settings_path.clone());
            let settings = GetSettings::new(Arc::new(FileSettingsRepository::new(path)))
                .execute()
                .await?;
            writeln!(out, "{}", serde_json::to_string_pretty(&settings)?)?;
        }
    }

    Ok(())
}

async fn key_builder(table: Option<PathBuf>, config: &AppConfig) -> Result<SearchKeyBuilder> {
    let path = table.unwrap_or_else(|| config.initials_table_path.clone());
    let table = load_initials_table(&path).await?;
    Ok(SearchKeyBuilder::new(Arc::new(table)))
}

/// Writes the search key of `text`, placeholders shown as `\0`.
pub fn write_key(keys: &SearchKeyBuilder, text: &str, out: &mut impl Write) -> Result<()> {
    let key = keys.build_key(text).replace(PLACEHOLDER, "\\0");
    writeln!(out, "{key}")?;
    Ok(())
}

/// Records every line of `input` in order; returns how many lines were read.
pub fn record_lines(history: &SharedClipHistory, input: impl BufRead) -> Result<usize> {
    let mut count = 0;
    for line in input.lines() {
        history.record(&line.context("read input line failed")?);
        count += 1;
    }
    Ok(count)
}

/// Writes `index<TAB>display` for each entry matching `query`.
pub fn write_matches(history: &SharedClipHistory, query: &str, out: &mut impl Write) -> Result<()> {
    let view = SearchClipHistory::new(history.clone()).execute(query);
    for (index, entry) in view.iter().enumerate() {
        writeln!(out, "{index}\t{}", entry.display)?;
    }
    Ok(())
}
