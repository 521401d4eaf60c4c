//! wordstat: word frequency statistics from the command line.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use serde::Serialize;

use wordstat::{WordStatConfig, WordStatistics};

#[derive(Parser)]
#[command(name = "wordstat", version, about = "Word frequency, rank and collocation statistics")]
struct Cli {
    /// Text file to analyze
    #[arg(short, long, global = true, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Inline text; repeat for several strings (joined end to end)
    #[arg(short, long, global = true)]
    text: Vec<String>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Number of times a word occurs
    Count { word: String },
    /// Frequency rank of a word (1 = most frequent)
    Rank { word: String },
    /// The K most frequent words
    Most {
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },
    /// The K least frequent words
    Least {
        #[arg(allow_negative_numbers = true)]
        k: i64,
    },
    /// The K most frequent words after (or before) the first BASE
    Collocations {
        #[arg(allow_negative_numbers = true)]
        k: i64,
        base: String,
        /// Look at the words preceding BASE instead of following it
        #[arg(long)]
        precede: bool,
    },
    /// Totals plus the K most and least frequent words
    Summary {
        #[arg(default_value_t = 10, allow_negative_numbers = true)]
        k: i64,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => WordStatConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => WordStatConfig::default(),
    };

    let stats = match (&cli.file, cli.text.is_empty()) {
        (Some(path), _) => WordStatistics::from_file_with_config(path, &config)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, false) => WordStatistics::from_strings_with_config(&cli.text, &config)?,
        (None, true) => bail!("no input: pass --file PATH or --text STRING"),
    };

    match cli.command {
        Command::Count { word } => emit(cli.json, &stats.word_count(&word.to_lowercase())),
        Command::Rank { word } => emit(cli.json, &stats.word_rank(&word.to_lowercase())?),
        Command::Most { k } => {
            let k = WordStatistics::checked_k(k)?;
            emit_words(cli.json, &stats.most_common_words(k))
        }
        Command::Least { k } => {
            let k = WordStatistics::checked_k(k)?;
            emit_words(cli.json, &stats.least_common_words(k))
        }
        Command::Collocations { k, base, precede } => {
            let k = WordStatistics::checked_k(k)?;
            let words = stats.most_common_collocations(k, &base.to_lowercase(), precede);
            emit_words(cli.json, &words)
        }
        Command::Summary { k } => {
            let summary = stats.summary(WordStatistics::checked_k(k)?);
            if cli.json {
                return print_json(&summary);
            }
            println!("total words:    {}", summary.total_words);
            println!("distinct words: {}", summary.distinct_words);
            println!("most common:");
            for wf in &summary.most_common {
                println!("  {:>6}  {}", wf.count, wf.word);
            }
            println!("least common:");
            for wf in &summary.least_common {
                println!("  {:>6}  {}", wf.count, wf.word);
            }
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn emit<T: Serialize + std::fmt::Display>(json: bool, value: &T) -> anyhow::Result<()> {
    if json {
        return print_json(value);
    }
    println!("{value}");
    Ok(())
}

fn emit_words(json: bool, words: &[String]) -> anyhow::Result<()> {
    if json {
        print_json(words)?;
    } else {
        for word in words {
            println!("{word}");
        }
    }
    Ok(())
}
