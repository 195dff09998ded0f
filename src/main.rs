use anyhow::Context;
use clap::Parser;
use interesting_words::{Config, Pipeline};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "interesting-words",
    version,
    author,
    about = "Find the most frequent words of each document and write them to a spreadsheet",
    long_about = "Find the most frequent words of each document and write them to a spreadsheet.\n\n\
    Every *.txt file in the input directory is tokenized, stopwords are removed, and the \
    five most frequent words are reported together with up to three example sentences \
    each. The result is a single-sheet Excel workbook.\n\n\
    USAGE EXAMPLES:\n  \
      # Analyze ./test_docs with ./stopwords.txt into ./InterestingWords.xlsx\n  \
      interesting-words\n\n  \
      # Analyze another corpus\n  \
      interesting-words --dir ./corpus --stopwords ./english.txt --out ./Summary\n\n  \
      # Preview without writing the workbook\n  \
      interesting-words --dry-run"
)]
struct Cli {
    /// Directory containing the documents to analyze
    #[arg(short, long, default_value = "test_docs", value_name = "PATH")]
    dir: PathBuf,

    /// Newline-delimited stopword list
    #[arg(short, long, default_value = "stopwords.txt", value_name = "FILE")]
    stopwords: PathBuf,

    /// Output workbook (".xlsx" is appended if missing)
    #[arg(short, long, default_value = "InterestingWords.xlsx", value_name = "FILE")]
    out: PathBuf,

    /// File-name glob selecting documents
    #[arg(long, default_value = "*.txt")]
    pattern: String,

    /// Words reported per document
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// Example sentences per word
    #[arg(long, default_value_t = 3)]
    sentences: usize,

    /// Keep a timestamped copy of an existing workbook
    #[arg(long)]
    backup: bool,

    /// Dry run (print the report instead of writing it)
    #[arg(long)]
    dry_run: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose)?;

    let config = Config::builder()
        .input_dir(cli.dir)
        .stopwords_path(cli.stopwords)
        .output_file(cli.out)
        .file_pattern(cli.pattern)
        .top_words(cli.top)
        .sentences_per_word(cli.sentences)
        .backup_existing(cli.backup)
        .dry_run(cli.dry_run)
        .build()
        .context("Failed to build configuration")?;

    let stats = Pipeline::new(config)
        .context("Failed to create pipeline")?
        .run()
        .context("Pipeline execution failed")?;

    stats.print_summary();

    Ok(())
}

fn setup_tracing(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => EnvFilter::new("interesting_words=info"),
        1 => EnvFilter::new("interesting_words=debug"),
        _ => EnvFilter::new("interesting_words=trace"),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(())
}
