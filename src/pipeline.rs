use crate::{
    config::Config,
    document::Document,
    error::Result,
    frequency::FrequencyDistribution,
    report::{rows_for_document, Report},
    scanner::Scanner,
    stopwords::StopwordSet,
    token::{split_sentences, tokenize},
    writer::Writer,
};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Statistics collected during pipeline execution.
#[derive(Debug, Clone)]
pub struct PipelineStats {
    /// Number of documents analyzed
    pub documents: usize,

    /// Number of stopwords loaded
    pub stopwords: usize,

    /// Tokens counted across all documents, after stopword removal
    pub total_tokens: usize,

    /// Sentences found across all documents
    pub total_sentences: usize,

    /// Rows in the report
    pub rows: usize,

    /// Example sentences placed in the report
    pub sampled_sentences: usize,

    /// Total execution time
    pub duration: Duration,

    /// Time spent loading stopwords and documents
    pub load_duration: Duration,

    /// Time spent analyzing documents
    pub analyze_duration: Duration,

    /// Time spent writing the workbook
    pub write_duration: Duration,

    /// Workbook path
    pub output_file: String,

    /// Whether the workbook was written
    pub written: bool,
}

/// Width of the summary box between its borders.
const SUMMARY_WIDTH: usize = 55;

impl PipelineStats {
    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!();
        for line in self.summary_lines() {
            println!("{line}");
        }
        println!();
    }

    /// Lines of the boxed summary, each padded to the same width.
    fn summary_lines(&self) -> Vec<String> {
        let rule = "═".repeat(SUMMARY_WIDTH);
        let row = |text: String| format!("║{text:<SUMMARY_WIDTH$}║");
        let count = |label: &str, value: usize| row(format!(" {label:<22}{value:>8}"));
        let seconds = |label: &str, value: Duration| {
            row(format!("   - {label:<18}{:>8.2}s", value.as_secs_f64()))
        };

        let output = format!(
            "{}{}",
            self.output_file,
            if self.written { "" } else { " (not written)" }
        );

        let mut lines = vec![
            format!("╔{rule}╗"),
            row(format!("{:^SUMMARY_WIDTH$}", "Interesting Words Summary")),
            format!("╠{rule}╣"),
            count("Documents:", self.documents),
            count("Stopwords:", self.stopwords),
            count("Tokens Counted:", self.total_tokens),
            count("Sentences:", self.total_sentences),
            row(String::new()),
            count("Report Rows:", self.rows),
            count("Example Sentences:", self.sampled_sentences),
            row(" Output File:".to_string()),
        ];

        // long paths wrap onto as many rows as they need
        let chunk = SUMMARY_WIDTH - 3;
        let chars: Vec<char> = output.chars().collect();
        for piece in chars.chunks(chunk) {
            lines.push(row(format!("   {}", piece.iter().collect::<String>())));
        }

        lines.extend([
            row(String::new()),
            row(" Timing Breakdown:".to_string()),
            seconds("Loading:", self.load_duration),
            seconds("Analyzing:", self.analyze_duration),
            seconds("Writing:", self.write_duration),
            seconds("Total:", self.duration),
            format!("╚{rule}╝"),
        ]);
        lines
    }
}

/// Per-document counters gathered during analysis.
#[derive(Debug, Default, Clone, Copy)]
struct AnalysisCounts {
    tokens: usize,
    sentences: usize,
}

/// Main pipeline orchestrator: corpus in, workbook out.
pub struct Pipeline {
    config: Config,
    scanner: Scanner,
    writer: Writer,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let scanner = Scanner::new(&config)?;
        let writer = Writer::new(&config);

        Ok(Self {
            config,
            scanner,
            writer,
        })
    }

    /// Executes the complete pipeline and returns statistics.
    ///
    /// # Process
    ///
    /// 1. **Load**: Reads the stopword list, then every document of the corpus
    /// 2. **Analyze**: Counts words per document and samples example sentences
    /// 3. **Write**: Saves the report as a spreadsheet
    ///
    /// The stopword list is loaded first, so a missing or empty list aborts
    /// the run before any document is read.
    ///
    /// # Errors
    ///
    /// Returns an error if any stage fails. Nothing is written on failure.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use interesting_words::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .input_dir("./test_docs")
    ///     .build()?;
    ///
    /// let stats = Pipeline::new(config)?.run()?;
    /// stats.print_summary();
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(skip(self), fields(input_dir = %self.config.input_dir.display()))]
    pub fn run(self) -> Result<PipelineStats> {
        let start_time = Instant::now();

        info!("Starting pipeline execution");

        // Stage 1: Loading
        info!("Stage 1/3: Loading stopwords and documents...");
        let load_start = Instant::now();
        let stopwords = StopwordSet::load(&self.config.stopwords_path)?;
        let documents = self.scanner.scan()?;
        let load_duration = load_start.elapsed();

        info!(
            "✓ Loaded {} stopwords and {} documents in {:.2}s",
            stopwords.len(),
            documents.len(),
            load_duration.as_secs_f64()
        );

        // Stage 2: Analysis
        info!("Stage 2/3: Analyzing documents...");
        let analyze_start = Instant::now();
        let mut report = Report::new();
        let mut counts = AnalysisCounts::default();
        for document in &documents {
            let doc_counts = self.analyze(document, &stopwords, &mut report)?;
            counts.tokens += doc_counts.tokens;
            counts.sentences += doc_counts.sentences;
        }
        let analyze_duration = analyze_start.elapsed();

        if report.is_empty() {
            warn!("No words left in any document after stopword removal");
        }

        info!(
            "✓ Built {} report rows in {:.2}s",
            report.len(),
            analyze_duration.as_secs_f64()
        );

        // Stage 3: Writing
        let write_start = Instant::now();
        let written = if self.config.dry_run {
            warn!("Dry run mode enabled - skipping spreadsheet write");
            print_dry_run_rows(&report);
            false
        } else {
            info!("Stage 3/3: Writing spreadsheet...");
            self.writer.write_report(&report)?;
            true
        };
        let write_duration = write_start.elapsed();

        let total_duration = start_time.elapsed();

        let stats = PipelineStats {
            documents: documents.len(),
            stopwords: stopwords.len(),
            total_tokens: counts.tokens,
            total_sentences: counts.sentences,
            rows: report.len(),
            sampled_sentences: report.sentence_count(),
            duration: total_duration,
            load_duration,
            analyze_duration,
            write_duration,
            output_file: self.writer.output_file().display().to_string(),
            written,
        };

        info!(
            "✓ Pipeline completed successfully in {:.2}s",
            total_duration.as_secs_f64()
        );

        Ok(stats)
    }

    /// Analyzes one document and appends its rows to `report`.
    fn analyze(
        &self,
        document: &Document,
        stopwords: &StopwordSet,
        report: &mut Report,
    ) -> Result<AnalysisCounts> {
        if document.is_empty() {
            warn!("{} is empty", document.name);
        }

        let sentences = split_sentences(&document.content);
        let distribution =
            FrequencyDistribution::from_tokens(tokenize(&document.content, stopwords));
        let top_words = distribution.most_common(self.config.top_words);

        if top_words.len() < self.config.top_words {
            debug!(
                "{} has only {} distinct words after stopword removal",
                document.name,
                distribution.distinct()
            );
        }

        let rows = rows_for_document(
            top_words,
            &document.name,
            &sentences,
            self.config.sentences_per_word,
        )?;

        debug!(
            "{} ({} bytes): {} tokens, {} distinct, {} sentences, {} rows",
            document.name,
            document.size_bytes(),
            distribution.total(),
            distribution.distinct(),
            sentences.len(),
            rows.len()
        );
        report.extend(rows);

        Ok(AnalysisCounts {
            tokens: distribution.total(),
            sentences: sentences.len(),
        })
    }
}

/// Prints the report rows for dry run mode.
fn print_dry_run_rows(report: &Report) {
    println!("\n╔═══════════════════════════════════════════════════════╗");
    println!("║                 Dry Run Report                        ║");
    println!("╚═══════════════════════════════════════════════════════╝");
    for row in report.rows() {
        println!("{} | {}", row.word_label(), row.document);
        for sentence in &row.sentences {
            println!("    - {sentence}");
        }
    }
    println!("\n⚠ No spreadsheet was written (dry run mode)\n");
}
