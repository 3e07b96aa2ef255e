use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use rhetoric::analysis::{keyword, summary};
use rhetoric::config::Config;
use rhetoric::corpus::document::Corpus;
use rhetoric::corpus::ingest::CsvCorpusSource;
use rhetoric::corpus::traits::CorpusSource;
use rhetoric::lexicon::english::EnglishLexicon;
use rhetoric::lexicon::traits::LexiconProvider;
use rhetoric::output::{enriched, markdown, terminal};
use rhetoric::pipeline::analyze::Pipeline;

/// Rhetoric: sentiment and topic analysis for political speech corpora.
///
/// Normalizes each speech, scores its sentiment, and fits a topic model
/// shared across the whole corpus.
#[derive(Parser)]
#[command(name = "rhetoric", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Corpus options shared by every command that reads speeches.
#[derive(clap::Args)]
struct CorpusArgs {
    /// Speech CSV (overrides RHETORIC_CORPUS_PATH)
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Strip [Applause]-style annotations and speaker attributions
    #[arg(long)]
    clean_transcripts: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and write the enriched CSV and topic report
    Analyze {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Output directory (overrides RHETORIC_OUTPUT_DIR)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Number of topics to fit
        #[arg(long)]
        topics: Option<usize>,

        /// Terms to report per topic
        #[arg(long)]
        words: Option<usize>,

        /// Random seed for the topic model
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score the sentiment of a single text
    Sentiment {
        /// The text to score
        text: String,
    },

    /// Track how often a keyword is used over time
    Keyword {
        /// Case-insensitive keyword or phrase
        keyword: String,

        /// Only include speeches by this speaker
        #[arg(long)]
        speaker: Option<String>,

        #[command(flatten)]
        corpus: CorpusArgs,
    },

    /// Per-speaker sentiment summary
    Speakers {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rhetoric=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            corpus,
            output,
            topics,
            words,
            seed,
        } => {
            if let Some(dir) = output {
                config.output_dir = dir;
            }
            if let Some(topics) = topics {
                config.analysis.num_topics = topics;
            }
            if let Some(words) = words {
                config.analysis.words_per_topic = words;
            }
            if let Some(seed) = seed {
                config.analysis.random_seed = seed;
            }

            let lexicon = load_lexicon(&config)?;
            let pipeline = Pipeline::new(config.analysis.clone(), lexicon)?;
            let corpus = load_corpus(&mut config, &corpus)?;

            let spinner = spinner(&format!(
                "Analyzing {} speeches ({} topics)...",
                corpus.len(),
                config.analysis.num_topics
            ))?;
            let result = pipeline.run(&corpus);
            spinner.finish_and_clear();
            let result = result.context("Analysis failed")?;

            terminal::display_topic_report(&result.report, &result.outcome());
            terminal::display_extremes(summary::sentiment_extremes(&result.documents));

            fs::create_dir_all(&config.output_dir).with_context(|| {
                format!("Could not create {}", config.output_dir.display())
            })?;
            let csv_path = config.output_dir.join("enriched.csv");
            let md_path = config.output_dir.join("topics.md");
            let json_path = config.output_dir.join("topics.json");

            enriched::write_enriched_csv(&csv_path, &result.documents)?;
            markdown::write_topic_report(
                &md_path,
                &result.report,
                &result.outcome(),
                result.documents.len(),
            )?;
            fs::write(&json_path, serde_json::to_string_pretty(&result.report)?)
                .with_context(|| format!("Could not write {}", json_path.display()))?;

            info!(
                enriched = %csv_path.display(),
                report = %md_path.display(),
                "Wrote analysis output"
            );
            println!("Enriched speeches: {}", csv_path.display());
            println!("Topic report:      {}", md_path.display());
        }

        Commands::Sentiment { text } => {
            let lexicon = load_lexicon(&config)?;
            let pipeline = Pipeline::new(config.analysis.clone(), lexicon)?;
            let result = pipeline.scorer().polarity_scores(&text);
            terminal::display_sentiment(&result);
        }

        Commands::Keyword {
            keyword: term,
            speaker,
            corpus,
        } => {
            if term.trim().is_empty() {
                anyhow::bail!("Keyword must not be blank");
            }
            let corpus = load_corpus(&mut config, &corpus)?;
            if let Some(name) = speaker.as_deref() {
                if !corpus.speakers().contains(&name) {
                    println!(
                        "{}",
                        format!("No speeches by '{name}'. Known speakers:").yellow()
                    );
                    for known in corpus.speakers() {
                        println!("  {known}");
                    }
                    return Ok(());
                }
            }
            let timeline = keyword::keyword_timeline(&corpus, &term, speaker.as_deref());
            terminal::display_keyword_timeline(&term, &timeline);
        }

        Commands::Speakers { corpus } => {
            let lexicon = load_lexicon(&config)?;
            let pipeline = Pipeline::new(config.analysis.clone(), lexicon)?;
            let corpus = load_corpus(&mut config, &corpus)?;

            let spinner = spinner(&format!("Scoring {} speeches...", corpus.len()))?;
            let documents = pipeline.prepare(&corpus);
            spinner.finish_and_clear();

            terminal::display_speaker_summaries(&summary::speaker_summaries(&documents));
        }
    }

    Ok(())
}

/// Built-in lexicon, overlaid with the configured VADER-format file if any.
fn load_lexicon(config: &Config) -> Result<Arc<dyn LexiconProvider>> {
    let mut lexicon = EnglishLexicon::new();
    if let Some(path) = &config.lexicon_path {
        lexicon = lexicon
            .with_valence_file(path)
            .with_context(|| format!("Could not load lexicon {}", path.display()))?;
        info!(
            path = %path.display(),
            entries = lexicon.valence_count(),
            "Using lexicon overlay"
        );
    }
    Ok(Arc::new(lexicon))
}

fn load_corpus(config: &mut Config, args: &CorpusArgs) -> Result<Corpus> {
    if let Some(path) = &args.corpus {
        config.corpus_path = path.clone();
    }
    config.require_corpus()?;

    let corpus = CsvCorpusSource::new(&config.corpus_path)
        .with_transcript_cleaning(args.clean_transcripts)
        .load()
        .with_context(|| format!("Could not load corpus {}", config.corpus_path.display()))?;
    Ok(corpus)
}

fn spinner(message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}
