use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use topic_report::config::Config;
use topic_report::model::fixture::StaticTopicModel;
use topic_report::report::summary::{self, TokenEscaping};
use topic_report::report::{self as reports, terminal, ReportKind};

/// topic-report: render summaries of a trained topic model.
///
/// Reads a JSON model snapshot and writes each topic's smoothing
/// coefficient and highest-weighted words.
#[derive(Parser)]
#[command(name = "topic-report", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the topic summary document
    Summary {
        /// Model snapshot (defaults to TOPIC_REPORT_MODEL)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Words per topic (defaults to TOPIC_REPORT_NUM_WORDS, then 20)
        #[arg(long)]
        num_words: Option<usize>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Token escaping: raw or json
        #[arg(long)]
        escape: Option<TokenEscaping>,
    },

    /// Show the topic summary in the terminal
    Show {
        /// Model snapshot (defaults to TOPIC_REPORT_MODEL)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Words per topic (defaults to TOPIC_REPORT_NUM_WORDS, then 20)
        #[arg(long)]
        num_words: Option<usize>,
    },

    /// Write any report from the reporting contract
    Export {
        /// Report kind (summary, sampling-state, document-topics, ...)
        #[arg(long)]
        kind: ReportKind,

        /// Model snapshot (defaults to TOPIC_REPORT_MODEL)
        #[arg(long)]
        model: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so a report on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topic_report=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Summary {
            model,
            num_words,
            output,
            escape,
        } => {
            let model = StaticTopicModel::load(&config.require_model(model)?)?;
            let options = config.summary_options(num_words, escape);
            write_to(output, |sink| {
                reports::write_report(ReportKind::Summary, &model, &options, sink)
            })?;
            info!(num_words = options.num_words, "Topic summary written");
        }

        Commands::Show { model, num_words } => {
            let model = StaticTopicModel::load(&config.require_model(model)?)?;
            let options = config.summary_options(num_words, None);
            let summaries = summary::summarize(&model, options.num_words)?;
            terminal::display_summaries(&summaries);
        }

        Commands::Export {
            kind,
            model,
            output,
        } => {
            let model = StaticTopicModel::load(&config.require_model(model)?)?;
            let options = config.summary_options(None, None);
            write_to(output, |sink| reports::write_report(kind, &model, &options, sink))?;
            info!(%kind, "Report written");
        }
    }

    Ok(())
}

/// Run `write` against the output file, or stdout when no path is given.
fn write_to<F>(output: Option<PathBuf>, write: F) -> Result<()>
where
    F: FnOnce(&mut dyn io::Write) -> topic_report::error::ReportResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut sink = BufWriter::new(file);
            write(&mut sink).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut sink = stdout.lock();
            write(&mut sink).context("failed to write report to stdout")
        }
    }
}
