use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::report::summary::{SummaryOptions, TokenEscaping};

/// Defaults for report runs, loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags
/// override anything set here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Words per topic in summaries (TOPIC_REPORT_NUM_WORDS, default 20)
    pub num_words: usize,
    /// Token escaping in summaries (TOPIC_REPORT_ESCAPE, `raw` or `json`)
    pub escaping: TokenEscaping,
    /// Model snapshot used when no --model flag is given (TOPIC_REPORT_MODEL)
    pub model_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = SummaryOptions::default();

        let num_words = match lookup("TOPIC_REPORT_NUM_WORDS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("TOPIC_REPORT_NUM_WORDS must be a non-negative integer, got '{raw}'"))?,
            None => defaults.num_words,
        };

        let escaping = match lookup("TOPIC_REPORT_ESCAPE") {
            Some(raw) => raw
                .trim()
                .parse::<TokenEscaping>()
                .map_err(|e| anyhow::anyhow!("TOPIC_REPORT_ESCAPE: {e}"))?,
            None => defaults.escaping,
        };

        Ok(Self {
            num_words,
            escaping,
            model_path: lookup("TOPIC_REPORT_MODEL")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Resolve the model path from a flag or the configured default.
    pub fn require_model(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.model_path.clone()) {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "No model snapshot given. Pass --model <PATH> or set TOPIC_REPORT_MODEL."
            ),
        }
    }

    /// Summary options with optional flag overrides applied.
    pub fn summary_options(
        &self,
        num_words: Option<usize>,
        escaping: Option<TokenEscaping>,
    ) -> SummaryOptions {
        SummaryOptions {
            num_words: num_words.unwrap_or(self.num_words),
            escaping: escaping.unwrap_or(self.escaping),
        }
    }
}
