// Topic summary serialization.
//
// For each topic, in index order, emits its smoothing coefficient and its
// top words as one list-shaped text document:
//
//   [{"topic":0, "smoothing":5.000000, "words":{"cat": 0.300000,"dog": 0.100000}},{"topic":1, ...}]
//
// The text is assembled by hand, not through a JSON serializer. Numbers are
// always fixed-point with six decimals. The whole document is built in memory
// before anything is written, so a failed lookup leaves the sink untouched.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ReportError, ReportResult};
use crate::model::traits::TopicModel;

/// How word tokens are written inside their quotes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenEscaping {
    /// Tokens verbatim. A token containing `"` or `\` makes the output
    /// unparseable as JSON.
    #[default]
    Raw,
    /// Tokens escaped as JSON string contents.
    Json,
}

impl FromStr for TokenEscaping {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(TokenEscaping::Raw),
            "json" => Ok(TokenEscaping::Json),
            other => Err(format!(
                "unknown token escaping '{other}' (expected raw or json)"
            )),
        }
    }
}

/// Parameters of a summary report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Maximum words emitted per topic
    pub num_words: usize,
    pub escaping: TokenEscaping,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            num_words: 20,
            escaping: TokenEscaping::Raw,
        }
    }
}

/// One topic's entry in the summary.
#[derive(Debug, Clone, PartialEq)]
pub struct TopicSummary {
    pub topic: usize,
    pub smoothing: f64,
    /// `(token, weight)` in the model's ranked order, highest weight first
    pub words: Vec<(String, f64)>,
}

/// Build the summary of every topic, keeping at most `num_words` words each.
///
/// `ranked_words` is read once per topic. Fails on the first word id the
/// vocabulary cannot resolve.
pub fn summarize<M>(model: &M, num_words: usize) -> ReportResult<Vec<TopicSummary>>
where
    M: TopicModel + ?Sized,
{
    let vocabulary = model.vocabulary();

    (0..model.num_topics())
        .map(|topic| -> ReportResult<TopicSummary> {
            let words = model
                .ranked_words(topic)
                .into_iter()
                .take(num_words)
                .map(|(word_id, weight)| {
                    vocabulary
                        .lookup(word_id)
                        .map(|token| (token.to_string(), weight))
                        .ok_or(ReportError::Lookup { topic, word_id })
                })
                .collect::<ReportResult<Vec<_>>>()?;

            Ok(TopicSummary {
                topic,
                smoothing: model.smoothing(topic),
                words,
            })
        })
        .collect()
}

/// Render the summary document, without a trailing newline.
pub fn render_summary<M>(model: &M, options: &SummaryOptions) -> ReportResult<String>
where
    M: TopicModel + ?Sized,
{
    let summaries = summarize(model, options.num_words)?;
    Ok(SummaryDocument::new(&summaries, options.escaping).to_string())
}

/// Write the summary document plus one trailing newline to `sink`.
pub fn write_summary<M, W>(model: &M, options: &SummaryOptions, sink: &mut W) -> ReportResult<()>
where
    M: TopicModel + ?Sized,
    W: Write + ?Sized,
{
    let mut text = render_summary(model, options)?;
    text.push('\n');

    sink.write_all(text.as_bytes())?;
    sink.flush()?;

    debug!(
        topics = model.num_topics(),
        num_words = options.num_words,
        bytes = text.len(),
        "Wrote topic summary"
    );
    Ok(())
}

/// Six digits after the decimal point, never scientific notation.
pub fn format_weight(value: f64) -> String {
    format!("{value:.6}")
}

/// Display adapter that renders already-built summaries as the document text.
pub struct SummaryDocument<'a> {
    summaries: &'a [TopicSummary],
    escaping: TokenEscaping,
}

impl<'a> SummaryDocument<'a> {
    pub fn new(summaries: &'a [TopicSummary], escaping: TokenEscaping) -> Self {
        Self {
            summaries,
            escaping,
        }
    }

    fn write_token(&self, f: &mut fmt::Formatter<'_>, token: &str) -> fmt::Result {
        match self.escaping {
            TokenEscaping::Raw => write!(f, "\"{token}\""),
            TokenEscaping::Json => {
                let quoted = serde_json::to_string(token).map_err(|_| fmt::Error)?;
                f.write_str(&quoted)
            }
        }
    }
}

impl fmt::Display for SummaryDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, summary) in self.summaries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(
                f,
                "{{\"topic\":{}, \"smoothing\":{}, \"words\":{{",
                summary.topic,
                format_weight(summary.smoothing)
            )?;
            for (j, (token, weight)) in summary.words.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                self.write_token(f, token)?;
                write!(f, ": {}", format_weight(*weight))?;
            }
            f.write_str("}}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_weight_fixed_point() {
        assert_eq!(format_weight(5.0), "5.000000");
        assert_eq!(format_weight(0.3), "0.300000");
        assert_eq!(format_weight(1e-9), "0.000000");
        assert_eq!(format_weight(1e7), "10000000.000000");
        assert_eq!(format_weight(-0.25), "-0.250000");
    }

    #[test]
    fn test_empty_document() {
        let doc = SummaryDocument::new(&[], TokenEscaping::Raw);
        assert_eq!(doc.to_string(), "[]");
    }

    #[test]
    fn test_record_with_no_words() {
        let summaries = vec![TopicSummary {
            topic: 3,
            smoothing: 0.5,
            words: vec![],
        }];
        let doc = SummaryDocument::new(&summaries, TokenEscaping::Raw);
        assert_eq!(
            doc.to_string(),
            "[{\"topic\":3, \"smoothing\":0.500000, \"words\":{}}]"
        );
    }

    #[test]
    fn test_raw_tokens_are_verbatim() {
        let summaries = vec![TopicSummary {
            topic: 0,
            smoothing: 1.0,
            words: vec![("say \"hi\"".to_string(), 0.5)],
        }];
        let doc = SummaryDocument::new(&summaries, TokenEscaping::Raw);
        assert_eq!(
            doc.to_string(),
            "[{\"topic\":0, \"smoothing\":1.000000, \"words\":{\"say \"hi\"\": 0.500000}}]"
        );
    }

    #[test]
    fn test_json_tokens_are_escaped() {
        let summaries = vec![TopicSummary {
            topic: 0,
            smoothing: 1.0,
            words: vec![("a\"b\\c".to_string(), 0.5)],
        }];
        let doc = SummaryDocument::new(&summaries, TokenEscaping::Json);
        assert_eq!(
            doc.to_string(),
            "[{\"topic\":0, \"smoothing\":1.000000, \"words\":{\"a\\\"b\\\\c\": 0.500000}}]"
        );
    }

    #[test]
    fn test_token_escaping_from_str() {
        assert_eq!("raw".parse::<TokenEscaping>(), Ok(TokenEscaping::Raw));
        assert_eq!("json".parse::<TokenEscaping>(), Ok(TokenEscaping::Json));
        assert!("xml".parse::<TokenEscaping>().is_err());
    }
}
