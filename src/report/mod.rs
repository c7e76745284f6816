// Reports over a trained topic model.
//
// The reporting contract names several outputs. Only the topic summary is
// built; asking for any other kind fails with ReportError::NotImplemented.

pub mod summary;
pub mod terminal;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{ReportError, ReportResult};
use crate::model::traits::TopicModel;

pub use summary::{SummaryOptions, TopicSummary};

/// Every output the reporting contract knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Per-topic smoothing and top words
    Summary,
    /// Full sampling state (every token's topic assignment)
    SamplingState,
    /// Topic proportions per document
    DocumentTopics,
    /// Dense topic-by-document matrix
    TopicDocumentMatrix,
    /// Word type by topic count table
    TypeTopicCounts,
    /// Unnormalized topic-word weights
    WordWeights,
    /// Multi-word phrases per topic
    TopicPhrases,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        ReportKind::Summary,
        ReportKind::SamplingState,
        ReportKind::DocumentTopics,
        ReportKind::TopicDocumentMatrix,
        ReportKind::TypeTopicCounts,
        ReportKind::WordWeights,
        ReportKind::TopicPhrases,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportKind::Summary => "summary",
            ReportKind::SamplingState => "sampling-state",
            ReportKind::DocumentTopics => "document-topics",
            ReportKind::TopicDocumentMatrix => "topic-document-matrix",
            ReportKind::TypeTopicCounts => "type-topic-counts",
            ReportKind::WordWeights => "word-weights",
            ReportKind::TopicPhrases => "topic-phrases",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = ReportKind::ALL.iter().map(|k| k.as_str()).collect();
                format!("unknown report kind '{s}' (expected one of: {})", known.join(", "))
            })
    }
}

/// Write the report of the given kind to `sink`.
pub fn write_report<M, W>(
    kind: ReportKind,
    model: &M,
    options: &SummaryOptions,
    sink: &mut W,
) -> ReportResult<()>
where
    M: TopicModel + ?Sized,
    W: Write + ?Sized,
{
    match kind {
        ReportKind::Summary => summary::write_summary(model, options, sink),
        other => Err(ReportError::NotImplemented(other)),
    }
}
