// Report errors.
//
// Library code returns these typed errors; the binary wraps them in anyhow
// with context like the rest of the glue.

use thiserror::Error;

use crate::report::ReportKind;

/// Result alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors that abort a report. None of them are retried.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A ranked word id has no vocabulary entry.
    #[error("vocabulary has no token for word id {word_id} (topic {topic})")]
    Lookup { topic: usize, word_id: u32 },

    /// The destination rejected the write.
    #[error("failed to write report: {0}")]
    Sink(#[from] std::io::Error),

    /// The requested report is part of the contract but not built.
    #[error("{0} report is not implemented")]
    NotImplemented(ReportKind),
}
