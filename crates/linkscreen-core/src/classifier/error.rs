//! Faults raised by the classifier.
//!
//! These are distinct from classification outcomes: a malformed or
//! blacklisted URL is a [`super::Verdict`], not an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Threshold is NaN, infinite, or outside `[0, 1]`.
    #[error("reputation threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),
    /// A reputation lookup task panicked or was cancelled.
    #[error("reputation lookup task failed: {0}")]
    LookupTask(#[from] tokio::task::JoinError),
    /// A batch finished without a verdict for some position.
    #[error("no verdict produced for URL at index {0}")]
    MissingVerdict(usize),
}
