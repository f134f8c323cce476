//! Pluggable host reputation sources.
//!
//! The classifier's last stage asks a [`ReputationSource`] for a score in
//! `[0, 1)` and compares it against its threshold. The source is injected so
//! tests can hold the score fixed and a real intelligence feed can replace
//! the placeholder without touching the classifier.

mod random;
mod table;

pub use random::RandomReputation;
pub use table::{FixedReputation, TableReputation};

/// Scores a host. Higher is more trustworthy.
///
/// Implementations may block (e.g. on network I/O); the concurrent classifier
/// path runs each lookup on the blocking pool under a timeout.
pub trait ReputationSource: Send + Sync {
    fn score(&self, host: &str) -> f64;
}

impl<F> ReputationSource for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn score(&self, host: &str) -> f64 {
        self(host)
    }
}
