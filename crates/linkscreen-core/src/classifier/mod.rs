//! URL safety classifier.
//!
//! Each candidate goes through three stages in fixed order and the first one
//! to decide wins:
//! 1. malformed: the candidate does not parse (see [`crate::url_model`])
//! 2. blacklisted: the host is on the [`Blacklist`]
//! 3. simulated check: the [`ReputationSource`] score is compared against
//!    the threshold; `score > threshold` is safe, anything else is not
//!
//! Classification never fails on content. Every input produces exactly one
//! [`Verdict`], in input order.

mod concurrent;
mod error;
mod report;
mod verdict;

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::blacklist::Blacklist;
use crate::config::ScreenConfig;
use crate::reputation::ReputationSource;
use crate::url_model::{extract_urls, parse_candidate, ParsedUrl};

pub use error::ClassifierError;
pub use report::ScreenReport;
pub use verdict::{Reason, Verdict};

/// Scores at or below this are unsafe.
pub const DEFAULT_REPUTATION_THRESHOLD: f64 = 0.3;

/// Immutable, cheaply cloneable classifier. Safe to share across threads.
#[derive(Clone)]
pub struct Classifier {
    blacklist: Arc<Blacklist>,
    source: Arc<dyn ReputationSource>,
    threshold: f64,
}

/// Outcome of the stages that run before the reputation lookup.
enum Screen {
    Decided(Verdict),
    NeedsReputation(ParsedUrl),
}

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("blacklist", &self.blacklist)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl Classifier {
    /// Creates a classifier. Fails if `threshold` is not a finite value in `[0, 1]`.
    pub fn new(
        blacklist: Blacklist,
        source: Arc<dyn ReputationSource>,
        threshold: f64,
    ) -> Result<Self, ClassifierError> {
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            return Err(ClassifierError::InvalidThreshold(threshold));
        }
        Ok(Self {
            blacklist: Arc::new(blacklist),
            source,
            threshold,
        })
    }

    /// Built-in blacklist and the default threshold.
    pub fn with_source(source: Arc<dyn ReputationSource>) -> Self {
        Self {
            blacklist: Arc::new(Blacklist::builtin()),
            source,
            threshold: DEFAULT_REPUTATION_THRESHOLD,
        }
    }

    /// Builds a classifier from loaded configuration.
    pub fn from_config(
        cfg: &ScreenConfig,
        source: Arc<dyn ReputationSource>,
    ) -> Result<Self, ClassifierError> {
        let blacklist = Blacklist::builtin()
            .with_mode(cfg.blacklist_match)
            .with_hosts(&cfg.extra_blacklist);
        Self::new(blacklist, source, cfg.reputation_threshold)
    }

    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Classifies a batch. The result has the same length and order as `urls`;
    /// empty input gives an empty result.
    pub fn classify<S: AsRef<str>>(&self, urls: &[S]) -> Vec<Verdict> {
        urls.iter().map(|u| self.classify_one(u.as_ref())).collect()
    }

    /// Classifies a single candidate.
    pub fn classify_one(&self, url: &str) -> Verdict {
        match self.screen(url) {
            Screen::Decided(verdict) => verdict,
            Screen::NeedsReputation(parsed) => {
                let score = self.source.score(&parsed.match_host);
                self.judge(url, &parsed, score)
            }
        }
    }

    /// Extracts URLs from free text (e.g. a comment body) and classifies them.
    pub fn classify_text(&self, text: &str) -> ScreenReport {
        let urls = extract_urls(text);
        debug!(count = urls.len(), "extracted URLs from text");
        ScreenReport::new(self.classify(&urls))
    }

    /// Runs the malformed and blacklist stages.
    fn screen(&self, url: &str) -> Screen {
        let parsed = match parse_candidate(url) {
            Ok(p) => p,
            Err(err) => {
                debug!(url, %err, "malformed URL");
                return Screen::Decided(Verdict::malformed(url));
            }
        };

        if let Some(entry) = self.blacklist.matching_entry(&parsed.match_host) {
            debug!(
                url,
                scheme = %parsed.scheme,
                host = %parsed.host,
                entry,
                "blacklisted host"
            );
            return Screen::Decided(Verdict::blacklisted(url));
        }

        Screen::NeedsReputation(parsed)
    }

    /// Applies the threshold to a reputation score.
    fn judge(&self, url: &str, parsed: &ParsedUrl, score: f64) -> Verdict {
        let score = if score.is_finite() {
            score
        } else {
            warn!(url, host = %parsed.host, score, "non-finite reputation score, treating as 0");
            0.0
        };
        let safe = score > self.threshold;
        debug!(
            url,
            scheme = %parsed.scheme,
            host = %parsed.host,
            score,
            threshold = self.threshold,
            safe,
            "reputation check"
        );
        Verdict::reputation(url, safe)
    }
}
