//! Verdict and reason types returned by the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which stage decided a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    /// The candidate is not an absolute URL with a recognized scheme and host.
    Malformed,
    /// The host is on the blacklist.
    Blacklisted,
    /// Decided by the reputation source, safe or not.
    SimulatedCheck,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::Malformed => "malformed",
            Reason::Blacklisted => "blacklisted",
            Reason::SimulatedCheck => "simulated_check",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Classification of a single candidate URL.
///
/// `url` is the caller's input, byte-for-byte, so results can be matched back
/// to what was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub url: String,
    pub safe: bool,
    pub reason: Reason,
}

impl Verdict {
    pub fn malformed(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            safe: false,
            reason: Reason::Malformed,
        }
    }

    pub fn blacklisted(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            safe: false,
            reason: Reason::Blacklisted,
        }
    }

    pub fn reputation(url: impl Into<String>, safe: bool) -> Self {
        Self {
            url: url.into(),
            safe,
            reason: Reason::SimulatedCheck,
        }
    }
}
