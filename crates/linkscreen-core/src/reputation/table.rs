//! Deterministic reputation sources.

use std::collections::HashMap;

use super::ReputationSource;

/// Same score for every host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedReputation(pub f64);

impl ReputationSource for FixedReputation {
    fn score(&self, _host: &str) -> f64 {
        self.0
    }
}

/// Per-host scores with a fallback for unknown hosts. Keys are matched
/// case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReputation {
    scores: HashMap<String, f64>,
    default: f64,
}

impl TableReputation {
    pub fn new(default: f64) -> Self {
        Self {
            scores: HashMap::new(),
            default,
        }
    }

    pub fn with_score(mut self, host: &str, score: f64) -> Self {
        self.scores.insert(host.to_ascii_lowercase(), score);
        self
    }
}

impl<S: AsRef<str>> FromIterator<(S, f64)> for TableReputation {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(0.0), |t, (host, score)| t.with_score(host.as_ref(), score))
    }
}

impl ReputationSource for TableReputation {
    fn score(&self, host: &str) -> f64 {
        self.scores
            .get(&host.to_ascii_lowercase())
            .copied()
            .unwrap_or(self.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_host() {
        let source = FixedReputation(0.42);
        assert_eq!(source.score("a.example"), 0.42);
        assert_eq!(source.score("b.example"), 0.42);
    }

    #[test]
    fn table_falls_back_to_default() {
        let source = TableReputation::new(0.5).with_score("Known.Example", 0.9);
        assert_eq!(source.score("known.example"), 0.9);
        assert_eq!(source.score("KNOWN.EXAMPLE"), 0.9);
        assert_eq!(source.score("unknown.example"), 0.5);
    }

    #[test]
    fn table_from_pairs_defaults_to_zero() {
        let source: TableReputation = [("a.example", 0.7)].into_iter().collect();
        assert_eq!(source.score("a.example"), 0.7);
        assert_eq!(source.score("b.example"), 0.0);
    }
}
