//! Batch results with summary helpers.

use serde::{Deserialize, Serialize};

use super::{Reason, Verdict};

/// Verdicts for one batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenReport {
    verdicts: Vec<Verdict>,
}

impl ScreenReport {
    pub fn new(verdicts: Vec<Verdict>) -> Self {
        Self { verdicts }
    }

    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    pub fn into_verdicts(self) -> Vec<Verdict> {
        self.verdicts
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// True when every verdict is safe. Vacuously true for an empty batch.
    pub fn all_safe(&self) -> bool {
        self.verdicts.iter().all(|v| v.safe)
    }

    pub fn unsafe_verdicts(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.safe)
    }

    pub fn unsafe_count(&self) -> usize {
        self.unsafe_verdicts().count()
    }

    pub fn count(&self, reason: Reason) -> usize {
        self.verdicts.iter().filter(|v| v.reason == reason).count()
    }
}

impl From<Vec<Verdict>> for ScreenReport {
    fn from(verdicts: Vec<Verdict>) -> Self {
        Self::new(verdicts)
    }
}
