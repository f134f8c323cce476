//! Placeholder reputation: an unseeded uniform draw.

use rand::Rng;

use super::ReputationSource;

/// Returns a fresh uniform score in `[0, 1)` for every lookup, ignoring the
/// host. Not a trust decision; stands in until a real feed is wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReputation;

impl ReputationSource for RandomReputation {
    fn score(&self, _host: &str) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
