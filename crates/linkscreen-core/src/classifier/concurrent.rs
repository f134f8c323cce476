//! Bounded concurrent classification for slow reputation sources.
//!
//! Malformed and blacklist stages are cheap and run inline. Reputation lookups
//! fan out one task per URL, each on the blocking pool under a timeout. At most
//! `max_in_flight` calls into the source run at once, counting calls that have
//! already timed out but not yet returned. Results are written back by index so
//! output order matches input order regardless of completion order.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::warn;

use super::{Classifier, ClassifierError, Screen, ScreenReport, Verdict};
use crate::url_model::ParsedUrl;

/// Lookup still waiting for a task slot.
struct PendingLookup {
    index: usize,
    url: String,
    parsed: ParsedUrl,
}

impl Classifier {
    /// Classifies a batch with reputation lookups running concurrently.
    ///
    /// `lookup_timeout` covers both waiting for a free slot and the call itself.
    /// A lookup that exceeds it fails closed: the URL is reported unsafe with
    /// [`super::Reason::SimulatedCheck`]. A lookup that panics is a
    /// fault and aborts the batch with [`ClassifierError::LookupTask`].
    pub async fn classify_concurrent<S: AsRef<str>>(
        &self,
        urls: &[S],
        max_in_flight: usize,
        lookup_timeout: Duration,
    ) -> Result<ScreenReport, ClassifierError> {
        let max_in_flight = max_in_flight.max(1);
        let mut slots: Vec<Option<Verdict>> = Vec::with_capacity(urls.len());
        let mut pending = VecDeque::new();

        for (index, url) in urls.iter().enumerate() {
            let url = url.as_ref();
            match self.screen(url) {
                Screen::Decided(verdict) => slots.push(Some(verdict)),
                Screen::NeedsReputation(parsed) => {
                    slots.push(None);
                    pending.push_back(PendingLookup {
                        index,
                        url: url.to_string(),
                        parsed,
                    });
                }
            }
        }

        let limit = Arc::new(Semaphore::new(max_in_flight));
        let mut join_set = JoinSet::new();
        loop {
            while join_set.len() < max_in_flight {
                let Some(lookup) = pending.pop_front() else {
                    break;
                };
                let source = Arc::clone(&self.source);
                let limit = Arc::clone(&limit);
                join_set.spawn(async move {
                    let host = lookup.parsed.match_host.clone();
                    let call = async move {
                        // The permit lives inside the blocking call, so a call
                        // that outlives its timeout keeps holding its slot.
                        let permit = limit.acquire_owned().await.ok()?;
                        let handle = tokio::task::spawn_blocking(move || {
                            let _permit = permit;
                            source.score(&host)
                        });
                        Some(handle.await)
                    };
                    let score = match tokio::time::timeout(lookup_timeout, call).await {
                        Ok(Some(joined)) => Some(joined?),
                        Ok(None) | Err(_) => None,
                    };
                    Ok::<_, JoinError>((lookup, score))
                });
            }

            let Some(res) = join_set.join_next().await else {
                break;
            };
            let (lookup, score) = res??;
            let verdict = match score {
                Some(score) => self.judge(&lookup.url, &lookup.parsed, score),
                None => {
                    warn!(
                        url = %lookup.url,
                        host = %lookup.parsed.host,
                        timeout_ms = lookup_timeout.as_millis() as u64,
                        "reputation lookup timed out, failing closed"
                    );
                    Verdict::reputation(lookup.url, false)
                }
            };
            slots[lookup.index] = Some(verdict);
        }

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| slot.ok_or(ClassifierError::MissingVerdict(index)))
            .collect::<Result<Vec<_>, _>>()
            .map(ScreenReport::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Reason;
    use crate::reputation::{FixedReputation, TableReputation};
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn empty_batch_gives_empty_report() {
        let c = Classifier::with_source(Arc::new(FixedReputation(0.9)));
        let empty: [&str; 0] = [];
        let report = c.classify_concurrent(&empty, 4, TIMEOUT).await.unwrap();
        assert!(report.is_empty());
    }

    #[tokio::test]
    async fn matches_sequential_results_in_order() {
        let source = TableReputation::new(0.5)
            .with_score("slow.example", 0.9)
            .with_score("low.example", 0.1);
        let c = Classifier::with_source(Arc::new(source));
        let urls = [
            "https://slow.example/a",
            "not-a-url",
            "https://low.example",
            "https://phishing.example.com",
            "https://other.example",
            "https://slow.example/a",
        ];
        let report = c.classify_concurrent(&urls, 2, TIMEOUT).await.unwrap();
        assert_eq!(report.verdicts(), c.classify(&urls).as_slice());
    }

    #[tokio::test]
    async fn later_urls_finish_first_without_reordering() {
        // First URL is slowest; results must still come back in input order.
        let source = |host: &str| {
            let delay = match host {
                "a.example" => 150,
                "b.example" => 50,
                _ => 0,
            };
            std::thread::sleep(Duration::from_millis(delay));
            0.9
        };
        let c = Classifier::with_source(Arc::new(source));
        let urls = ["https://a.example", "https://b.example", "https://c.example"];
        let report = c.classify_concurrent(&urls, 3, TIMEOUT).await.unwrap();
        let got: Vec<&str> = report.verdicts().iter().map(|v| v.url.as_str()).collect();
        assert_eq!(got, urls);
        assert!(report.all_safe());
    }

    #[tokio::test]
    async fn timed_out_lookup_fails_closed() {
        let source = |host: &str| {
            if host == "hang.example" {
                std::thread::sleep(Duration::from_millis(500));
            }
            0.99
        };
        let c = Classifier::with_source(Arc::new(source));
        let urls = ["https://hang.example", "https://fast.example"];
        let report = c
            .classify_concurrent(&urls, 2, Duration::from_millis(50))
            .await
            .unwrap();
        let v = report.verdicts();
        assert!(!v[0].safe);
        assert_eq!(v[0].reason, Reason::SimulatedCheck);
        assert!(v[1].safe);
    }

    #[tokio::test]
    async fn panicking_source_is_a_fault() {
        let c = Classifier::with_source(Arc::new(|_: &str| -> f64 { panic!("feed down") }));
        let err = c
            .classify_concurrent(&["https://x.example"], 1, TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, ClassifierError::LookupTask(_)));
    }

    #[tokio::test]
    async fn zero_in_flight_is_treated_as_one() {
        let c = Classifier::with_source(Arc::new(FixedReputation(0.9)));
        let report = c
            .classify_concurrent(&["https://a.example", "https://b.example"], 0, TIMEOUT)
            .await
            .unwrap();
        assert_eq!(report.len(), 2);
    }

    #[tokio::test]
    async fn timed_out_calls_still_count_against_limit() {
        let running = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let source = {
            let running = Arc::clone(&running);
            let peak = Arc::clone(&peak);
            move |_: &str| -> f64 {
                let now = running.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(100));
                running.fetch_sub(1, Ordering::SeqCst);
                0.99
            }
        };
        let c = Classifier::with_source(Arc::new(source));
        let urls: Vec<String> = (0..12).map(|i| format!("https://host{i}.example")).collect();

        let report = c
            .classify_concurrent(&urls, 2, Duration::from_millis(10))
            .await
            .unwrap();

        assert_eq!(report.len(), 12);
        assert_eq!(report.unsafe_count(), 12);
        let peak = peak.load(Ordering::SeqCst);
        assert!(peak >= 1, "source was never called");
        assert!(peak <= 2, "{peak} concurrent source calls with a limit of 2");
    }
}
