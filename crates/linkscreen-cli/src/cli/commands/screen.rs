//! Shared batch screening for `check` and `scan`.

use anyhow::{bail, Result};
use linkscreen_core::{Classifier, ScreenReport};
use std::io::{self, Write};
use std::time::Duration;

use super::render::write_report;

/// Bounds for the concurrent classification path.
#[derive(Debug, Clone, Copy)]
pub struct Concurrency {
    pub max_in_flight: usize,
    pub lookup_timeout: Duration,
}

/// Output and execution options shared by screening commands.
#[derive(Debug, Clone, Copy)]
pub struct ScreenOptions {
    pub json: bool,
    pub fail_on_unsafe: bool,
    /// `None` classifies sequentially.
    pub concurrency: Option<Concurrency>,
}

/// Classify `urls` sequentially or concurrently, per `opts`.
pub async fn screen_urls(
    classifier: &Classifier,
    urls: &[String],
    opts: &ScreenOptions,
) -> Result<ScreenReport> {
    let report = match opts.concurrency {
        Some(c) => {
            classifier
                .classify_concurrent(urls, c.max_in_flight, c.lookup_timeout)
                .await?
        }
        None => ScreenReport::new(classifier.classify(urls)),
    };
    Ok(report)
}

/// Print the report to stdout and apply `--fail-on-unsafe`.
pub fn publish(report: &ScreenReport, opts: &ScreenOptions) -> Result<()> {
    tracing::info!(
        total = report.len(),
        unsafe_count = report.unsafe_count(),
        "screened URLs"
    );

    let mut out = io::stdout().lock();
    write_report(&mut out, report, opts.json)?;
    out.flush()?;

    enforce_policy(report, opts.fail_on_unsafe)
}

/// Fails when `fail_on_unsafe` is set and the report has unsafe verdicts.
pub fn enforce_policy(report: &ScreenReport, fail_on_unsafe: bool) -> Result<()> {
    if fail_on_unsafe && !report.all_safe() {
        bail!(
            "{} of {} URL(s) classified unsafe",
            report.unsafe_count(),
            report.len()
        );
    }
    Ok(())
}
