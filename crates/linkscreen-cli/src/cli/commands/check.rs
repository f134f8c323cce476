//! Check command: classify URLs given on the command line.

use anyhow::Result;
use linkscreen_core::Classifier;

use super::screen::{publish, screen_urls, ScreenOptions};

pub async fn run_check(
    classifier: &Classifier,
    urls: &[String],
    opts: &ScreenOptions,
) -> Result<()> {
    tracing::debug!(count = urls.len(), "check");
    let report = screen_urls(classifier, urls, opts).await?;
    publish(&report, opts)
}
