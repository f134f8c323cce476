//! Scan command: extract URLs from a text file or stdin and classify them.

use anyhow::{Context, Result};
use linkscreen_core::url_model::extract_urls;
use linkscreen_core::{Classifier, ScreenReport};
use std::io::{self, Read};
use std::path::Path;

use super::screen::{publish, screen_urls, ScreenOptions};

/// Read the text to scan. `None` or `-` reads stdin.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

pub async fn run_scan(
    classifier: &Classifier,
    path: Option<&Path>,
    opts: &ScreenOptions,
) -> Result<()> {
    let text = read_input(path)?;
    let report = scan_text(classifier, &text, opts).await?;
    publish(&report, opts)
}

/// Extract and classify the URLs in `text`.
async fn scan_text(
    classifier: &Classifier,
    text: &str,
    opts: &ScreenOptions,
) -> Result<ScreenReport> {
    tracing::debug!(bytes = text.len(), "scan");
    match opts.concurrency {
        None => Ok(classifier.classify_text(text)),
        Some(_) => screen_urls(classifier, &extract_urls(text), opts).await,
    }
}
