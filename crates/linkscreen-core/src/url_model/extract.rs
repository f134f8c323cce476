//! URL-shaped token extraction from free text (e.g. comment bodies).

use std::sync::OnceLock;

use regex::Regex;

fn url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"https?://\S+").expect("URL pattern compiles"))
}

/// Returns every `http://` / `https://` token in `text`, in order.
///
/// Greedy up to the next whitespace, so trailing punctuation is kept
/// (`"see https://a.com."` yields `"https://a.com."`). Results are candidates
/// only and must go through [`super::parse_candidate`] before use.
pub fn extract_urls(text: &str) -> Vec<String> {
    url_pattern()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
