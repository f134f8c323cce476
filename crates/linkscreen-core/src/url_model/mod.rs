//! URL modeling for safety classification.
//!
//! Turns raw candidate strings into parsed URLs with a host suitable for
//! policy lookups, and pulls URL-shaped tokens out of free text.

mod extract;
mod parse;

pub use extract::extract_urls;
pub use parse::{parse_candidate, MalformedUrl, ParsedUrl, RECOGNIZED_SCHEMES};
