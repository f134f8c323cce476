//! Candidate URL parsing and host extraction.

use thiserror::Error;
use url::Url;

/// Schemes a candidate may use. Anything else is treated as malformed.
pub const RECOGNIZED_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss"];

/// Why a candidate string is not a usable absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedUrl {
    /// Empty or whitespace-only input.
    #[error("empty URL")]
    Empty,
    /// The string does not parse as an absolute URL.
    #[error("not an absolute URL: {0}")]
    Syntax(#[from] url::ParseError),
    /// Parsed, but with a scheme we do not classify (e.g. `mailto:`).
    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),
    /// Parsed, but without a host to check against policy.
    #[error("URL has no host")]
    MissingHost,
}

/// A candidate that passed syntactic validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    /// Lowercase scheme, e.g. `https`.
    pub scheme: String,
    /// Host as written in the input (case preserved), for display.
    pub host: String,
    /// Canonical lowercase host without a trailing root dot, for policy matching.
    pub match_host: String,
}

/// Parses a candidate string into a [`ParsedUrl`].
///
/// Malformed input is an ordinary `Err`, never a panic: empty strings,
/// strings without a scheme (`not-a-valid-url`, `://missing-scheme`), and
/// URLs without a host (`http://`, `mailto:a@b.c`) are all rejected.
pub fn parse_candidate(input: &str) -> Result<ParsedUrl, MalformedUrl> {
    if input.trim().is_empty() {
        return Err(MalformedUrl::Empty);
    }

    let parsed = Url::parse(input)?;
    let scheme = parsed.scheme();
    if !RECOGNIZED_SCHEMES.contains(&scheme) {
        return Err(MalformedUrl::UnsupportedScheme(scheme.to_string()));
    }

    let canonical = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(MalformedUrl::MissingHost),
    };
    let match_host = canonical.trim_end_matches('.').to_ascii_lowercase();
    if match_host.is_empty() {
        return Err(MalformedUrl::MissingHost);
    }

    // The parser lowercases (and IDNA-encodes) hosts; keep the caller's
    // spelling when it is the same host.
    let host = raw_host(input)
        .filter(|raw| raw.eq_ignore_ascii_case(canonical))
        .unwrap_or(canonical)
        .to_string();

    Ok(ParsedUrl {
        scheme: scheme.to_string(),
        host,
        match_host,
    })
}

/// Host substring of `input` as typed, without userinfo or port.
fn raw_host(input: &str) -> Option<&str> {
    let (_, rest) = input.trim().split_once("://")?;
    let authority_end = rest.find(['/', '?', '#', '\\']).unwrap_or(rest.len());
    let authority = &rest[..authority_end];
    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);

    if host_port.starts_with('[') {
        let end = host_port.find(']')?;
        return Some(&host_port[..=end]);
    }
    Some(host_port.split_once(':').map_or(host_port, |(h, _)| h))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_from_https_url() {
        let parsed = parse_candidate("https://example.com/path?q=1").unwrap();
        assert_eq!(parsed.scheme, "https");
        assert_eq!(parsed.host, "example.com");
        assert_eq!(parsed.match_host, "example.com");
    }

    #[test]
    fn host_case_preserved_for_display_but_lowered_for_matching() {
        let parsed = parse_candidate("http://VIRUS.EXE/payload").unwrap();
        assert_eq!(parsed.host, "VIRUS.EXE");
        assert_eq!(parsed.match_host, "virus.exe");
    }

    #[test]
    fn strips_userinfo_and_port() {
        let parsed = parse_candidate("https://user:pw@Example.COM:8443/x").unwrap();
        assert_eq!(parsed.host, "Example.COM");
        assert_eq!(parsed.match_host, "example.com");
    }

    #[test]
    fn scheme_is_lowercased_for_logging() {
        let parsed = parse_candidate("FTP://Files.Example/x").unwrap();
        assert_eq!(parsed.scheme, "ftp");
        assert_eq!(parsed.host, "Files.Example");
    }

    #[test]
    fn trailing_root_dot_ignored_for_matching() {
        let parsed = parse_candidate("https://malware.example.com./").unwrap();
        assert_eq!(parsed.match_host, "malware.example.com");
    }

    #[test]
    fn ipv6_host_keeps_brackets() {
        let parsed = parse_candidate("http://[::1]:8080/").unwrap();
        assert_eq!(parsed.host, "[::1]");
        assert_eq!(parsed.match_host, "[::1]");
    }

    #[test]
    fn empty_and_whitespace_are_empty() {
        assert_eq!(parse_candidate(""), Err(MalformedUrl::Empty));
        assert_eq!(parse_candidate("   "), Err(MalformedUrl::Empty));
    }

    #[test]
    fn strings_without_scheme_are_syntax_errors() {
        assert!(matches!(
            parse_candidate("not-a-valid-url"),
            Err(MalformedUrl::Syntax(_))
        ));
        assert!(matches!(
            parse_candidate("://missing-scheme"),
            Err(MalformedUrl::Syntax(_))
        ));
    }

    #[test]
    fn scheme_without_host_is_malformed() {
        assert!(parse_candidate("http://").is_err());
        assert_eq!(
            parse_candidate("mailto:someone@example.com"),
            Err(MalformedUrl::UnsupportedScheme("mailto".to_string()))
        );
    }

    #[test]
    fn blacklisted_name_in_path_does_not_become_host() {
        let parsed = parse_candidate("https://safe.com/malware.example.com").unwrap();
        assert_eq!(parsed.match_host, "safe.com");
    }
}
