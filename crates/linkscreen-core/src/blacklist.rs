//! Static denylist of known-bad hosts.
//!
//! The list is built once and never mutated; classifiers share it behind an
//! `Arc`. Matching is against the host only, never the path or query.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Hosts blocked out of the box.
pub const BUILTIN_BLACKLIST: &[&str] = &[
    "malware.example.com",
    "phishing.example.com",
    "bad-reputation.com",
    "virus.exe",
];

/// How a host is compared against blacklist entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlacklistMatch {
    /// Host must equal an entry.
    #[default]
    Exact,
    /// Host equals an entry or is a subdomain of it (`a.bad.com` matches
    /// `bad.com`; `notbad.com` does not).
    Suffix,
}

/// Immutable set of blacklisted hosts, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blacklist {
    hosts: BTreeSet<String>,
    mode: BlacklistMatch,
}

impl Default for Blacklist {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Blacklist {
    /// The built-in list with exact matching.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_BLACKLIST.iter().copied(), BlacklistMatch::Exact)
    }

    /// Builds a blacklist from arbitrary entries. Entries are trimmed,
    /// lowercased, and stripped of a trailing dot; empty entries are dropped.
    pub fn new<I, S>(hosts: I, mode: BlacklistMatch) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let hosts = hosts
            .into_iter()
            .filter_map(|h| normalize_host(h.as_ref()))
            .collect();
        Self { hosts, mode }
    }

    /// Returns a copy with `extra` entries appended.
    pub fn with_hosts<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.hosts
            .extend(extra.into_iter().filter_map(|h| normalize_host(h.as_ref())));
        self
    }

    /// Returns a copy using the given match mode.
    pub fn with_mode(mut self, mode: BlacklistMatch) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> BlacklistMatch {
        self.mode
    }

    /// Entries in sorted order.
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.hosts.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Returns the entry that `host` hits, if any. Case-insensitive.
    pub fn matching_entry(&self, host: &str) -> Option<&str> {
        let host = normalize_host(host)?;

        if let Some(entry) = self.hosts.get(&host) {
            return Some(entry.as_str());
        }
        if self.mode == BlacklistMatch::Exact {
            return None;
        }

        // Walk parent domains on label boundaries: a.b.c -> b.c -> c.
        let mut rest = host.as_str();
        while let Some((_, parent)) = rest.split_once('.') {
            if let Some(entry) = self.hosts.get(parent) {
                return Some(entry.as_str());
            }
            rest = parent;
        }
        None
    }

    pub fn matches(&self, host: &str) -> bool {
        self.matching_entry(host).is_some()
    }
}

fn normalize_host(host: &str) -> Option<String> {
    let h = host.trim().trim_end_matches('.').to_ascii_lowercase();
    if h.is_empty() {
        None
    } else {
        Some(h)
    }
}
