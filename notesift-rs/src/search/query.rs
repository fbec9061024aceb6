//! Query normalization.

use serde::Serialize;
use std::collections::HashSet;

/// A normalized search query: the unique terms of the raw input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    terms: Vec<String>,
}

impl Query {
    /// Parse raw input into terms.
    ///
    /// The input is lowercased, trimmed, and split on single spaces. Runs of
    /// spaces inside the query yield an empty term. Duplicates are dropped,
    /// keeping the first occurrence, so there is at most one empty term.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_lowercase();
        let mut seen = HashSet::new();
        let terms = normalized
            .trim()
            .split(' ')
            .filter(|term| seen.insert(*term))
            .map(str::to_string)
            .collect();

        Self { terms }
    }

    /// The unique terms, in order of first occurrence.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the query was blank, i.e. its only term is empty.
    pub fn is_blank(&self) -> bool {
        self.terms.iter().all(String::is_empty)
    }
}

/// Parse a raw query string. Shorthand for [`Query::parse`].
pub fn parse_query(raw: &str) -> Query {
    Query::parse(raw)
}
