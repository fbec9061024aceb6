//! Note representation and per-term matching.

use serde::{Deserialize, Serialize};

/// A note as shown in the list.
///
/// Both fields are optional. A note has no identity of its own; the store
/// that holds it hands out ids (see [`crate::store::NoteStore::get_id`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Note {
    /// Create a note with both fields present.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Create a note with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }

    /// Create a note with only a body.
    pub fn with_body(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: Some(body.into()),
        }
    }

    /// Check whether either present field contains `term`.
    ///
    /// `term` must already be lowercased. Fields are lowercased and trimmed
    /// before the substring test. Absent fields never match a non-empty
    /// term. The empty term is contained in every string, so it matches
    /// every note, including one with neither field.
    pub fn matches_term(&self, term: &str) -> bool {
        term.is_empty()
            || field_contains(self.title.as_deref(), term)
            || field_contains(self.body.as_deref(), term)
    }
}

fn field_contains(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|text| text.to_lowercase().trim().contains(term))
}
