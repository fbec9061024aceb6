//! List command implementation.

use crate::cli::args::ListArgs;
use crate::cli::output::Output;
use crate::error::Result;
use crate::search::RankedNote;
use crate::store::InMemoryNoteStore;
use crate::types::NoteId;
use crate::view::{note_url, NoteList};
use serde::Serialize;

/// One note as printed by the CLI.
#[derive(Debug, Serialize)]
pub struct NoteEntry {
    pub id: NoteId,
    pub url: String,
    pub relevancy: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl From<RankedNote<'_, NoteId>> for NoteEntry {
    fn from(ranked: RankedNote<'_, NoteId>) -> Self {
        Self {
            id: ranked.id,
            url: note_url(&ranked.id),
            relevancy: ranked.relevancy,
            title: ranked.note.title.clone(),
            body: ranked.note.body.clone(),
        }
    }
}

/// The current results of `list`, truncated to `limit`.
pub fn entries(list: &NoteList<InMemoryNoteStore>, limit: Option<usize>) -> Vec<NoteEntry> {
    list.ranked()
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(NoteEntry::from)
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub total: usize,
    pub notes: Vec<NoteEntry>,
}

pub fn run(list: &mut NoteList<InMemoryNoteStore>, args: &ListArgs, output: &Output) -> Result<()> {
    let total = list.filter("").len();

    let response = ListResponse {
        total,
        notes: entries(list, args.limit),
    };
    output.print(&response)?;

    Ok(())
}
