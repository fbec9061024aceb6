//! Show command implementation.

use crate::cli::args::ShowArgs;
use crate::cli::output::Output;
use crate::error::{NoteError, Result};
use crate::store::{InMemoryNoteStore, NoteStore};
use crate::types::NoteId;
use crate::view::note_url;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ShowResponse {
    pub id: NoteId,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

pub fn run(store: &InMemoryNoteStore, args: &ShowArgs, output: &Output) -> Result<()> {
    let note = store
        .get(&args.id)
        .ok_or_else(|| NoteError::NoteNotFound(args.id.to_string()))?;

    let response = ShowResponse {
        id: args.id,
        url: note_url(&args.id),
        title: note.title.clone(),
        body: note.body.clone(),
    };
    output.print(&response)?;

    Ok(())
}
