//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::cli::list::{entries, NoteEntry};
use crate::cli::output::Output;
use crate::error::Result;
use crate::store::{InMemoryNoteStore, NoteStore};
use crate::types::NoteId;
use crate::view::NoteList;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub id: NoteId,
    pub deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub query: String,
    pub total: usize,
    pub results: Vec<NoteEntry>,
}

pub fn run(list: &mut NoteList<InMemoryNoteStore>, args: &DeleteArgs, output: &Output) -> Result<()> {
    list.filter(&args.query);

    // An unknown id is not an error: the list is re-filtered either way.
    let deleted = list.store().get(&args.id).is_some();
    let total = list.delete_and_refilter(&args.id).len();

    if deleted {
        output.info(&format!("Deleted note {} (notes file left unchanged)", args.id));
    }

    let response = DeleteResponse {
        id: args.id,
        deleted,
        warning: (!deleted).then(|| format!("No note with id {}", args.id)),
        query: args.query.clone(),
        total,
        results: entries(list, None),
    };
    output.print(&response)?;

    Ok(())
}
