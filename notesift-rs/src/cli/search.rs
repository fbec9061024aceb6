//! Search command implementation.

use crate::cli::args::SearchArgs;
use crate::cli::list::{entries, NoteEntry};
use crate::cli::output::Output;
use crate::error::Result;
use crate::search::Query;
use crate::store::InMemoryNoteStore;
use crate::view::NoteList;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub terms: Vec<String>,
    pub total: usize,
    pub results: Vec<NoteEntry>,
}

pub fn run(list: &mut NoteList<InMemoryNoteStore>, args: &SearchArgs, output: &Output) -> Result<()> {
    let total = list.filter(&args.query).len();

    let response = SearchResponse {
        query: args.query.clone(),
        terms: Query::parse(&args.query).terms().to_vec(),
        total,
        results: entries(list, args.limit),
    };
    output.print(&response)?;

    Ok(())
}
