//! The note list view: the current query applied to a store.

use crate::note::Note;
use crate::search::{self, Query, RankedNote};
use crate::store::NoteStore;
use std::fmt;
use tracing::{debug, info, warn};

/// Route of a note's detail page.
pub fn note_url(id: &impl fmt::Display) -> String {
    format!("/notes/{}", id)
}

/// A filtered, ranked view over a [`NoteStore`].
///
/// The view owns its store. It remembers the last query and the ranked ids
/// it produced. Each filter or deletion replaces that result in one step.
#[derive(Debug)]
pub struct NoteList<S: NoteStore> {
    store: S,
    query: String,
    ranked: Vec<Row<S::Id>>,
}

/// A cached result row. `position` indexes `get_all()`; the store is only
/// mutated through the view, which re-ranks right after.
#[derive(Debug)]
struct Row<K> {
    id: K,
    position: usize,
    relevancy: usize,
}

impl<S: NoteStore> NoteList<S> {
    /// Build a view showing every note (the empty query).
    pub fn new(store: S) -> Self {
        let mut list = Self {
            store,
            query: String::new(),
            ranked: Vec::new(),
        };
        list.apply("");
        list
    }

    /// Apply `query` and return the matching notes, best first.
    pub fn filter(&mut self, query: &str) -> Vec<&Note> {
        self.apply(query);
        self.results()
    }

    /// Delete a note from the store, then re-apply the last query.
    ///
    /// Deleting an id the store does not know is logged and otherwise
    /// ignored; the list is still refreshed.
    pub fn delete_and_refilter(&mut self, id: &S::Id) -> Vec<&Note> {
        match self.store.delete(id) {
            Ok(()) => info!(%id, "deleted note"),
            Err(err) => warn!(%id, error = %err, "could not delete note"),
        }
        let query = self.query.clone();
        self.filter(&query)
    }

    /// The notes from the most recent filter pass, best first.
    pub fn results(&self) -> Vec<&Note> {
        let notes = self.store.get_all();
        self.ranked
            .iter()
            .filter_map(|row| notes.get(row.position))
            .collect()
    }

    /// The most recent result with ids and relevancy counts.
    pub fn ranked(&self) -> Vec<RankedNote<'_, S::Id>> {
        let notes = self.store.get_all();
        self.ranked
            .iter()
            .filter_map(|row| {
                notes.get(row.position).map(|note| RankedNote {
                    id: row.id.clone(),
                    note,
                    relevancy: row.relevancy,
                })
            })
            .collect()
    }

    /// Id of a note borrowed from this view's results.
    pub fn id_of(&self, note: &Note) -> Option<S::Id> {
        self.store.get_id(note)
    }

    /// The query the current results were computed for.
    pub fn last_query(&self) -> &str {
        &self.query
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn apply(&mut self, query: &str) {
        let notes = self.store.get_all();
        let ids = self.store.ids();
        let positions: Vec<usize> = (0..notes.len().min(ids.len())).collect();
        let ranked: Vec<Row<S::Id>> = search::rank_with_ids(&Query::parse(query), notes, &positions)
            .into_iter()
            .map(|row| Row {
                id: ids[row.id].clone(),
                position: row.id,
                relevancy: row.relevancy,
            })
            .collect();

        debug!(query, results = ranked.len(), "applied filter");
        self.query = query.to_string();
        self.ranked = ranked;
    }
}
