//! notesift - filter and rank an in-memory list of notes.
//!
//! # Overview
//!
//! A query is split into space-separated terms. A note matches a term when
//! its title or body contains it, ignoring case. Results contain every note
//! matching at least one term, ordered by how many distinct terms matched;
//! ties keep the order in which notes were found.
//!
//! - [`search`]: the ranking itself, a pure function over a slice of notes
//! - [`store`]: the [`NoteStore`] trait and an in-memory implementation
//! - [`view`]: [`NoteList`], which applies queries to a store and re-filters
//!   after deletions
//!
//! # Example
//!
//! ```
//! use notesift::{InMemoryNoteStore, Note, NoteList};
//!
//! let store = InMemoryNoteStore::from_notes(vec![
//!     Note::new("apple pie", ""),
//!     Note::new("apple", "pie crust"),
//!     Note::new("banana", "split"),
//! ]);
//! let mut list = NoteList::new(store);
//!
//! let titles: Vec<_> = list
//!     .filter("Apple Pie")
//!     .into_iter()
//!     .map(|note| note.title.as_deref())
//!     .collect();
//! assert_eq!(titles, [Some("apple pie"), Some("apple")]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod note;
pub mod search;
pub mod store;
pub mod types;
pub mod view;

// Re-export main types at crate root
pub use config::Config;
pub use error::{NoteError, Result};
pub use note::Note;
pub use search::{filter, rank, Query, RankedNote};
pub use store::{InMemoryNoteStore, NoteStore};
pub use types::NoteId;
pub use view::NoteList;
