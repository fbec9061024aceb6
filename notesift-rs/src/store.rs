//! Note storage.
//!
//! [`NoteStore`] is what the list view needs from its backing collection:
//! the full ordered set, ids for notes, and deletion. [`InMemoryNoteStore`]
//! is the implementation used by the CLI, filled from a notes file.

use crate::error::{NoteError, Result};
use crate::note::Note;
use crate::types::NoteId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::path::Path;
use tracing::debug;

/// Backing collection of notes.
pub trait NoteStore {
    /// Identifier handed out for each note. Must be stable across calls.
    type Id: Clone + Eq + Hash + fmt::Debug + fmt::Display;

    /// All notes, in their display order.
    fn get_all(&self) -> &[Note];

    /// Ids of all notes, parallel to [`NoteStore::get_all`]: `ids()[i]` is the
    /// id of `get_all()[i]`, and both slices have the same length.
    fn ids(&self) -> &[Self::Id];

    /// Id of a note borrowed from [`NoteStore::get_all`].
    ///
    /// Identity is by reference, not by value: two notes with equal fields
    /// still have distinct ids. Returns `None` for notes the store does not hold.
    fn get_id(&self, note: &Note) -> Option<Self::Id>;

    /// Look up a note by id.
    fn get(&self, id: &Self::Id) -> Option<&Note>;

    /// Remove a note. Fails with [`NoteError::NoteNotFound`] for unknown ids.
    fn delete(&mut self, id: &Self::Id) -> Result<()>;
}

/// On-disk layout of a notes file (JSON, YAML or TOML).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotesFile {
    #[serde(default)]
    pub notes: Vec<Note>,
}

/// Insertion-ordered notes held in memory.
///
/// Ids only ever increase and deletion keeps order, so `ids` stays sorted and
/// lookups by id are binary searches.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNoteStore {
    ids: Vec<NoteId>,
    notes: Vec<Note>,
    next_id: u64,
}

impl InMemoryNoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `notes` in order, with ids starting at 1.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut store = Self::new();
        for note in notes {
            store.add(note);
        }
        store
    }

    /// Load notes from a `.json`, `.yaml`/`.yml` or `.toml` file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(NoteError::NotesFileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let file: NotesFile = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => return Err(NoteError::UnsupportedFormat(path.to_path_buf())),
        };

        debug!(path = %path.display(), count = file.notes.len(), "loaded notes file");
        Ok(Self::from_notes(file.notes))
    }

    /// Append a note and return its new id.
    pub fn add(&mut self, note: Note) -> NoteId {
        self.next_id += 1;
        let id = NoteId(self.next_id);
        self.ids.push(id);
        self.notes.push(note);
        id
    }

    /// Replace the title and body of an existing note.
    pub fn update(&mut self, id: NoteId, title: Option<String>, body: Option<String>) -> Result<()> {
        let position = self.position(&id)?;
        let note = &mut self.notes[position];
        note.title = title;
        note.body = body;
        Ok(())
    }

    /// Number of notes held.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn position(&self, id: &NoteId) -> Result<usize> {
        self.ids
            .binary_search(id)
            .map_err(|_| NoteError::NoteNotFound(id.to_string()))
    }
}

impl NoteStore for InMemoryNoteStore {
    type Id = NoteId;

    fn get_all(&self) -> &[Note] {
        &self.notes
    }

    fn ids(&self) -> &[NoteId] {
        &self.ids
    }

    fn get_id(&self, note: &Note) -> Option<NoteId> {
        self.notes
            .iter()
            .position(|candidate| std::ptr::eq(candidate, note))
            .map(|position| self.ids[position])
    }

    fn get(&self, id: &NoteId) -> Option<&Note> {
        self.position(id).ok().map(|position| &self.notes[position])
    }

    fn delete(&mut self, id: &NoteId) -> Result<()> {
        let position = self.position(id)?;
        self.ids.remove(position);
        self.notes.remove(position);
        Ok(())
    }
}
