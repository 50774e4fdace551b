use super::backend::KeyValueBackend;
use super::{decode, encode, LoadOutcome, NoteStore, DEFAULT_STORAGE_KEY};
use crate::model::Note;
use std::collections::HashSet;
use tracing::{debug, warn};

/// [`NoteStore`] over a key-value backend, storing the whole collection
/// under a single key.
pub struct LocalStore<B: KeyValueBackend> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> LocalStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: &str) -> Self {
        self.key = key.to_string();
        self
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> NoteStore for LocalStore<B> {
    fn load(&self) -> LoadOutcome {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no stored notes");
                return LoadOutcome::default();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read stored notes");
                return LoadOutcome::discarded(format!("Stored notes could not be read: {}", e));
            }
        };

        let notes = match decode(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                warn!(key = %self.key, error = %e, "discarding malformed stored notes");
                return LoadOutcome::discarded(format!(
                    "Stored notes were malformed and have been discarded: {}",
                    e
                ));
            }
        };

        let total = notes.len();
        let mut seen = HashSet::new();
        let notes: Vec<Note> = notes
            .into_iter()
            .filter(|note| seen.insert(note.id.clone()))
            .collect();
        debug!(key = %self.key, count = notes.len(), "loaded notes");

        if notes.len() < total {
            let dropped = total - notes.len();
            warn!(key = %self.key, dropped, "dropped notes with duplicate ids");
            return LoadOutcome {
                notes,
                warning: Some(format!("Dropped {} note(s) with duplicate ids", dropped)),
            };
        }
        LoadOutcome::clean(notes)
    }

    fn save(&mut self, notes: &[Note]) {
        let raw = match encode(notes) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to encode notes; write skipped");
                return;
            }
        };
        match self.backend.set(&self.key, &raw) {
            Ok(()) => debug!(key = %self.key, count = notes.len(), "saved notes"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save notes; write dropped"),
        }
    }
}
