use super::backend::KeyValueBackend;
use crate::error::{NotesError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key-value storage for testing.
/// Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since pocketnotes is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    values: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation (a full quota, a read-only disk).
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Plant a raw value, bypassing encoding. Useful for corrupt-data tests.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl KeyValueBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(NotesError::Store("Simulated write error".to_string()));
        }
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.values.borrow_mut().remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;
    use crate::store::{LocalStore, NoteStore};

    pub struct StoreFixture {
        pub store: LocalStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: LocalStore::new(MemBackend::new()),
            }
        }

        fn push(mut self, note: Note) -> Self {
            let mut notes = self.store.load().notes;
            notes.insert(0, note);
            self.store.save(&notes);
            self
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                let title = format!("Test Note {}", i + 1);
                let content = format!("Content for note {}", i + 1);
                self = self.push(Note::new(title, content, Vec::new()));
            }
            self
        }

        pub fn with_tagged_note(self, title: &str, tags: &[&str]) -> Self {
            let tags = tags.iter().map(|t| t.to_string()).collect();
            self.push(Note::new(title.to_string(), "Some content".to_string(), tags))
        }
    }
}
