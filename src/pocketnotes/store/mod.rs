//! # Storage Layer
//!
//! Notes are persisted the way a browser app persists them in `localStorage`:
//! the whole collection is serialized to a single value under one key, read
//! once at startup and overwritten in full after every change.
//!
//! The layer is split in two:
//!
//! - [`KeyValueBackend`]: raw string storage by key. Fallible, knows nothing
//!   about notes.
//!   - [`fs::FileBackend`]: production, one `<key>.json` file per key.
//!   - [`memory::MemBackend`]: in-memory map for tests.
//! - [`NoteStore`]: the persistence contract the controller sees. It never
//!   fails: [`local::LocalStore`] turns every backend or parse error into an
//!   empty collection (on load) or a dropped write (on save), logging a
//!   warning either way.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── pocket-notes.json   # JSON array of notes
//! └── config.json         # NotesConfig
//! ```
//!
//! Each note is an object with `id`, `title`, `content`, `tags`, `createdAt`
//! and `updatedAt` (ISO-8601). There is no version field; a value that does not
//! parse is discarded, not migrated.

use crate::error::Result;
use crate::model::Note;

pub mod backend;
pub mod fs;
pub mod local;
pub mod memory;

pub use backend::KeyValueBackend;
pub use local::LocalStore;

/// Key the note collection is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "pocket-notes";

/// Result of reading the stored collection.
///
/// `warning` is set when a stored value existed but had to be discarded.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub notes: Vec<Note>,
    pub warning: Option<String>,
}

impl LoadOutcome {
    pub fn clean(notes: Vec<Note>) -> Self {
        Self {
            notes,
            warning: None,
        }
    }

    pub fn discarded(warning: impl Into<String>) -> Self {
        Self {
            notes: Vec::new(),
            warning: Some(warning.into()),
        }
    }
}

/// Best-effort persistence for the note collection.
pub trait NoteStore {
    /// Read the stored collection. Missing or unreadable data yields no notes.
    fn load(&self) -> LoadOutcome;

    /// Overwrite the stored collection. Failures are not reported.
    fn save(&mut self, notes: &[Note]);
}

/// Serializes a collection to the stored representation.
pub fn encode(notes: &[Note]) -> Result<String> {
    Ok(serde_json::to_string(notes)?)
}

/// Parses the stored representation.
pub fn decode(raw: &str) -> Result<Vec<Note>> {
    Ok(serde_json::from_str(raw)?)
}
