use crate::error::{NotesError, Result};
use crate::model::{Draft, Note, NoteId};

/// Seeds a draft from an existing note, putting the form in update mode.
pub fn run(notes: &[Note], id: &NoteId) -> Result<Draft> {
    notes
        .iter()
        .find(|n| &n.id == id)
        .map(Draft::from_note)
        .ok_or_else(|| NotesError::NoteNotFound(id.clone()))
}
