use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Note, NoteId};
use tracing::debug;

pub fn run(notes: &mut Vec<Note>, id: &NoteId) -> CmdResult {
    let mut result = CmdResult::default();
    match notes.iter().position(|n| &n.id == id) {
        Some(pos) => {
            let note = notes.remove(pos);
            debug!(id = %note.id, "deleted note");
            result.add_message(CmdMessage::success(format!(
                "Note deleted: {}",
                if note.title.is_empty() {
                    crate::card::UNTITLED
                } else {
                    note.title.as_str()
                }
            )));
            result.affected_notes.push(note);
        }
        None => {
            result.add_message(CmdMessage::warning(format!("No note with id {}", id)));
        }
    }
    result
}
