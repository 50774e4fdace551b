use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Draft, Note};
use chrono::{DateTime, Utc};
use tracing::debug;

/// Applies a draft to the collection.
///
/// A draft whose title and content are both blank is ignored. Otherwise the
/// trimmed fields either replace those of the note being edited, or become a
/// new note at the front of the collection.
pub fn run(notes: &mut Vec<Note>, draft: &Draft, now: DateTime<Utc>) -> CmdResult {
    let mut result = CmdResult::default();
    if draft.is_empty() {
        debug!("ignoring submit of empty draft");
        return result;
    }

    let title = draft.title.trim().to_string();
    let content = draft.content.trim().to_string();

    match &draft.id {
        Some(id) => {
            let Some(note) = notes.iter_mut().find(|n| &n.id == id) else {
                result.add_message(CmdMessage::warning(format!(
                    "Note {} no longer exists; nothing updated",
                    id
                )));
                return result;
            };
            note.title = title;
            note.content = content;
            note.tags = draft.tags.clone();
            note.touch(now);
            debug!(id = %note.id, "updated note");
            result.add_message(CmdMessage::success(format!(
                "Note updated: {}",
                display_title(&note.title)
            )));
            result.affected_notes.push(note.clone());
        }
        None => {
            let note = Note::new_at(title, content, draft.tags.clone(), now);
            debug!(id = %note.id, "created note");
            result.add_message(CmdMessage::success(format!(
                "Note saved: {}",
                display_title(&note.title)
            )));
            result.affected_notes.push(note.clone());
            notes.insert(0, note);
        }
    }

    result
}

fn display_title(title: &str) -> &str {
    if title.is_empty() {
        crate::card::UNTITLED
    } else {
        title
    }
}
