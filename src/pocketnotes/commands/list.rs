use super::filter::NoteFilter;
use crate::commands::CmdResult;
use crate::index::index_notes;
use crate::model::Note;

/// Builds the results view: notes passing `filter`, numbered in view order.
pub fn run(notes: &[Note], filter: &NoteFilter) -> CmdResult {
    let visible = filter.apply(notes).into_iter().cloned().collect();
    CmdResult::default().with_listed_notes(index_notes(visible))
}
