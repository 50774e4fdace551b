//! Display indexes for the results view.
//!
//! Cards are numbered `1..=n` in the order the filtered view shows them. The
//! numbers are only meaningful against that same view: a different search or
//! tag selection renumbers everything. Front ends resolve what the user typed
//! to a stable [`NoteId`] before calling into the controller.

use crate::error::{NotesError, Result};
use crate::model::{Note, NoteId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub index: usize,
    pub note: Note,
}

/// A user input to select a note, either by its index or by part of its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(usize),
    Title(String),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

impl FromStr for NoteSelector {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(NotesError::Api("Empty note selector".to_string()));
        }
        match trimmed.parse::<usize>() {
            Ok(0) => Err(NotesError::Api("Indexes start at 1".to_string())),
            Ok(n) => Ok(NoteSelector::Index(n)),
            Err(_) => Ok(NoteSelector::Title(trimmed.to_string())),
        }
    }
}

pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(i, note)| DisplayNote { index: i + 1, note })
        .collect()
}

/// Resolves a selector against a view.
///
/// Title selectors match case-insensitively on a substring of the title and
/// must identify exactly one note; an exact title match wins over partial ones.
pub fn resolve(view: &[DisplayNote], selector: &NoteSelector) -> Result<NoteId> {
    match selector {
        NoteSelector::Index(idx) => view
            .iter()
            .find(|dn| dn.index == *idx)
            .map(|dn| dn.note.id.clone())
            .ok_or_else(|| NotesError::Api(format!("Index {} not found in current view", idx))),
        NoteSelector::Title(term) => {
            let term = term.to_lowercase();
            if let Some(exact) = view.iter().find(|dn| dn.note.title.to_lowercase() == term) {
                return Ok(exact.note.id.clone());
            }
            let partial: Vec<_> = view
                .iter()
                .filter(|dn| dn.note.title.to_lowercase().contains(&term))
                .collect();
            match partial.as_slice() {
                [only] => Ok(only.note.id.clone()),
                [] => Err(NotesError::Api(format!("No note matches {}", selector))),
                many => Err(NotesError::Api(format!(
                    "{} notes match {}; use an index instead",
                    many.len(),
                    selector
                ))),
            }
        }
    }
}
