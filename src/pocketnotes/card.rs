//! Note cards: the presentational unit of the results view.
//!
//! A [`NoteCard`] is a plain, serializable snapshot of what a card shows.
//! Building one is pure; edit and delete actions are wired by the front end
//! against the card's display index.

use crate::index::DisplayNote;
use crate::model::Note;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::fmt::Write;
use tracing::warn;

pub const UNTITLED: &str = "Untitled note";

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteCard {
    pub index: usize,
    pub title: String,
    pub is_untitled: bool,
    pub created: String,
    pub age: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl NoteCard {
    pub fn new(index: usize, note: &Note, date_format: &str, now: DateTime<Utc>) -> Self {
        let is_untitled = note.title.is_empty();
        Self {
            index,
            title: if is_untitled {
                UNTITLED.to_string()
            } else {
                note.title.clone()
            },
            is_untitled,
            created: format_timestamp(note.created_at, date_format),
            age: format_age(note.created_at, now),
            content: note.content.clone(),
            tags: note.tags.iter().map(|t| format!("#{}", t)).collect(),
        }
    }

    pub fn from_display(dn: &DisplayNote, date_format: &str, now: DateTime<Utc>) -> Self {
        Self::new(dn.index, &dn.note, date_format, now)
    }
}

/// Formats a timestamp in the local time zone. A format chrono cannot render
/// falls back to [`DEFAULT_DATE_FORMAT`].
pub fn format_timestamp(ts: DateTime<Utc>, date_format: &str) -> String {
    let local = ts.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(date_format)).is_err() {
        warn!(date_format, "unusable date format, falling back to default");
        return local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

pub fn format_age(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(ts).to_std().unwrap_or_default();
    timeago::Formatter::new().convert(elapsed)
}
