use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Advisory title length. The front end truncates input to it, storage does not.
pub const TITLE_MAX_CHARS: usize = 120;

/// Opaque note identifier.
///
/// Freshly created notes get a random UUID, but any string read back from
/// storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    pub fn new(title: String, content: String, tags: Vec<String>) -> Self {
        Self::new_at(title, content, tags, Utc::now())
    }

    pub fn new_at(title: String, content: String, tags: Vec<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: NoteId::generate(),
            title,
            content,
            tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refreshes `updated_at`, never letting it fall behind `created_at`.
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now.max(self.created_at);
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// The in-progress edit buffer behind the create/edit form.
///
/// `id` is `None` while creating a new note and `Some` while editing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<NoteId>,
    pub title: String,
    pub content: String,
    pub tags: Vec<String>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_note(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.id.is_some()
    }

    /// True when neither title nor content holds anything but whitespace.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.content.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn new_note_has_equal_timestamps() {
        let note = Note::new("Title".into(), "".into(), vec![]);
        assert_eq!(note.created_at, note.updated_at);
    }

    #[test]
    fn generated_ids_are_unique() {
        let a = Note::new("a".into(), "".into(), vec![]);
        let b = Note::new("b".into(), "".into(), vec![]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn touch_never_precedes_creation() {
        let now = Utc::now();
        let mut note = Note::new_at("t".into(), "".into(), vec![], now);
        note.touch(now - Duration::hours(1));
        assert_eq!(note.updated_at, note.created_at);

        note.touch(now + Duration::minutes(5));
        assert!(note.updated_at > note.created_at);
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let note = Note::new("Buy milk".into(), "2%".into(), vec!["home".into()]);
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").unwrap().is_string());
        assert!(json.get("updatedAt").unwrap().is_string());
        assert_eq!(json["id"], serde_json::json!(note.id.as_str()));
        assert_eq!(json["tags"], serde_json::json!(["home"]));
    }

    #[test]
    fn accepts_non_uuid_ids_from_storage() {
        let raw = r#"{"id":"abc","title":"t","content":"c","tags":[],
            "createdAt":"2024-01-02T03:04:05.000Z","updatedAt":"2024-01-02T03:04:05.000Z"}"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.id.as_str(), "abc");
    }

    #[test]
    fn draft_emptiness_ignores_whitespace() {
        let mut draft = Draft::new();
        draft.title = "   ".into();
        draft.content = "\n\t".into();
        assert!(draft.is_empty());

        draft.content = "x".into();
        assert!(!draft.is_empty());
    }

    #[test]
    fn draft_from_note_enters_edit_mode() {
        let note = Note::new("t".into(), "c".into(), vec!["a".into()]);
        let draft = Draft::from_note(&note);
        assert!(draft.is_editing());
        assert_eq!(draft.id.as_ref(), Some(&note.id));
        assert_eq!(draft.tags, vec!["a".to_string()]);
    }
}
