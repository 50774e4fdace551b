use crate::model::Note;
use crate::tags;

/// Transient search state behind the results view.
///
/// Both conditions must hold for a note to be shown. Multiple tags mean AND
/// logic: a note must carry every selected tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub search_term: String,
    /// Selected tags, in selection order.
    pub tags: Vec<String>,
}

impl NoteFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_tags<I, T>(mut self, selected: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for tag in selected {
            if let Some(tag) = tags::normalize_tag(tag.as_ref()) {
                if !self.tags.contains(&tag) {
                    self.tags.push(tag);
                }
            }
        }
        self
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        tags::toggle(&mut self.tags, tag);
    }

    pub fn is_active(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_term(note) && self.matches_tags(note)
    }

    fn matches_term(&self, note: &Note) -> bool {
        let term = self.search_term.trim().to_lowercase();
        term.is_empty()
            || note.title.to_lowercase().contains(&term)
            || note.content.to_lowercase().contains(&term)
    }

    fn matches_tags(&self, note: &Note) -> bool {
        self.tags.iter().all(|tag| note.has_tag(tag))
    }

    /// The notes that pass, in collection order.
    pub fn apply<'a>(&self, notes: &'a [Note]) -> Vec<&'a Note> {
        notes.iter().filter(|note| self.matches(note)).collect()
    }
}
