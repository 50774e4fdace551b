//! # API Facade
//!
//! [`NotesApi`] is the view-state controller: it owns the note collection,
//! the current [`Draft`] and the active [`NoteFilter`], and it is the single
//! entry point for every front end.
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Dispatches** to the command functions in `commands/*.rs`
//! - **Persists** the full collection after every mutation
//! - **Maintains** draft and filter state across calls
//! - **Derives** the tag universe and the filtered view on demand
//!
//! It does no I/O of its own beyond handing the collection to the injected
//! [`NoteStore`], and it never formats output.
//!
//! ## Generic Over NoteStore
//!
//! `NotesApi<S: NoteStore>` is generic over the persistence collaborator:
//! - Production: `NotesApi<LocalStore<FileBackend>>`
//! - Testing: `NotesApi<LocalStore<MemBackend>>`

use crate::commands::{self, filter::NoteFilter, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{self, DisplayNote, NoteSelector};
use crate::model::{Draft, Note, NoteId};
use crate::store::NoteStore;
use crate::tags;
use chrono::Utc;
use tracing::debug;

pub struct NotesApi<S: NoteStore> {
    store: S,
    notes: Vec<Note>,
    draft: Draft,
    filter: NoteFilter,
    load_warning: Option<String>,
}

impl<S: NoteStore> NotesApi<S> {
    /// Reads the stored collection once and starts with an empty draft.
    pub fn open(store: S) -> Self {
        let outcome = store.load();
        debug!(count = outcome.notes.len(), "opened notebook");
        Self {
            store,
            notes: outcome.notes,
            draft: Draft::new(),
            filter: NoteFilter::new(),
            load_warning: outcome.warning,
        }
    }

    /// Set when stored data existed but could not be used.
    pub(crate) fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    /// Drains the load warning as a message, so a front end reports it once.
    pub fn take_load_message(&mut self) -> Option<CmdMessage> {
        self.load_warning.take().map(CmdMessage::warning)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    // --- Draft ---

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    /// Replaces the draft's tags. This is the tag editor's change callback.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.draft.tags = tags;
    }

    /// Discards the draft and returns to create mode.
    pub fn cancel_edit(&mut self) {
        self.draft = Draft::new();
    }

    /// Commits the draft. A blank draft is ignored and kept as-is; anything
    /// else resets the draft afterwards.
    pub fn submit(&mut self) -> CmdResult {
        if self.draft.is_empty() {
            return CmdResult::default();
        }
        let result = commands::submit::run(&mut self.notes, &self.draft, Utc::now());
        if result.is_mutation() {
            self.persist();
        }
        self.draft = Draft::new();
        result
    }

    /// Loads a note into the draft for editing.
    pub fn edit(&mut self, id: &NoteId) -> Result<()> {
        self.draft = commands::edit::run(&self.notes, id)?;
        Ok(())
    }

    pub fn delete(&mut self, id: &NoteId) -> CmdResult {
        let result = commands::delete::run(&mut self.notes, id);
        if result.is_mutation() {
            self.persist();
        }
        if self.draft.id.as_ref() == Some(id) {
            self.draft = Draft::new();
        }
        result
    }

    // --- Filters ---

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    pub fn toggle_tag_filter(&mut self, tag: &str) {
        self.filter.toggle_tag(tag);
    }

    pub fn clear_filters(&mut self) {
        self.filter = NoteFilter::new();
    }

    // --- Derived views ---

    /// Sorted, distinct tags across the whole collection.
    pub fn all_tags(&self) -> Vec<String> {
        tags::tag_universe(&self.notes)
    }

    pub fn filtered_notes(&self) -> Vec<&Note> {
        self.filter.apply(&self.notes)
    }

    /// The numbered results view.
    pub fn list(&self) -> CmdResult {
        commands::list::run(&self.notes, &self.filter)
    }

    /// Resolves user input (`"2"`, `"milk"`) against the current view.
    pub fn resolve<I: AsRef<str>>(&self, input: I) -> Result<NoteId> {
        let selector: NoteSelector = input.as_ref().parse()?;
        let view: Vec<DisplayNote> = self.list().listed_notes;
        index::resolve(&view, &selector)
    }

    fn persist(&mut self) {
        self.store.save(&self.notes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;
    use crate::store::{KeyValueBackend, LocalStore, DEFAULT_STORAGE_KEY};
    use crate::tag_editor::{TagEditor, TagKey};

    fn api() -> NotesApi<LocalStore<MemBackend>> {
        NotesApi::open(StoreFixture::new().store)
    }

    fn create(api: &mut NotesApi<LocalStore<MemBackend>>, title: &str, tags: &[&str]) -> NoteId {
        api.set_title(title);
        api.set_tags(tags.iter().map(|t| t.to_string()).collect());
        api.submit().affected_notes[0].id.clone()
    }

    #[test]
    fn create_buy_milk() {
        let mut api = api();
        api.set_title("Buy milk");
        api.submit();

        assert_eq!(api.notes().len(), 1);
        let note = &api.notes()[0];
        assert_eq!(note.title, "Buy milk");
        assert_eq!(note.content, "");
        assert!(note.tags.is_empty());
        assert_eq!(note.created_at, note.updated_at);
        assert_eq!(api.draft(), &Draft::new());
    }

    #[test]
    fn newest_note_appears_first() {
        let mut api = api();
        create(&mut api, "first", &[]);
        create(&mut api, "second", &[]);
        let titles: Vec<_> = api.filtered_notes().iter().map(|n| n.title.clone()).collect();
        assert_eq!(titles, vec!["second", "first"]);
    }

    #[test]
    fn empty_draft_submit_is_ignored() {
        let mut api = api();
        create(&mut api, "existing", &[]);
        let before = api.notes().to_vec();

        api.set_title("  ");
        api.set_tags(vec!["keep".into()]);
        let result = api.submit();

        assert!(!result.is_mutation());
        assert_eq!(api.notes(), before.as_slice());
        assert_eq!(api.draft().tags, vec!["keep".to_string()]);
    }

    #[test]
    fn every_mutation_is_persisted() {
        let mut api = api();
        let id = create(&mut api, "persist me", &["a"]);
        assert_eq!(api.store().load().notes, api.notes());

        api.edit(&id).unwrap();
        api.set_content("more");
        api.submit();
        assert_eq!(api.store().load().notes[0].content, "more");

        api.delete(&id);
        assert!(api.store().load().notes.is_empty());
    }

    #[test]
    fn reopening_restores_collection() {
        let mut api = api();
        create(&mut api, "one", &["x"]);
        create(&mut api, "two", &[]);
        let saved = api.notes().to_vec();

        let reopened = NotesApi::open(LocalStore::new(MemBackend::new()));
        assert!(reopened.notes().is_empty());

        let backend = MemBackend::new();
        let raw = api.store().backend().get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        backend.insert_raw(DEFAULT_STORAGE_KEY, &raw);
        let reopened = NotesApi::open(LocalStore::new(backend));
        assert_eq!(reopened.notes(), saved.as_slice());
    }

    #[test]
    fn edit_then_submit_updates_in_place() {
        let mut api = api();
        let first = create(&mut api, "first", &[]);
        create(&mut api, "second", &[]);

        api.edit(&first).unwrap();
        assert!(api.draft().is_editing());
        api.set_title("first (edited)");
        api.submit();

        assert_eq!(api.notes().len(), 2);
        assert_eq!(api.notes()[1].id, first);
        assert_eq!(api.notes()[1].title, "first (edited)");
        assert!(api.notes()[1].updated_at >= api.notes()[1].created_at);
        assert!(!api.draft().is_editing());
    }

    #[test]
    fn deleting_edited_note_resets_draft() {
        let mut api = api();
        let id = create(&mut api, "doomed", &["x"]);
        api.edit(&id).unwrap();

        api.delete(&id);

        assert!(api.notes().is_empty());
        assert_eq!(api.draft(), &Draft::new());
    }

    #[test]
    fn deleting_other_note_keeps_draft() {
        let mut api = api();
        let keep = create(&mut api, "keep", &[]);
        let other = create(&mut api, "other", &[]);
        api.edit(&keep).unwrap();

        api.delete(&other);

        assert_eq!(api.draft().id.as_ref(), Some(&keep));
    }

    #[test]
    fn cancel_edit_returns_to_create_mode() {
        let mut api = api();
        let id = create(&mut api, "n", &[]);
        api.edit(&id).unwrap();
        api.cancel_edit();
        assert!(!api.draft().is_editing());
        assert!(api.draft().title.is_empty());
    }

    #[test]
    fn filters_by_all_selected_tags() {
        let mut api = api();
        create(&mut api, "first", &["home", "urgent"]);
        create(&mut api, "second", &["home"]);

        api.toggle_tag_filter("home");
        api.toggle_tag_filter("urgent");

        let titles: Vec<_> = api.filtered_notes().iter().map(|n| n.title.clone()).collect();
        assert_eq!(titles, vec!["first"]);
    }

    #[test]
    fn tag_universe_tracks_collection() {
        let mut api = api();
        let id = create(&mut api, "a", &["zeta", "alpha"]);
        create(&mut api, "b", &["alpha", "mid"]);
        assert_eq!(api.all_tags(), vec!["alpha", "mid", "zeta"]);

        api.delete(&id);
        assert_eq!(api.all_tags(), vec!["alpha", "mid"]);
    }

    #[test]
    fn tag_editor_feeds_draft() {
        let mut api = api();
        let mut editor = TagEditor::new();

        editor.input("Work");
        let tags = api.draft().tags.clone();
        editor.key(TagKey::Enter, &tags, |next| api.set_tags(next));
        editor.input("work");
        let tags = api.draft().tags.clone();
        editor.key(TagKey::Enter, &tags, |next| api.set_tags(next));

        assert_eq!(api.draft().tags, vec!["work".to_string()]);
    }

    #[test]
    fn resolve_uses_current_view() {
        let mut api = api();
        let milk = create(&mut api, "Buy milk", &["errands"]);
        let call = create(&mut api, "Call mom", &["family"]);

        assert_eq!(api.resolve("1").unwrap(), call);
        api.toggle_tag_filter("errands");
        assert_eq!(api.resolve("1").unwrap(), milk);
        assert!(api.resolve("2").is_err());
        api.clear_filters();
        assert_eq!(api.resolve("milk").unwrap(), milk);
    }

    #[test]
    fn malformed_storage_opens_empty_with_warning() {
        let backend = MemBackend::new();
        backend.insert_raw(DEFAULT_STORAGE_KEY, "garbage");
        let mut api = NotesApi::open(LocalStore::new(backend));

        assert!(api.notes().is_empty());
        assert!(api.load_warning().is_some());
        assert!(api.take_load_message().is_some());
        assert!(api.take_load_message().is_none());
    }

    #[test]
    fn fixture_notes_are_loaded() {
        let store = StoreFixture::new()
            .with_notes(2)
            .with_tagged_note("tagged", &["home"])
            .store;
        let api = NotesApi::open(store);
        assert_eq!(api.notes().len(), 3);
        assert_eq!(api.notes()[0].title, "tagged");
        assert_eq!(api.all_tags(), vec!["home"]);
    }
}
