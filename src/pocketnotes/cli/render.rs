//! # Rendering Module
//!
//! Styled terminal output built from the templates in `templates/`.
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! require Unicode-aware processing. Templates handle presentation: which
//! style a piece of text gets, and which sections show at all.

use super::styles::NOTES_THEME;
use super::templates::{
    CARD_TEMPLATE, DRAFT_TEMPLATE, MESSAGES_TEMPLATE, SCREEN_TEMPLATE, TAGS_TEMPLATE,
};
use chrono::{DateTime, Utc};
use minijinja::{Environment, Value};
use pocketnotes::card::NoteCard;
use pocketnotes::commands::filter::NoteFilter;
use pocketnotes::commands::{CmdMessage, MessageLevel};
use pocketnotes::index::DisplayNote;
use pocketnotes::model::Draft;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 80;
pub const TIME_WIDTH: usize = 16;
pub const TAGLINE: &str = "Capture thoughts fast. Organize with tags and find anything instantly.";
pub const EMPTY_HINT: &str =
    "Create your first note or adjust your search and tag filters to see saved ideas.";

/// The draft form, as shown by the interactive shell.
pub struct DraftView<'a> {
    pub draft: &'a Draft,
    pub buffer: &'a str,
}

#[derive(Serialize)]
struct ScreenData {
    tagline: &'static str,
    empty_hint: &'static str,
    draft: Option<DraftData>,
    search: Option<String>,
    filters: Vec<FilterData>,
    cards: Vec<CardData>,
    empty: bool,
}

#[derive(Serialize)]
struct DraftData {
    heading: &'static str,
    title: String,
    content_lines: Vec<String>,
    tags: Vec<String>,
    buffer: String,
}

#[derive(Serialize)]
struct FilterData {
    label: String,
    style: &'static str,
}

/// Card data with pre-computed layout strings.
#[derive(Serialize)]
struct CardData {
    index: String,
    indent: String,
    title: String,
    title_style: &'static str,
    padding: String,
    age: String,
    created: String,
    content_lines: Vec<String>,
    tags: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TagCountData {
    label: String,
    count: String,
}

#[derive(Serialize)]
struct TagsData {
    tags: Vec<TagCountData>,
}

pub struct Renderer {
    use_color: bool,
    date_format: String,
}

impl Renderer {
    pub fn new(use_color: bool, date_format: &str) -> Self {
        Self {
            use_color,
            date_format: date_format.to_string(),
        }
    }

    /// Renders the whole screen: optional draft form, search and tag filters,
    /// then the cards or the empty state.
    pub fn screen(
        &self,
        listed: &[DisplayNote],
        all_tags: &[String],
        filter: &NoteFilter,
        draft: Option<DraftView<'_>>,
    ) -> String {
        self.screen_at(listed, all_tags, filter, draft, Utc::now())
    }

    fn screen_at(
        &self,
        listed: &[DisplayNote],
        all_tags: &[String],
        filter: &NoteFilter,
        draft: Option<DraftView<'_>>,
        now: DateTime<Utc>,
    ) -> String {
        let search = Some(filter.search_term.trim())
            .filter(|t| !t.is_empty())
            .map(|t| format!("\"{}\"", t));

        let filters = all_tags
            .iter()
            .map(|tag| FilterData {
                label: format!("#{}", tag),
                style: if filter.is_active(tag) {
                    "tag_active"
                } else {
                    "tag"
                },
            })
            .collect();

        let cards: Vec<CardData> = listed
            .iter()
            .map(|dn| card_data(&NoteCard::from_display(dn, &self.date_format, now)))
            .collect();

        let data = ScreenData {
            tagline: TAGLINE,
            empty_hint: EMPTY_HINT,
            draft: draft.map(draft_data),
            search,
            filters,
            empty: cards.is_empty(),
            cards,
        };
        self.render("screen", &data)
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> String {
        let data = MessagesData {
            messages: messages
                .iter()
                .map(|m| MessageData {
                    content: m.content.clone(),
                    style: match m.level {
                        MessageLevel::Info => "info",
                        MessageLevel::Success => "success",
                        MessageLevel::Warning => "warning",
                        MessageLevel::Error => "error",
                    },
                })
                .collect(),
        };
        self.render("messages", &data)
    }

    /// Renders `(tag, note count)` pairs, one per line.
    pub fn tags(&self, counts: &[(String, usize)]) -> String {
        let data = TagsData {
            tags: counts
                .iter()
                .map(|(tag, count)| TagCountData {
                    label: format!("#{}", tag),
                    count: format!("({})", count),
                })
                .collect(),
        };
        self.render("tags", &data)
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.try_render(name, data)
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    fn try_render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, minijinja::Error> {
        let env = self.environment()?;
        env.get_template(name)?.render(data)
    }

    fn environment(&self) -> Result<Environment<'static>, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);

        let use_color = self.use_color;
        env.add_filter("style", move |value: Value, name: String| -> String {
            NOTES_THEME.apply(&name, &value.to_string(), use_color)
        });

        env.add_template("screen", SCREEN_TEMPLATE)?;
        env.add_template("card", CARD_TEMPLATE)?;
        env.add_template("draft", DRAFT_TEMPLATE)?;
        env.add_template("messages", MESSAGES_TEMPLATE)?;
        env.add_template("tags", TAGS_TEMPLATE)?;
        Ok(env)
    }
}

fn card_data(card: &NoteCard) -> CardData {
    let index = format!("{:>3}. ", card.index);
    let indent = " ".repeat(index.width());
    let available = LINE_WIDTH.saturating_sub(index.width() + TIME_WIDTH);
    let title = truncate_to_width(&card.title, available);
    let padding = " ".repeat(available.saturating_sub(title.width()));
    let content_width = LINE_WIDTH.saturating_sub(indent.width());

    CardData {
        age: format!("{:>width$}", card.age, width = TIME_WIDTH),
        created: card.created.clone(),
        content_lines: card
            .content
            .lines()
            .map(|line| truncate_to_width(line, content_width))
            .collect(),
        tags: card.tags.join(" "),
        title_style: if card.is_untitled { "untitled" } else { "title" },
        index,
        indent,
        title,
        padding,
    }
}

fn draft_data(view: DraftView<'_>) -> DraftData {
    DraftData {
        heading: if view.draft.is_editing() {
            "Edit note"
        } else {
            "New note"
        },
        title: view.draft.title.clone(),
        content_lines: view.draft.content.lines().map(str::to_string).collect(),
        tags: view.draft.tags.iter().map(|t| format!("#{}", t)).collect(),
        buffer: view.buffer.to_string(),
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocketnotes::index::index_notes;
    use pocketnotes::model::Note;

    fn renderer() -> Renderer {
        Renderer::new(false, "%Y-%m-%d %H:%M")
    }

    fn listed(notes: &[(&str, &str, Vec<&str>)]) -> Vec<DisplayNote> {
        index_notes(
            notes
                .iter()
                .map(|(title, content, tags)| {
                    Note::new(
                        title.to_string(),
                        content.to_string(),
                        tags.iter().map(|t| t.to_string()).collect(),
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn empty_screen_shows_empty_state() {
        let out = renderer().screen(&[], &[], &NoteFilter::new(), None);
        assert!(out.starts_with("Pocket Notes\n"));
        assert!(out.contains("No notes yet"));
        assert!(out.contains(EMPTY_HINT));
        assert!(!out.contains("Filter by tags"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn cards_show_index_title_content_and_tags() {
        let notes = listed(&[
            ("Buy milk", "2%\nand eggs", vec!["errands"]),
            ("", "untitled body", vec![]),
        ]);
        let out = renderer().screen(&notes, &["errands".into()], &NoteFilter::new(), None);

        assert!(out.contains("  1. Buy milk"));
        assert!(out.contains("     2%\n"));
        assert!(out.contains("     and eggs\n"));
        assert!(out.contains("     #errands\n"));
        assert!(out.contains("  2. Untitled note"));
        assert!(out.contains("now") || out.contains("ago"));
        assert!(!out.contains("No notes yet"));
        assert!(!out.contains("(!?)"));
    }

    #[test]
    fn filter_line_lists_every_tag() {
        let filter = NoteFilter::new().with_tags(["home"]).with_search("milk");
        let out = renderer().screen(&[], &["home".into(), "work".into()], &filter, None);
        assert!(out.contains("Search: \"milk\"\n"));
        assert!(out.contains("Filter by tags: #home #work\n"));
    }

    #[test]
    fn active_filters_are_styled_differently() {
        let filter = NoteFilter::new().with_tags(["home"]);
        let out = Renderer::new(true, "%Y").screen(
            &[],
            &["home".into(), "work".into()],
            &filter,
            None,
        );
        let active = NOTES_THEME.apply("tag_active", "#home", true);
        let idle = NOTES_THEME.apply("tag", "#work", true);
        assert!(out.contains(&active));
        assert!(out.contains(&idle));
    }

    #[test]
    fn draft_form_shows_mode_and_pending_tag() {
        let mut draft = Draft::new();
        draft.title = "Plan".into();
        draft.tags = vec!["trip".into()];
        let out = renderer().screen(
            &[],
            &[],
            &NoteFilter::new(),
            Some(DraftView {
                draft: &draft,
                buffer: "sum",
            }),
        );
        assert!(out.contains("New note\n"));
        assert!(out.contains("  Title: Plan\n"));
        assert!(out.contains("  Tags: #trip sum_\n"));

        draft.id = Some("x".into());
        let out = renderer().screen(
            &[],
            &[],
            &NoteFilter::new(),
            Some(DraftView {
                draft: &draft,
                buffer: "",
            }),
        );
        assert!(out.contains("Edit note\n"));
        assert!(out.contains("  Tags: #trip\n"));
    }

    #[test]
    fn renders_messages_plain() {
        let out = renderer().messages(&[
            CmdMessage::success("Note saved: x"),
            CmdMessage::warning("careful"),
        ]);
        assert_eq!(out, "Note saved: x\ncareful\n");
    }

    #[test]
    fn renders_tag_counts() {
        let out = renderer().tags(&[("home".into(), 2), ("work".into(), 1)]);
        assert_eq!(out, "#home (2)\n#work (1)\n");
        assert_eq!(renderer().tags(&[]), "No tags yet.\n");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "x".repeat(200);
        let notes = listed(&[(long.as_str(), "", vec![])]);
        let out = renderer().screen(&notes, &[], &NoteFilter::new(), None);
        let first_card = out.lines().find(|l| l.contains("  1. ")).unwrap();
        assert!(first_card.contains('…'));
        assert!(first_card.width() <= LINE_WIDTH);
    }

    #[test]
    fn truncate_respects_width() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
    }
}
