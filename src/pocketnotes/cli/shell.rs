//! Interactive session.
//!
//! Unlike the one-shot commands, the shell keeps the controller alive between
//! lines, so the draft, the tag editor's pending text, the search term and the
//! selected tag filters all carry over. Every line is one user action; the
//! screen is redrawn after each.

use super::commands::clamp_title;
use super::render::{DraftView, Renderer};
use pocketnotes::api::NotesApi;
use pocketnotes::commands::CmdMessage;
use pocketnotes::error::Result;
use pocketnotes::store::NoteStore;
use pocketnotes::tag_editor::{TagEditor, TagKey};
use std::io::{BufRead, Write};
use tracing::debug;

const PROMPT: &str = "pn> ";

const HELP: &str = "\
Draft:
  title TEXT       set the title
  content TEXT     replace the details
  append TEXT      add a line to the details
  type TEXT        type into the tag field (',' commits a tag)
  tag [TEXT]       type TEXT into the tag field and press Enter
  backspace        delete a character, or the last tag when the field is empty
  untag TAG        remove a tag from the draft
  save             save the draft
  cancel           discard the draft
Notes:
  edit N           load note N into the draft
  delete N         delete note N
View:
  search [TERM]    filter by text (no TERM clears it)
  filter TAG       toggle a tag filter
  clear            clear search and tag filters
  list             redraw the screen
  help, quit
";

/// What the loop should do after a line.
enum Step {
    Redraw(Vec<CmdMessage>),
    Print(String),
    Quit,
}

struct Session<'a, S: NoteStore> {
    api: &'a mut NotesApi<S>,
    editor: TagEditor,
}

pub fn run<S, R, W>(api: &mut NotesApi<S>, renderer: &Renderer, input: R, mut out: W) -> Result<()>
where
    S: NoteStore,
    R: BufRead,
    W: Write,
{
    let mut session = Session {
        api,
        editor: TagEditor::new(),
    };

    write!(out, "{}", session.screen(renderer))?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match session.dispatch(&line) {
            Step::Quit => return Ok(()),
            Step::Print(text) => write!(out, "{}", text)?,
            Step::Redraw(messages) => {
                write!(out, "{}", session.screen(renderer))?;
                write!(out, "{}", renderer.messages(&messages))?;
            }
        }
        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

impl<S: NoteStore> Session<'_, S> {
    fn screen(&self, renderer: &Renderer) -> String {
        let listed = self.api.list().listed_notes;
        let draft = self.api.draft();
        let show_draft = !draft.is_empty()
            || draft.is_editing()
            || !draft.tags.is_empty()
            || !self.editor.buffer().is_empty();
        renderer.screen(
            &listed,
            &self.api.all_tags(),
            self.api.filter(),
            show_draft.then(|| DraftView {
                draft,
                buffer: self.editor.buffer(),
            }),
        )
    }

    fn dispatch(&mut self, line: &str) -> Step {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };
        debug!(command, arg, "shell command");

        match command {
            "" | "list" | "ls" => Step::Redraw(Vec::new()),
            "help" | "?" => Step::Print(HELP.to_string()),
            "quit" | "exit" | "q" => Step::Quit,

            "title" => {
                self.api.set_title(clamp_title(arg));
                Step::Redraw(Vec::new())
            }
            "content" => {
                self.api.set_content(arg);
                Step::Redraw(Vec::new())
            }
            "append" => {
                let content = &self.api.draft().content;
                let next = if content.is_empty() {
                    arg.to_string()
                } else {
                    format!("{}\n{}", content, arg)
                };
                self.api.set_content(next);
                Step::Redraw(Vec::new())
            }
            "type" => {
                self.type_text(arg);
                Step::Redraw(Vec::new())
            }
            "tag" => {
                self.type_text(arg);
                self.press(TagKey::Enter);
                Step::Redraw(Vec::new())
            }
            "backspace" | "bs" => {
                if self.editor.buffer().is_empty() {
                    self.press(TagKey::Backspace);
                } else {
                    let mut buffer = self.editor.buffer().to_string();
                    buffer.pop();
                    self.editor.input(&buffer);
                }
                Step::Redraw(Vec::new())
            }
            "untag" => {
                let current = self.api.draft().tags.clone();
                let tag = arg.trim().to_lowercase();
                let api = &mut *self.api;
                self.editor.click(&tag, &current, |next| api.set_tags(next));
                Step::Redraw(Vec::new())
            }
            "save" => self.save(),
            "cancel" => {
                self.api.cancel_edit();
                self.editor = TagEditor::new();
                Step::Redraw(vec![CmdMessage::info("Draft discarded")])
            }

            "edit" => match self.api.resolve(arg) {
                Ok(id) => match self.api.edit(&id) {
                    Ok(()) => {
                        self.editor = TagEditor::new();
                        Step::Redraw(Vec::new())
                    }
                    Err(e) => Step::Redraw(vec![CmdMessage::error(e.to_string())]),
                },
                Err(e) => Step::Redraw(vec![CmdMessage::error(e.to_string())]),
            },
            "delete" | "rm" => match self.api.resolve(arg) {
                Ok(id) => Step::Redraw(self.api.delete(&id).messages),
                Err(e) => Step::Redraw(vec![CmdMessage::error(e.to_string())]),
            },

            "search" => {
                self.api.set_search(arg);
                Step::Redraw(Vec::new())
            }
            "filter" => {
                // Toggling, unlike the one-shot `--filter` flag.
                match pocketnotes::tags::normalize_tag(arg) {
                    Some(tag) => {
                        self.api.toggle_tag_filter(&tag);
                        Step::Redraw(Vec::new())
                    }
                    None => Step::Redraw(vec![CmdMessage::warning("Usage: filter TAG")]),
                }
            }
            "clear" => {
                self.api.clear_filters();
                Step::Redraw(Vec::new())
            }

            other => Step::Redraw(vec![CmdMessage::warning(format!(
                "Unknown command: {} (try help)",
                other
            ))]),
        }
    }

    /// Feeds text into the tag field one character at a time.
    fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == ',' {
                self.press(TagKey::Comma);
            } else {
                let mut buffer = self.editor.buffer().to_string();
                buffer.push(ch);
                self.editor.input(&buffer);
            }
        }
    }

    fn press(&mut self, key: TagKey) {
        let current = self.api.draft().tags.clone();
        let api = &mut *self.api;
        self.editor.key(key, &current, |next| api.set_tags(next));
    }

    /// Leaving the tag field commits pending text before the form submits.
    fn save(&mut self) -> Step {
        let current = self.api.draft().tags.clone();
        let api = &mut *self.api;
        self.editor.blur(&current, |next| api.set_tags(next));

        if self.api.draft().is_empty() {
            return Step::Redraw(vec![CmdMessage::info(
                "Nothing to save: a note needs a title or details.",
            )]);
        }
        let result = self.api.submit();
        self.editor = TagEditor::new();
        Step::Redraw(result.messages)
    }
}
