//! The tag entry widget behind the draft form.
//!
//! [`TagEditor`] only owns the text the user is typing. The tags themselves
//! belong to whoever renders the editor: every operation receives the current
//! tag list and, when it changes, hands the full updated list to `on_change`.

use crate::tags;

/// Key presses the editor reacts to. Anything else is plain typing and goes
/// through [`TagEditor::input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKey {
    Enter,
    Comma,
    Backspace,
}

#[derive(Debug, Clone, Default)]
pub struct TagEditor {
    buffer: String,
}

impl TagEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replaces the buffer with what is currently typed.
    pub fn input(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    pub fn key<F>(&mut self, key: TagKey, current: &[String], on_change: F)
    where
        F: FnOnce(Vec<String>),
    {
        match key {
            TagKey::Enter | TagKey::Comma => self.commit(current, on_change),
            TagKey::Backspace => {
                if self.buffer.is_empty() && !current.is_empty() {
                    on_change(tags::without_last(current));
                }
            }
        }
    }

    /// Losing focus commits whatever non-blank text is pending.
    pub fn blur<F>(&mut self, current: &[String], on_change: F)
    where
        F: FnOnce(Vec<String>),
    {
        if !self.buffer.trim().is_empty() {
            self.commit(current, on_change);
        }
    }

    /// Clicking a displayed tag removes it.
    pub fn click<F>(&self, tag: &str, current: &[String], on_change: F)
    where
        F: FnOnce(Vec<String>),
    {
        on_change(tags::without_tag(current, tag));
    }

    fn commit<F>(&mut self, current: &[String], on_change: F)
    where
        F: FnOnce(Vec<String>),
    {
        if tags::normalize_tag(&self.buffer).is_none() {
            return;
        }
        if let Some(next) = tags::with_tag(current, &self.buffer) {
            on_change(next);
        }
        self.buffer.clear();
    }
}
