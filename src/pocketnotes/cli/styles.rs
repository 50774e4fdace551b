use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Prefix shown when a template asks for a style that does not exist.
pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Named styles applied by the templates' `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    /// Styles `text`, or flags it when `name` is unknown so template typos show up.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

/// ANSI 256-color gray used for secondary text.
const MUTED_GRAY: u8 = 246;

pub static NOTES_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(MUTED_GRAY);
    Theme::new()
        .add("header", Style::new().bold().cyan())
        .add("dim", muted.clone())
        .add("label", Style::new().bold())
        .add("index", Style::new().yellow())
        .add("title", Style::new().bold())
        .add("untitled", Style::new().italic().dim())
        .add("time", muted.italic())
        .add("tag", Style::new().magenta())
        .add("tag_active", Style::new().black().on_magenta())
        .add("draft", Style::new().green())
        .add("info", Style::new().dim())
        .add("success", Style::new().green())
        .add("warning", Style::new().yellow())
        .add("error", Style::new().red())
});
