//! Tag support for pocketnotes.
//!
//! Tags are free-form labels attached to notes for filtering. There is no
//! registry: a tag exists as long as some note carries it, and the set of
//! known tags is derived from the collection on demand (see [`tag_universe`]).
//!
//! ## Normalization
//!
//! Every tag that enters a note goes through [`normalize_tag`]: surrounding
//! whitespace is trimmed and the result is lowercased. A note's tag list keeps
//! insertion order and never holds the same normalized tag twice.

use crate::model::Note;
use std::collections::BTreeSet;

/// Trims and lowercases a raw tag. Returns `None` when nothing is left.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Returns `tags` with `raw` appended, or `None` if `raw` normalizes to
/// nothing or is already present.
pub fn with_tag(tags: &[String], raw: &str) -> Option<Vec<String>> {
    let value = normalize_tag(raw)?;
    if tags.contains(&value) {
        return None;
    }
    let mut next = tags.to_vec();
    next.push(value);
    Some(next)
}

/// Returns `tags` without `tag`. Matching is exact.
pub fn without_tag(tags: &[String], tag: &str) -> Vec<String> {
    tags.iter().filter(|t| t.as_str() != tag).cloned().collect()
}

/// Returns `tags` without its most recently added entry.
pub fn without_last(tags: &[String]) -> Vec<String> {
    match tags.split_last() {
        Some((_, rest)) => rest.to_vec(),
        None => Vec::new(),
    }
}

/// Adds `tag` if absent, removes it if present. Selection order is kept.
pub fn toggle(selected: &mut Vec<String>, tag: &str) {
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

/// The sorted set of distinct tags across all notes.
pub fn tag_universe(notes: &[Note]) -> Vec<String> {
    notes
        .iter()
        .flat_map(|note| note.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_tag("  Work "), Some("work".to_string()));
        assert_eq!(normalize_tag("   "), None);
        assert_eq!(normalize_tag(""), None);
    }

    #[test]
    fn with_tag_deduplicates_after_normalizing() {
        let first = with_tag(&[], "Work").unwrap();
        assert_eq!(first, tags(&["work"]));
        assert_eq!(with_tag(&first, "work"), None);
        assert_eq!(with_tag(&first, " WORK "), None);
    }

    #[test]
    fn with_tag_preserves_insertion_order() {
        let next = with_tag(&tags(&["zeta", "alpha"]), "mid").unwrap();
        assert_eq!(next, tags(&["zeta", "alpha", "mid"]));
    }

    #[test]
    fn without_last_pops_most_recent() {
        assert_eq!(without_last(&tags(&["a", "b"])), tags(&["a"]));
        assert!(without_last(&[]).is_empty());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let original = tags(&["home", "work"]);
        let mut selected = original.clone();
        toggle(&mut selected, "urgent");
        assert_eq!(selected, tags(&["home", "work", "urgent"]));
        toggle(&mut selected, "urgent");
        assert_eq!(selected, original);

        toggle(&mut selected, "home");
        toggle(&mut selected, "home");
        assert_eq!(selected, tags(&["work", "home"]));
    }

    #[test]
    fn universe_is_sorted_and_distinct() {
        let notes = vec![
            Note::new("a".into(), "".into(), tags(&["work", "home"])),
            Note::new("b".into(), "".into(), tags(&["home", "errands"])),
        ];
        assert_eq!(tag_universe(&notes), tags(&["errands", "home", "work"]));
        assert!(tag_universe(&[]).is_empty());
    }
}
