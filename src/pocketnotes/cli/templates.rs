//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone
//! `.tmp` files, embedded here as string constants.
//!
//! Templates are compiled with `trim_blocks` and `lstrip_blocks`, so a line
//! holding only a block tag produces no output. A block tag that ends a line
//! of text eats that line's newline, which is why some templates follow such
//! lines with an empty one.
//!
//! Layout math (widths, truncation, padding) happens in `render.rs`; the
//! templates pick styles and decide what to show.

pub const SCREEN_TEMPLATE: &str = include_str!("templates/screen.tmp");
pub const CARD_TEMPLATE: &str = include_str!("templates/card.tmp");
pub const DRAFT_TEMPLATE: &str = include_str!("templates/draft.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TAGS_TEMPLATE: &str = include_str!("templates/tags.tmp");
