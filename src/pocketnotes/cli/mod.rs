//! The `pn` command-line front end.
//!
//! - `setup`: clap argument definitions
//! - `commands`: dispatch and one-shot command handlers
//! - `shell`: the interactive session
//! - `render`, `templates`, `styles`: terminal output

mod commands;
mod render;
mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
