//! # Pocket Notes Architecture
//!
//! Pocket Notes is a **UI-agnostic note book library**: short text notes with
//! tags, a search box, and tag filters, persisted locally. The `pn` binary is
//! one front end; the same core could sit behind a browser or GUI front end.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive shell             │
//! │  - Renders the screen through templates                     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - View-state controller: notes, draft, filters             │
//! │  - Re-persists the whole collection after every mutation    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations over the in-memory collection            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - NoteStore: fail-soft load/save of the full collection    │
//! │  - KeyValueBackend: FileBackend (production), MemBackend    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Data flows one way: storage → in-memory list → filtered view → render.
//! User actions mutate the list, which is then saved in full.
//!
//! ## Presentational Pieces
//!
//! [`card::NoteCard`] and [`tag_editor::TagEditor`] hold no state of
//! consequence. Cards are snapshots built from a note; the tag editor owns
//! only its text buffer and reports tag changes through a callback.
//!
//! ## Module Overview
//!
//! - [`api`]: The controller facade
//! - [`commands`]: submit, edit, delete, filter, list
//! - [`store`]: Persistence contract and backends
//! - [`model`]: `Note`, `NoteId`, `Draft`
//! - [`tags`]: Tag normalization and tag-set helpers
//! - [`tag_editor`]: Tag entry state machine
//! - [`card`]: Note card view model
//! - [`index`]: Display indexes for the results view
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod card;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
pub mod tag_editor;
pub mod tags;
