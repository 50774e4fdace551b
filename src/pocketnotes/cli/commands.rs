//! # CLI Layer
//!
//! This module is **one possible front end** for pocketnotes. It is the only
//! place that parses arguments, writes to the terminal or decides exit codes.
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, renderer and configuration
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! One-shot commands start from a fresh view every time, so indexes passed to
//! `edit` and `delete` refer to the view selected by the same invocation's
//! `--search`/`--filter` flags.

use super::render::Renderer;
use super::setup::{Cli, Commands, ViewArgs};
use super::shell;
use clap::Parser;
use pocketnotes::api::NotesApi;
use pocketnotes::commands::CmdMessage;
use pocketnotes::config::{data_dir, ConfigKey, NotesConfig};
use pocketnotes::error::{NotesError, Result};
use pocketnotes::model::{NoteId, TITLE_MAX_CHARS};
use pocketnotes::store::fs::FileBackend;
use pocketnotes::store::{LocalStore, NoteStore};
use pocketnotes::tag_editor::{TagEditor, TagKey};
use pocketnotes::tags;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

type FileNotesApi = NotesApi<LocalStore<FileBackend>>;

struct AppContext {
    api: FileNotesApi,
    renderer: Renderer,
    config: NotesConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { view }) => handle_list(&mut ctx, view),
        Some(Commands::Add {
            title,
            content,
            tags,
        }) => handle_add(&mut ctx, title.join(" "), content, tags),
        Some(Commands::Edit {
            note,
            title,
            content,
            tags,
            untag,
            view,
        }) => handle_edit(
            &mut ctx,
            &note,
            EditChanges {
                title,
                content,
                tags,
                untag,
            },
            view,
        ),
        Some(Commands::Delete { notes, view }) => handle_delete(&mut ctx, &notes, view),
        Some(Commands::Tags) => handle_tags(&ctx),
        Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&mut ctx, ViewArgs::default()),
    }
}

/// Diagnostics go to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_directive = if verbose {
        "pocketnotes=debug,pn=debug"
    } else {
        "pocketnotes=warn,pn=warn"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir()?;
    let config = NotesConfig::load(&data_dir)?;
    debug!(dir = %data_dir.display(), key = %config.storage_key, "using data directory");

    let store = LocalStore::new(FileBackend::new(data_dir.clone())).with_key(&config.storage_key);
    let mut api = NotesApi::open(store);

    let use_color = !cli.no_color && console::colors_enabled();
    let renderer = Renderer::new(use_color, &config.date_format);

    if let Some(message) = api.take_load_message() {
        eprint!("{}", renderer.messages(&[message]));
    }

    Ok(AppContext {
        api,
        renderer,
        config,
        data_dir,
    })
}

/// Applies the search box and tag filter flags to the controller.
fn apply_view<S: NoteStore>(api: &mut NotesApi<S>, view: &ViewArgs) {
    if let Some(term) = &view.search {
        api.set_search(term.as_str());
    }
    for raw in &view.filter {
        if let Some(tag) = tags::normalize_tag(raw) {
            if !api.filter().is_active(&tag) {
                api.toggle_tag_filter(&tag);
            }
        }
    }
}

/// Types each tag into the editor and presses Enter, the way a user would.
fn enter_tags<S: NoteStore>(
    api: &mut NotesApi<S>,
    editor: &mut TagEditor,
    raw_tags: &[String],
) {
    for raw in raw_tags {
        editor.input(raw);
        let current = api.draft().tags.clone();
        editor.key(TagKey::Enter, &current, |next| api.set_tags(next));
    }
}

fn remove_tags<S: NoteStore>(
    api: &mut NotesApi<S>,
    editor: &TagEditor,
    raw_tags: &[String],
) {
    for raw in raw_tags {
        let Some(tag) = tags::normalize_tag(raw) else {
            continue;
        };
        let current = api.draft().tags.clone();
        editor.click(&tag, &current, |next| api.set_tags(next));
    }
}

/// Caps a title the way the title field's length limit does.
pub(crate) fn clamp_title(title: &str) -> String {
    title.chars().take(TITLE_MAX_CHARS).collect()
}

fn print_screen(ctx: &AppContext) {
    let listed = ctx.api.list().listed_notes;
    print!(
        "{}",
        ctx.renderer
            .screen(&listed, &ctx.api.all_tags(), ctx.api.filter(), None)
    );
}

fn print_messages(ctx: &AppContext, messages: &[CmdMessage]) {
    print!("{}", ctx.renderer.messages(messages));
}

fn handle_list(ctx: &mut AppContext, view: ViewArgs) -> Result<()> {
    apply_view(&mut ctx.api, &view);
    print_screen(ctx);
    Ok(())
}

fn handle_add(
    ctx: &mut AppContext,
    title: String,
    content: Option<String>,
    raw_tags: Vec<String>,
) -> Result<()> {
    ctx.api.set_title(clamp_title(&title));
    ctx.api.set_content(content.unwrap_or_default());

    let mut editor = TagEditor::new();
    enter_tags(&mut ctx.api, &mut editor, &raw_tags);

    if ctx.api.draft().is_empty() {
        print_messages(
            ctx,
            &[CmdMessage::info(
                "Nothing to save: a note needs a title or details.",
            )],
        );
        return Ok(());
    }

    let result = ctx.api.submit();
    print_messages(ctx, &result.messages);
    Ok(())
}

struct EditChanges {
    title: Option<String>,
    content: Option<String>,
    tags: Vec<String>,
    untag: Vec<String>,
}

impl EditChanges {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.tags.is_empty()
            && self.untag.is_empty()
    }
}

fn handle_edit(
    ctx: &mut AppContext,
    selector: &str,
    changes: EditChanges,
    view: ViewArgs,
) -> Result<()> {
    apply_view(&mut ctx.api, &view);
    let id = ctx.api.resolve(selector)?;

    if changes.is_empty() {
        return Err(NotesError::Api(
            "Nothing to change: pass --title, --content, --tag or --untag".to_string(),
        ));
    }

    ctx.api.edit(&id)?;
    if let Some(title) = &changes.title {
        ctx.api.set_title(clamp_title(title));
    }
    if let Some(content) = changes.content {
        ctx.api.set_content(content);
    }

    let mut editor = TagEditor::new();
    remove_tags(&mut ctx.api, &editor, &changes.untag);
    enter_tags(&mut ctx.api, &mut editor, &changes.tags);

    if ctx.api.draft().is_empty() {
        ctx.api.cancel_edit();
        print_messages(
            ctx,
            &[CmdMessage::warning(
                "Not saved: a note needs a title or details.",
            )],
        );
        return Ok(());
    }

    let result = ctx.api.submit();
    print_messages(ctx, &result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, selectors: &[String], view: ViewArgs) -> Result<()> {
    apply_view(&mut ctx.api, &view);

    // Resolve everything against the same view before the first delete renumbers it.
    let ids = selectors
        .iter()
        .map(|s| ctx.api.resolve(s))
        .collect::<Result<Vec<NoteId>>>()?;

    let mut messages = Vec::new();
    for id in &ids {
        messages.extend(ctx.api.delete(id).messages);
    }
    print_messages(ctx, &messages);
    Ok(())
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let counts: Vec<(String, usize)> = ctx
        .api
        .all_tags()
        .into_iter()
        .map(|tag| {
            let count = ctx.api.notes().iter().filter(|n| n.has_tag(&tag)).count();
            (tag, count)
        })
        .collect();
    print!("{}", ctx.renderer.tags(&counts));
    Ok(())
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    shell::run(&mut ctx.api, &ctx.renderer, stdin.lock(), stdout.lock())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let Some(name) = key else {
        for key in ConfigKey::ALL {
            println!("{} = {}", key.name(), ctx.config.get(key));
        }
        return Ok(());
    };

    let key = ConfigKey::parse(&name)
        .ok_or_else(|| NotesError::Api(format!("Unknown config key: {}", name)))?;

    match value {
        None => println!("{} = {}", key.name(), ctx.config.get(key)),
        Some(value) => {
            ctx.config.set(key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            print_messages(
                ctx,
                &[CmdMessage::success(format!(
                    "{} set to {}",
                    key.name(),
                    ctx.config.get(key)
                ))],
            );
        }
    }
    Ok(())
}
