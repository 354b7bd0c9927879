//! # CLI Behavior
//!
//! This is **one possible UI client** for folio, not the application itself.
//!
//! ## Naked Execution (`folio`)
//!
//! Running `folio` with no arguments lists the whole catalog.
//!
//! ## Commands
//!
//! - `folio list [--filter TAG]`: the list view; `all` shows everything.
//! - `folio view ID`: the detail view of one entry.
//! - `folio tags`: the filter bar and every tag in the catalog.
//! - `folio browse`: an interactive session on stdin. Each command updates
//!   the session and the new view is printed once, fully re-rendered.
//!
//! `--locale`, `--catalog`, `--config`, `--json` and `--verbose` apply to
//! every command.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch, the browse loop
//! - `i18n`: UI strings for each locale (the translation collaborator)
//! - `render`: Output formatting
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling

mod commands;
mod i18n;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
