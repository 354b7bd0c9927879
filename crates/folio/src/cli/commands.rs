//! # Dispatch
//!
//! Builds the context every command needs (config, catalog, locale), then
//! routes the parsed command to its handler. Handlers talk to the library
//! only through [`Session`] and the catalog's read-only projections.
//!
//! `browse` is the one stateful command: it subscribes a printer to the
//! session and feeds it commands read line by line from stdin.

use super::i18n::Translator;
use super::render::{render_detail, render_list, render_snapshot, render_tabs};
use super::setup::{parse_cli, Cli, Commands};
use super::styles::{Theme, FOLIO_THEME};
use anyhow::{anyhow, Context, Result};
use folioapp::api::Session;
use folioapp::catalog::Catalog;
use folioapp::config::FolioConfig;
use folioapp::filter::{default_tabs, Filter};
use folioapp::model::Locale;
use folioapp::view::ViewSnapshot;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct AppContext {
    catalog: Catalog,
    locale: Locale,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = parse_cli();
    init_tracing(cli.verbose);

    let ctx = build_context(&cli)?;
    match cli.command.clone().unwrap_or_default() {
        Commands::List { filter } => handle_list(&ctx, &filter),
        Commands::View { id } => handle_view(&ctx, &id),
        Commands::Tags => handle_tags(&ctx),
        Commands::Browse => handle_browse(&ctx),
    }
}

/// Logs go to stderr so stdout stays clean for rendered and JSON output.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "folio=debug,folioapp=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn build_context(cli: &Cli) -> Result<AppContext> {
    let mut config =
        FolioConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(locale) = &cli.locale {
        config.locale = locale.clone();
    }
    if let Some(path) = &cli.catalog {
        config.catalog = Some(path.clone());
    }
    debug!(?config, "effective configuration");

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path, config.default_locale())
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::sample_with(config.default_locale())?,
    }
    .with_tech_preview(config.tech_preview);

    Ok(AppContext {
        catalog,
        locale: config.locale(),
        json: cli.json,
    })
}

fn new_session(ctx: &AppContext) -> Session<'_> {
    let t = Translator::new(ctx.locale.clone());
    Session::new(&ctx.catalog, ctx.locale.clone(), t.link_labels())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_list(ctx: &AppContext, filter: &str) -> Result<()> {
    let mut session = new_session(ctx);
    session.set_filter(Filter::parse(filter))?;
    let snapshot = session.snapshot()?;

    if ctx.json {
        return print_json(&snapshot.items);
    }
    let t = Translator::new(ctx.locale.clone());
    print!("{}", render_list(&snapshot.items, &t, &FOLIO_THEME));
    Ok(())
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let mut session = new_session(ctx);
    session.select(id)?;
    let detail = session
        .snapshot()?
        .detail
        .ok_or_else(|| anyhow!("No detail view for '{}'", id))?;

    if ctx.json {
        return print_json(&detail);
    }
    let t = Translator::new(ctx.locale.clone());
    print!("{}", render_detail(&detail, &t, &FOLIO_THEME));
    Ok(())
}

#[derive(Serialize)]
struct TabOutput<'a> {
    filter: &'a Filter,
    label: &'static str,
}

#[derive(Serialize)]
struct TagsOutput<'a> {
    tabs: Vec<TabOutput<'a>>,
    tags: Vec<&'a str>,
}

fn handle_tags(ctx: &AppContext) -> Result<()> {
    let t = Translator::new(ctx.locale.clone());
    let tabs = default_tabs();
    let tags = ctx.catalog.tags();

    if ctx.json {
        let output = TagsOutput {
            tabs: tabs
                .iter()
                .map(|tab| TabOutput {
                    filter: &tab.filter,
                    label: t.t(tab.label_key),
                })
                .collect(),
            tags,
        };
        return print_json(&output);
    }
    print!(
        "{}",
        render_tabs(&tabs, &Filter::All, &tags, &t, &FOLIO_THEME)
    );
    Ok(())
}

/// One line of input in `folio browse`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BrowseCommand {
    Filter(Filter),
    Open(String),
    Close,
    /// Switch to the given locale, or toggle en/jp when none is given.
    Lang(Option<Locale>),
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

impl BrowseCommand {
    fn parse(line: &str) -> Self {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return BrowseCommand::Nothing;
        };
        let arg = words.next();
        match (verb, arg) {
            ("filter" | "f", Some(tag)) => BrowseCommand::Filter(Filter::parse(tag)),
            ("filter" | "f", None) | ("all", None) => BrowseCommand::Filter(Filter::All),
            ("open" | "o", Some(id)) => BrowseCommand::Open(id.to_string()),
            ("close" | "c", None) => BrowseCommand::Close,
            ("lang" | "l", code) => BrowseCommand::Lang(code.map(Locale::from)),
            ("help" | "?", None) => BrowseCommand::Help,
            ("quit" | "exit" | "q", None) => BrowseCommand::Quit,
            _ => BrowseCommand::Unknown(line.trim().to_string()),
        }
    }
}

fn print_snapshot(snapshot: &ViewSnapshot, json: bool, theme: &Theme) {
    if json {
        match serde_json::to_string(snapshot) {
            Ok(line) => println!("{}", line),
            Err(e) => eprintln!("Error: {}", e),
        }
    } else {
        println!("{}", render_snapshot(snapshot, theme));
    }
}

fn handle_browse(ctx: &AppContext) -> Result<()> {
    let mut session = new_session(ctx);
    let json = ctx.json;
    print_snapshot(&session.snapshot()?, json, &FOLIO_THEME);
    session.subscribe(move |snapshot| print_snapshot(snapshot, json, &FOLIO_THEME));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let t = Translator::new(session.locale().clone());
        let outcome = match BrowseCommand::parse(&line) {
            BrowseCommand::Filter(filter) => session.set_filter(filter),
            BrowseCommand::Open(id) => session.select(&id).map(|_| ()),
            BrowseCommand::Close => session.close().map(|_| ()),
            BrowseCommand::Lang(code) => {
                let locale = code.unwrap_or_else(|| session.locale().toggled());
                let labels = Translator::new(locale.clone()).link_labels();
                session.set_locale(locale, labels)
            }
            BrowseCommand::Help => {
                println!("{}", t.t("browse.prompt"));
                Ok(())
            }
            BrowseCommand::Quit => break,
            BrowseCommand::Nothing => Ok(()),
            BrowseCommand::Unknown(input) => {
                eprintln!("{}: {}", t.t("browse.unknown"), input);
                Ok(())
            }
        };
        if let Err(e) = outcome {
            eprintln!("Error: {}", e);
        }
        io::stdout().flush()?;
    }
    Ok(())
}
