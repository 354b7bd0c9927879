//! # Rendering
//!
//! Turns library projections into terminal text. Every function returns a
//! `String`; printing is the caller's business.
//!
//! Layout math (column widths, truncation) is Unicode-aware because Japanese
//! titles take two columns per character.

use super::i18n::Translator;
use super::styles::Theme;
use folioapp::filter::{Filter, FilterTab};
use folioapp::view::{DetailView, ListItem, ViewSnapshot};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const TITLE_WIDTH: usize = 40;
const ELLIPSIS: char = '…';
const LIVE_MARKER: &str = "↗";
const SOURCE_MARKER: &str = "⌥";

/// Renders the list view, or the empty-state message when nothing matches.
pub fn render_list(items: &[ListItem], t: &Translator, theme: &Theme) -> String {
    if items.is_empty() {
        return format!("{}\n", theme.muted.apply_to(t.t("projects.empty")));
    }

    let title_width = items
        .iter()
        .map(|i| i.title.width())
        .max()
        .unwrap_or(0)
        .min(TITLE_WIDTH);

    let mut out = String::new();
    for (n, item) in items.iter().enumerate() {
        let title = fit(&item.title, title_width);
        let padding = " ".repeat(title_width.saturating_sub(title.width()));
        let tags = item
            .tags
            .iter()
            .map(|tag| theme.tag.apply_to(format!("#{tag}")).to_string())
            .collect::<Vec<_>>()
            .join(" ");
        let _ = writeln!(
            out,
            "{} {}{}  {}",
            theme.index.apply_to(format!("{:>3}.", n + 1)),
            theme.title.apply_to(title),
            padding,
            tags
        );

        let mut details = vec![theme.tech.apply_to(item.tech.join(" · ")).to_string()];
        if item.extra_tech > 0 {
            details.push(theme.muted.apply_to(format!("+{}", item.extra_tech)).to_string());
        }
        if item.has_live_link {
            details.push(format!("{} {}", LIVE_MARKER, t.t("projects.cardLive")));
        }
        if item.has_source_link {
            details.push(format!("{} {}", SOURCE_MARKER, t.t("projects.cardCode")));
        }
        let _ = writeln!(out, "     {}  {}", theme.muted.apply_to(&item.id), details.join("  "));
    }
    out
}

/// Renders the detail view of the open entry.
pub fn render_detail(detail: &DetailView, t: &Translator, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", theme.title.apply_to(&detail.title));
    if !detail.tags.is_empty() {
        let tags = detail
            .tags
            .iter()
            .map(|tag| theme.tag.apply_to(tag.to_uppercase()).to_string())
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", tags);
    }
    let _ = writeln!(out);
    if !detail.description.is_empty() {
        let _ = writeln!(out, "{}", detail.description);
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", theme.heading.apply_to(t.t("projects.techStack")));
    let _ = writeln!(out, "  {}", theme.tech.apply_to(detail.tech.join(" · ")));

    let links: Vec<(&str, &str, &str)> = detail
        .live_links
        .iter()
        .map(|l| (LIVE_MARKER, l.label.as_str(), l.url.as_str()))
        .chain(
            detail
                .source_links
                .iter()
                .map(|l| (SOURCE_MARKER, l.label.as_str(), l.url.as_str())),
        )
        .collect();
    if !links.is_empty() {
        let label_width = links.iter().map(|(_, label, _)| label.width()).max().unwrap_or(0);
        let _ = writeln!(out);
        for (marker, label, url) in links {
            let padding = " ".repeat(label_width - label.width());
            let _ = writeln!(
                out,
                "  {} {}{}  {}",
                marker,
                theme.link_label.apply_to(label),
                padding,
                url
            );
        }
    }
    out
}

/// Renders the filter bar followed by every tag in the catalog.
pub fn render_tabs(
    tabs: &[FilterTab],
    current: &Filter,
    all_tags: &[&str],
    t: &Translator,
    theme: &Theme,
) -> String {
    let bar = tabs
        .iter()
        .map(|tab| {
            let label = format!(" {} ", t.t(tab.label_key));
            if tab.is_active(current) {
                theme.active_tab.apply_to(label).to_string()
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    let tags = all_tags
        .iter()
        .map(|tag| theme.tag.apply_to(*tag).to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}\n{}\n\n{}: {}\n",
        theme.heading.apply_to(t.t("projects.title")),
        bar,
        t.t("projects.allTags"),
        tags
    )
}

/// Renders a whole snapshot: header, list, and the detail view when open.
pub fn render_snapshot(snapshot: &ViewSnapshot, theme: &Theme) -> String {
    let t = Translator::new(snapshot.locale.clone());
    let mut out = format!(
        "{} [{} · {}]\n",
        theme.heading.apply_to(t.t("projects.title")),
        snapshot.filter,
        snapshot.locale
    );
    out.push_str(&render_list(&snapshot.items, &t, theme));
    if let Some(detail) = &snapshot.detail {
        out.push('\n');
        out.push_str(&render_detail(detail, &t, theme));
    }
    out
}

/// Cuts `text` to at most `width` columns, ending in an ellipsis when cut.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width().unwrap_or(1));
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push(ELLIPSIS);
    out
}
