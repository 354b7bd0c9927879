//! UI strings for the CLI (EN/JP) with English fallback.
//!
//! This is the translation collaborator the library expects to live outside
//! it: the library only ever receives finished strings such as the link
//! fallback labels.

use folioapp::model::{Locale, JP};
use folioapp::view::LinkLabels;
use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

static EN_TABLE: Lazy<Table> = Lazy::new(|| {
    [
        ("projects.title", "Projects"),
        ("projects.filterAll", "All"),
        ("projects.filterWeb", "Web"),
        ("projects.filterUI", "UI"),
        ("projects.filterOpen", "Open Source"),
        ("projects.allTags", "All tags"),
        ("projects.liveDemo", "Live Demo"),
        ("projects.sourceCode", "Source Code"),
        ("projects.cardLive", "Live"),
        ("projects.cardCode", "Code"),
        ("projects.techStack", "Tech Stack"),
        ("projects.empty", "No projects found in this category."),
        ("browse.prompt", "Commands: filter <tag>, open <id>, close, lang [code], help, quit"),
        ("browse.unknown", "Unknown command"),
    ]
    .into_iter()
    .collect()
});

static JP_TABLE: Lazy<Table> = Lazy::new(|| {
    [
        ("projects.title", "プロジェクト"),
        ("projects.filterAll", "すべて"),
        ("projects.filterWeb", "ウェブ"),
        ("projects.filterOpen", "オープンソース"),
        ("projects.allTags", "すべてのタグ"),
        ("projects.liveDemo", "ライブデモ"),
        ("projects.sourceCode", "ソースコード"),
        ("projects.cardLive", "ライブ"),
        ("projects.cardCode", "コード"),
        ("projects.techStack", "技術スタック"),
        ("projects.empty", "このカテゴリーにはプロジェクトがありません。"),
        ("browse.unknown", "不明なコマンド"),
    ]
    .into_iter()
    .collect()
});

/// Looks up UI strings for one locale.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Missing keys fall back to English, then to the key itself.
    pub fn t(&self, key: &'static str) -> &'static str {
        let overlay = match self.locale.as_str() {
            JP => Some(&*JP_TABLE),
            _ => None,
        };
        overlay
            .and_then(|table| table.get(key))
            .or_else(|| EN_TABLE.get(key))
            .copied()
            .unwrap_or(key)
    }

    pub fn link_labels(&self) -> LinkLabels {
        LinkLabels::new(self.t("projects.liveDemo"), self.t("projects.sourceCode"))
    }
}
