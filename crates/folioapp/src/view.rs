//! View projections.
//!
//! These are what UI clients render. They carry already-resolved text and
//! already-normalized links, so a client never touches [`LocalizedText`] or
//! [`LinkSource`] directly.
//!
//! [`LocalizedText`]: crate::model::LocalizedText
//! [`LinkSource`]: crate::model::LinkSource

use crate::filter::Filter;
use crate::model::{Locale, LinkRecord};
use serde::Serialize;

/// Translated fallback labels for links that carry no label of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkLabels {
    pub live: String,
    pub source: String,
}

impl LinkLabels {
    pub fn new(live: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            live: live.into(),
            source: source.into(),
        }
    }
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self::new("Live Demo", "Source Code")
    }
}

/// One row of the catalog list. Only the title is localized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub id: String,
    pub title: String,
    pub tags: Vec<String>,
    /// The first few tech badges.
    pub tech: Vec<String>,
    /// How many tech badges were left out of `tech`.
    pub extra_tech: usize,
    pub has_live_link: bool,
    pub has_source_link: bool,
}

/// The open entry, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub tech: Vec<String>,
    pub live_links: Vec<LinkRecord>,
    pub source_links: Vec<LinkRecord>,
}

impl DetailView {
    /// Live links first, then source links, as the detail view lays them out.
    pub fn links(&self) -> impl Iterator<Item = &LinkRecord> {
        self.live_links.iter().chain(self.source_links.iter())
    }
}

/// Everything a client needs to draw the catalog at one point in time.
///
/// Built in one pass under a single locale, so a snapshot never mixes text
/// from two languages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    pub locale: Locale,
    pub filter: Filter,
    pub items: Vec<ListItem>,
    pub has_results: bool,
    pub detail: Option<DetailView>,
}
