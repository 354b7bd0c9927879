//! Tag filtering.
//!
//! A [`Filter`] is either the `all` sentinel or a single tag. [`apply`] is a
//! stable filter over the catalog order: it never reorders and never fails.
//! An unknown tag simply yields nothing, which the UI renders as its empty
//! state.

use crate::model::Entry;
use serde::Serialize;
use std::fmt;

/// The word that selects every entry. Reserved: no entry may use it as a tag.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Filter {
    #[default]
    All,
    Tag(String),
}

impl Filter {
    /// `"all"` maps to [`Filter::All`], anything else is a tag.
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Tag(value.to_string())
        }
    }

    pub fn tag(tag: impl Into<String>) -> Self {
        Filter::Tag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Tag(tag) => tag,
        }
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(tag) => entry.has_tag(tag),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

/// Returns the entries visible under `filter`, in catalog order.
pub fn apply<'a>(entries: &'a [Entry], filter: &Filter) -> Vec<&'a Entry> {
    entries.iter().filter(|e| filter.matches(e)).collect()
}

/// A tab in the filter bar: the filter it activates and the translation key
/// for its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTab {
    pub filter: Filter,
    pub label_key: &'static str,
}

impl FilterTab {
    pub fn is_active(&self, current: &Filter) -> bool {
        &self.filter == current
    }
}

/// The filter bar shown above the catalog list.
pub fn default_tabs() -> Vec<FilterTab> {
    [
        (ALL, "projects.filterAll"),
        ("web", "projects.filterWeb"),
        ("ui", "projects.filterUI"),
        ("open-source", "projects.filterOpen"),
    ]
    .into_iter()
    .map(|(id, label_key)| FilterTab {
        filter: Filter::parse(id),
        label_key,
    })
    .collect()
}
