//! # Catalog
//!
//! The catalog is the composition root of the library. It owns the entry list,
//! which never changes after loading, and projects it into view data:
//!
//! - [`Catalog::list_items`]: the filtered list. Only titles are localized and
//!   links are not normalized, since most rows are never opened.
//! - [`Catalog::detail`]: the selected entry, with title and description
//!   resolved and both link fields normalized.
//!
//! ## Validation
//!
//! Every constructor validates the data once, up front:
//! - entry ids are unique
//! - every entry has a default-locale title and description
//! - no tag is empty or the reserved `all` (see [`crate::tags`])
//!
//! A catalog that fails validation is never built, which is what lets the
//! resolver treat a missing default value as a data-integrity bug.

use crate::error::{FolioError, Result};
use crate::filter::{self, Filter};
use crate::links;
use crate::locale::resolve_field;
use crate::model::{Entry, Field, Locale};
use crate::selection::Selection;
use crate::tags::validate_tag_name;
use crate::view::{DetailView, LinkLabels, ListItem};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// Number of tech badges shown on a list row.
pub const DEFAULT_TECH_PREVIEW: usize = 3;

const SAMPLE_CATALOG: &str = include_str!("../data/projects.json");

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    default_locale: Locale,
    tech_preview: usize,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>, default_locale: Locale) -> Result<Self> {
        validate(&entries, &default_locale)?;
        debug!(
            entries = entries.len(),
            default_locale = %default_locale,
            "catalog loaded"
        );
        Ok(Self {
            entries,
            default_locale,
            tech_preview: DEFAULT_TECH_PREVIEW,
        })
    }

    pub fn from_json(json: &str, default_locale: Locale) -> Result<Self> {
        let entries: Vec<Entry> = serde_json::from_str(json)?;
        Self::new(entries, default_locale)
    }

    pub fn load(path: &Path, default_locale: Locale) -> Result<Self> {
        debug!(path = %path.display(), "reading catalog");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, default_locale)
    }

    /// The catalog that ships with the library, with `en` as its default.
    pub fn sample() -> Result<Self> {
        Self::sample_with(Locale::en())
    }

    /// The bundled catalog with another fallback locale. Every sample entry
    /// has `en` and `jp` text; any other default fails validation.
    pub fn sample_with(default_locale: Locale) -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG, default_locale)
    }

    pub fn with_tech_preview(mut self, count: usize) -> Self {
        self.tech_preview = count;
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Every distinct tag, in the order it first appears.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|e| e.tags.iter().map(String::as_str))
            .filter(|tag| seen.insert(*tag))
            .collect()
    }

    pub fn visible_entries(&self, filter: &Filter) -> Vec<&Entry> {
        filter::apply(&self.entries, filter)
    }

    pub fn list_items(&self, filter: &Filter, locale: &Locale) -> Result<Vec<ListItem>> {
        self.visible_entries(filter)
            .into_iter()
            .map(|entry| self.list_item(entry, locale))
            .collect()
    }

    fn list_item(&self, entry: &Entry, locale: &Locale) -> Result<ListItem> {
        let title = resolve_field(entry, Field::Title, locale, &self.default_locale)?;
        let shown = entry.tech.len().min(self.tech_preview);
        Ok(ListItem {
            id: entry.id.clone(),
            title: title.to_string(),
            tags: entry.tags.clone(),
            tech: entry.tech[..shown].to_vec(),
            extra_tech: entry.tech.len() - shown,
            has_live_link: links::has_usable(entry.live_link.as_ref()),
            has_source_link: links::has_usable(entry.source_link.as_ref()),
        })
    }

    /// Projects the selected entry, if any.
    ///
    /// A selection naming an id this catalog does not hold yields `None`.
    pub fn detail(
        &self,
        selection: &Selection,
        locale: &Locale,
        labels: &LinkLabels,
    ) -> Result<Option<DetailView>> {
        let Some(id) = selection.selected_id() else {
            return Ok(None);
        };
        let Some(entry) = self.get(id) else {
            debug!(id, "selection does not match any entry");
            return Ok(None);
        };

        Ok(Some(DetailView {
            id: entry.id.clone(),
            title: resolve_field(entry, Field::Title, locale, &self.default_locale)?.to_string(),
            description: resolve_field(entry, Field::Description, locale, &self.default_locale)?
                .to_string(),
            tags: entry.tags.clone(),
            tech: entry.tech.clone(),
            live_links: links::normalize(entry.live_link.as_ref(), &labels.live),
            source_links: links::normalize(entry.source_link.as_ref(), &labels.source),
        }))
    }
}

fn validate(entries: &[Entry], default_locale: &Locale) -> Result<()> {
    let mut ids = HashSet::new();
    for entry in entries {
        if !ids.insert(entry.id.as_str()) {
            return Err(FolioError::DuplicateEntry(entry.id.clone()));
        }

        for field in [Field::Title, Field::Description] {
            if entry.text(field).get(default_locale).is_none() {
                return Err(FolioError::Configuration {
                    entry: entry.id.clone(),
                    field: field.as_str(),
                    locale: default_locale.to_string(),
                });
            }
        }

        for tag in &entry.tags {
            validate_tag_name(tag).map_err(|e| FolioError::InvalidTag {
                entry: entry.id.clone(),
                tag: tag.clone(),
                reason: e.to_string(),
            })?;
        }
    }
    Ok(())
}
