//! Locale-aware field resolution.
//!
//! The active locale is always passed in explicitly. Nothing in the library
//! reads a "current language" from shared state; the [`crate::api::Session`]
//! owns it and hands it to every projection.

use crate::error::{FolioError, Result};
use crate::model::{Entry, Field, Locale, LocalizedText};

/// Resolves `text` for `active`, falling back to `default`.
///
/// A value present for `active` is returned verbatim, even when empty.
/// A missing `default` value means the catalog was built around its
/// validation and is reported as [`FolioError::Configuration`].
pub fn resolve<'a>(
    entry_id: &str,
    field: Field,
    text: &'a LocalizedText,
    active: &Locale,
    default: &Locale,
) -> Result<&'a str> {
    text.get(active)
        .or_else(|| text.get(default))
        .ok_or_else(|| FolioError::Configuration {
            entry: entry_id.to_string(),
            field: field.as_str(),
            locale: default.to_string(),
        })
}

/// Resolves one localized field of an entry.
pub fn resolve_field<'a>(
    entry: &'a Entry,
    field: Field,
    active: &Locale,
    default: &Locale,
) -> Result<&'a str> {
    resolve(&entry.id, field, entry.text(field), active, default)
}
