use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const EN: &str = "en";
pub const JP: &str = "jp";

/// A display-language code such as `en` or `jp`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locale(String);

impl Locale {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn en() -> Self {
        Self::new(EN)
    }

    pub fn jp() -> Self {
        Self::new(JP)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The locale the language toggle switches to: `en` flips to `jp`,
    /// everything else flips back to `en`.
    pub fn toggled(&self) -> Self {
        if self.0 == EN {
            Self::jp()
        } else {
            Self::en()
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Text keyed by locale code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locale: impl Into<String>, text: impl Into<String>) -> Self {
        self.0.insert(locale.into(), text.into());
        self
    }

    pub fn get(&self, locale: &Locale) -> Option<&str> {
        self.0.get(locale.as_str()).map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizedText {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The localized fields of an [`Entry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
        }
    }
}

/// A link written as an object in catalog data.
///
/// Every member is optional so that malformed objects still deserialize;
/// the normalizer decides what to keep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl LinkObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

/// One element of a link list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkItem {
    Url(String),
    Object(LinkObject),
    /// Anything else found in catalog data, such as numbers or booleans.
    Unrecognized(serde_json::Value),
}

/// The shapes a `liveLink` / `sourceLink` value can take in catalog data.
///
/// `Many` is listed first so arrays never fall through to `One(Unrecognized)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinkSource {
    Many(Vec<LinkItem>),
    One(LinkItem),
}

impl LinkSource {
    pub fn url(url: impl Into<String>) -> Self {
        LinkSource::One(LinkItem::Url(url.into()))
    }

    pub fn object(object: LinkObject) -> Self {
        LinkSource::One(LinkItem::Object(object))
    }
}

/// A normalized link, ready for display. Never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub key: String,
    pub url: String,
    pub label: String,
}

/// One catalog item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    /// Missing fields load as empty and are reported by catalog validation.
    #[serde(default)]
    pub title: LocalizedText,
    #[serde(default)]
    pub description: LocalizedText,
    #[serde(default)]
    pub tech: Vec<String>,
    /// Membership is what matters; the declared order is kept for display.
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_link: Option<LinkSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_link: Option<LinkSource>,
}

impl Entry {
    pub fn new(id: impl Into<String>, title: LocalizedText, description: LocalizedText) -> Self {
        Self {
            id: id.into(),
            title,
            description,
            tech: Vec::new(),
            tags: Vec::new(),
            live_link: None,
            source_link: None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn text(&self, field: Field) -> &LocalizedText {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_locale_toggle() {
        assert_eq!(Locale::en().toggled(), Locale::jp());
        assert_eq!(Locale::jp().toggled(), Locale::en());
        assert_eq!(Locale::new("fr").toggled(), Locale::en());
    }

    #[test]
    fn test_localized_text_keeps_empty_values() {
        let text = LocalizedText::new().with(EN, "Hello").with(JP, "");
        assert_eq!(text.get(&Locale::jp()), Some(""));
        assert_eq!(text.get(&Locale::new("fr")), None);
    }

    #[test]
    fn test_link_source_shapes() {
        let single: LinkSource = serde_json::from_value(json!("https://x")).unwrap();
        assert_eq!(single, LinkSource::url("https://x"));

        let object: LinkSource =
            serde_json::from_value(json!({"url": "https://y", "label": "Docs"})).unwrap();
        assert_eq!(
            object,
            LinkSource::object(LinkObject::new("https://y").with_label("Docs"))
        );

        let list: LinkSource = serde_json::from_value(json!(["a", {"url": "b"}, 7])).unwrap();
        assert_eq!(
            list,
            LinkSource::Many(vec![
                LinkItem::Url("a".into()),
                LinkItem::Object(LinkObject::new("b")),
                LinkItem::Unrecognized(json!(7)),
            ])
        );
    }

    #[test]
    fn test_object_without_url_still_deserializes() {
        let source: LinkSource = serde_json::from_value(json!({"label": "orphan"})).unwrap();
        assert_eq!(
            source,
            LinkSource::object(LinkObject {
                label: Some("orphan".into()),
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_entry_from_json_with_null_link() {
        let entry: Entry = serde_json::from_value(json!({
            "id": "demo",
            "title": {"en": "Demo"},
            "description": {"en": "A demo"},
            "tags": ["web"],
            "liveLink": null
        }))
        .unwrap();
        assert_eq!(entry.live_link, None);
        assert_eq!(entry.source_link, None);
        assert!(entry.tech.is_empty());
        assert!(entry.has_tag("web"));
        assert!(!entry.has_tag("ui"));
    }
}
