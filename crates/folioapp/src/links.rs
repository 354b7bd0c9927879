//! Link normalization.
//!
//! Catalog data is loose about links: a `liveLink` may be missing, a bare URL,
//! an object with an optional label and key, or a list mixing both. The detail
//! view wants one shape, so [`normalize`] folds every variant of
//! [`LinkSource`] into an ordered list of [`LinkRecord`]s.
//!
//! Malformed items (objects without a usable `url`, unrecognized values) are
//! dropped rather than reported. Upstream data is allowed to be sloppy.

use crate::model::{LinkItem, LinkRecord, LinkSource};
use tracing::trace;

/// Normalizes a link source into display records.
///
/// Records keep the source order. Items without an explicit key get
/// `"<url>-<position>"`, which keeps derived keys unique within one call
/// even when a URL repeats. A single (non-list) source counts as position 0.
pub fn normalize(input: Option<&LinkSource>, fallback_label: &str) -> Vec<LinkRecord> {
    match input {
        None => Vec::new(),
        Some(LinkSource::One(item)) => normalize_item(item, 0, fallback_label)
            .into_iter()
            .collect(),
        Some(LinkSource::Many(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| normalize_item(item, index, fallback_label))
            .collect(),
    }
}

/// True when [`normalize`] would produce at least one record. Builds nothing,
/// so list views can use it without normalizing.
pub fn has_usable(input: Option<&LinkSource>) -> bool {
    match input {
        None => false,
        Some(LinkSource::One(item)) => usable_url(item).is_some(),
        Some(LinkSource::Many(items)) => items.iter().any(|item| usable_url(item).is_some()),
    }
}

fn usable_url(item: &LinkItem) -> Option<&str> {
    let url = match item {
        LinkItem::Url(url) => Some(url.as_str()),
        LinkItem::Object(object) => object.url.as_deref(),
        LinkItem::Unrecognized(_) => None,
    };
    url.filter(|u| !u.is_empty())
}

fn normalize_item(item: &LinkItem, index: usize, fallback_label: &str) -> Option<LinkRecord> {
    let Some(url) = usable_url(item) else {
        trace!(index, ?item, "dropping link without a usable url");
        return None;
    };
    let (label, key) = match item {
        LinkItem::Object(object) => (object.label.clone(), object.key.clone()),
        LinkItem::Url(_) | LinkItem::Unrecognized(_) => (None, None),
    };
    Some(LinkRecord {
        key: key.unwrap_or_else(|| derived_key(url, index)),
        url: url.to_string(),
        label: label.unwrap_or_else(|| fallback_label.to_string()),
    })
}

fn derived_key(url: &str, index: usize) -> String {
    format!("{}-{}", url, index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LinkObject;
    use serde_json::json;

    fn urls(records: &[LinkRecord]) -> Vec<&str> {
        records.iter().map(|r| r.url.as_str()).collect()
    }

    #[test]
    fn test_absent_is_empty() {
        assert!(normalize(None, "Live").is_empty());
    }

    #[test]
    fn test_empty_string_is_empty() {
        assert!(normalize(Some(&LinkSource::url("")), "Live").is_empty());
    }

    #[test]
    fn test_single_url_uses_fallback_label() {
        let records = normalize(Some(&LinkSource::url("https://x")), "Live");
        assert_eq!(
            records,
            vec![LinkRecord {
                key: "https://x-0".into(),
                url: "https://x".into(),
                label: "Live".into(),
            }]
        );
    }

    #[test]
    fn test_object_label_and_key_win() {
        let source = LinkSource::object(
            LinkObject::new("https://docs")
                .with_label("Docs")
                .with_key("docs"),
        );
        let records = normalize(Some(&source), "Live");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].key, "docs");
        assert_eq!(records[0].label, "Docs");
        assert_eq!(records[0].url, "https://docs");
    }

    #[test]
    fn test_object_without_label_or_key_falls_back() {
        let records = normalize(Some(&LinkSource::object(LinkObject::new("https://y"))), "Live");
        assert_eq!(records[0].label, "Live");
        assert_eq!(records[0].key, "https://y-0");
    }

    #[test]
    fn test_object_without_url_is_dropped() {
        let missing = LinkSource::object(LinkObject {
            label: Some("orphan".into()),
            ..Default::default()
        });
        let empty = LinkSource::object(LinkObject::new(""));
        assert!(normalize(Some(&missing), "Live").is_empty());
        assert!(normalize(Some(&empty), "Live").is_empty());
    }

    #[test]
    fn test_mixed_list_keeps_order_and_distinct_keys() {
        let source = LinkSource::Many(vec![
            LinkItem::Object(LinkObject::new("a")),
            LinkItem::Url("b".into()),
        ]);
        let records = normalize(Some(&source), "Live");
        assert_eq!(urls(&records), vec!["a", "b"]);
        assert_ne!(records[0].key, records[1].key);
    }

    #[test]
    fn test_repeated_urls_get_distinct_keys() {
        let source = LinkSource::Many(vec![
            LinkItem::Url("https://same".into()),
            LinkItem::Url("https://same".into()),
            LinkItem::Object(LinkObject::new("https://same")),
        ]);
        let records = normalize(Some(&source), "Live");
        let keys: Vec<&str> = records.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(
            keys,
            vec!["https://same-0", "https://same-1", "https://same-2"]
        );
    }

    #[test]
    fn test_malformed_items_are_skipped_but_positions_kept() {
        let source: LinkSource = serde_json::from_value(json!([
            42,
            {"label": "no url"},
            "",
            "https://kept"
        ]))
        .unwrap();
        let records = normalize(Some(&source), "Source");
        assert_eq!(urls(&records), vec!["https://kept"]);
        assert_eq!(records[0].key, "https://kept-3");
        assert_eq!(records[0].label, "Source");
    }

    #[test]
    fn test_empty_list_is_empty() {
        assert!(normalize(Some(&LinkSource::Many(vec![])), "Live").is_empty());
    }

    #[test]
    fn test_has_usable_agrees_with_normalize() {
        let cases = [
            json!("https://x"),
            json!(""),
            json!({"label": "no url"}),
            json!({"url": "", "key": "k"}),
            json!({"url": "https://y"}),
            json!([]),
            json!(["", {"key": "k"}, 7]),
            json!([false, "https://z"]),
            json!(12),
        ];
        for value in cases {
            let source: LinkSource = serde_json::from_value(value.clone()).unwrap();
            assert_eq!(
                has_usable(Some(&source)),
                !normalize(Some(&source), "Live").is_empty(),
                "{value}"
            );
        }
        assert!(!has_usable(None));
    }
}
