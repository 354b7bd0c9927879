use crate::model::{Entry, LocalizedText, EN, JP};

/// An entry with English and Japanese text derived from `id` and no tags.
pub fn entry(id: &str) -> Entry {
    Entry::new(
        id,
        LocalizedText::new()
            .with(EN, format!("{id} title"))
            .with(JP, format!("{id} タイトル")),
        LocalizedText::new()
            .with(EN, format!("{id} description"))
            .with(JP, format!("{id} 説明")),
    )
}

pub fn entry_with_tags(id: &str, tags: &[&str]) -> Entry {
    let mut e = entry(id);
    e.tags = tags.iter().map(|t| t.to_string()).collect();
    e
}
