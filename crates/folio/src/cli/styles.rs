use console::Style;
use once_cell::sync::Lazy;

/// Styles for every element the CLI prints.
#[derive(Debug, Clone)]
pub struct Theme {
    pub heading: Style,
    pub index: Style,
    pub title: Style,
    pub tag: Style,
    pub tech: Style,
    pub muted: Style,
    pub link_label: Style,
    pub active_tab: Style,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        let style = |s: Style| s.force_styling(color);
        Self {
            heading: style(Style::new().bold().underlined()),
            index: style(Style::new().yellow()),
            title: style(Style::new().bold()),
            tag: style(Style::new().cyan()),
            tech: style(Style::new().color256(246)),
            muted: style(Style::new().dim().italic()),
            link_label: style(Style::new().magenta().bold()),
            active_tab: style(Style::new().reverse().bold()),
        }
    }

    /// No escape codes at all.
    #[cfg(test)]
    pub fn plain() -> Self {
        Self::new(false)
    }
}

pub static FOLIO_THEME: Lazy<Theme> = Lazy::new(|| Theme::new(console::colors_enabled()));
