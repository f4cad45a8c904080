//! Color themes for the interface.

use ratatui::style::Style;

mod builtins;

pub use builtins::BUILT_IN_DEFINITIONS;

/// Style palette consumed by the rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub header: Style,
    pub row_highlight: Style,
    pub prompt: Style,
    pub empty: Style,
    pub accent: Style,
    pub error: Style,
}

impl Theme {
    #[must_use]
    pub fn header_style(&self) -> Style {
        self.header
    }

    #[must_use]
    pub fn row_highlight_style(&self) -> Style {
        self.row_highlight
    }

    #[must_use]
    pub fn prompt_style(&self) -> Style {
        self.prompt
    }

    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn accent_style(&self) -> Style {
        self.accent
    }

    #[must_use]
    pub fn error_style(&self) -> Style {
        self.error
    }

    #[must_use]
    pub fn tab_inactive_style(&self) -> Style {
        self.empty
    }

    #[must_use]
    pub fn tab_highlight_style(&self) -> Style {
        self.accent
    }
}

impl Default for Theme {
    fn default() -> Self {
        builtins::SLATE
    }
}

/// A named theme plus the aliases it answers to.
pub struct ThemeDefinition {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

/// Canonical names of all built-in themes, for `--list-themes`.
#[must_use]
pub fn names() -> Vec<&'static str> {
    BUILT_IN_DEFINITIONS
        .iter()
        .map(|definition| definition.name)
        .collect()
}

/// Case-insensitive lookup by name or alias.
#[must_use]
pub fn resolve(name: &str) -> Option<Theme> {
    BUILT_IN_DEFINITIONS
        .iter()
        .find(|definition| {
            definition.name.eq_ignore_ascii_case(name)
                || definition
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
        .map(|definition| definition.theme)
}
