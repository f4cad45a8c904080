use ratatui::style::{Color, Modifier, Style};

use super::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .bg(Color::Rgb(15, 23, 42)),
    row_highlight: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    prompt: Style::new().fg(Color::LightCyan),
    empty: Style::new().fg(Color::DarkGray),
    accent: Style::new()
        .fg(Color::Rgb(74, 222, 128))
        .add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(248, 113, 113)),
};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(30, 41, 59))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(203, 213, 225))
        .fg(Color::Rgb(30, 64, 175)),
    prompt: Style::new().fg(Color::Blue),
    empty: Style::new().fg(Color::Gray),
    accent: Style::new()
        .fg(Color::Rgb(22, 163, 74))
        .add_modifier(Modifier::BOLD),
    error: Style::new().fg(Color::Rgb(185, 28, 28)),
};

pub const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
    ThemeDefinition {
        name: "slate",
        theme: SLATE,
        aliases: &["dark", "default"],
    },
    ThemeDefinition {
        name: "light",
        theme: LIGHT,
        aliases: &["paper"],
    },
];
