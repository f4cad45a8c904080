//! Input row: prompt, query input, inline progress, and pane tabs.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;
use crate::ui::input::SearchInput;

/// Render metadata for a tab header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabItem<'a> {
    pub label: &'a str,
}

/// Argument bundle for rendering the input area.
pub struct InputContext<'a> {
    pub search_input: &'a SearchInput<'a>,
    pub input_title: &'a str,
    pub tabs: &'a [TabItem<'a>],
    pub selected_tab: usize,
    pub area: Rect,
    pub theme: &'a Theme,
}

/// Progress information for the inline spinner next to the query.
pub struct LoadingState<'a> {
    pub text: &'a str,
    pub active: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the input row with tabs at the right.
pub fn render_input_with_tabs(
    frame: &mut Frame,
    input: InputContext<'_>,
    loading: LoadingState<'_>,
) {
    let InputContext {
        search_input,
        input_title,
        tabs,
        selected_tab,
        area,
        theme,
    } = input;

    let tabs_width = calculate_tabs_width(tabs);
    let prompt_width = calculate_prompt_width(input_title);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(layout_constraints(
            !input_title.is_empty(),
            prompt_width,
            tabs_width,
        ))
        .split(area);

    if !input_title.is_empty() {
        let prompt_widget =
            Paragraph::new(format!("{input_title} > ")).style(theme.prompt_style());
        frame.render_widget(prompt_widget, horizontal[0]);
    }

    let input_index = usize::from(!input_title.is_empty());
    let input_area = horizontal[input_index];
    search_input.render(frame, input_area);
    render_loading(frame, input_area, loading, theme);

    let tabs_area = horizontal[horizontal.len() - 1];
    let tabs_inner = Rect {
        x: tabs_area.x.saturating_add(1),
        width: tabs_area.width.saturating_sub(1),
        ..tabs_area
    };

    let tabs_widget = Tabs::new(build_tab_titles(theme, selected_tab, tabs))
        .select(selected_tab)
        .divider("")
        .padding("", " ")
        .highlight_style(theme.tab_highlight_style());

    frame.render_widget(tabs_widget, tabs_inner);
}

fn calculate_prompt_width(prompt: &str) -> u16 {
    if prompt.is_empty() {
        0
    } else {
        UnicodeWidthStr::width(prompt) as u16 + 3
    }
}

fn layout_constraints(has_prompt: bool, prompt_width: u16, tabs_width: u16) -> Vec<Constraint> {
    if has_prompt {
        vec![
            Constraint::Length(prompt_width),
            Constraint::Min(1),
            Constraint::Length(tabs_width),
        ]
    } else {
        vec![Constraint::Min(1), Constraint::Length(tabs_width)]
    }
}

fn build_tab_titles(theme: &Theme, selected: usize, tabs: &[TabItem<'_>]) -> Vec<Line<'static>> {
    let active = theme.header_style();
    let inactive = theme.tab_inactive_style();
    tabs.iter()
        .enumerate()
        .map(|(index, tab)| {
            let label = format!(" {} ", tab.label);
            let style = if index == selected { active } else { inactive };
            Line::from(label).style(style)
        })
        .collect()
}

fn calculate_tabs_width(tabs: &[TabItem<'_>]) -> u16 {
    let mut width = 0u16;
    for tab in tabs {
        let label_len = UnicodeWidthStr::width(tab.label) as u16;
        width = width.saturating_add(label_len.saturating_add(3));
    }
    width.max(12)
}

/// Draws the spinner and label right-aligned inside the input area, nudged
/// past any typed text so the two never overlap.
fn render_loading(frame: &mut Frame, area: Rect, loading: LoadingState<'_>, theme: &Theme) {
    if area.width == 0 || area.height == 0 || !loading.active || loading.text.is_empty() {
        return;
    }

    let muted_style = theme.empty_style();
    let spinner = Throbber::default()
        .style(muted_style)
        .throbber_style(muted_style);
    let mut line = Line::default();
    line.spans.push(spinner.to_symbol_span(loading.throbber_state));
    line.spans
        .push(Span::styled(loading.text.to_string(), muted_style));

    let line_width = line.width() as u16;
    if line_width == 0 {
        return;
    }

    let buffer = frame.buffer_mut();
    let mut start_x = if line_width >= area.width {
        area.left()
    } else {
        area.right().saturating_sub(line_width)
    };

    let input_row = area.top();
    let mut last_char_x: Option<u16> = None;
    for x in area.left()..area.right() {
        if let Some(cell) = buffer.cell((x, input_row))
            && !cell.symbol().trim().is_empty()
        {
            last_char_x = Some(x);
        }
    }

    if let Some(last_x) = last_char_x {
        let min_start = last_x.saturating_add(3);
        if min_start > start_x {
            start_x = min_start;
        }
    }

    if start_x >= area.right() {
        return;
    }

    let max_width = area
        .right()
        .saturating_sub(start_x)
        .min(line_width)
        .min(area.width);
    if max_width == 0 {
        return;
    }

    buffer.set_line(start_x, input_row, &line, max_width);
}
