//! Result and history tables.

use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, HighlightSpacing, Paragraph, Row, Table, TableState};
use ratatui::Frame;
use time::OffsetDateTime;

use crate::text;
use crate::theme::Theme;
use crate::types::{Owner, Question, RecentEntry};

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;

/// How many tags a row shows before eliding the rest.
const TAGS_SHOWN: usize = 3;

/// Render the similar-question results table.
pub fn render_results(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    questions: &[Question],
    now: OffsetDateTime,
    theme: &Theme,
) {
    let widths = vec![
        Constraint::Length(6),
        Constraint::Length(2),
        Constraint::Min(20),
        Constraint::Percentage(20),
        Constraint::Length(8),
        Constraint::Length(8),
        Constraint::Length(18),
        Constraint::Length(14),
    ];
    let headers = [
        "Votes", "✓", "Title", "Tags", "Answers", "Views", "Author", "Asked",
    ];
    let rows = questions
        .iter()
        .map(|question| {
            let accepted = if question.has_accepted_answer() {
                "✓"
            } else {
                ""
            };
            let asked = question
                .creation_date
                .map(|epoch| text::age_from_epoch(epoch, now))
                .unwrap_or_else(|| text::RECENTLY.to_string());
            Row::new([
                Cell::from(question.score.to_string()),
                Cell::from(accepted),
                Cell::from(text::strip_html(&question.title)),
                Cell::from(display_tags(&question.tags)),
                Cell::from(question.answer_count.to_string()),
                Cell::from(text::format_reputation(question.view_count)),
                Cell::from(
                    question
                        .owner
                        .as_ref()
                        .map(Owner::display)
                        .unwrap_or_default(),
                ),
                Cell::from(asked),
            ])
        })
        .collect::<Vec<_>>();

    render_table(frame, area, table_state, rows, &headers, widths, theme);
}

/// Render the recent-searches table.
pub fn render_recent(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    entries: &[RecentEntry],
    now: OffsetDateTime,
    theme: &Theme,
) {
    let widths = vec![
        Constraint::Min(20),
        Constraint::Percentage(20),
        Constraint::Length(6),
        Constraint::Length(8),
        Constraint::Length(14),
    ];
    let headers = ["Query", "Tags", "Votes", "Answers", "Searched"];
    let rows = entries
        .iter()
        .map(|entry| {
            let searched = entry
                .searched_at
                .as_deref()
                .map(|stamp| text::age_from_rfc3339(stamp, now))
                .unwrap_or_else(|| text::RECENTLY.to_string());
            Row::new([
                Cell::from(entry.display_title().to_string()),
                Cell::from(display_tags(&entry.tags)),
                Cell::from(entry.score.to_string()),
                Cell::from(entry.answer_count.to_string()),
                Cell::from(searched),
            ])
        })
        .collect::<Vec<_>>();

    render_table(frame, area, table_state, rows, &headers, widths, theme);
}

fn display_tags(tags: &[String]) -> String {
    let mut joined = tags
        .iter()
        .take(TAGS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if tags.len() > TAGS_SHOWN {
        joined.push_str(", ...");
    }
    joined
}

fn render_table(
    frame: &mut Frame,
    area: Rect,
    table_state: &mut TableState,
    rows: Vec<Row<'_>>,
    headers: &[&str],
    widths: Vec<Constraint>,
    theme: &Theme,
) {
    let header_cells = headers
        .iter()
        .map(|label| Cell::from(*label))
        .collect::<Vec<_>>();
    let header = Row::new(header_cells)
        .style(theme.header_style())
        .height(1)
        .bottom_margin(1);

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(TABLE_COLUMN_SPACING)
        .highlight_spacing(HighlightSpacing::WhenSelected)
        .row_highlight_style(theme.row_highlight_style())
        .highlight_symbol(HIGHLIGHT_SYMBOL);
    frame.render_stateful_widget(table, area, table_state);

    render_header_separator(frame, area, theme);
}

/// Draw a horizontal rule in the blank line the header's bottom margin
/// leaves behind.
fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
    if area.height < 2 || area.width == 0 {
        return;
    }
    let sep_rect = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: 1,
    };
    let width = area.width as usize;
    let line = if width <= 2 {
        Line::from(" ".repeat(width))
    } else {
        Line::from(vec![
            Span::raw(" "),
            Span::styled("─".repeat(width - 2), theme.empty_style()),
            Span::raw(" "),
        ])
    };
    frame.render_widget(Paragraph::new(Text::from(line)), sep_rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn question(title: &str, score: i64) -> Question {
        Question {
            id: 1,
            title: title.into(),
            score,
            tags: vec!["rust".into(), "serde".into()],
            answer_count: 2,
            view_count: 1_536,
            ..Question::default()
        }
    }

    #[test]
    fn tags_are_elided_past_the_limit() {
        let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert_eq!(display_tags(&tags), "a, b, c, ...");
        assert_eq!(display_tags(&tags[..2]), "a, b");
    }

    #[test]
    fn results_table_renders_rows_and_separator() {
        let backend = TestBackend::new(120, 8);
        let mut terminal = Terminal::new(backend).expect("create terminal");
        let questions = vec![question("How to reverse a string", 12)];
        let mut state = TableState::default();
        state.select(Some(0));
        let theme = Theme::default();

        terminal
            .draw(|frame| {
                render_results(
                    frame,
                    frame.area(),
                    &mut state,
                    &questions,
                    OffsetDateTime::UNIX_EPOCH,
                    &theme,
                );
            })
            .expect("render frame");

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        let rendered: Vec<String> = buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect();

        assert!(rendered[0].contains("Title"));
        assert!(rendered[1].contains("─"));
        assert!(rendered[2].contains("How to reverse a string"));
        assert!(rendered[2].contains("1.5k"));
    }
}
