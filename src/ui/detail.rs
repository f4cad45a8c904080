//! Question detail pane: the question itself followed by its answers.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use time::OffsetDateTime;

use crate::text;
use crate::theme::Theme;
use crate::types::{Answer, Question};

/// Body excerpt lengths, in characters, before an ellipsis is applied.
const QUESTION_BODY_CHARS: usize = 500;
const ANSWER_BODY_CHARS: usize = 600;

const NO_ANSWERS: &str = "No answers available for this question.";

/// Render the detail pane with a vertical scroll offset in lines.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answers: &[Answer],
    ai_order: bool,
    scroll: u16,
    now: OffsetDateTime,
    theme: &Theme,
) {
    let text = detail_text(question, answers, ai_order, now, theme);
    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Number of terminal rows the detail text occupies once wrapped to `width`,
/// used to clamp scroll. Long bodies wrap to many more rows than they have
/// logical lines.
#[must_use]
pub fn wrapped_height(
    question: &Question,
    answers: &[Answer],
    ai_order: bool,
    now: OffsetDateTime,
    theme: &Theme,
    width: u16,
) -> usize {
    let text = detail_text(question, answers, ai_order, now, theme);
    Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .line_count(width)
}

fn detail_text(
    question: &Question,
    answers: &[Answer],
    ai_order: bool,
    now: OffsetDateTime,
    theme: &Theme,
) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    lines.push(Line::from(Span::styled(
        text::strip_html(&question.title),
        theme.header_style(),
    )));

    let asked = question
        .creation_date
        .map(|epoch| text::age_from_epoch(epoch, now))
        .unwrap_or_else(|| text::RECENTLY.to_string());
    let mut meta = format!(
        "▲ {}   {} views   asked {}",
        question.score,
        text::format_reputation(question.view_count),
        asked
    );
    if question.has_accepted_answer() {
        meta.push_str("   ✓ accepted");
    }
    lines.push(Line::from(Span::styled(meta, theme.empty_style())));

    if !question.tags.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("[{}]", question.tags.join("] [")),
            theme.accent_style(),
        )));
    }

    if let Some(owner) = &question.owner {
        lines.push(Line::from(Span::styled(
            owner.display(),
            theme.empty_style(),
        )));
    }

    if !question.link.is_empty() {
        lines.push(Line::from(Span::styled(
            question.link.clone(),
            theme.prompt_style(),
        )));
    }

    lines.push(Line::default());
    for body_line in text::excerpt(&question.body, QUESTION_BODY_CHARS).lines() {
        lines.push(Line::from(body_line.to_string()));
    }
    lines.push(Line::default());

    if answers.is_empty() {
        lines.push(Line::from(Span::styled(NO_ANSWERS, theme.empty_style())));
        return Text::from(lines);
    }

    let mut answers_header = format!(
        "{} {}",
        answers.len(),
        if answers.len() == 1 { "answer" } else { "answers" }
    );
    if ai_order {
        answers_header.push_str("   (AI reranked)");
    }
    lines.push(Line::from(Span::styled(
        answers_header,
        theme.header_style(),
    )));
    lines.push(Line::default());

    for answer in answers {
        let mut badge_spans = vec![Span::styled(
            format!("▲ {}", answer.score),
            theme.empty_style(),
        )];
        if answer.is_accepted {
            badge_spans.push(Span::raw("   "));
            badge_spans.push(Span::styled("✓ Accepted", theme.accent_style()));
        }
        if let Some(owner) = &answer.owner {
            badge_spans.push(Span::raw("   "));
            badge_spans.push(Span::styled(owner.display(), theme.empty_style()));
        }
        lines.push(Line::from(badge_spans));

        for body_line in text::excerpt(&answer.body, ANSWER_BODY_CHARS).lines() {
            lines.push(Line::from(body_line.to_string()));
        }
        lines.push(Line::default());
    }

    Text::from(lines)
}
