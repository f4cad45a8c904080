//! Interactive application: terminal lifecycle, event loop, and key
//! handling on top of the pure [`state::Session`] machine.

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::widgets::{Paragraph, TableState};
use ratatui::Frame;
use throbber_widgets_tui::ThrobberState;
use time::OffsetDateTime;

use crate::api::ApiClient;
use crate::fetch::{self, FetchCommand, FetchResult};
use crate::theme::Theme;
use crate::types::{QuestionRef, SessionOutcome};
use crate::ui::input::SearchInput;
use crate::ui::tabs::{InputContext, LoadingState, TabItem};
use crate::ui::{detail, tables, tabs};

pub mod state;

use state::{Pane, Ranking, Session, ViewState};

/// Grace period before re-fetching the history after a search, giving the
/// backend time to record the new entry.
const RECENT_REFRESH_DELAY: Duration = Duration::from_millis(500);

/// How many history rows the recent pane shows.
const RECENT_SHOWN: usize = 10;

const IDLE_HINT: &str = "Search for a question";
const NO_RESULTS: &str = "No results found. Try refining your search terms.";
const NO_RECENT: &str = "No recent searches";

impl Drop for App<'_> {
    fn drop(&mut self) {
        let _ = self.fetch_tx.send(FetchCommand::Shutdown);
    }
}

pub struct App<'a> {
    pub session: Session,
    pub search_input: SearchInput<'a>,
    pub theme: Theme,
    input_title: String,
    results_table: TableState,
    recent_table: TableState,
    detail_scroll: u16,
    throbber_state: ThrobberState,
    fetch_tx: Sender<FetchCommand>,
    fetch_rx: Receiver<FetchResult>,
    fetch_latest_id: Arc<AtomicU64>,
    recent_refresh_at: Option<Instant>,
}

impl App<'_> {
    #[must_use]
    pub fn new(client: ApiClient, initial_query: &str, input_title: String, theme: Theme) -> Self {
        let mut results_table = TableState::default();
        results_table.select(Some(0));
        let mut recent_table = TableState::default();
        recent_table.select(Some(0));
        let (fetch_tx, fetch_rx, fetch_latest_id) = fetch::spawn(client);
        let app = Self {
            session: Session::new(),
            search_input: SearchInput::new(initial_query),
            theme,
            input_title,
            results_table,
            recent_table,
            detail_scroll: 0,
            throbber_state: ThrobberState::default(),
            fetch_tx,
            fetch_rx,
            fetch_latest_id,
            recent_refresh_at: None,
        };
        let _ = app.fetch_tx.send(FetchCommand::RecentQuestions);
        app
    }

    pub fn run(&mut self) -> Result<SessionOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let result = loop {
            self.pump_fetch_results();
            self.tick_recent_refresh();
            self.throbber_state.calc_next();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if let Some(outcome) = self.handle_key(key) {
                            break outcome;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        };

        ratatui::restore();
        Ok(result)
    }

    fn pump_fetch_results(&mut self) {
        loop {
            match self.fetch_rx.try_recv() {
                Ok(result) => self.handle_fetch_result(result),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
    }

    fn handle_fetch_result(&mut self, result: FetchResult) {
        match result {
            FetchResult::Similar { id, outcome } => {
                if self.session.apply_similar(id, outcome) {
                    self.ensure_results_selection();
                    if self.session.view == ViewState::Results {
                        self.recent_refresh_at = Some(Instant::now() + RECENT_REFRESH_DELAY);
                    }
                }
            }
            FetchResult::Question { id, outcome } => {
                if self.session.apply_question(id, outcome) {
                    self.detail_scroll = 0;
                    if self.session.view == ViewState::Detail {
                        self.recent_refresh_at = Some(Instant::now() + RECENT_REFRESH_DELAY);
                    }
                }
            }
            FetchResult::Recent(outcome) => {
                self.session.apply_recent(outcome);
                self.ensure_recent_selection();
            }
        }
    }

    fn tick_recent_refresh(&mut self) {
        if let Some(deadline) = self.recent_refresh_at
            && Instant::now() >= deadline
        {
            self.recent_refresh_at = None;
            let _ = self.fetch_tx.send(FetchCommand::RecentQuestions);
        }
    }

    fn submit_search(&mut self, query: &str) {
        if let Some((id, query)) = self.session.begin_search(query) {
            self.results_table.select(Some(0));
            self.detail_scroll = 0;
            self.recent_refresh_at = None;
            self.fetch_latest_id.store(id, AtomicOrdering::Release);
            let _ = self.fetch_tx.send(FetchCommand::SimilarSearch { id, query });
        }
    }

    fn open_question(&mut self, title: &str) {
        if let Some((id, query)) = self.session.begin_detail_fetch(title) {
            self.recent_refresh_at = None;
            self.fetch_latest_id.store(id, AtomicOrdering::Release);
            let _ = self.fetch_tx.send(FetchCommand::QuestionSearch { id, query });
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<SessionOutcome> {
        match key.code {
            KeyCode::Esc => match self.session.view {
                ViewState::Detail | ViewState::Error(_) => {
                    self.detail_scroll = 0;
                    self.session.back_to_results();
                }
                _ => {
                    return Some(SessionOutcome {
                        accepted: false,
                        query: self.search_input.text().to_string(),
                        selection: None,
                    });
                }
            },
            KeyCode::Enter => return self.handle_enter(),
            KeyCode::Tab => self.switch_pane(),
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.session.view == ViewState::Detail {
                    self.session.toggle_answer_order();
                } else {
                    self.session.toggle_ranking();
                }
            }
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            _ => {
                self.search_input.input(key);
            }
        }
        None
    }

    /// Enter submits a changed query; otherwise it drills into whatever is
    /// selected, and in the detail view it accepts the open question.
    fn handle_enter(&mut self) -> Option<SessionOutcome> {
        if self.session.view == ViewState::Detail {
            let selection = self
                .session
                .detail
                .as_ref()
                .map(|detail| QuestionRef::of(&detail.question));
            return Some(SessionOutcome {
                accepted: true,
                query: self.search_input.text().to_string(),
                selection,
            });
        }

        let typed = self.search_input.text().trim().to_string();
        if !typed.is_empty() && Some(typed.as_str()) != self.session.last_query.as_deref() {
            self.submit_search(&typed);
            return None;
        }

        match self.session.pane {
            Pane::Recent => {
                let title = self
                    .recent_table
                    .selected()
                    .and_then(|index| self.session.recent.get(index))
                    .map(|entry| entry.display_title().to_string());
                if let Some(title) = title
                    && !title.is_empty()
                {
                    self.search_input = SearchInput::new(&title);
                    self.submit_search(&title);
                }
            }
            Pane::Results => {
                let title = self
                    .results_table
                    .selected()
                    .and_then(|index| self.session.visible_results().get(index))
                    .map(|question| question.title.clone());
                if let Some(title) = title {
                    self.open_question(&title);
                }
            }
        }
        None
    }

    fn switch_pane(&mut self) {
        self.session.pane = match self.session.pane {
            Pane::Results => Pane::Recent,
            Pane::Recent => Pane::Results,
        };
        match self.session.pane {
            Pane::Results => self.ensure_results_selection(),
            Pane::Recent => self.ensure_recent_selection(),
        }
    }

    fn move_up(&mut self) {
        if self.session.view == ViewState::Detail {
            self.detail_scroll = self.detail_scroll.saturating_sub(1);
            return;
        }
        let table = self.active_table();
        if let Some(selected) = table.selected()
            && selected > 0
        {
            table.select(Some(selected - 1));
        }
    }

    fn move_down(&mut self) {
        if self.session.view == ViewState::Detail {
            self.detail_scroll = self.detail_scroll.saturating_add(1);
            return;
        }
        let len = self.active_len();
        let table = self.active_table();
        if let Some(selected) = table.selected()
            && selected + 1 < len
        {
            table.select(Some(selected + 1));
        }
    }

    fn active_table(&mut self) -> &mut TableState {
        match self.session.pane {
            Pane::Results => &mut self.results_table,
            Pane::Recent => &mut self.recent_table,
        }
    }

    fn active_len(&self) -> usize {
        match self.session.pane {
            Pane::Results => self.session.visible_results().len(),
            Pane::Recent => self.session.recent.len().min(RECENT_SHOWN),
        }
    }

    fn ensure_results_selection(&mut self) {
        let len = self.session.visible_results().len();
        clamp_selection(&mut self.results_table, len);
    }

    fn ensure_recent_selection(&mut self) {
        let len = self.session.recent.len().min(RECENT_SHOWN);
        clamp_selection(&mut self.recent_table, len);
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        let tab_items = [TabItem { label: "Results" }, TabItem { label: "Recent" }];
        let selected_tab = match self.session.pane {
            Pane::Results => 0,
            Pane::Recent => 1,
        };
        tabs::render_input_with_tabs(
            frame,
            InputContext {
                search_input: &self.search_input,
                input_title: &self.input_title,
                tabs: &tab_items,
                selected_tab,
                area: layout[0],
                theme: &self.theme,
            },
            LoadingState {
                text: "Searching...",
                active: self.session.is_loading(),
                throbber_state: &self.throbber_state,
            },
        );

        self.render_main(frame, layout[1]);
        self.render_status(frame, layout[2]);
    }

    fn render_main(&mut self, frame: &mut Frame, area: Rect) {
        let now = OffsetDateTime::now_utc();

        if self.session.pane == Pane::Recent {
            let shown = self.session.recent.len().min(RECENT_SHOWN);
            if shown == 0 {
                self.render_notice(frame, area, NO_RECENT, self.theme.empty_style());
                return;
            }
            let entries = self.session.recent[..shown].to_vec();
            tables::render_recent(
                frame,
                area,
                &mut self.recent_table,
                &entries,
                now,
                &self.theme,
            );
            return;
        }

        match &self.session.view {
            ViewState::Idle => {
                self.render_notice(frame, area, IDLE_HINT, self.theme.empty_style());
            }
            ViewState::Error(message) => {
                let message = message.clone();
                self.render_notice(frame, area, &message, self.theme.error_style());
            }
            ViewState::Detail => self.render_detail(frame, area, now),
            ViewState::Loading | ViewState::Results => {
                let questions = self.session.visible_results().to_vec();
                if questions.is_empty() {
                    if self.session.view == ViewState::Results {
                        self.render_notice(frame, area, NO_RESULTS, self.theme.empty_style());
                    }
                    return;
                }
                tables::render_results(
                    frame,
                    area,
                    &mut self.results_table,
                    &questions,
                    now,
                    &self.theme,
                );
            }
        }
    }

    fn render_detail(&mut self, frame: &mut Frame, area: Rect, now: OffsetDateTime) {
        let Some(view) = &self.session.detail else {
            return;
        };
        let answers = view.answers.ordered(self.session.ai_answers).to_vec();
        let question = view.question.clone();
        let ai_order = self.session.ai_answers && view.answers.has_reranked();

        let height =
            detail::wrapped_height(&question, &answers, ai_order, now, &self.theme, area.width);
        let max_scroll = height.saturating_sub(area.height as usize) as u16;
        self.detail_scroll = self.detail_scroll.min(max_scroll);

        detail::render(
            frame,
            area,
            &question,
            &answers,
            ai_order,
            self.detail_scroll,
            now,
            &self.theme,
        );
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, text: &str, style: ratatui::style::Style) {
        let notice = Paragraph::new(text.to_string())
            .alignment(Alignment::Center)
            .style(style);
        frame.render_widget(notice, area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let status = self.status_line();
        let line = Paragraph::new(status).style(self.theme.empty_style());
        frame.render_widget(line, area);
    }

    fn status_line(&self) -> String {
        match &self.session.view {
            ViewState::Detail => {
                let (count, ordering) = self
                    .session
                    .detail
                    .as_ref()
                    .map(|view| {
                        let count = view.answers.ordered(self.session.ai_answers).len();
                        let ordering = if self.session.ai_answers && view.answers.has_reranked() {
                            "AI Reranked"
                        } else {
                            "Original Order"
                        };
                        (count, ordering)
                    })
                    .unwrap_or((0, "Original Order"));
                format!(
                    "{count} answers · {ordering} · Ctrl+A order · Enter accept · Esc back"
                )
            }
            _ if self.session.pane == Pane::Recent => {
                "Recent searches · Enter search again · Tab results · Esc quit".to_string()
            }
            ViewState::Results => {
                let count = self.session.visible_results().len();
                let ordering = match self.session.ranking {
                    Ranking::Relevance => "Relevance",
                    Ranking::Accuracy => "Accuracy (AI)",
                };
                format!(
                    "{count} results · {ordering} · Ctrl+A order · Enter open · Tab recent · Esc quit"
                )
            }
            _ => "Type a question and press Enter · Tab recent · Esc quit".to_string(),
        }
    }
}

fn clamp_selection(table: &mut TableState, len: usize) {
    if len == 0 {
        table.select(None);
    } else if table.selected().is_none() {
        table.select(Some(0));
    } else if let Some(selected) = table.selected()
        && selected >= len
    {
        table.select(Some(len.saturating_sub(1)));
    }
}
