//! Pure session state: what the user is looking at and which in-flight
//! request is still allowed to change it.
//!
//! Everything here is synchronous and side-effect free so the transitions
//! can be tested without a terminal or a network.

use crate::api::ApiError;
use crate::types::{Answer, Question, QuestionSearch, RecentEntry, SimilarSearch};

/// What the main pane is showing. One value at a time, so a spinner and an
/// error message can never be displayed together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(String),
    Results,
    Detail,
}

/// Which tab of the main pane is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Results,
    Recent,
}

/// Ordering applied to the results list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ranking {
    Relevance,
    Accuracy,
}

/// Matching questions in both orderings the backend provides.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    pub questions: Vec<Question>,
    pub reranked: Vec<Question>,
}

impl ResultSet {
    #[must_use]
    pub fn has_reranked(&self) -> bool {
        !self.reranked.is_empty()
    }

    /// The list in the requested ordering. Falls back to the original
    /// ordering when the backend sent no reranked permutation.
    #[must_use]
    pub fn ordered(&self, ranking: Ranking) -> &[Question] {
        match ranking {
            Ranking::Accuracy if self.has_reranked() => &self.reranked,
            _ => &self.questions,
        }
    }
}

/// Answers to the opened question in both orderings.
#[derive(Debug, Clone, Default)]
pub struct AnswerSet {
    pub original: Vec<Answer>,
    pub reranked: Vec<Answer>,
}

impl AnswerSet {
    #[must_use]
    pub fn has_reranked(&self) -> bool {
        !self.reranked.is_empty()
    }

    #[must_use]
    pub fn ordered(&self, ai_order: bool) -> &[Answer] {
        if ai_order && self.has_reranked() {
            &self.reranked
        } else {
            &self.original
        }
    }
}

/// The question currently opened in the detail view.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub question: Question,
    pub answers: AnswerSet,
}

pub struct Session {
    pub view: ViewState,
    pub pane: Pane,
    pub ranking: Ranking,
    pub ai_answers: bool,
    pub results: ResultSet,
    pub detail: Option<DetailView>,
    pub recent: Vec<RecentEntry>,
    pub last_query: Option<String>,
    next_request_id: u64,
    latest_request_id: Option<u64>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: ViewState::Idle,
            pane: Pane::Results,
            ranking: Ranking::Relevance,
            ai_answers: false,
            results: ResultSet::default(),
            detail: None,
            recent: Vec::new(),
            last_query: None,
            next_request_id: 0,
            latest_request_id: None,
        }
    }

    /// Start a similar-question search. Clears every result of the previous
    /// search synchronously so nothing stale is visible while loading, and
    /// returns the request id plus the trimmed query to hand to the fetch
    /// worker. Whitespace-only input is rejected.
    pub fn begin_search(&mut self, query: &str) -> Option<(u64, String)> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.fresh_request_id();
        self.results = ResultSet::default();
        self.detail = None;
        self.ranking = Ranking::Relevance;
        self.ai_answers = false;
        self.pane = Pane::Results;
        self.view = ViewState::Loading;
        self.last_query = Some(trimmed.to_string());
        Some((id, trimmed.to_string()))
    }

    /// Start a single-question fetch for the detail view. The results list
    /// stays visible underneath the spinner.
    pub fn begin_detail_fetch(&mut self, title: &str) -> Option<(u64, String)> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return None;
        }
        let id = self.fresh_request_id();
        self.detail = None;
        self.ai_answers = false;
        self.view = ViewState::Loading;
        Some((id, trimmed.to_string()))
    }

    fn fresh_request_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.saturating_add(1);
        let id = self.next_request_id;
        self.latest_request_id = Some(id);
        id
    }

    /// Apply a similar-search response. Returns false when the response
    /// belonged to a superseded request and was ignored.
    pub fn apply_similar(&mut self, id: u64, outcome: Result<SimilarSearch, ApiError>) -> bool {
        if Some(id) != self.latest_request_id {
            return false;
        }
        match outcome {
            Ok(similar) => {
                self.results = ResultSet {
                    questions: similar.questions,
                    reranked: similar.reranked,
                };
                self.view = ViewState::Results;
            }
            Err(error) => {
                self.results = ResultSet::default();
                self.view = ViewState::Error(error.user_message().to_string());
            }
        }
        true
    }

    /// Apply a single-question response for the detail view.
    pub fn apply_question(&mut self, id: u64, outcome: Result<QuestionSearch, ApiError>) -> bool {
        if Some(id) != self.latest_request_id {
            return false;
        }
        match outcome {
            Ok(found) => {
                self.detail = Some(DetailView {
                    question: found.question,
                    answers: AnswerSet {
                        original: found.answers,
                        reranked: found.reranked_answers,
                    },
                });
                self.view = ViewState::Detail;
            }
            Err(error) => {
                self.detail = None;
                self.view = ViewState::Error(error.user_message().to_string());
            }
        }
        true
    }

    /// Apply a recent-searches response. Failures keep the previous list;
    /// the history pane is not worth an error screen.
    pub fn apply_recent(&mut self, outcome: Result<Vec<RecentEntry>, ApiError>) {
        match outcome {
            Ok(entries) => self.recent = entries,
            Err(error) => {
                tracing::warn!(error = %error, "recent searches unavailable, keeping previous list");
            }
        }
    }

    /// Flip the results ordering. Inert unless the backend sent a reranked
    /// permutation.
    pub fn toggle_ranking(&mut self) {
        if !self.results.has_reranked() {
            return;
        }
        self.ranking = match self.ranking {
            Ranking::Relevance => Ranking::Accuracy,
            Ranking::Accuracy => Ranking::Relevance,
        };
    }

    /// Flip the answer ordering in the detail view. Inert without reranked
    /// answers.
    pub fn toggle_answer_order(&mut self) {
        let has_reranked = self
            .detail
            .as_ref()
            .is_some_and(|detail| detail.answers.has_reranked());
        if has_reranked {
            self.ai_answers = !self.ai_answers;
        }
    }

    /// Leave the detail view, or dismiss an error screen.
    pub fn back_to_results(&mut self) {
        self.detail = None;
        self.view = if self.results.questions.is_empty() {
            ViewState::Idle
        } else {
            ViewState::Results
        };
    }

    /// Questions currently shown, in the selected ordering.
    #[must_use]
    pub fn visible_results(&self) -> &[Question] {
        self.results.ordered(self.ranking)
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.view == ViewState::Loading
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u64, title: &str) -> Question {
        Question {
            id,
            title: title.into(),
            ..Question::default()
        }
    }

    fn two_results() -> SimilarSearch {
        SimilarSearch {
            questions: vec![question(1, "q1"), question(2, "q2")],
            reranked: vec![question(2, "q2"), question(1, "q1")],
        }
    }

    #[test]
    fn submit_trims_the_query() {
        let mut session = Session::new();
        let (_, query) = session.begin_search("  rust lifetimes  ").expect("accepted");
        assert_eq!(query, "rust lifetimes");
        assert_eq!(session.last_query.as_deref(), Some("rust lifetimes"));
        assert_eq!(session.view, ViewState::Loading);
    }

    #[test]
    fn whitespace_only_query_is_a_no_op() {
        let mut session = Session::new();
        assert!(session.begin_search("   ").is_none());
        assert_eq!(session.view, ViewState::Idle);
        assert!(session.last_query.is_none());
    }

    #[test]
    fn toggle_preserves_count_and_changes_order() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("q").expect("accepted");
        assert!(session.apply_similar(id, Ok(two_results())));

        let before = session.visible_results().len();
        assert_eq!(session.visible_results()[0].id, 1);
        session.toggle_ranking();
        assert_eq!(session.visible_results().len(), before);
        assert_eq!(session.visible_results()[0].id, 2);
        session.toggle_ranking();
        assert_eq!(session.visible_results()[0].id, 1);
    }

    #[test]
    fn toggle_is_inert_without_reranked_results() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("q").expect("accepted");
        let only_original = SimilarSearch {
            questions: vec![question(1, "q1")],
            reranked: Vec::new(),
        };
        session.apply_similar(id, Ok(only_original));

        session.toggle_ranking();
        assert_eq!(session.ranking, Ranking::Relevance);
    }

    #[test]
    fn error_clears_stale_results_and_uses_server_message() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("first").expect("accepted");
        session.apply_similar(id, Ok(two_results()));

        let (id, _) = session.begin_search("second").expect("accepted");
        assert!(session.visible_results().is_empty());
        let error = ApiError::Status {
            status: 422,
            message: Some("Question too vague".into()),
        };
        session.apply_similar(id, Err(error));

        assert_eq!(session.view, ViewState::Error("Question too vague".into()));
        assert!(session.visible_results().is_empty());
    }

    #[test]
    fn error_without_server_message_uses_fallback() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("q").expect("accepted");
        let error = ApiError::Status {
            status: 500,
            message: None,
        };
        session.apply_similar(id, Err(error));

        assert_eq!(
            session.view,
            ViewState::Error("Failed to search question. Please try again.".into())
        );
    }

    #[test]
    fn superseded_responses_are_discarded() {
        let mut session = Session::new();
        let (stale_id, _) = session.begin_search("first").expect("accepted");
        let (_, _) = session.begin_search("second").expect("accepted");

        assert!(!session.apply_similar(stale_id, Ok(two_results())));
        assert_eq!(session.view, ViewState::Loading);
        assert!(session.visible_results().is_empty());
    }

    #[test]
    fn new_search_resets_the_toggles() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("first").expect("accepted");
        session.apply_similar(id, Ok(two_results()));
        session.toggle_ranking();
        assert_eq!(session.ranking, Ranking::Accuracy);

        session.begin_search("second").expect("accepted");
        assert_eq!(session.ranking, Ranking::Relevance);
        assert!(!session.ai_answers);
    }

    #[test]
    fn recent_failure_keeps_the_previous_list() {
        let mut session = Session::new();
        session.apply_recent(Ok(vec![RecentEntry {
            search_query: Some("rust".into()),
            ..RecentEntry::default()
        }]));
        assert_eq!(session.recent.len(), 1);

        session.apply_recent(Err(ApiError::Status {
            status: 503,
            message: None,
        }));
        assert_eq!(session.recent.len(), 1);
        assert_eq!(session.recent[0].display_title(), "rust");
    }

    #[test]
    fn detail_fetch_keeps_the_results_list() {
        let mut session = Session::new();
        let (id, _) = session.begin_search("q").expect("accepted");
        session.apply_similar(id, Ok(two_results()));

        let (id, _) = session.begin_detail_fetch("q1").expect("accepted");
        assert_eq!(session.view, ViewState::Loading);
        assert_eq!(session.results.questions.len(), 2);

        let found = QuestionSearch {
            question: question(1, "q1"),
            answers: vec![Answer::default()],
            reranked_answers: Vec::new(),
        };
        session.apply_question(id, Ok(found));
        assert_eq!(session.view, ViewState::Detail);

        session.back_to_results();
        assert_eq!(session.view, ViewState::Results);
        assert!(session.detail.is_none());
    }

    #[test]
    fn answer_toggle_requires_reranked_answers() {
        let mut session = Session::new();
        let (id, _) = session.begin_detail_fetch("q1").expect("accepted");
        let found = QuestionSearch {
            question: question(1, "q1"),
            answers: vec![Answer::default()],
            reranked_answers: Vec::new(),
        };
        session.apply_question(id, Ok(found));

        session.toggle_answer_order();
        assert!(!session.ai_answers);

        let (id, _) = session.begin_detail_fetch("q1").expect("accepted");
        let found = QuestionSearch {
            question: question(1, "q1"),
            answers: vec![Answer::default(), Answer::default()],
            reranked_answers: vec![Answer::default(), Answer::default()],
        };
        session.apply_question(id, Ok(found));

        session.toggle_answer_order();
        assert!(session.ai_answers);
    }
}
