use serde::Deserialize;

/// Author metadata attached to questions and answers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Owner {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub reputation: Option<u64>,
}

impl Owner {
    /// Display name with the backend's fallback for anonymous authors.
    #[must_use]
    pub fn name(&self) -> &str {
        self.display_name.as_deref().unwrap_or("Unknown User")
    }

    /// `name (1.5k)` style label for tables and the detail pane.
    #[must_use]
    pub fn display(&self) -> String {
        match self.reputation {
            Some(reputation) => format!(
                "{} ({})",
                self.name(),
                crate::text::format_reputation(reputation)
            ),
            None => self.name().to_string(),
        }
    }
}

/// A single Stack Overflow question as the backend reports it.
///
/// Every field beyond `id` and `title` may be absent on the wire, so the
/// model defaults them rather than failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: String,
    /// Raw HTML body; strip before rendering.
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub owner: Option<Owner>,
    #[serde(default)]
    pub link: String,
    /// Epoch seconds (Stack Overflow convention).
    #[serde(default)]
    pub creation_date: Option<i64>,
    #[serde(default)]
    pub is_answered: bool,
    #[serde(default)]
    pub accepted_answer_id: Option<u64>,
    #[serde(default)]
    pub answer_count: u64,
    /// Present on similar-search results that embed their answers.
    #[serde(default)]
    pub answers: Vec<Answer>,
}

impl Question {
    #[must_use]
    pub fn has_accepted_answer(&self) -> bool {
        self.is_answered && self.accepted_answer_id.is_some()
    }
}

/// A single answer to a question.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub answer_id: u64,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub is_accepted: bool,
    #[serde(default)]
    pub owner: Option<Owner>,
}

/// Response envelope of `POST /questions/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionSearch {
    pub question: Question,
    #[serde(default)]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub reranked_answers: Vec<Answer>,
}

/// Response envelope of `POST /questions/search-similar`.
///
/// The reranked sequence is a permutation of `questions` by backend
/// contract; the client renders whichever ordering is selected and never
/// verifies membership itself.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimilarSearch {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default, rename = "reranked_questions")]
    pub reranked: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_tolerates_sparse_payloads() {
        let question: Question =
            serde_json::from_str(r#"{"id": 42, "title": "How to reverse a string"}"#)
                .expect("deserializes");

        assert_eq!(question.id, 42);
        assert_eq!(question.score, 0);
        assert!(question.tags.is_empty());
        assert!(question.owner.is_none());
        assert!(!question.has_accepted_answer());
    }

    #[test]
    fn owner_display_includes_compact_reputation() {
        let owner = Owner {
            display_name: Some("ferris".into()),
            reputation: Some(1_536),
        };
        assert_eq!(owner.display(), "ferris (1.5k)");
        assert_eq!(Owner::default().display(), "Unknown User");
    }

    #[test]
    fn similar_search_renames_reranked_field() {
        let parsed: SimilarSearch = serde_json::from_str(
            r#"{
                "questions": [{"id": 1, "title": "q1"}, {"id": 2, "title": "q2"}],
                "reranked_questions": [{"id": 2, "title": "q2"}, {"id": 1, "title": "q1"}]
            }"#,
        )
        .expect("deserializes");

        assert_eq!(parsed.questions.len(), 2);
        assert_eq!(parsed.reranked[0].id, 2);
    }
}
